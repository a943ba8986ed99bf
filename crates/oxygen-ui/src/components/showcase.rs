//! Grid of the demo icons with their names.

use yew::prelude::*;

use super::Icon;
use crate::demo::DEMO_ICONS;

#[derive(Properties, PartialEq)]
pub(crate) struct IconShowcaseProps {
    #[prop_or_default]
    pub size: Option<u32>,
}

#[function_component(IconShowcase)]
pub(crate) fn icon_showcase(props: &IconShowcaseProps) -> Html {
    html! {
        <div class="oxy-icon-showcase">
            { for DEMO_ICONS.iter().map(|name| html! {
                <figure key={*name}>
                    <Icon icon={*name} size={props.size} />
                    <figcaption>{ name.split_once(':').map_or(*name, |(_, icon)| icon) }</figcaption>
                </figure>
            }) }
        </div>
    }
}
