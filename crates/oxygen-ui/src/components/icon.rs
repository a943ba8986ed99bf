//! Inline SVG for a registered `set:name` icon.

use gloo::console;
use oxygen_core::icons::lookup_icon;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct IconProps {
    /// Qualified `set:name` reference.
    pub icon: AttrValue,
    #[prop_or_default]
    pub size: Option<u32>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub(crate) fn icon(props: &IconProps) -> Html {
    let classes = classes!("oxy-icon", props.class.clone());
    let resolved = use_memo(
        |name| {
            lookup_icon(name)
                .map_err(|err| console::warn!("icon lookup failed", name.to_string(), err.to_string()))
                .ok()
        },
        props.icon.clone(),
    );
    let Some(icon) = resolved.as_ref() else {
        return html! { <svg class={classes} aria-hidden="true"></svg> };
    };

    let size = props.size.unwrap_or(icon.size).to_string();
    let aria_hidden = props.title.is_none().then_some("true");
    html! {
        <svg
            class={classes}
            viewBox={icon.view_box()}
            width={size.clone()}
            height={size}
            role="img"
            aria-hidden={aria_hidden}
        >
            { props.title.clone().map(|title| html! { <title>{title}</title> }).unwrap_or_default() }
            <path d={icon.path.clone()} />
        </svg>
    }
}
