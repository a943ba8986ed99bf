//! Tab strip: clicks anywhere inside a tab select it.

use oxygen_core::Orientation;
use web_sys::Element;
use yew::prelude::*;

use super::use_notifying_model;
use crate::markup::{attr, state_classes};
use crate::sync::{TabsSnapshot, sync_tabs};

#[derive(Properties, PartialEq)]
pub(crate) struct TabsProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub orientation: Orientation,
    #[prop_or_default]
    pub selected: usize,
    #[prop_or_default]
    pub onselect: Callback<usize>,
}

fn element_children(host: &Element) -> Vec<Element> {
    let collection = host.children();
    (0..collection.length())
        .filter_map(|index| collection.item(index))
        .collect()
}

#[function_component(Tabs)]
pub(crate) fn tabs(props: &TabsProps) -> Html {
    let model = use_notifying_model(
        TabsSnapshot {
            len: props.children.len(),
            orientation: props.orientation,
            selected: props.selected,
        },
        TabsSnapshot::build,
        sync_tabs,
        props.onselect.clone(),
    );
    let host = use_node_ref();
    let refresh = use_force_update();

    let onclick = {
        let model = model.clone();
        let host = host.clone();
        let onselect = props.onselect.clone();
        Callback::from(move |event: MouseEvent| {
            let (Some(host), Some(target)) =
                (host.cast::<Element>(), event.target_dyn_into::<Element>())
            else {
                return;
            };
            let children = element_children(&host);
            let selected = model
                .borrow_mut()
                .click(target, &host, &children, |node: &Element| node.parent_element());
            if let Some(index) = selected {
                onselect.emit(index);
                refresh.force_update();
            }
        })
    };

    let group = model.borrow();
    let attrs = group.attributes();
    html! {
        <div
            ref={host}
            class="oxy-tabs"
            role={attr(&attrs, "role")}
            orientation={attr(&attrs, "orientation")}
            {onclick}
        >
            { for props.children.iter().enumerate().map(|(index, child)| {
                let tab = group.tab_attributes(index);
                html! {
                    <div
                        class={classes!("oxy-tab", state_classes(&tab))}
                        role={attr(&tab, "role")}
                        aria-selected={attr(&tab, "aria-selected")}
                        orientation={attr(&tab, "orientation")}
                    >
                        { child }
                    </div>
                }
            }) }
        </div>
    }
}
