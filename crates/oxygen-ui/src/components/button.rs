//! Button host: click, Space and Enter activate unless disabled.

use oxygen_core::Button as ButtonModel;
use oxygen_core::Key;
use yew::prelude::*;

use super::use_synced_model;
use crate::markup::{attr, state_classes};

#[derive(Properties, PartialEq)]
pub(crate) struct ButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub raised: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<()>,
}

#[function_component(Button)]
pub(crate) fn button(props: &ButtonProps) -> Html {
    let model = use_synced_model(
        (props.raised, props.disabled),
        |&(raised, disabled)| ButtonModel::new(raised, disabled),
        |model, _, &(raised, disabled)| {
            model.raised = raised;
            model.disabled = disabled;
        },
    );
    let refresh = use_force_update();

    let onclick = {
        let model = model.clone();
        let onclick = props.onclick.clone();
        Callback::from(move |_: MouseEvent| {
            if model.borrow().activate() {
                onclick.emit(());
            }
        })
    };
    let onkeydown = {
        let model = model.clone();
        let onclick = props.onclick.clone();
        let refresh = refresh.clone();
        Callback::from(move |event: KeyboardEvent| {
            let outcome = model.borrow_mut().key_down(Key::from_dom(&event.key()));
            if outcome.prevent_default {
                event.prevent_default();
            }
            if outcome.click {
                onclick.emit(());
            }
            refresh.force_update();
        })
    };
    let onkeyup = {
        let model = model.clone();
        let onclick = props.onclick.clone();
        Callback::from(move |event: KeyboardEvent| {
            let outcome = model.borrow_mut().key_up(Key::from_dom(&event.key()));
            if outcome.click {
                onclick.emit(());
            }
            refresh.force_update();
        })
    };

    let attrs = model.borrow().attributes();
    html! {
        <div
            class={classes!("oxy-button", state_classes(&attrs), props.class.clone())}
            role={attr(&attrs, "role")}
            tabindex={attr(&attrs, "tabindex")}
            aria-disabled={attr(&attrs, "aria-disabled")}
            {onclick}
            {onkeydown}
            {onkeyup}
        >
            { for props.children.iter() }
        </div>
    }
}
