//! Checkbox with a check or dash glyph; click, Space and Enter toggle it.

use oxygen_core::Key;
use yew::prelude::*;

use super::use_notifying_model;
use crate::markup::{attr, state_classes};
use crate::sync::{CheckboxSnapshot, sync_checkbox};

const CHECK_PATH: &str = "M9 16.17L4.83 12l-1.42 1.41L9 19 21 7l-1.41-1.41z";
const DASH_PATH: &str = "M5 11h14v2H5z";

#[derive(Properties, PartialEq)]
pub(crate) struct CheckboxProps {
    #[prop_or_default]
    pub checked: bool,
    #[prop_or_default]
    pub indeterminate: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub onchange: Callback<bool>,
}

#[function_component(Checkbox)]
pub(crate) fn checkbox(props: &CheckboxProps) -> Html {
    let model = use_notifying_model(
        CheckboxSnapshot {
            checked: props.checked,
            indeterminate: props.indeterminate,
            disabled: props.disabled,
        },
        CheckboxSnapshot::build,
        sync_checkbox,
        props.onchange.clone(),
    );
    let refresh = use_force_update();

    let onclick = {
        let model = model.clone();
        let onchange = props.onchange.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(checked) = model.borrow_mut().click() {
                onchange.emit(checked);
            }
            refresh.force_update();
        })
    };
    let on_key = |press: bool| {
        let model = model.clone();
        let onchange = props.onchange.clone();
        let refresh = refresh.clone();
        Callback::from(move |event: KeyboardEvent| {
            let key = Key::from_dom(&event.key());
            let (outcome, changed) = if press {
                model.borrow_mut().key_down(key)
            } else {
                model.borrow_mut().key_up(key)
            };
            if outcome.prevent_default {
                event.prevent_default();
            }
            if let Some(checked) = changed {
                onchange.emit(checked);
            }
            refresh.force_update();
        })
    };

    let (attrs, glyph) = {
        let model = model.borrow();
        let glyph = if model.indeterminate() {
            Some(DASH_PATH)
        } else {
            model.checked().then_some(CHECK_PATH)
        };
        (model.attributes(), glyph)
    };
    html! {
        <label class="oxy-checkbox-field">
            <span
                class={classes!("oxy-checkbox", state_classes(&attrs))}
                role={attr(&attrs, "role")}
                tabindex={attr(&attrs, "tabindex")}
                aria-checked={attr(&attrs, "aria-checked")}
                aria-disabled={attr(&attrs, "aria-disabled")}
                {onclick}
                onkeydown={on_key(true)}
                onkeyup={on_key(false)}
            >
                { glyph.map(|path| html! {
                    <svg viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                        <path d={path} />
                    </svg>
                }).unwrap_or_default() }
            </span>
            { props.label.clone().map(|text| html! { <span>{text}</span> }).unwrap_or_default() }
        </label>
    }
}
