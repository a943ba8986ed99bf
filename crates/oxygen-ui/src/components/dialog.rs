//! Modal dialog closed by Escape or, with a backdrop, by clicking outside.

use gloo::console;
use oxygen_core::{Dialog as DialogModel, DialogEvent, Key};
use web_sys::HtmlElement;
use yew::prelude::*;

use super::use_synced_model;
use crate::markup::{attr, state_classes};

#[derive(Properties, PartialEq)]
pub(crate) struct DialogProps {
    #[prop_or_default]
    pub opened: bool,
    #[prop_or(true)]
    pub backdrop: bool,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub onclosed: Callback<()>,
}

#[function_component(Dialog)]
pub(crate) fn dialog(props: &DialogProps) -> Html {
    let model = use_synced_model(
        (props.opened, props.backdrop),
        |&(opened, backdrop)| {
            let mut dialog = DialogModel::new(backdrop);
            let _ = dialog.set_opened(opened);
            dialog
        },
        |dialog, &(was_opened, _), &(opened, backdrop)| {
            dialog.backdrop = backdrop;
            if was_opened != opened {
                let _ = dialog.set_opened(opened);
            }
        },
    );
    let host = use_node_ref();
    let refresh = use_force_update();

    {
        let host = host.clone();
        use_effect_with_deps(
            move |opened| {
                if *opened {
                    if let Some(element) = host.cast::<HtmlElement>() {
                        if let Err(err) = element.focus() {
                            console::error!("dialog focus failed", err);
                        }
                    }
                }
                || ()
            },
            props.opened,
        );
    }

    let notify = {
        let onclosed = props.onclosed.clone();
        move |event: Option<DialogEvent>| {
            if event == Some(DialogEvent::Closed) {
                onclosed.emit(());
                refresh.force_update();
            }
        }
    };
    let onclick = {
        let model = model.clone();
        let notify = notify.clone();
        Callback::from(move |event: MouseEvent| {
            // Only clicks on the overlay itself count as backdrop clicks.
            if event.target() == event.current_target() {
                notify(model.borrow_mut().backdrop_click());
            }
        })
    };
    let onkeydown = {
        let model = model.clone();
        Callback::from(move |event: KeyboardEvent| {
            notify(model.borrow_mut().key_down(Key::from_dom(&event.key())));
        })
    };

    let attrs = model.borrow().attributes();
    html! {
        <div
            ref={host}
            class={classes!("oxy-dialog", state_classes(&attrs))}
            role={attr(&attrs, "role")}
            aria-modal={attr(&attrs, "aria-modal")}
            aria-hidden={attr(&attrs, "aria-hidden")}
            tabindex="-1"
            {onclick}
            {onkeydown}
        >
            <div class="surface">
                { for props.children.iter() }
            </div>
        </div>
    }
}
