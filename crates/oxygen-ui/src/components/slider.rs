//! Slider host element: mouse and touch events feed the core drag machine.

use gloo::console;
use oxygen_core::{DragState, SliderInput, TrackRect};
use web_sys::Element;
use yew::prelude::*;

use super::use_notifying_model;
use crate::markup::{attr, fill_style, state_classes, thumb_style};
use crate::sync::{SliderSnapshot, sync_slider};

#[derive(Properties, PartialEq)]
pub(crate) struct SliderProps {
    #[prop_or(0.0)]
    pub min: f64,
    #[prop_or(100.0)]
    pub max: f64,
    #[prop_or(0.0)]
    pub value: f64,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onchange: Callback<f64>,
}

fn track_rect(host: &NodeRef) -> Option<TrackRect> {
    let rect = host.cast::<Element>()?.get_bounding_client_rect();
    Some(TrackRect::new(rect.left(), rect.right()))
}

fn first_touch_x(event: &TouchEvent) -> Option<f64> {
    event
        .touches()
        .get(0)
        .map(|touch| f64::from(touch.client_x()))
}

#[function_component(Slider)]
pub(crate) fn slider(props: &SliderProps) -> Html {
    let model = use_notifying_model(
        SliderSnapshot {
            min: props.min,
            max: props.max,
            value: props.value,
            disabled: props.disabled,
        },
        SliderSnapshot::build,
        sync_slider,
        props.onchange.clone(),
    );
    let host = use_node_ref();
    let refresh = use_force_update();

    let feed = {
        let model = model.clone();
        let host = host.clone();
        let onchange = props.onchange.clone();
        Callback::from(move |input: SliderInput| {
            let Some(track) = track_rect(&host) else {
                console::warn!("slider event before mount", input.kind());
                return;
            };
            let before = model.borrow().drag_state();
            let committed = model.borrow_mut().handle(input, track);
            if let Some(value) = committed {
                onchange.emit(value);
            }
            if committed.is_some() || model.borrow().drag_state() != before {
                refresh.force_update();
            }
        })
    };

    let (attrs, ratio, dragging) = {
        let slider = model.borrow();
        (
            slider.attributes(),
            slider.thumb_ratio(),
            slider.drag_state() == DragState::Dragging,
        )
    };
    html! {
        <div
            ref={host}
            class={classes!(
                "oxy-slider",
                state_classes(&attrs),
                dragging.then_some("dragging"),
                props.class.clone()
            )}
            role={attr(&attrs, "role")}
            tabindex={attr(&attrs, "tabindex")}
            aria-valuemin={attr(&attrs, "aria-valuemin")}
            aria-valuemax={attr(&attrs, "aria-valuemax")}
            aria-valuenow={attr(&attrs, "aria-valuenow")}
            aria-disabled={attr(&attrs, "aria-disabled")}
            onmousedown={feed.reform(|event: MouseEvent| SliderInput::PointerDown {
                x: f64::from(event.client_x()),
            })}
            onmousemove={feed.reform(|event: MouseEvent| SliderInput::PointerMove {
                x: f64::from(event.client_x()),
            })}
            onmouseup={feed.reform(|_: MouseEvent| SliderInput::PointerUp)}
            onmouseleave={feed.reform(|event: MouseEvent| SliderInput::PointerLeave {
                buttons: event.buttons(),
            })}
            onmouseenter={feed.reform(|event: MouseEvent| SliderInput::PointerEnter {
                buttons: event.buttons(),
            })}
            ontouchstart={feed.reform(|event: TouchEvent| SliderInput::TouchStart {
                x: first_touch_x(&event),
            })}
            ontouchmove={feed.reform(|event: TouchEvent| SliderInput::TouchMove {
                x: first_touch_x(&event),
            })}
            ontouchend={feed.reform(|_: TouchEvent| SliderInput::TouchEnd)}
        >
            <div class="track">
                <div class="fill" style={fill_style(ratio)}></div>
            </div>
            <div class="thumb" style={thumb_style(ratio)}></div>
        </div>
    }
}
