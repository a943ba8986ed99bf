//! Single-line input and textarea bound to the core text field model.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::timers::callback::Timeout;
use oxygen_core::{InputType, Key, Selection, TextField};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::{Button, use_synced_model};
use crate::markup::{attr, state_classes};

#[derive(Properties, PartialEq)]
pub(crate) struct TextFieldProps {
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub r#type: AttrValue,
    #[prop_or_default]
    pub maxlength: Option<usize>,
    #[prop_or_default]
    pub readonly: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub select_on_focus: bool,
    #[prop_or_default]
    pub clear_on_escape: bool,
    #[prop_or_default]
    pub autofocus: bool,
    #[prop_or_default]
    pub copyable: bool,
    /// Content ahead of the input, such as an icon. Clicking it focuses the input.
    #[prop_or_default]
    pub before: Option<Html>,
    /// Content after the input.
    #[prop_or_default]
    pub after: Option<Html>,
    #[prop_or_default]
    pub onchange: Callback<String>,
}

#[derive(Clone, PartialEq)]
struct Snapshot {
    value: AttrValue,
    placeholder: AttrValue,
    input_type: AttrValue,
    maxlength: Option<usize>,
    flags: [bool; 5],
}

impl Snapshot {
    fn of(props: &TextFieldProps) -> Self {
        Self {
            value: props.value.clone(),
            placeholder: props.placeholder.clone(),
            input_type: props.r#type.clone(),
            maxlength: props.maxlength,
            flags: [
                props.readonly,
                props.disabled,
                props.select_on_focus,
                props.clear_on_escape,
                props.autofocus,
            ],
        }
    }

    fn apply(&self, previous: Option<&Self>, field: &mut TextField) {
        let [readonly, disabled, select_on_focus, clear_on_escape, autofocus] = self.flags;
        field.input_type = InputType::parse(&self.input_type);
        field.max_length = self.maxlength;
        field.placeholder = self.placeholder.to_string();
        field.readonly = readonly;
        field.disabled = disabled;
        field.select_on_focus = select_on_focus;
        field.clear_on_escape = clear_on_escape;
        field.autofocus = autofocus;
        if previous.is_none_or(|previous| previous.value != self.value) {
            field.set_value(self.value.to_string());
        }
    }
}

/// DOM element behind either variant.
enum Control {
    Input(HtmlInputElement),
    Area(HtmlTextAreaElement),
}

impl Control {
    fn find(node: &NodeRef) -> Option<Self> {
        let element = node.cast::<HtmlElement>()?;
        match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(Self::Input(input)),
            Err(element) => element.dyn_into::<HtmlTextAreaElement>().ok().map(Self::Area),
        }
    }

    fn value(&self) -> String {
        match self {
            Self::Input(input) => input.value(),
            Self::Area(area) => area.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            Self::Input(input) => input.set_value(value),
            Self::Area(area) => area.set_value(value),
        }
    }

    fn select(&self, selection: Selection) {
        let result = match self {
            Self::Input(input) => input.set_selection_range(selection.start, selection.end),
            Self::Area(area) => area.set_selection_range(selection.start, selection.end),
        };
        if let Err(err) = result {
            console::warn!("selection range rejected", err);
        }
    }

    fn focus(&self) {
        let result = match self {
            Self::Input(input) => input.focus(),
            Self::Area(area) => area.focus(),
        };
        if let Err(err) = result {
            console::error!("focus failed", err);
        }
    }
}

fn copy_to_clipboard(text: String) {
    let promise = gloo::utils::window().navigator().clipboard().write_text(&text);
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
            console::error!("clipboard write failed", err);
        }
    });
}

struct Handlers {
    oninput: Callback<InputEvent>,
    onfocus: Callback<FocusEvent>,
    onblur: Callback<FocusEvent>,
    onkeydown: Callback<KeyboardEvent>,
}

#[hook]
fn use_text_field(props: &TextFieldProps, multiline: bool) -> (Rc<RefCell<TextField>>, NodeRef, Handlers) {
    let model = use_synced_model(
        Snapshot::of(props),
        |snapshot| {
            let mut field = if multiline {
                TextField::textarea()
            } else {
                TextField::input()
            };
            snapshot.apply(None, &mut field);
            field
        },
        |field, previous, next| next.apply(Some(previous), field),
    );
    let node = use_node_ref();
    let refresh = use_force_update();

    {
        let node = node.clone();
        let autofocus = props.autofocus && !props.disabled;
        use_effect_with_deps(
            move |_| {
                // Focus after the element is attached.
                let pending = autofocus.then(|| {
                    Timeout::new(0, move || {
                        if let Some(control) = Control::find(&node) {
                            control.focus();
                        }
                    })
                });
                move || drop(pending)
            },
            (),
        );
    }

    let oninput = {
        let model = model.clone();
        let node = node.clone();
        let onchange = props.onchange.clone();
        Callback::from(move |_: InputEvent| {
            let Some(control) = Control::find(&node) else {
                return;
            };
            let raw = control.value();
            let mut field = model.borrow_mut();
            if let Some(stored) = field.input_text(&raw) {
                onchange.emit(stored.to_string());
            }
            if field.value() != raw {
                control.set_value(field.value());
            }
        })
    };
    let onfocus = {
        let model = model.clone();
        let node = node.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: FocusEvent| {
            let selection = model.borrow_mut().focus();
            if let (Some(selection), Some(control)) = (selection, Control::find(&node)) {
                control.select(selection);
            }
            refresh.force_update();
        })
    };
    let onblur = {
        let model = model.clone();
        let refresh = refresh.clone();
        Callback::from(move |_: FocusEvent| {
            model.borrow_mut().blur();
            refresh.force_update();
        })
    };
    let onkeydown = {
        let model = model.clone();
        let node = node.clone();
        let onchange = props.onchange.clone();
        Callback::from(move |event: KeyboardEvent| {
            if !model.borrow_mut().key_down(Key::from_dom(&event.key())) {
                return;
            }
            if let Some(control) = Control::find(&node) {
                control.set_value("");
            }
            onchange.emit(String::new());
        })
    };

    (
        model,
        node,
        Handlers {
            oninput,
            onfocus,
            onblur,
            onkeydown,
        },
    )
}

#[function_component(Input)]
pub(crate) fn input(props: &TextFieldProps) -> Html {
    let (model, node, handlers) = use_text_field(props, false);
    let oncopy = {
        let model = model.clone();
        Callback::from(move |()| copy_to_clipboard(model.borrow().copy_text().to_string()))
    };

    let onclick = {
        let node = node.clone();
        let disabled = props.disabled;
        Callback::from(move |_: MouseEvent| {
            if let Some(control) = Control::find(&node).filter(|_| !disabled) {
                control.focus();
            }
        })
    };

    let field = model.borrow();
    let attrs = field.attributes();
    html! {
        <span class="oxy-input-field" {onclick}>
            { props.before.clone().unwrap_or_default() }
            <input
                ref={node}
                class={classes!("oxy-input", state_classes(&attrs))}
                type={attr(&attrs, "type")}
                value={field.value().to_string()}
                placeholder={field.placeholder.clone()}
                maxlength={field.max_length.map(|limit| limit.to_string())}
                readonly={field.readonly}
                disabled={field.disabled}
                aria-disabled={attr(&attrs, "aria-disabled")}
                oninput={handlers.oninput}
                onfocus={handlers.onfocus}
                onblur={handlers.onblur}
                onkeydown={handlers.onkeydown}
            />
            { props.after.clone().unwrap_or_default() }
            if props.copyable {
                <Button onclick={oncopy} disabled={field.disabled}>{"Copy"}</Button>
            }
        </span>
    }
}

#[function_component(Textarea)]
pub(crate) fn textarea(props: &TextFieldProps) -> Html {
    let (model, node, handlers) = use_text_field(props, true);

    let field = model.borrow();
    let attrs = field.attributes();
    html! {
        <textarea
            ref={node}
            class={classes!("oxy-textarea", state_classes(&attrs))}
            value={field.value().to_string()}
            placeholder={field.placeholder.clone()}
            readonly={field.readonly}
            disabled={field.disabled}
            aria-disabled={attr(&attrs, "aria-disabled")}
            oninput={handlers.oninput}
            onfocus={handlers.onfocus}
            onblur={handlers.onblur}
            onkeydown={handlers.onkeydown}
        />
    }
}
