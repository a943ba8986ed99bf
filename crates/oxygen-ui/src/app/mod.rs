//! Demo application shell: one pane per theme mode showing every widget.

pub(crate) mod preferences;

use gloo::console;
use gloo::utils::{document, window};
use oxygen_core::{Orientation, ThemeConfig, ThemeMode};
use wasm_bindgen::JsCast;
use web_sys::HtmlStyleElement;
use yew::prelude::*;

use crate::components::{
    Button, Checkbox, Dialog, Icon, IconShowcase, Input, Slider, Tabs, Textarea,
};
use crate::demo::{SEARCH_ICON, SLIDER_RANGE, TAB_LABELS, toggled};
use crate::markup::percent;
use crate::styles::document_stylesheet;

const STYLE_ID: &str = "oxygen-theme";

#[derive(Properties, PartialEq)]
struct PaneProps {
    mode: ThemeMode,
}

#[function_component(DemoPane)]
fn demo_pane(props: &PaneProps) -> Html {
    let (min, max, initial) = SLIDER_RANGE;
    let value = use_state(|| initial);
    let checked = use_state(|| true);
    let tab = use_state(|| 0_usize);
    let dialog_open = use_state(|| false);
    let text = use_state(String::new);

    let on_slide = {
        let value = value.clone();
        Callback::from(move |next: f64| value.set(next))
    };
    let on_check = {
        let checked = checked.clone();
        Callback::from(move |next: bool| checked.set(next))
    };
    let on_tab = {
        let tab = tab.clone();
        Callback::from(move |index: usize| tab.set(index))
    };
    let open_dialog = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |()| dialog_open.set(true))
    };
    let close_dialog = {
        let dialog_open = dialog_open.clone();
        Callback::from(move |()| dialog_open.set(false))
    };
    let on_text = {
        let text = text.clone();
        Callback::from(move |next: String| text.set(next))
    };

    let ratio = if max > min { (*value - min) / (max - min) } else { 0.0 };
    html! {
        <section class="oxy-pane" data-theme={props.mode.as_str()}>
            <h2>{ format!("{} theme", props.mode.as_str()) }</h2>
            <div class="row">
                <Button>{"Flat"}</Button>
                <Button raised=true>{"Raised"}</Button>
                <Button raised=true disabled=true>{"Disabled"}</Button>
            </div>
            <div class="row">
                <Checkbox checked={*checked} label="Checked" onchange={on_check} />
                <Checkbox indeterminate=true label="Indeterminate" />
                <Checkbox disabled=true label="Disabled" />
            </div>
            <Input
                placeholder="Type, then press Escape"
                clear_on_escape=true
                select_on_focus=true
                autofocus={props.mode == ThemeMode::Light}
                onchange={on_text}
            />
            <Input
                placeholder="Search"
                before={html! { <Icon icon={SEARCH_ICON} size={18} /> }}
            />
            <Input r#type="password" value="hunter2" copyable=true />
            <Input placeholder="Max 8 characters" maxlength={Some(8)} />
            <Textarea placeholder="Multi-line text" value={(*text).clone()} />
            <Slider {min} {max} value={*value} onchange={on_slide} />
            <span>{ format!("Slider at {}", percent(ratio)) }</span>
            <Slider {min} {max} value={50.0} disabled=true />
            <Tabs selected={*tab} onselect={on_tab}>
                { for TAB_LABELS.iter().map(|label| html! { <span><b>{ *label }</b></span> }) }
            </Tabs>
            <Tabs orientation={Orientation::Vertical}>
                { for TAB_LABELS.iter().map(|label| html! { <span>{ *label }</span> }) }
            </Tabs>
            <Button raised=true onclick={open_dialog}>{"Open dialog"}</Button>
            <Dialog opened={*dialog_open} onclosed={close_dialog.clone()}>
                <p>{"Click the backdrop or press Escape to dismiss."}</p>
                <Button onclick={close_dialog}>{"Close"}</Button>
            </Dialog>
            <IconShowcase />
        </section>
    }
}

fn install_stylesheet(config: &ThemeConfig) {
    let css = document_stylesheet(config);
    if let Some(existing) = document().get_element_by_id(STYLE_ID) {
        existing.set_text_content(Some(&css));
        return;
    }
    let style = match document()
        .create_element("style")
        .map(JsCast::unchecked_into::<HtmlStyleElement>)
    {
        Ok(style) => style,
        Err(err) => {
            console::error!("stylesheet creation failed", err);
            return;
        }
    };
    style.set_id(STYLE_ID);
    style.set_text_content(Some(&css));
    if let Some(head) = document().head() {
        if let Err(err) = head.append_child(&style) {
            console::error!("stylesheet injection failed", err);
        }
    }
}

fn apply_theme(mode: ThemeMode) {
    if let Some(body) = window().document().and_then(|document| document.body()) {
        let _ = body.set_attribute("data-theme", mode.as_str());
    }
}

#[function_component(DemoApp)]
fn demo_app() -> Html {
    let theme = use_state(preferences::load_theme);
    let overrides = use_memo(|()| preferences::load_overrides(), ());

    {
        let overrides = overrides.clone();
        use_effect_with_deps(
            move |()| {
                install_stylesheet(&overrides);
                || ()
            },
            (),
        );
    }
    use_effect_with_deps(
        |mode| {
            apply_theme(*mode);
            preferences::save_theme(*mode);
            || ()
        },
        *theme,
    );

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |()| theme.set(toggled(*theme)))
    };
    html! {
        <main class="oxy-demo">
            <header class="oxy-pane" data-theme={theme.as_str()}>
                <h1>{"Oxygen widgets"}</h1>
                <Button raised=true onclick={on_toggle}>
                    { format!("Switch to {}", toggled(*theme).as_str()) }
                </Button>
            </header>
            <div class="oxy-demo-panes">
                { for ThemeMode::all().into_iter().map(|mode| html! {
                    <DemoPane key={mode.as_str()} {mode} />
                }) }
            </div>
        </main>
    }
}

/// Mount the demo under `#root`, or the document body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = document().get_element_by_id("root") {
        yew::Renderer::<DemoApp>::with_root(root).render();
    } else {
        yew::Renderer::<DemoApp>::new().render();
    }
}
