//! Flat / raised push button.

use crate::keyboard::{Key, KeyOutcome, KeyboardActivation};
use crate::reflect::Attributes;

/// Button state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Button {
    /// Elevated style.
    pub raised: bool,
    /// Ignores activation when set.
    pub disabled: bool,
    keys: KeyboardActivation,
}

impl Button {
    /// Button with the given style flags.
    #[must_use]
    pub fn new(raised: bool, disabled: bool) -> Self {
        Self {
            raised,
            disabled,
            keys: KeyboardActivation::default(),
        }
    }

    /// Whether the button is visually pressed via the keyboard.
    #[must_use]
    pub const fn active(&self) -> bool {
        self.keys.active()
    }

    /// Whether a click should be dispatched to listeners.
    #[must_use]
    pub const fn activate(&self) -> bool {
        !self.disabled
    }

    /// Forward `keydown`; clicks are suppressed while disabled.
    pub fn key_down(&mut self, key: Key) -> KeyOutcome {
        let outcome = self.keys.key_down(key);
        self.gate(outcome)
    }

    /// Forward `keyup`; clicks are suppressed while disabled.
    pub fn key_up(&mut self, key: Key) -> KeyOutcome {
        let outcome = self.keys.key_up(key);
        self.gate(outcome)
    }

    /// Host attributes reflecting the current state.
    #[must_use]
    pub fn attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        attrs
            .set("role", "button")
            .set("tabindex", "0")
            .flag("raised", self.raised)
            .flag("disabled", self.disabled)
            .flag("active", self.active())
            .aria_disabled(self.disabled);
        attrs
    }

    const fn gate(&self, outcome: KeyOutcome) -> KeyOutcome {
        KeyOutcome {
            prevent_default: outcome.prevent_default,
            click: outcome.click && !self.disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_button_reflects_and_blocks_clicks() {
        let mut button = Button::new(true, true);
        assert!(!button.activate());
        assert!(!button.key_down(Key::Enter).click);
        let attrs = button.attributes();
        assert_eq!(attrs.get("aria-disabled"), Some("true"));
        assert!(attrs.contains("raised"));
    }

    #[test]
    fn space_press_reflects_active() {
        let mut button = Button::default();
        button.key_down(Key::Space);
        assert!(button.attributes().contains("active"));
        assert!(button.key_up(Key::Space).click);
        assert!(!button.attributes().contains("active"));
    }
}
