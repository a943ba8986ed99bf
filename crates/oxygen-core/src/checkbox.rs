//! Tri-state checkbox (checked / unchecked / indeterminate).

use tracing::debug;

use crate::emitter::{ChangeEmitter, SubscriptionId};
use crate::keyboard::{Key, KeyOutcome, KeyboardActivation};
use crate::reflect::Attributes;

/// Checkbox state with change notifications on `checked`.
#[derive(Debug, Default)]
pub struct Checkbox {
    checked: bool,
    indeterminate: bool,
    disabled: bool,
    keys: KeyboardActivation,
    changes: ChangeEmitter<bool>,
}

impl Checkbox {
    /// Checkbox with the given initial flags.
    #[must_use]
    pub fn new(checked: bool, indeterminate: bool, disabled: bool) -> Self {
        Self {
            checked,
            indeterminate,
            disabled,
            ..Self::default()
        }
    }

    /// Checked flag.
    #[must_use]
    pub const fn checked(&self) -> bool {
        self.checked
    }

    /// Indeterminate flag.
    #[must_use]
    pub const fn indeterminate(&self) -> bool {
        self.indeterminate
    }

    /// Disabled flag.
    #[must_use]
    pub const fn disabled(&self) -> bool {
        self.disabled
    }

    /// Register a listener for `checked` changes.
    pub fn subscribe(&mut self, listener: impl FnMut(&bool) + 'static) -> SubscriptionId {
        self.changes.subscribe(listener)
    }

    /// User activation. An indeterminate box resolves to unchecked.
    ///
    /// Returns the new `checked` value when it changed.
    pub fn click(&mut self) -> Option<bool> {
        if self.disabled {
            return None;
        }
        if self.indeterminate {
            self.indeterminate = false;
            return self.set_checked(false);
        }
        self.set_checked(!self.checked)
    }

    /// Set `checked` directly, notifying on change.
    pub fn set_checked(&mut self, checked: bool) -> Option<bool> {
        if self.checked == checked {
            return None;
        }
        self.checked = checked;
        debug!(checked, "checkbox changed");
        self.changes.emit(&checked);
        Some(checked)
    }

    /// Set the indeterminate flag.
    pub const fn set_indeterminate(&mut self, indeterminate: bool) {
        self.indeterminate = indeterminate;
    }

    /// Set the disabled flag.
    pub const fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Forward `keydown`; Enter clicks.
    pub fn key_down(&mut self, key: Key) -> (KeyOutcome, Option<bool>) {
        let outcome = self.keys.key_down(key);
        let changed = if outcome.click { self.click() } else { None };
        (outcome, changed)
    }

    /// Forward `keyup`; Space clicks.
    pub fn key_up(&mut self, key: Key) -> (KeyOutcome, Option<bool>) {
        let outcome = self.keys.key_up(key);
        let changed = if outcome.click { self.click() } else { None };
        (outcome, changed)
    }

    /// Host attributes reflecting the current state.
    #[must_use]
    pub fn attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        attrs
            .set("role", "checkbox")
            .set("tabindex", "0")
            .set("aria-checked", if self.checked { "true" } else { "false" })
            .flag("checked", self.checked)
            .flag("indeterminate", self.indeterminate)
            .flag("disabled", self.disabled)
            .aria_disabled(self.disabled);
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn click_toggles_and_notifies() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut checkbox = Checkbox::default();
        {
            let seen = Rc::clone(&seen);
            checkbox.subscribe(move |checked| seen.borrow_mut().push(*checked));
        }
        checkbox.click();
        checkbox.click();
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn indeterminate_click_resolves_unchecked() {
        let mut checkbox = Checkbox::new(true, true, false);
        assert_eq!(checkbox.click(), Some(false));
        assert!(!checkbox.indeterminate());

        let mut unchecked = Checkbox::new(false, true, false);
        assert_eq!(unchecked.click(), None);
        assert!(!unchecked.indeterminate());
        assert!(!unchecked.checked());
    }

    #[test]
    fn disabled_click_is_noop() {
        let mut checkbox = Checkbox::new(false, false, true);
        assert_eq!(checkbox.click(), None);
        assert_eq!(checkbox.attributes().get("aria-disabled"), Some("true"));
    }

    #[test]
    fn keyboard_space_toggles_on_release() {
        let mut checkbox = Checkbox::default();
        assert_eq!(checkbox.key_down(Key::Space).1, None);
        assert_eq!(checkbox.key_up(Key::Space).1, Some(true));
        assert_eq!(checkbox.attributes().get("aria-checked"), Some("true"));
    }
}
