//! Single-line input and multi-line textarea models.
//!
//! # Design
//! - `input` is the only path that emits `change`; property writes via
//!   [`TextField::set_value`] are silent, like attribute updates.
//! - Selection ranges are expressed in UTF-16 code units so they can be
//!   handed straight to `setSelectionRange`.

use tracing::debug;

use crate::emitter::{ChangeEmitter, SubscriptionId};
use crate::keyboard::Key;
use crate::reflect::Attributes;

/// HTML input `type` values the text field supports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputType {
    /// Plain text.
    #[default]
    Text,
    /// Masked password entry.
    Password,
    /// Email address.
    Email,
    /// Search box.
    Search,
    /// URL entry.
    Url,
    /// Numeric entry.
    Number,
}

impl InputType {
    /// Attribute value for the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Email => "email",
            Self::Search => "search",
            Self::Url => "url",
            Self::Number => "number",
        }
    }

    /// Parse an attribute value; unknown types fall back to text.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "password" => Self::Password,
            "email" => Self::Email,
            "search" => Self::Search,
            "url" => Self::Url,
            "number" => Self::Number,
            _ => Self::Text,
        }
    }
}

/// Selection range in UTF-16 code units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Start offset (inclusive).
    pub start: u32,
    /// End offset (exclusive).
    pub end: u32,
}

impl Selection {
    /// Collapsed selection at the start.
    #[must_use]
    pub const fn collapsed() -> Self {
        Self { start: 0, end: 0 }
    }

    /// Selection spanning all of `text`.
    #[must_use]
    pub fn all(text: &str) -> Self {
        let end = u32::try_from(text.encode_utf16().count()).unwrap_or(u32::MAX);
        Self { start: 0, end }
    }
}

/// Text entry state shared by `<oxy-input>` and `<oxy-textarea>`.
#[derive(Debug, Default)]
pub struct TextField {
    value: String,
    multiline: bool,
    /// Input type (single-line only).
    pub input_type: InputType,
    /// Maximum number of characters accepted (single-line only).
    pub max_length: Option<usize>,
    /// Placeholder text.
    pub placeholder: String,
    /// Rejects user edits when set.
    pub readonly: bool,
    /// Rejects user edits and focus when set.
    pub disabled: bool,
    /// Select the whole value when focus arrives.
    pub select_on_focus: bool,
    /// Escape clears the value (single-line only).
    pub clear_on_escape: bool,
    /// Request focus once mounted.
    pub autofocus: bool,
    focused: bool,
    changes: ChangeEmitter<String>,
}

impl TextField {
    /// Single-line input.
    #[must_use]
    pub fn input() -> Self {
        Self::default()
    }

    /// Multi-line textarea.
    #[must_use]
    pub fn textarea() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    /// Whether this is a textarea.
    #[must_use]
    pub const fn multiline(&self) -> bool {
        self.multiline
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the field holds focus.
    #[must_use]
    pub const fn focused(&self) -> bool {
        self.focused
    }

    /// Register a listener for value changes.
    pub fn subscribe(&mut self, listener: impl FnMut(&String) + 'static) -> SubscriptionId {
        self.changes.subscribe(listener)
    }

    /// Replace the value without notifying listeners.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = self.truncate(value.into());
    }

    /// User edit. Returns the stored value when it changed.
    pub fn input_text(&mut self, raw: &str) -> Option<&str> {
        if self.disabled || self.readonly {
            return None;
        }
        let next = self.truncate(raw.to_string());
        if next == self.value {
            return None;
        }
        self.value = next;
        self.emit_change();
        Some(&self.value)
    }

    /// Empty the value, notifying only if something was removed.
    pub fn clear(&mut self) -> bool {
        if self.value.is_empty() {
            return false;
        }
        self.value.clear();
        self.emit_change();
        true
    }

    /// Handle `keydown`; Escape clears when configured. Returns `true` when
    /// the value was cleared.
    pub fn key_down(&mut self, key: Key) -> bool {
        if key == Key::Escape && self.clear_on_escape && !self.multiline {
            return self.clear();
        }
        false
    }

    /// Focus arrived. Returns the selection to apply, if any.
    pub fn focus(&mut self) -> Option<Selection> {
        if self.disabled {
            return None;
        }
        self.focused = true;
        self.select_on_focus.then(|| self.select())
    }

    /// Focus left.
    pub const fn blur(&mut self) {
        self.focused = false;
    }

    /// Range selecting the entire value.
    #[must_use]
    pub fn select(&self) -> Selection {
        Selection::all(&self.value)
    }

    /// Collapsed range at the start.
    #[must_use]
    pub const fn deselect(&self) -> Selection {
        Selection::collapsed()
    }

    /// Text handed to the clipboard. Password fields copy their real value
    /// while staying masked on screen.
    #[must_use]
    pub fn copy_text(&self) -> &str {
        &self.value
    }

    /// Host attributes reflecting the current state.
    #[must_use]
    pub fn attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        attrs
            .flag("focused", self.focused)
            .flag("disabled", self.disabled)
            .flag("readonly", self.readonly)
            .aria_disabled(self.disabled);
        if !self.multiline {
            attrs.set("type", self.input_type.as_str());
        }
        attrs
    }

    fn truncate(&self, value: String) -> String {
        match self.max_length {
            Some(limit) if !self.multiline && value.chars().count() > limit => {
                value.chars().take(limit).collect()
            }
            _ => value,
        }
    }

    fn emit_change(&mut self) {
        debug!(len = self.value.len(), multiline = self.multiline, "text value changed");
        self.changes.emit(&self.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorded(field: &mut TextField) -> Rc<RefCell<Vec<String>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        field.subscribe(move |value| sink.borrow_mut().push(value.clone()));
        seen
    }

    #[test]
    fn input_emits_and_respects_max_length() {
        let mut field = TextField::input();
        field.max_length = Some(3);
        let seen = recorded(&mut field);
        assert_eq!(field.input_text("héllo"), Some("hél"));
        assert_eq!(field.input_text("hél"), None);
        assert_eq!(*seen.borrow(), vec!["hél".to_string()]);
    }

    #[test]
    fn readonly_rejects_edits() {
        let mut field = TextField::input();
        field.set_value("fixed");
        field.readonly = true;
        assert_eq!(field.input_text("changed"), None);
        assert_eq!(field.value(), "fixed");
    }

    #[test]
    fn escape_clears_readonly_field() {
        let mut field = TextField::input();
        field.set_value("fixed");
        field.readonly = true;
        field.clear_on_escape = true;
        assert!(field.key_down(Key::Escape));
        assert_eq!(field.value(), "");
    }

    #[test]
    fn escape_clears_only_when_enabled() {
        let mut field = TextField::input();
        field.set_value("query");
        assert!(!field.key_down(Key::Escape));
        field.clear_on_escape = true;
        let seen = recorded(&mut field);
        assert!(field.key_down(Key::Escape));
        assert!(!field.clear());
        assert_eq!(*seen.borrow(), vec![String::new()]);
    }

    #[test]
    fn focus_selects_in_utf16_units() {
        let mut field = TextField::textarea();
        field.set_value("a😀");
        assert_eq!(field.focus(), None);
        field.blur();
        field.select_on_focus = true;
        assert_eq!(field.focus(), Some(Selection { start: 0, end: 3 }));
        assert!(field.attributes().contains("focused"));
        assert_eq!(field.deselect(), Selection::collapsed());
    }

    #[test]
    fn textarea_ignores_single_line_options() {
        let mut field = TextField::textarea();
        field.max_length = Some(2);
        field.clear_on_escape = true;
        field.input_text("long text");
        assert_eq!(field.value(), "long text");
        assert!(!field.key_down(Key::Escape));
        assert!(!field.attributes().contains("type"));
    }

    #[test]
    fn password_copies_real_value() {
        let mut field = TextField::input();
        field.input_type = InputType::parse("password");
        field.set_value("s3cret");
        assert_eq!(field.copy_text(), "s3cret");
        assert_eq!(field.attributes().get("type"), Some("password"));
    }
}
