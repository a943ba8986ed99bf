//! Attribute reflection: typed widget state mirrored to markup attributes.
//!
//! Every model exposes an `attributes()` snapshot; the UI layer copies the
//! map onto the host element. Boolean attributes are present with an empty
//! value or absent entirely.

use std::collections::BTreeMap;

/// Ordered set of reflected attributes for a single element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: BTreeMap<&'static str, String>,
}

impl Attributes {
    /// Empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing any previous value.
    pub fn set(&mut self, name: &'static str, value: impl Into<String>) -> &mut Self {
        self.entries.insert(name, value.into());
        self
    }

    /// Add `name` as a boolean attribute when `present`, remove it otherwise.
    pub fn flag(&mut self, name: &'static str, present: bool) -> &mut Self {
        if present {
            self.entries.insert(name, String::new());
        } else {
            self.entries.remove(name);
        }
        self
    }

    /// Reflect `aria-disabled="true"` while disabled; absent otherwise.
    pub fn aria_disabled(&mut self, disabled: bool) -> &mut Self {
        if disabled {
            self.entries.insert("aria-disabled", "true".to_string());
        } else {
            self.entries.remove("aria-disabled");
        }
        self
    }

    /// Value of `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Whether `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(name, value)| (*name, value.as_str()))
    }

    /// Number of reflected attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is reflected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Render a number the way markup attributes expect (`20`, not `20.0`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
