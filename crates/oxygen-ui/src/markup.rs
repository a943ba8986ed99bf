//! Helpers that turn model [`Attributes`] into Yew markup values.
//!
//! # Design
//! - String attributes are read by name and handed to `html!` as optional
//!   values, so absent entries disappear from the element.
//! - Boolean attributes double as state classes (`raised`, `active`,
//!   `opened`) that the stylesheet keys on.

use oxygen_core::Attributes;
use oxygen_core::reflect::format_number;
use yew::{AttrValue, Classes};

/// Value of `name`, if reflected.
#[must_use]
pub fn attr(attrs: &Attributes, name: &str) -> Option<AttrValue> {
    attrs.get(name).map(|value| AttrValue::from(value.to_string()))
}

/// Boolean attributes (empty value) as state classes.
#[must_use]
pub fn state_classes(attrs: &Attributes) -> Classes {
    attrs
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
}

/// Percentage of `ratio` suitable for inline styles (`25%`).
#[must_use]
pub fn percent(ratio: f64) -> String {
    format!("{}%", format_number((ratio * 100.0).clamp(0.0, 100.0)))
}

/// Inline style positioning the slider thumb.
#[must_use]
pub fn thumb_style(ratio: f64) -> String {
    format!("left: {};", percent(ratio))
}

/// Inline style sizing the filled part of the slider track.
#[must_use]
pub fn fill_style(ratio: f64) -> String {
    format!("width: {};", percent(ratio))
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxygen_core::{Button, Slider};

    #[test]
    fn reads_reflected_values() {
        let slider = Slider::new(0.0, 10.0, 4.0);
        let attrs = slider.attributes();
        assert_eq!(attr(&attrs, "aria-valuenow").as_deref(), Some("4"));
        assert_eq!(attr(&attrs, "aria-disabled"), None);
    }

    #[test]
    fn flags_become_classes() {
        let classes = state_classes(&Button::new(true, true).attributes());
        assert!(classes.contains("raised"));
        assert!(classes.contains("disabled"));
        assert!(!classes.contains("role"));
    }

    #[test]
    fn percentages_are_clamped_and_compact() {
        assert_eq!(percent(0.25), "25%");
        assert_eq!(percent(0.125), "12.5%");
        assert_eq!(percent(1.5), "100%");
        assert_eq!(thumb_style(0.5), "left: 50%;");
        assert_eq!(fill_style(0.0), "width: 0%;");
    }
}
