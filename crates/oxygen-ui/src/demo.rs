//! Content and preference parsing for the demo page.

use oxygen_core::{ThemeConfig, ThemeMode};

/// Local storage key holding the page theme mode.
pub const THEME_KEY: &str = "oxygen.theme";
/// Local storage key holding JSON theme overrides.
pub const OVERRIDES_KEY: &str = "oxygen.theme.overrides";

/// Icons rendered in the showcase section.
pub const DEMO_ICONS: &[&str] = &[
    "icons:accessibility",
    "icons:account-circle",
    "icons:add-alert",
    "icons:alarm",
    "icons:backup",
    "icons:block",
    "icons:bookmark",
    "icons:bug-report",
    "icons:check",
    "icons:close",
    "icons:cloud",
];

/// Leading icon of the search input; clicking it focuses the field.
pub const SEARCH_ICON: &str = "icons:search";

/// Labels of the demo tab strip.
pub const TAB_LABELS: &[&str] = &["Overview", "Settings", "History"];

/// Initial slider range and value.
pub const SLIDER_RANGE: (f64, f64, f64) = (0.0, 100.0, 20.0);

/// Theme mode from a stored identifier; unknown or missing values fall back
/// to light.
#[must_use]
pub fn stored_theme(value: Option<&str>) -> ThemeMode {
    value
        .and_then(|raw| ThemeMode::parse(raw).ok())
        .unwrap_or_default()
}

/// Overrides from stored JSON; invalid documents are reported and ignored.
#[must_use]
pub fn stored_overrides(value: Option<&str>) -> (ThemeConfig, Option<String>) {
    match value.map(ThemeConfig::from_json_str) {
        None => (ThemeConfig::default(), None),
        Some(Ok(config)) => (config, None),
        Some(Err(err)) => (ThemeConfig::default(), Some(err.to_string())),
    }
}

/// Mode the toggle switches to.
#[must_use]
pub const fn toggled(mode: ThemeMode) -> ThemeMode {
    match mode {
        ThemeMode::Light => ThemeMode::Dark,
        ThemeMode::Dark => ThemeMode::Light,
    }
}
