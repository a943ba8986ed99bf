//! Theme modes, widget CSS custom properties and user overrides.
//!
//! # Design
//! - Every widget reads its colours and metrics from `--oxy-*` custom
//!   properties; this table holds the light/dark defaults.
//! - Overrides come from a JSON document with `light` and `dark` maps and
//!   are validated before they reach a stylesheet.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ThemeError, ThemeResult};

/// Prefix shared by every widget custom property.
pub const VARIABLE_PREFIX: &str = "--oxy-";

/// Light or dark appearance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in CSS datasets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Both modes, light first.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Light, Self::Dark]
    }

    /// Parse a mode identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownMode`] for anything but `light`/`dark`.
    pub fn parse(value: &str) -> ThemeResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ThemeError::UnknownMode {
                value: value.to_string(),
            }),
        }
    }
}

/// A widget custom property with per-mode defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeVariable {
    /// Property name including the `--oxy-` prefix.
    pub name: &'static str,
    /// Light theme default.
    pub light: &'static str,
    /// Dark theme default.
    pub dark: &'static str,
}

impl ThemeVariable {
    /// Default for `mode`.
    #[must_use]
    pub const fn value(&self, mode: ThemeMode) -> &'static str {
        match mode {
            ThemeMode::Light => self.light,
            ThemeMode::Dark => self.dark,
        }
    }
}

const fn var(name: &'static str, light: &'static str, dark: &'static str) -> ThemeVariable {
    ThemeVariable { name, light, dark }
}

/// Custom properties consumed by the widgets, grouped by widget.
pub const WIDGET_VARIABLES: &[ThemeVariable] = &[
    var("--oxy-button-background", "transparent", "transparent"),
    var("--oxy-button-raised-background", "#e4e8e8", "#3f5050"),
    var("--oxy-button-focus-color", "cornflowerblue", "cornflowerblue"),
    var("--oxy-checkbox-unchecked-border", "2px solid gray", "none"),
    var("--oxy-checkbox-unchecked-background", "white", "#5a6b6b"),
    var("--oxy-checkbox-checked-border", "none", "none"),
    var("--oxy-checkbox-checked-background", "#28f", "#28f"),
    var("--oxy-checkbox-check-color", "white", "white"),
    var("--oxy-checkbox-focus-color", "cornflowerblue", "cornflowerblue"),
    var("--oxy-input-background", "white", "#243333"),
    var("--oxy-input-border", "2px solid #c9d1d1", "2px solid #3f5050"),
    var("--oxy-input-background-focused", "white", "#243333"),
    var("--oxy-input-border-focused", "2px solid #7d9292", "2px solid #7d9292"),
    var("--oxy-input-placeholder-color", "gray", "gray"),
    var("--oxy-textarea-background", "white", "#243333"),
    var("--oxy-textarea-border", "2px solid #c9d1d1", "2px solid #3f5050"),
    var("--oxy-textarea-background-focused", "white", "#243333"),
    var("--oxy-textarea-border-focused", "2px solid #7d9292", "2px solid #7d9292"),
    var("--oxy-textarea-placeholder-color", "gray", "gray"),
    var("--oxy-slider-track-color", "#666", "#5a6b6b"),
    var("--oxy-slider-track-active-color", "#666", "#7d9292"),
    var("--oxy-slider-track-height", "2px", "2px"),
    var("--oxy-slider-thumb-color", "#333", "white"),
    var("--oxy-slider-thumb-active-color", "#333", "white"),
    var("--oxy-slider-thumb-size", "14px", "14px"),
    var("--oxy-slider-thumb-radius", "4px", "4px"),
    var("--oxy-slider-focus-color", "cornflowerblue", "cornflowerblue"),
    var("--oxy-tabs-border", "1px solid black", "1px solid gray"),
    var("--oxy-tab-indicator-color", "black", "#28f"),
    var("--oxy-dialog-background", "white", "#243333"),
    var("--oxy-dialog-backdrop", "rgba(0, 0, 0, 0.4)", "rgba(0, 0, 0, 0.6)"),
    var("--oxy-icon-name-color", "gray", "lightgray"),
    var("--oxy-scrollbar-track-color", "#eee", "#243333"),
    var("--oxy-scrollbar-thumb-color", "#888", "#5a6b6b"),
    var("--oxy-scrollbar-thumb-hover-color", "#555", "#7d9292"),
];

/// User supplied overrides, one map per mode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Light mode overrides keyed by `--oxy-*` property.
    pub light: BTreeMap<String, String>,
    /// Dark mode overrides keyed by `--oxy-*` property.
    pub dark: BTreeMap<String, String>,
}

impl ThemeConfig {
    /// Parse and validate overrides from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Parse`] for malformed JSON and a validation
    /// error for bad variable names or values.
    pub fn from_json_str(payload: &str) -> ThemeResult<Self> {
        let config: Self =
            serde_json::from_str(payload).map_err(|source| ThemeError::Parse { source })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate overrides from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Read`] when the file cannot be read, otherwise
    /// the errors of [`ThemeConfig::from_json_str`].
    pub fn load(path: &Path) -> ThemeResult<Self> {
        let payload = fs::read_to_string(path).map_err(|source| ThemeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&payload)?;
        debug!(
            path = %path.display(),
            light = config.light.len(),
            dark = config.dark.len(),
            "theme overrides loaded"
        );
        Ok(config)
    }

    /// Check every override name and value.
    ///
    /// # Errors
    ///
    /// Returns the first invalid variable or value encountered.
    pub fn validate(&self) -> ThemeResult<()> {
        self.light
            .iter()
            .chain(self.dark.iter())
            .try_for_each(|(name, value)| validate_entry(name, value))
    }

    /// Overrides for `mode`.
    #[must_use]
    pub const fn overrides(&self, mode: ThemeMode) -> &BTreeMap<String, String> {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }

    /// Defaults merged with overrides for `mode`, sorted by name.
    #[must_use]
    pub fn resolve(&self, mode: ThemeMode) -> BTreeMap<String, String> {
        let mut resolved: BTreeMap<String, String> = WIDGET_VARIABLES
            .iter()
            .map(|variable| (variable.name.to_string(), variable.value(mode).to_string()))
            .collect();
        resolved.extend(
            self.overrides(mode)
                .iter()
                .map(|(name, value)| (name.clone(), value.trim().to_string())),
        );
        resolved
    }

    /// CSS rule declaring every resolved property under `selector`.
    #[must_use]
    pub fn render_stylesheet(&self, selector: &str, mode: ThemeMode) -> String {
        let mut css = format!("{selector} {{\n");
        for (name, value) in self.resolve(mode) {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push_str("}\n");
        css
    }

    /// Light and dark rules, each scoped to [`mode_selector`] of `base`.
    #[must_use]
    pub fn render_all(&self, base: &str) -> String {
        ThemeMode::all()
            .into_iter()
            .map(|mode| self.render_stylesheet(&mode_selector(base, mode), mode))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Selector matching `base` when it carries `data-theme="<mode>"`.
#[must_use]
pub fn mode_selector(base: &str, mode: ThemeMode) -> String {
    format!("{base}[data-theme=\"{}\"]", mode.as_str())
}

fn validate_entry(name: &str, value: &str) -> ThemeResult<()> {
    let suffix = name.strip_prefix(VARIABLE_PREFIX).unwrap_or_default();
    let valid_name = !suffix.is_empty()
        && suffix
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
    if !valid_name {
        return Err(ThemeError::InvalidVariable {
            name: name.to_string(),
        });
    }
    if value.trim().is_empty() || value.contains([';', '{', '}']) {
        return Err(ThemeError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_round_trips_identifiers() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::parse(" Dark ").ok(), Some(ThemeMode::Dark));
        assert!(matches!(
            ThemeMode::parse("sepia"),
            Err(ThemeError::UnknownMode { .. })
        ));
    }

    #[test]
    fn widget_variables_are_prefixed_and_unique() {
        let mut names: Vec<&str> = WIDGET_VARIABLES.iter().map(|variable| variable.name).collect();
        assert!(names.iter().all(|name| name.starts_with(VARIABLE_PREFIX)));
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn overrides_replace_defaults() {
        let config = ThemeConfig::from_json_str(
            r#"{"dark": {"--oxy-slider-thumb-color": " hotpink ", "--oxy-demo-gap": "8px"}}"#,
        )
        .expect("valid overrides");
        let dark = config.resolve(ThemeMode::Dark);
        assert_eq!(dark["--oxy-slider-thumb-color"], "hotpink");
        assert_eq!(dark["--oxy-demo-gap"], "8px");
        let light = config.resolve(ThemeMode::Light);
        assert_eq!(light["--oxy-slider-thumb-color"], "#333");
    }

    #[test]
    fn invalid_overrides_are_rejected() {
        assert!(matches!(
            ThemeConfig::from_json_str(r#"{"light": {"color": "red"}}"#),
            Err(ThemeError::InvalidVariable { .. })
        ));
        assert!(matches!(
            ThemeConfig::from_json_str(r#"{"light": {"--oxy-x": "red; } body {"}}"#),
            Err(ThemeError::InvalidValue { .. })
        ));
        assert!(matches!(
            ThemeConfig::from_json_str(r#"{"sepia": {}}"#),
            Err(ThemeError::Parse { .. })
        ));
    }

    #[test]
    fn stylesheet_scopes_declarations() {
        let css = ThemeConfig::default().render_stylesheet("[dark]", ThemeMode::Dark);
        assert!(css.starts_with("[dark] {\n"));
        assert!(css.contains("  --oxy-slider-thumb-color: white;\n"));
        assert!(css.ends_with("}\n"));
    }

    #[test]
    fn render_all_emits_one_rule_per_mode() {
        let css = ThemeConfig::default().render_all(".demo");
        assert!(css.starts_with(".demo[data-theme=\"light\"] {\n"));
        assert!(css.contains("\n.demo[data-theme=\"dark\"] {\n"));
        assert_eq!(css.matches("--oxy-slider-track-color").count(), 2);
    }
}
