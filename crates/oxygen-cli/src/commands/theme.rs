//! `oxygen theme`: render widget custom properties as CSS or JSON.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use oxygen_core::{ThemeConfig, ThemeMode};
use tracing::info;

use crate::cli::{ModeArg, OutputFormat, ThemeArgs};
use crate::error::{CliError, CliResult};
use crate::output::write_json;

pub(crate) fn handle_theme(
    args: &ThemeArgs,
    format: OutputFormat,
    out: &mut impl Write,
) -> CliResult<()> {
    let config = match &args.overrides {
        Some(path) => load_overrides(path)?,
        None => ThemeConfig::default(),
    };
    let modes = selected_modes(args.mode);
    info!(
        modes = modes.len(),
        selector = %args.selector,
        overrides = args.overrides.is_some(),
        "rendering theme"
    );

    match format {
        OutputFormat::Json => {
            let resolved: BTreeMap<&str, BTreeMap<String, String>> = modes
                .iter()
                .map(|mode| (mode.as_str(), config.resolve(*mode)))
                .collect();
            write_json(out, &resolved)
        }
        OutputFormat::Text => {
            let css = match args.mode {
                ModeArg::Light => config.render_stylesheet(&args.selector, ThemeMode::Light),
                ModeArg::Dark => config.render_stylesheet(&args.selector, ThemeMode::Dark),
                ModeArg::Both => config.render_all(&args.selector),
            };
            write!(out, "{css}").map_err(CliError::failure)
        }
    }
}

fn selected_modes(mode: ModeArg) -> Vec<ThemeMode> {
    match mode {
        ModeArg::Light => vec![ThemeMode::Light],
        ModeArg::Dark => vec![ThemeMode::Dark],
        ModeArg::Both => ThemeMode::all().to_vec(),
    }
}

fn load_overrides(path: &Path) -> CliResult<ThemeConfig> {
    ThemeConfig::load(path).map_err(|err| CliError::from(err).located(path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxygen_core::mode_selector;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args(mode: ModeArg, overrides: Option<PathBuf>) -> ThemeArgs {
        ThemeArgs {
            mode,
            overrides,
            selector: ".demo".to_string(),
        }
    }

    fn render(args: &ThemeArgs, format: OutputFormat) -> CliResult<String> {
        let mut out = Vec::new();
        handle_theme(args, format, &mut out)?;
        Ok(String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn single_mode_uses_plain_selector() {
        let css = render(&args(ModeArg::Dark, None), OutputFormat::Text).expect("renders");
        assert!(css.starts_with(".demo {\n"));
        assert!(css.contains("--oxy-slider-thumb-color: white;"));
    }

    #[test]
    fn both_modes_scope_by_data_theme() {
        let css = render(&args(ModeArg::Both, None), OutputFormat::Text).expect("renders");
        assert!(css.contains(&format!("{} {{", mode_selector(".demo", ThemeMode::Light))));
        assert!(css.contains(&format!("{} {{", mode_selector(".demo", ThemeMode::Dark))));
    }

    #[test]
    fn overrides_file_feeds_json_output() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("theme.json");
        fs::write(&path, r#"{"light": {"--oxy-slider-track-color": "teal"}}"#).expect("write");

        let json = render(&args(ModeArg::Light, Some(path)), OutputFormat::Json).expect("renders");
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("json");
        assert_eq!(parsed["light"]["--oxy-slider-track-color"], "teal");
        assert!(parsed.get("dark").is_none());
    }

    #[test]
    fn invalid_overrides_are_validation_errors() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("theme.json");
        fs::write(&path, r#"{"dark": {"background": "red"}}"#).expect("write");

        let err = render(&args(ModeArg::Dark, Some(path)), OutputFormat::Text)
            .expect_err("bad variable");
        assert_eq!(err.exit_code(), 2);
        assert!(err.display_message().contains("`background`"));
    }

    #[test]
    fn missing_overrides_file_is_a_failure() {
        let dir = TempDir::new().expect("tempdir");
        let err = render(
            &args(ModeArg::Light, Some(dir.path().join("absent.json"))),
            OutputFormat::Text,
        )
        .expect_err("missing file");
        assert_eq!(err.exit_code(), 3);
    }
}
