//! `oxygen icons`: inspect the process icon registry.

use std::io::Write;

use oxygen_core::icons::{icon_names, iconset_names, lookup_icon};
use oxygen_core::Icon;
use serde::Serialize;

use crate::cli::{IconsArgs, OutputFormat};
use crate::error::CliResult;
use crate::output::{write_json, write_line};

#[derive(Serialize)]
struct IconView<'a> {
    name: String,
    size: u32,
    view_box: String,
    path: &'a str,
}

impl<'a> From<&'a Icon> for IconView<'a> {
    fn from(icon: &'a Icon) -> Self {
        Self {
            name: icon.name.to_string(),
            size: icon.size,
            view_box: icon.view_box(),
            path: &icon.path,
        }
    }
}

pub(crate) fn handle_icons(
    args: &IconsArgs,
    format: OutputFormat,
    out: &mut impl Write,
) -> CliResult<()> {
    if let Some(qualified) = &args.show {
        let icon = lookup_icon(qualified)?;
        return match format {
            OutputFormat::Json => write_json(out, &IconView::from(&icon)),
            OutputFormat::Text => write_line(out, &render_svg(&icon)),
        };
    }

    let names = match &args.set {
        Some(set) => icon_names(set),
        None => iconset_names(),
    }?;

    match format {
        OutputFormat::Json => write_json(out, &names),
        OutputFormat::Text => names.iter().try_for_each(|name| write_line(out, name)),
    }
}

/// Standalone SVG document for one icon.
fn render_svg(icon: &Icon) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{view_box}\" width=\"{size}\" height=\"{size}\"><path d=\"{path}\"/></svg>",
        view_box = icon.view_box(),
        size = icon.size,
        path = icon.path,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(args: &IconsArgs, format: OutputFormat) -> CliResult<String> {
        let mut out = Vec::new();
        handle_icons(args, format, &mut out)?;
        Ok(String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn lists_registered_sets() {
        let text = render(
            &IconsArgs {
                set: None,
                show: None,
            },
            OutputFormat::Text,
        )
        .expect("lists sets");
        assert!(text.lines().any(|line| line == "icons"));
    }

    #[test]
    fn lists_icons_of_a_set_as_json() {
        let json = render(
            &IconsArgs {
                set: Some("icons".to_string()),
                show: None,
            },
            OutputFormat::Json,
        )
        .expect("lists icons");
        let names: Vec<String> = serde_json::from_str(&json).expect("json array");
        assert!(names.contains(&"bug-report".to_string()));
        assert!(names.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn shows_single_icon_as_svg() {
        let svg = render(
            &IconsArgs {
                set: None,
                show: Some("icons:menu".to_string()),
            },
            OutputFormat::Text,
        )
        .expect("renders icon");
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains("viewBox=\"0 0 24 24\""));
    }

    #[test]
    fn lookup_errors_are_validation_errors() {
        for reference in ["menu", "nope:x", "icons:does-not-exist"] {
            let err = render(
                &IconsArgs {
                    set: None,
                    show: Some(reference.to_string()),
                },
                OutputFormat::Text,
            )
            .expect_err("lookup fails");
            assert_eq!(err.exit_code(), 2, "{reference}");
        }
    }
}
