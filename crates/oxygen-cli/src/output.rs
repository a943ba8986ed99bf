//! Output renderers shared by the command handlers.

use std::io::Write;

use anyhow::anyhow;
use serde::Serialize;

use crate::error::{CliError, CliResult};

/// Pretty-printed JSON document followed by a newline.
pub(crate) fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
    write_line(out, &text)
}

/// Compact JSON on a single line, for streamed records.
pub(crate) fn write_json_line<T: Serialize>(out: &mut impl Write, value: &T) -> CliResult<()> {
    let text = serde_json::to_string(value)
        .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err}")))?;
    write_line(out, &text)
}

pub(crate) fn write_line(out: &mut impl Write, text: &str) -> CliResult<()> {
    writeln!(out, "{text}").map_err(|err| CliError::failure(anyhow!("failed to write output: {err}")))
}
