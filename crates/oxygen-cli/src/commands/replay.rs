//! `oxygen replay`: drive a slider with a recorded gesture script.
//!
//! The script is a JSON document:
//!
//! ```json
//! {
//!   "min": 0, "max": 100, "value": 0,
//!   "track": { "left": 0, "right": 200 },
//!   "events": [
//!     { "type": "pointer_down", "x": 50 },
//!     { "type": "pointer_leave", "buttons": 1 },
//!     { "type": "set_range", "min": 0, "max": 10 }
//!   ]
//! }
//! ```
//!
//! Each committed change is printed as one JSON line (or one text line),
//! followed by a summary record.

use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::rc::Rc;

use anyhow::Context;
use oxygen_core::reflect::format_number;
use oxygen_core::{DragState, Slider, SliderInput, TrackRect};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cli::{OutputFormat, ReplayArgs};
use crate::error::{CliError, CliResult};
use crate::output::{write_json_line, write_line};

const fn default_max() -> f64 {
    100.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReplayScript {
    #[serde(default)]
    min: f64,
    #[serde(default = "default_max")]
    max: f64,
    #[serde(default)]
    value: f64,
    #[serde(default)]
    disabled: bool,
    track: TrackRect,
    events: Vec<ReplayStep>,
}

/// Either a host input event or a programmatic property change.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ReplayStep {
    Input(SliderInput),
    Property(PropertyChange),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum PropertyChange {
    SetValue { value: f64 },
    SetRange { min: f64, max: f64 },
    SetDisabled { disabled: bool },
}

impl ReplayStep {
    const fn kind(&self) -> &'static str {
        match self {
            Self::Input(input) => input.kind(),
            Self::Property(PropertyChange::SetValue { .. }) => "set_value",
            Self::Property(PropertyChange::SetRange { .. }) => "set_range",
            Self::Property(PropertyChange::SetDisabled { .. }) => "set_disabled",
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
struct ChangeRecord {
    step: usize,
    event: &'static str,
    value: f64,
}

#[derive(Debug, Serialize, PartialEq)]
struct ReplaySummary {
    steps: usize,
    changes: usize,
    value: f64,
    dragging: bool,
}

pub(crate) fn handle_replay(
    args: &ReplayArgs,
    format: OutputFormat,
    out: &mut impl Write,
) -> CliResult<()> {
    let script = load_script(&args.file)?;
    let (changes, summary) = replay(script);
    info!(
        steps = summary.steps,
        changes = summary.changes,
        "gesture replay finished"
    );

    match format {
        OutputFormat::Json => {
            for change in &changes {
                write_json_line(out, change)?;
            }
            write_json_line(out, &summary)
        }
        OutputFormat::Text => {
            for change in &changes {
                write_line(
                    out,
                    &format!(
                        "step {:>3} {:<14} -> {}",
                        change.step,
                        change.event,
                        format_number(change.value)
                    ),
                )?;
            }
            write_line(
                out,
                &format!(
                    "{} steps, {} changes, final value {}{}",
                    summary.steps,
                    summary.changes,
                    format_number(summary.value),
                    if summary.dragging { " (still dragging)" } else { "" }
                ),
            )
        }
    }
}

fn load_script(path: &Path) -> CliResult<ReplayScript> {
    let payload = fs::read_to_string(path)
        .with_context(|| format!("cannot read gesture script {}", path.display()))
        .map_err(CliError::failure)?;
    serde_json::from_str(&payload).map_err(|err| {
        CliError::validation(format!("invalid gesture script: {err}")).located(path.display())
    })
}

fn replay(script: ReplayScript) -> (Vec<ChangeRecord>, ReplaySummary) {
    let mut slider = Slider::new(script.min, script.max, script.value);
    slider.set_disabled(script.disabled);

    let committed = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&committed);
    slider.subscribe(move |value| sink.borrow_mut().push(*value));

    let steps = script.events.len();
    let mut changes = Vec::new();
    for (step, event) in script.events.into_iter().enumerate() {
        let kind = event.kind();
        match event {
            ReplayStep::Input(input) => {
                let _ = slider.handle(input, script.track);
            }
            ReplayStep::Property(PropertyChange::SetValue { value }) => {
                let _ = slider.set_value(value);
            }
            ReplayStep::Property(PropertyChange::SetRange { min, max }) => {
                let _ = slider.set_range(min, max);
            }
            ReplayStep::Property(PropertyChange::SetDisabled { disabled }) => {
                slider.set_disabled(disabled);
            }
        }
        debug!(step, event = kind, value = slider.value(), "replayed");
        changes.extend(committed.borrow_mut().drain(..).map(|value| ChangeRecord {
            step,
            event: kind,
            value,
        }));
    }

    let summary = ReplaySummary {
        steps,
        changes: changes.len(),
        value: slider.value(),
        dragging: slider.drag_state() == DragState::Dragging,
    };
    (changes, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn script(json: &str) -> ReplayScript {
        serde_json::from_str(json).expect("valid script")
    }

    #[test]
    fn drag_across_leave_and_reenter_is_reported() {
        let (changes, summary) = replay(script(
            r#"{
                "track": {"left": 0, "right": 100},
                "events": [
                    {"type": "pointer_down", "x": 10},
                    {"type": "pointer_leave", "buttons": 1},
                    {"type": "pointer_move", "x": 60},
                    {"type": "pointer_enter", "buttons": 1},
                    {"type": "pointer_move", "x": 80},
                    {"type": "pointer_up"},
                    {"type": "pointer_move", "x": 20}
                ]
            }"#,
        ));
        let values: Vec<f64> = changes.iter().map(|change| change.value).collect();
        assert_eq!(values, vec![10.0, 80.0]);
        assert_eq!(changes[1].step, 4);
        assert_eq!(changes[1].event, "pointer_move");
        assert_eq!(
            summary,
            ReplaySummary {
                steps: 7,
                changes: 2,
                value: 80.0,
                dragging: false,
            }
        );
    }

    #[test]
    fn property_steps_notify_like_inputs() {
        let (changes, summary) = replay(script(
            r#"{
                "value": 90,
                "track": {"left": 0, "right": 100},
                "events": [
                    {"type": "set_range", "min": 0, "max": 50},
                    {"type": "set_value", "value": 50},
                    {"type": "set_disabled", "disabled": true},
                    {"type": "touch_start", "x": 5}
                ]
            }"#,
        ));
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].event, "set_range");
        assert_eq!(changes[0].value, 50.0);
        assert_eq!(summary.value, 50.0);
        assert!(!summary.dragging);
    }

    #[test]
    fn handler_writes_json_lines() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("gesture.json");
        fs::write(
            &path,
            r#"{"track": {"left": 0, "right": 200}, "events": [{"type": "touch_start", "x": 50}]}"#,
        )
        .expect("write script");

        let mut out = Vec::new();
        handle_replay(&ReplayArgs { file: path }, OutputFormat::Json, &mut out).expect("replays");
        let text = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"step":0,"event":"touch_start","value":25.0}"#);
        assert!(lines[1].contains("\"dragging\":true"));
    }

    #[test]
    fn malformed_script_is_a_validation_error() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("gesture.json");
        fs::write(&path, r#"{"events": []}"#).expect("write script");

        let mut out = Vec::new();
        let err = handle_replay(&ReplayArgs { file: path }, OutputFormat::Text, &mut out)
            .expect_err("missing track");
        assert_eq!(err.exit_code(), 2);
    }
}
