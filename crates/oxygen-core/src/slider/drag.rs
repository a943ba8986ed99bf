//! Drag gesture state machine for a single pointer or touch stream.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Whether a drag gesture is in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    /// No gesture; pointer moves are ignored.
    #[default]
    Idle,
    /// Pointer or touch is held; moves update the value.
    Dragging,
}

/// Input events consumed by the slider.
///
/// `x` is the horizontal client coordinate; `buttons` is the browser's
/// held-buttons bitmask. Touch events carry the first touch point, if any.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SliderInput {
    /// Primary press on the track.
    PointerDown {
        /// Pointer x coordinate.
        x: f64,
    },
    /// Pointer movement over the track.
    PointerMove {
        /// Pointer x coordinate.
        x: f64,
    },
    /// Pointer release.
    PointerUp,
    /// Pointer left the track.
    PointerLeave {
        /// Buttons held at the moment of leaving.
        buttons: u16,
    },
    /// Pointer entered the track.
    PointerEnter {
        /// Buttons held on entry.
        buttons: u16,
    },
    /// Touch began.
    TouchStart {
        /// First touch point x coordinate.
        #[serde(default)]
        x: Option<f64>,
    },
    /// Touch moved.
    TouchMove {
        /// First touch point x coordinate.
        #[serde(default)]
        x: Option<f64>,
    },
    /// Touch ended.
    TouchEnd,
}

impl SliderInput {
    /// Event discriminator used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::PointerDown { .. } => "pointer_down",
            Self::PointerMove { .. } => "pointer_move",
            Self::PointerUp => "pointer_up",
            Self::PointerLeave { .. } => "pointer_leave",
            Self::PointerEnter { .. } => "pointer_enter",
            Self::TouchStart { .. } => "touch_start",
            Self::TouchMove { .. } => "touch_move",
            Self::TouchEnd => "touch_end",
        }
    }
}

/// Tracks drag state plus the buttons remembered when the pointer left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DragMachine {
    state: DragState,
    left_with_buttons: u16,
}

impl DragMachine {
    /// Idle machine.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: DragState::Idle,
            left_with_buttons: 0,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> DragState {
        self.state
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Apply `input` and return the x coordinate to sample, if any.
    pub fn apply(&mut self, input: SliderInput) -> Option<f64> {
        match input {
            SliderInput::PointerDown { x } => {
                self.transition(DragState::Dragging, input);
                Some(x)
            }
            SliderInput::TouchStart { x } => {
                self.transition(DragState::Dragging, input);
                x
            }
            SliderInput::PointerMove { x } => self.is_dragging().then_some(x),
            SliderInput::TouchMove { x } => x.filter(|_| self.is_dragging()),
            SliderInput::PointerUp | SliderInput::TouchEnd => {
                self.left_with_buttons = 0;
                self.transition(DragState::Idle, input);
                None
            }
            SliderInput::PointerLeave { buttons } => {
                // Only a drag in progress can be resumed on re-entry.
                self.left_with_buttons = if self.is_dragging() { buttons } else { 0 };
                self.transition(DragState::Idle, input);
                None
            }
            SliderInput::PointerEnter { buttons } => {
                if buttons != 0 && buttons == self.left_with_buttons {
                    self.transition(DragState::Dragging, input);
                }
                None
            }
        }
    }

    /// Drop any gesture in progress (used when the widget is disabled).
    pub fn reset(&mut self) {
        self.left_with_buttons = 0;
        self.state = DragState::Idle;
    }

    fn transition(&mut self, next: DragState, cause: SliderInput) {
        if self.state == next {
            trace!(event = cause.kind(), state = ?next, "drag state unchanged");
            return;
        }
        debug!(event = cause.kind(), from = ?self.state, to = ?next, "drag state transition");
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_starts_drag_and_samples() {
        let mut machine = DragMachine::new();
        assert_eq!(machine.apply(SliderInput::PointerDown { x: 12.0 }), Some(12.0));
        assert_eq!(machine.state(), DragState::Dragging);
        assert_eq!(machine.apply(SliderInput::PointerMove { x: 30.0 }), Some(30.0));
    }

    #[test]
    fn moves_are_ignored_while_idle() {
        let mut machine = DragMachine::new();
        assert_eq!(machine.apply(SliderInput::PointerMove { x: 30.0 }), None);
        assert_eq!(machine.apply(SliderInput::TouchMove { x: Some(30.0) }), None);
    }

    #[test]
    fn release_ends_drag() {
        let mut machine = DragMachine::new();
        machine.apply(SliderInput::TouchStart { x: Some(5.0) });
        machine.apply(SliderInput::TouchEnd);
        assert_eq!(machine.state(), DragState::Idle);
        assert_eq!(machine.apply(SliderInput::TouchMove { x: Some(8.0) }), None);
    }

    #[test]
    fn reentry_with_same_buttons_resumes() {
        let mut machine = DragMachine::new();
        machine.apply(SliderInput::PointerDown { x: 10.0 });
        machine.apply(SliderInput::PointerLeave { buttons: 1 });
        assert_eq!(machine.state(), DragState::Idle);
        assert_eq!(machine.apply(SliderInput::PointerEnter { buttons: 1 }), None);
        assert!(machine.is_dragging());
    }

    #[test]
    fn reentry_with_different_buttons_stays_idle() {
        let mut machine = DragMachine::new();
        machine.apply(SliderInput::PointerDown { x: 10.0 });
        machine.apply(SliderInput::PointerLeave { buttons: 1 });
        machine.apply(SliderInput::PointerEnter { buttons: 2 });
        assert!(!machine.is_dragging());
        machine.apply(SliderInput::PointerEnter { buttons: 0 });
        assert!(!machine.is_dragging());
    }

    #[test]
    fn press_started_elsewhere_does_not_drag_on_entry() {
        let mut machine = DragMachine::new();
        machine.apply(SliderInput::PointerLeave { buttons: 1 });
        machine.apply(SliderInput::PointerEnter { buttons: 1 });
        assert!(!machine.is_dragging());
    }

    #[test]
    fn touch_without_points_drags_but_samples_nothing() {
        let mut machine = DragMachine::new();
        assert_eq!(machine.apply(SliderInput::TouchStart { x: None }), None);
        assert!(machine.is_dragging());
        assert_eq!(machine.apply(SliderInput::TouchMove { x: None }), None);
        assert_eq!(machine.apply(SliderInput::TouchMove { x: Some(4.0) }), Some(4.0));
    }

    #[test]
    fn inputs_deserialize_from_tagged_json() {
        let input: SliderInput =
            serde_json::from_str(r#"{"type":"pointer_enter","buttons":1}"#).expect("valid input");
        assert_eq!(input, SliderInput::PointerEnter { buttons: 1 });
        let touch: SliderInput =
            serde_json::from_str(r#"{"type":"touch_start"}"#).expect("valid input");
        assert_eq!(touch, SliderInput::TouchStart { x: None });
    }
}
