//! Slider core: value model, pointer tracker, drag state machine and change
//! notifications.
//!
//! # Design
//! - Input events go to [`DragMachine`], which decides whether to sample.
//! - Samples are mapped through [`tracker::pointer_value`], then clamped and
//!   stored by [`ValueModel`].
//! - The emitter fires only when the committed value actually changes,
//!   including changes forced by a range update.

pub mod drag;
pub mod tracker;
pub mod value;

pub use drag::{DragMachine, DragState, SliderInput};
pub use tracker::{TrackRect, pointer_ratio, pointer_value};
pub use value::{ValueModel, clamp_value};

use tracing::debug;

use crate::emitter::{ChangeEmitter, SubscriptionId};
use crate::reflect::{Attributes, format_number};

/// Horizontal slider with pointer and touch dragging.
#[derive(Debug, Default)]
pub struct Slider {
    model: ValueModel,
    drag: DragMachine,
    disabled: bool,
    changes: ChangeEmitter<f64>,
}

impl Slider {
    /// Slider over `[min, max]` starting at `value` (clamped).
    #[must_use]
    pub fn new(min: f64, max: f64, value: f64) -> Self {
        Self {
            model: ValueModel::new(min, max, value),
            ..Self::default()
        }
    }

    /// Committed value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.model.value()
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.model.min()
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.model.max()
    }

    /// Whether input is currently ignored.
    #[must_use]
    pub const fn disabled(&self) -> bool {
        self.disabled
    }

    /// Current drag state.
    #[must_use]
    pub const fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    /// Register a listener for committed value changes.
    pub fn subscribe(&mut self, listener: impl FnMut(&f64) + 'static) -> SubscriptionId {
        self.changes.subscribe(listener)
    }

    /// Remove a change listener.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.changes.unsubscribe(id)
    }

    /// Feed one input event measured against `track`.
    ///
    /// Returns the new value when the event committed a change.
    pub fn handle(&mut self, input: SliderInput, track: TrackRect) -> Option<f64> {
        if self.disabled {
            return None;
        }
        let x = self.drag.apply(input)?;
        let raw = pointer_value(x, track, self.model.min(), self.model.max());
        self.set_value(raw)
    }

    /// Clamp and store `value`, notifying listeners on change.
    pub fn set_value(&mut self, value: f64) -> Option<f64> {
        let committed = self.model.set_value(value);
        self.publish(committed)
    }

    /// Replace the range, re-clamping the value.
    pub fn set_range(&mut self, min: f64, max: f64) -> Option<f64> {
        let committed = self.model.set_range(min, max);
        self.publish(committed)
    }

    /// Replace the lower bound, re-clamping the value.
    pub fn set_min(&mut self, min: f64) -> Option<f64> {
        self.set_range(min, self.model.max())
    }

    /// Replace the upper bound, re-clamping the value.
    pub fn set_max(&mut self, max: f64) -> Option<f64> {
        self.set_range(self.model.min(), max)
    }

    /// Enable or disable input. Disabling abandons any drag in progress.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.drag.reset();
        }
    }

    /// Thumb position along the track in `0..=1`; `0` for a zero-span range.
    #[must_use]
    pub fn thumb_ratio(&self) -> f64 {
        let span = self.model.max() - self.model.min();
        if span <= 0.0 {
            return 0.0;
        }
        ((self.model.value() - self.model.min()) / span).clamp(0.0, 1.0)
    }

    /// Host attributes reflecting the current state.
    #[must_use]
    pub fn attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        attrs
            .set("role", "slider")
            .set("tabindex", "0")
            .set("aria-valuemin", format_number(self.model.min()))
            .set("aria-valuemax", format_number(self.model.max()))
            .set("aria-valuenow", format_number(self.model.value()))
            .flag("disabled", self.disabled)
            .aria_disabled(self.disabled);
        attrs
    }

    fn publish(&mut self, committed: Option<f64>) -> Option<f64> {
        let value = committed?;
        debug!(value, "slider value committed");
        self.changes.emit(&value);
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const TRACK: TrackRect = TrackRect::new(0.0, 100.0);

    fn recorded(slider: &mut Slider) -> Rc<RefCell<Vec<f64>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        slider.subscribe(move |value| sink.borrow_mut().push(*value));
        seen
    }

    #[test]
    fn press_positions_map_to_values() {
        for (x, expected) in [(50.0, 50.0), (0.0, 0.0), (100.0, 100.0), (150.0, 100.0)] {
            let mut slider = Slider::new(0.0, 100.0, 20.0);
            slider.handle(SliderInput::PointerDown { x }, TRACK);
            assert_eq!(slider.value(), expected, "x = {x}");
        }
    }

    #[test]
    fn repeated_value_notifies_once() {
        let mut slider = Slider::default();
        let seen = recorded(&mut slider);
        assert_eq!(slider.set_value(40.0), Some(40.0));
        assert_eq!(slider.set_value(40.0), None);
        assert_eq!(*seen.borrow(), vec![40.0]);
    }

    #[test]
    fn shrinking_range_notifies() {
        let mut slider = Slider::new(0.0, 100.0, 90.0);
        let seen = recorded(&mut slider);
        assert_eq!(slider.set_max(50.0), Some(50.0));
        assert_eq!(*seen.borrow(), vec![50.0]);
    }

    #[test]
    fn disabled_slider_ignores_input_and_drops_drag() {
        let mut slider = Slider::default();
        slider.handle(SliderInput::PointerDown { x: 10.0 }, TRACK);
        slider.set_disabled(true);
        assert_eq!(slider.drag_state(), DragState::Idle);
        assert_eq!(slider.handle(SliderInput::PointerDown { x: 70.0 }, TRACK), None);
        assert_eq!(slider.value(), 10.0);
        assert_eq!(slider.attributes().get("aria-disabled"), Some("true"));
    }

    #[test]
    fn thumb_ratio_tracks_value() {
        let mut slider = Slider::new(-50.0, 50.0, 0.0);
        assert_eq!(slider.thumb_ratio(), 0.5);
        slider.set_range(5.0, 5.0);
        assert_eq!(slider.thumb_ratio(), 0.0);
    }

    #[test]
    fn attributes_reflect_range_and_value() {
        let slider = Slider::new(0.0, 100.0, 20.0);
        let attrs = slider.attributes();
        assert_eq!(attrs.get("role"), Some("slider"));
        assert_eq!(attrs.get("aria-valuemin"), Some("0"));
        assert_eq!(attrs.get("aria-valuemax"), Some("100"));
        assert_eq!(attrs.get("aria-valuenow"), Some("20"));
        assert!(!attrs.contains("aria-disabled"));
    }
}
