//! Applying changed component props to long-lived models.
//!
//! Components keep their model across renders, so a prop is only pushed
//! into it when that prop itself changed. Otherwise toggling `disabled`
//! would undo a value the user just dragged to. Each function returns the
//! value the component reports through its change callback.

use oxygen_core::{Checkbox, Orientation, Slider, TabGroup};

/// Slider props that feed the model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderSnapshot {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
    /// Value set by the parent.
    pub value: f64,
    /// Input disabled.
    pub disabled: bool,
}

impl SliderSnapshot {
    /// Model for the first render.
    #[must_use]
    pub fn build(&self) -> Slider {
        let mut slider = Slider::new(self.min, self.max, self.value);
        slider.set_disabled(self.disabled);
        slider
    }
}

/// Push the slider props that moved between `previous` and `next`.
///
/// Returns the committed value when a range re-clamp or a new `value`
/// prop changed the model.
#[allow(clippy::float_cmp)]
pub fn sync_slider(
    slider: &mut Slider,
    previous: &SliderSnapshot,
    next: &SliderSnapshot,
) -> Option<f64> {
    let mut committed = None;
    if previous.min != next.min || previous.max != next.max {
        committed = slider.set_range(next.min, next.max).or(committed);
    }
    if previous.value != next.value {
        committed = slider.set_value(next.value).or(committed);
    }
    if previous.disabled != next.disabled {
        slider.set_disabled(next.disabled);
    }
    committed.map(|_| slider.value())
}

/// Tab strip props that feed the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabsSnapshot {
    /// Number of tabs.
    pub len: usize,
    /// Layout direction.
    pub orientation: Orientation,
    /// Index selected by the parent.
    pub selected: usize,
}

impl TabsSnapshot {
    /// Model for the first render.
    #[must_use]
    pub fn build(&self) -> TabGroup {
        let mut group = TabGroup::new(self.len);
        group.set_orientation(self.orientation);
        let _ = group.select(self.selected);
        group
    }
}

/// Push the tab props that moved. Returns the newly selected index when the
/// `selected` prop changed the selection.
pub fn sync_tabs(
    group: &mut TabGroup,
    previous: &TabsSnapshot,
    next: &TabsSnapshot,
) -> Option<usize> {
    if previous.len != next.len {
        group.set_len(next.len);
    }
    if previous.orientation != next.orientation {
        group.set_orientation(next.orientation);
    }
    if previous.selected == next.selected {
        return None;
    }
    group.select(next.selected)
}

/// Checkbox props that feed the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CheckboxSnapshot {
    /// Checked state set by the parent.
    pub checked: bool,
    /// Mixed state.
    pub indeterminate: bool,
    /// Input disabled.
    pub disabled: bool,
}

impl CheckboxSnapshot {
    /// Model for the first render.
    #[must_use]
    pub fn build(&self) -> Checkbox {
        Checkbox::new(self.checked, self.indeterminate, self.disabled)
    }
}

/// Push the checkbox props that moved. Returns the new checked state when
/// the `checked` prop changed it.
pub fn sync_checkbox(
    checkbox: &mut Checkbox,
    previous: &CheckboxSnapshot,
    next: &CheckboxSnapshot,
) -> Option<bool> {
    if previous.indeterminate != next.indeterminate {
        checkbox.set_indeterminate(next.indeterminate);
    }
    if previous.disabled != next.disabled {
        checkbox.set_disabled(next.disabled);
    }
    if previous.checked == next.checked {
        return None;
    }
    checkbox.set_checked(next.checked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxygen_core::{SliderInput, TrackRect};

    const TRACK: TrackRect = TrackRect::new(0.0, 100.0);

    fn slider_props(max: f64, value: f64, disabled: bool) -> SliderSnapshot {
        SliderSnapshot {
            min: 0.0,
            max,
            value,
            disabled,
        }
    }

    fn drag_to(slider: &mut Slider, x: f64) {
        slider.handle(SliderInput::PointerDown { x }, TRACK);
        slider.handle(SliderInput::PointerUp, TRACK);
    }

    #[test]
    fn shrinking_range_reports_reclamped_value() {
        let initial = slider_props(100.0, 20.0, false);
        let mut slider = initial.build();
        drag_to(&mut slider, 90.0);
        assert_eq!(slider.value(), 90.0);

        let next = slider_props(50.0, 20.0, false);
        assert_eq!(sync_slider(&mut slider, &initial, &next), Some(50.0));
        assert_eq!(slider.value(), 50.0);
    }

    #[test]
    fn unrelated_prop_keeps_dragged_value() {
        let initial = slider_props(100.0, 20.0, false);
        let mut slider = initial.build();
        drag_to(&mut slider, 70.0);

        let next = slider_props(100.0, 20.0, true);
        assert_eq!(sync_slider(&mut slider, &initial, &next), None);
        assert_eq!(slider.value(), 70.0);
        assert!(slider.disabled());
    }

    #[test]
    fn new_value_prop_is_applied_and_reported() {
        let initial = slider_props(100.0, 20.0, false);
        let mut slider = initial.build();
        let next = slider_props(100.0, 35.0, false);
        assert_eq!(sync_slider(&mut slider, &initial, &next), Some(35.0));
        let same = sync_slider(&mut slider, &next, &slider_props(100.0, 35.0, true));
        assert_eq!(same, None);
    }

    #[test]
    fn child_count_change_keeps_clicked_tab() {
        let initial = TabsSnapshot {
            len: 3,
            orientation: Orientation::Horizontal,
            selected: 0,
        };
        let mut group = initial.build();
        assert_eq!(group.select(2), Some(2));

        let next = TabsSnapshot { len: 4, ..initial };
        assert_eq!(sync_tabs(&mut group, &initial, &next), None);
        assert_eq!(group.selected(), 2);
        assert_eq!(group.len(), 4);

        let reselect = TabsSnapshot { selected: 1, ..next };
        assert_eq!(sync_tabs(&mut group, &next, &reselect), Some(1));
    }

    #[test]
    fn disabling_checkbox_keeps_clicked_state() {
        let initial = CheckboxSnapshot {
            checked: false,
            indeterminate: false,
            disabled: false,
        };
        let mut checkbox = initial.build();
        assert_eq!(checkbox.click(), Some(true));

        let next = CheckboxSnapshot {
            disabled: true,
            ..initial
        };
        assert_eq!(sync_checkbox(&mut checkbox, &initial, &next), None);
        assert!(checkbox.checked());
        assert!(checkbox.disabled());
    }
}
