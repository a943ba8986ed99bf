//! Numeric value clamped to a `[min, max]` range.

/// Clamp with plain numeric min/max; an inverted range yields `min`.
#[must_use]
pub fn clamp_value(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

/// Stored slider value plus its bounds.
///
/// Mutators return the newly committed value when it differs from the
/// previous one, which is the signal the owner uses to fire notifications.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueModel {
    min: f64,
    max: f64,
    value: f64,
}

impl ValueModel {
    /// Build a model, clamping `value` into the range.
    #[must_use]
    pub fn new(min: f64, max: f64, value: f64) -> Self {
        let value = if value.is_nan() { min } else { value };
        Self {
            min,
            max,
            value: clamp_value(value, min, max),
        }
    }

    /// Current committed value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Clamp and store `value`. `NaN` is ignored.
    pub fn set_value(&mut self, value: f64) -> Option<f64> {
        if value.is_nan() {
            return None;
        }
        self.commit(clamp_value(value, self.min, self.max))
    }

    /// Replace the lower bound and re-clamp.
    pub fn set_min(&mut self, min: f64) -> Option<f64> {
        self.set_range(min, self.max)
    }

    /// Replace the upper bound and re-clamp.
    pub fn set_max(&mut self, max: f64) -> Option<f64> {
        self.set_range(self.min, max)
    }

    /// Replace both bounds and re-clamp. `NaN` bounds are ignored.
    pub fn set_range(&mut self, min: f64, max: f64) -> Option<f64> {
        if min.is_nan() || max.is_nan() {
            return None;
        }
        self.min = min;
        self.max = max;
        self.commit(clamp_value(self.value, min, max))
    }

    #[allow(clippy::float_cmp)]
    fn commit(&mut self, next: f64) -> Option<f64> {
        if next == self.value {
            return None;
        }
        self.value = next;
        Some(next)
    }
}

impl Default for ValueModel {
    fn default() -> Self {
        Self::new(0.0, 100.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_value_matches_min_max_formula() {
        let mut model = ValueModel::default();
        for candidate in [-50.0, 0.0, 12.5, 100.0, 250.0, f64::INFINITY, f64::NEG_INFINITY] {
            model.set_value(candidate);
            assert_eq!(model.value(), 0f64.max(100f64.min(candidate)));
        }
    }

    #[test]
    fn unchanged_value_reports_nothing() {
        let mut model = ValueModel::default();
        assert_eq!(model.set_value(300.0), Some(100.0));
        assert_eq!(model.set_value(150.0), None);
        assert_eq!(model.set_value(100.0), None);
    }

    #[test]
    fn shrinking_max_reclamps_value() {
        let mut model = ValueModel::new(0.0, 100.0, 90.0);
        assert_eq!(model.set_max(50.0), Some(50.0));
        assert_eq!(model.value(), 50.0);
        assert_eq!(model.set_max(200.0), None);
    }

    #[test]
    fn nan_is_ignored() {
        let mut model = ValueModel::new(0.0, 10.0, 5.0);
        assert_eq!(model.set_value(f64::NAN), None);
        assert_eq!(model.set_range(f64::NAN, 3.0), None);
        assert_eq!(model.value(), 5.0);
        assert_eq!(ValueModel::new(2.0, 10.0, f64::NAN).value(), 2.0);
    }

    #[test]
    fn inverted_range_collapses_to_min() {
        let model = ValueModel::new(10.0, 0.0, 5.0);
        assert_eq!(model.value(), 10.0);
    }
}
