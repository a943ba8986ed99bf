//! Pointer coordinate to slider value mapping.

use serde::{Deserialize, Serialize};

/// Horizontal extent of the slider track in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackRect {
    /// Left edge.
    pub left: f64,
    /// Right edge.
    pub right: f64,
}

impl TrackRect {
    /// Track spanning `left..right`.
    #[must_use]
    pub const fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Track width; zero or negative for collapsed layouts.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// Position of `x` along `track` as a fraction of its width.
///
/// A collapsed track (or any non-finite ratio) resolves to the nearest bound:
/// `0` at or left of the left edge, `1` otherwise. Ratios from a valid track
/// are returned unclamped.
#[must_use]
pub fn pointer_ratio(x: f64, track: TrackRect) -> f64 {
    let width = track.width();
    let ratio = (x - track.left) / width;
    if width <= 0.0 || !ratio.is_finite() {
        return if x <= track.left { 0.0 } else { 1.0 };
    }
    ratio
}

/// Raw (unclamped) slider value under `x`, rounded half-up to an integer.
#[must_use]
pub fn pointer_value(x: f64, track: TrackRect, min: f64, max: f64) -> f64 {
    let ratio = pointer_ratio(x, track);
    round_half_up(ratio.mul_add(max - min, min))
}

fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
