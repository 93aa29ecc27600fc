//! Wrap-around offset math.
//!
//! The offset `y` is the distance the strip has been translated upward.  After
//! every update it is folded back into `[0, period)`, however large or
//! negative the delta, in a single step.

/// Fold `y` into `[0, period)`.
///
/// `period` must be positive.
pub fn wrap(y: f64, period: f64) -> f64 {
    if (0.0..period).contains(&y) {
        return y;
    }
    let wrapped = y.rem_euclid(period);
    // rem_euclid can round up to `period` for tiny negative inputs.
    if wrapped >= period {
        0.0
    } else {
        wrapped
    }
}

/// The single mutable scalar driving the loop.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollOffset {
    y: f64,
}

impl ScrollOffset {
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Vertical translation applied to the strip (`translateY(-y)`).
    pub fn translate_y(&self) -> f64 {
        -self.y
    }

    pub fn reset(&mut self) {
        self.y = 0.0;
    }

    /// Add `delta` and wrap.  Returns `false` (and does nothing) when the
    /// period is not positive or `delta` is not finite.
    pub fn apply(&mut self, delta: f64, period: f64) -> bool {
        if period.is_nan() || period <= 0.0 || !delta.is_finite() {
            return false;
        }
        self.y = wrap(self.y + delta, period);
        true
    }
}
