//! Interpolation curves over normalized time `t ∈ [0, 1]`.

#[cfg(test)]
#[path = "easing_test.rs"]
mod easing_test;

/// Shape of a tween's progress over time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Curve {
    /// Constant rate; used by skill bars and counters.
    #[default]
    Linear,
    /// Cubic ease-in-out; used by anchor scrolling.
    EaseInOutCubic,
}

impl Curve {
    /// Map normalized time to normalized progress. Input is clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOutCubic => ease_in_out_cubic(t),
        }
    }
}

/// `4t³` for the first half, `1 − (−2t + 2)³ / 2` for the second.
#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
