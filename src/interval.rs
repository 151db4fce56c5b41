//! Interval arithmetic for ray parameter ranges.
//!
//! Hits are accepted on the half-open range [min, max): a shadow ray towards a
//! point light spans `t ∈ [ε, 1)`, so the light itself never occludes.

/// Half-open interval [min, max) for ray parameter checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Minimum accepted value (inclusive)
    pub min: f32,
    /// Upper bound (exclusive)
    pub max: f32,
}

impl Interval {
    /// Create a new interval with given min and max values
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Interval from `min` to infinity.
    pub fn from_min(min: f32) -> Self {
        Self {
            min,
            max: f32::INFINITY,
        }
    }

    /// Check if `t` falls in [min, max).
    ///
    /// NaN is never admitted.
    pub fn admits(&self, t: f32) -> bool {
        self.min <= t && t < self.max
    }

    /// Same lower bound, upper bound lowered to `max`.
    pub fn with_max(&self, max: f32) -> Self {
        Self { min: self.min, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_open_bounds() {
        let interval = Interval::new(1.0, 2.0);
        assert!(interval.admits(1.0));
        assert!(interval.admits(1.5));
        assert!(!interval.admits(2.0));
        assert!(!interval.admits(0.999));
        assert!(!interval.admits(f32::NAN));
    }

    #[test]
    fn test_from_min_is_unbounded() {
        let interval = Interval::from_min(0.001);
        assert!(interval.admits(1e30));
        assert!(!interval.admits(f32::INFINITY));
        assert!(!interval.admits(0.0));
    }

    #[test]
    fn test_with_max() {
        let shrunk = Interval::from_min(1.0).with_max(3.0);
        assert_eq!(shrunk, Interval::new(1.0, 3.0));
    }
}
