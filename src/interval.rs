//! Parameter ranges for ray intersection queries.

/// Interval [min, max] of ray parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl Interval {
    /// Everything from `min` up to positive infinity.
    pub const fn from_min(min: f64) -> Self {
        Self { min, max: f64::INFINITY }
    }

    /// Create a new interval with given min and max values
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Same lower bound, different upper bound.
    ///
    /// Used by the nearest-hit scan to shrink the search range.
    pub fn with_max(self, max: f64) -> Self {
        Self { min: self.min, max }
    }

    /// Check if the interval surrounds the given value (exclusive bounds)
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Clamp the given value to be within this interval's bounds
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surrounds_excludes_bounds() {
        let i = Interval::new(0.001, 10.0);
        assert!(i.surrounds(1.0));
        assert!(!i.surrounds(0.001));
        assert!(!i.surrounds(10.0));
        assert!(!i.surrounds(-1.0));
    }

    #[test]
    fn from_min_is_unbounded_above() {
        let i = Interval::from_min(0.5);
        assert!(i.surrounds(1e300));
        assert!(!i.surrounds(f64::INFINITY));
        assert_eq!(i.with_max(2.0), Interval::new(0.5, 2.0));
    }

    #[test]
    fn clamp_pins_to_bounds() {
        let i = Interval::new(0.0, 0.999);
        assert_eq!(i.clamp(1.7), 0.999);
        assert_eq!(i.clamp(-0.2), 0.0);
        assert_eq!(i.clamp(0.5), 0.5);
    }
}
