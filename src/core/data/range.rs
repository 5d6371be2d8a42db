/// Bounds of one axis of the complex plane.
///
/// No ordering is enforced. A range with `lower > upper` is legal and simply
/// mirrors the axis it is mapped onto.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Range {
    pub lower: f64,
    pub upper: f64,
}

impl Range {
    #[must_use]
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Signed extent, `upper - lower`. Negative for an inverted range.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }

    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.lower > self.upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span() {
        assert_eq!(Range::new(-2.25, 1.0).span(), 3.25);
        assert_eq!(Range::new(1.0, -1.0).span(), -2.0);
    }

    #[test]
    fn test_inverted_range_is_accepted() {
        let range = Range::new(1.3, -1.3);

        assert!(range.is_inverted());
        assert!(!Range::new(-1.3, 1.3).is_inverted());
        assert!(!Range::new(0.0, 0.0).is_inverted());
    }
}
