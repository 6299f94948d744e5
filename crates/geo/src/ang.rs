use std::cmp::Ordering;

/// A number of degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Degrees(f64);

impl Degrees {
    #[inline]
    pub const fn new(degrees: f64) -> Self {
        Self(degrees)
    }

    #[inline]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }

    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Degrees {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // unicode character is the degrees symbol
        write!(f, "{}\u{00B0}", self.0)
    }
}
