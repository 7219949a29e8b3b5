//! Tolerances for approximate comparison of complex values.

use serde::{Deserialize, Serialize};

/// Absolute/relative tolerance pair.
///
/// Two components `a` and `b` match when `|a - b| <= abs` or
/// `|a - b| <= rel * max(|a|, |b|)`. Identical infinities match; NaN never does.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Absolute tolerance, used near zero.
    pub abs: f64,
    /// Relative tolerance, scaled by the larger operand.
    pub rel: f64,
}

impl Tolerance {
    /// Default for round-trip checks on well-conditioned values.
    pub const DEFAULT: Self = Self {
        abs: 1e-12,
        rel: 1e-12,
    };

    /// Bitwise equality for finite values.
    pub const EXACT: Self = Self { abs: 0.0, rel: 0.0 };

    pub const fn new(abs: f64, rel: f64) -> Self {
        Self { abs, rel }
    }

    /// Relative-only tolerance.
    pub const fn relative(rel: f64) -> Self {
        Self { abs: 0.0, rel }
    }

    /// Whether `a` and `b` are within tolerance.
    pub fn matches(&self, a: f64, b: f64) -> bool {
        if a.is_nan() || b.is_nan() {
            return false;
        }
        if a == b {
            return true;
        }
        let diff = libm::fabs(a - b);
        if !diff.is_finite() {
            return false;
        }
        diff <= self.abs || diff <= self.rel * libm::fmax(libm::fabs(a), libm::fabs(b))
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
