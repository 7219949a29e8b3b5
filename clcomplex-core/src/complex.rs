//! Double-precision complex value for compute kernels.
//!
//! Layout is two packed f64 (re at offset 0, im at offset 8), so slices of
//! `Complex` can be shared with kernels that read `(re, im)` pairs directly.

use core::ops::{Add, Div, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use crate::Tolerance;

/// Complex number with f64 components.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

const _: () = assert!(core::mem::size_of::<Complex>() == 16);
const _: () = assert!(core::mem::align_of::<Complex>() == 8);

impl Complex {
    /// Zero constant.
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    /// One constant.
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };

    /// Imaginary unit.
    pub const I: Self = Self { re: 0.0, im: 1.0 };

    /// (+inf, +inf). Returned by [`Complex::reciprocal`] for zero.
    pub const INFINITY: Self = Self {
        re: f64::INFINITY,
        im: f64::INFINITY,
    };

    /// (NaN, NaN).
    pub const NAN: Self = Self {
        re: f64::NAN,
        im: f64::NAN,
    };

    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Construct from polar form: (m cos φ, m sin φ).
    /// A negative magnitude gives the point rotated by π.
    #[inline]
    pub fn from_polar(magnitude: f64, phase: f64) -> Self {
        Self {
            re: magnitude * libm::cos(phase),
            im: magnitude * libm::sin(phase),
        }
    }

    /// Add two complex numbers.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }

    /// Subtract other from self.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn sub(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }

    /// Multiply two complex numbers: (a + bi)(c + di) = (ac - bd) + (ad + cb)i
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + other.re * self.im,
        }
    }

    /// Complex conjugate: (re, -im).
    #[inline]
    pub fn conjugate(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Divide self by other using Smith's algorithm.
    ///
    /// The ratio of the smaller to the larger divisor component is formed
    /// first, so `|c|` and `|d|` may differ by hundreds of orders of
    /// magnitude without the denominator overflowing. Ties (`|d| == |c|`)
    /// take the second branch. Division by zero is not guarded and follows
    /// IEEE-754 through that branch.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn div(self, other: Self) -> Self {
        let (a, b) = (self.re, self.im);
        let (c, d) = (other.re, other.im);

        if libm::fabs(d) < libm::fabs(c) {
            let u = d / c;
            let denom = c + d * u;
            Self {
                re: (a + b * u) / denom,
                im: (b - a * u) / denom,
            }
        } else {
            let u = c / d;
            let denom = d + c * u;
            Self {
                re: (b + a * u) / denom,
                im: (b * u - a) / denom,
            }
        }
    }

    /// Reciprocal 1/z.
    ///
    /// Exact zero (either sign) maps to [`Complex::INFINITY`]. Everything
    /// else uses the unscaled conj(z)/|z|², which overflows once |z|²
    /// leaves the f64 range.
    // TODO: scale like `div` once kernels no longer need reciprocals
    // bit-identical to the OpenCL build.
    #[inline]
    pub fn reciprocal(self) -> Self {
        if self.re == 0.0 && self.im == 0.0 {
            return Self::INFINITY;
        }
        let u = self.norm_sqr();
        Self {
            re: self.re / u,
            im: -self.im / u,
        }
    }

    /// Magnitude |z| via hypot (no intermediate overflow).
    #[inline]
    pub fn magnitude(self) -> f64 {
        libm::hypot(self.re, self.im)
    }

    /// Argument in (-π, π], with atan2 sign conventions (phase of zero is 0).
    #[inline]
    pub fn phase(self) -> f64 {
        libm::atan2(self.im, self.re)
    }

    /// Squared magnitude: |z|² = re² + im² (unscaled).
    #[inline]
    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// True if either component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// True if a component is infinite and neither is NaN.
    #[inline]
    pub fn is_infinite(self) -> bool {
        !self.is_nan() && (self.re.is_infinite() || self.im.is_infinite())
    }

    /// True if both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Componentwise approximate equality. NaN never matches.
    pub fn approx_eq(self, other: Self, tol: Tolerance) -> bool {
        tol.matches(self.re, other.re) && tol.matches(self.im, other.im)
    }
}

impl From<f64> for Complex {
    #[inline]
    fn from(re: f64) -> Self {
        Self { re, im: 0.0 }
    }
}

impl From<(f64, f64)> for Complex {
    #[inline]
    fn from((re, im): (f64, f64)) -> Self {
        Self { re, im }
    }
}

impl From<Complex> for (f64, f64) {
    #[inline]
    fn from(z: Complex) -> Self {
        (z.re, z.im)
    }
}

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Complex::add(self, rhs)
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Complex::sub(self, rhs)
    }
}

impl Mul for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Complex::mul(self, rhs)
    }
}

impl Div for Complex {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Complex::div(self, rhs)
    }
}

impl Neg for Complex {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}
