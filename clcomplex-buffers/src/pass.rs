//! Elementwise passes over complex buffers.
//!
//! Each pass does what one kernel work item does, for every index: read the
//! i-th operands, apply one operation, write `out[i]`. Used as the CPU
//! rendition to check device output against.

use clcomplex_core::Complex;

use crate::error::BufferError;

/// Two-operand complex operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    /// Smith division
    Div,
}

impl BinaryOp {
    /// Returns all operations.
    pub fn all() -> [BinaryOp; 4] {
        [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div]
    }

    #[inline]
    pub fn apply(self, z: Complex, w: Complex) -> Complex {
        match self {
            BinaryOp::Add => z.add(w),
            BinaryOp::Sub => z.sub(w),
            BinaryOp::Mul => z.mul(w),
            BinaryOp::Div => z.div(w),
        }
    }
}

/// One-operand operations producing a complex value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Conjugate,
    /// Zero maps to the infinity sentinel.
    Reciprocal,
    Negate,
}

impl UnaryOp {
    /// Returns all operations.
    pub fn all() -> [UnaryOp; 3] {
        [UnaryOp::Conjugate, UnaryOp::Reciprocal, UnaryOp::Negate]
    }

    #[inline]
    pub fn apply(self, z: Complex) -> Complex {
        match self {
            UnaryOp::Conjugate => z.conjugate(),
            UnaryOp::Reciprocal => z.reciprocal(),
            UnaryOp::Negate => -z,
        }
    }
}

/// One-operand operations producing a real value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarOp {
    Magnitude,
    Phase,
}

impl ScalarOp {
    #[inline]
    pub fn apply(self, z: Complex) -> f64 {
        match self {
            ScalarOp::Magnitude => z.magnitude(),
            ScalarOp::Phase => z.phase(),
        }
    }
}

fn check_len(expected: usize, found: usize) -> Result<(), BufferError> {
    if expected != found {
        log::warn!("Rejected pass: expected {expected} elements, found {found}");
        return Err(BufferError::LengthMismatch { expected, found });
    }
    Ok(())
}

/// `out[i] = op(lhs[i], rhs[i])`. All three slices must be the same length.
pub fn apply_binary(
    op: BinaryOp,
    lhs: &[Complex],
    rhs: &[Complex],
    out: &mut [Complex],
) -> Result<(), BufferError> {
    check_len(lhs.len(), rhs.len())?;
    check_len(lhs.len(), out.len())?;

    for ((o, &z), &w) in out.iter_mut().zip(lhs).zip(rhs) {
        *o = op.apply(z, w);
    }
    log::debug!("{op:?} pass over {} elements", out.len());
    Ok(())
}

/// `acc[i] = op(acc[i], rhs[i])`.
pub fn apply_binary_in_place(
    op: BinaryOp,
    acc: &mut [Complex],
    rhs: &[Complex],
) -> Result<(), BufferError> {
    check_len(acc.len(), rhs.len())?;

    for (a, &w) in acc.iter_mut().zip(rhs) {
        *a = op.apply(*a, w);
    }
    log::debug!("{op:?} in-place pass over {} elements", acc.len());
    Ok(())
}

/// `out[i] = op(input[i])`.
pub fn apply_unary(
    op: UnaryOp,
    input: &[Complex],
    out: &mut [Complex],
) -> Result<(), BufferError> {
    check_len(input.len(), out.len())?;

    for (o, &z) in out.iter_mut().zip(input) {
        *o = op.apply(z);
    }
    log::debug!("{op:?} pass over {} elements", out.len());
    Ok(())
}

/// `out[i] = op(input[i])` for magnitude/phase.
pub fn apply_scalar(op: ScalarOp, input: &[Complex], out: &mut [f64]) -> Result<(), BufferError> {
    check_len(input.len(), out.len())?;

    for (o, &z) in out.iter_mut().zip(input) {
        *o = op.apply(z);
    }
    log::debug!("{op:?} pass over {} elements", out.len());
    Ok(())
}

/// `out[i] = from_polar(magnitudes[i], phases[i])`.
pub fn from_polar_into(
    magnitudes: &[f64],
    phases: &[f64],
    out: &mut [Complex],
) -> Result<(), BufferError> {
    check_len(magnitudes.len(), phases.len())?;
    check_len(magnitudes.len(), out.len())?;

    for ((o, &m), &p) in out.iter_mut().zip(magnitudes).zip(phases) {
        *o = Complex::from_polar(m, p);
    }
    log::debug!("Polar pass over {} elements", out.len());
    Ok(())
}
