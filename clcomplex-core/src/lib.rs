//! Double-precision complex arithmetic for compute kernels.
//!
//! Every operation is a pure function on `Copy` values. Division uses
//! Smith's algorithm; magnitude and phase go through `hypot`/`atan2`.
//! The crate is `no_std`: float primitives come from `libm`.

#![no_std]

pub mod complex;
pub mod tolerance;

pub use complex::Complex;
pub use tolerance::Tolerance;
