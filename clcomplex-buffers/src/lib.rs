//! Packed complex buffers: zero-copy views and elementwise passes.

mod buffers;
mod error;
mod pass;

pub use buffers::{
    as_bytes, as_bytes_mut, as_complex, as_complex_mut, from_interleaved, from_interleaved_mut,
    to_interleaved, COMPLEX_STRIDE,
};
pub use clcomplex_core::Complex;
pub use error::BufferError;
pub use pass::{
    apply_binary, apply_binary_in_place, apply_scalar, apply_unary, from_polar_into, BinaryOp,
    ScalarOp, UnaryOp,
};
