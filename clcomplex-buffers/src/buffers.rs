//! Zero-copy views over packed complex buffers.
//!
//! Kernels read and write arrays of `(re, im)` f64 pairs with no padding.
//! These helpers reinterpret such arrays as `[Complex]` and back without
//! copying, rejecting buffers whose size or alignment does not fit.

use clcomplex_core::Complex;

use crate::error::BufferError;

/// Bytes per packed complex value.
pub const COMPLEX_STRIDE: usize = std::mem::size_of::<Complex>();

/// View a raw byte buffer as complex values.
///
/// Fails if `bytes.len()` is not a multiple of [`COMPLEX_STRIDE`] or the
/// buffer is not 8-byte aligned. An empty buffer is an empty view whatever
/// its (dangling) pointer.
pub fn as_complex(bytes: &[u8]) -> Result<&[Complex], BufferError> {
    if bytes.is_empty() {
        log::debug!("Viewing 0 bytes as 0 complex values");
        return Ok(&[]);
    }
    let values: &[Complex] = bytemuck::try_cast_slice(bytes).map_err(|e| {
        log::warn!("Rejected {} byte buffer: {e:?}", bytes.len());
        BufferError::from(e)
    })?;
    log::debug!("Viewing {} bytes as {} complex values", bytes.len(), values.len());
    Ok(values)
}

/// Mutable variant of [`as_complex`].
pub fn as_complex_mut(bytes: &mut [u8]) -> Result<&mut [Complex], BufferError> {
    let len = bytes.len();
    if len == 0 {
        log::debug!("Viewing 0 bytes as 0 complex values");
        return Ok(&mut []);
    }
    let values: &mut [Complex] = bytemuck::try_cast_slice_mut(bytes).map_err(|e| {
        log::warn!("Rejected {len} byte buffer: {e:?}");
        BufferError::from(e)
    })?;
    log::debug!("Viewing {len} bytes as {} complex values", values.len());
    Ok(values)
}

/// Raw bytes of a complex slice, in kernel layout.
pub fn as_bytes(values: &[Complex]) -> &[u8] {
    bytemuck::cast_slice(values)
}

/// Mutable raw bytes of a complex slice.
pub fn as_bytes_mut(values: &mut [Complex]) -> &mut [u8] {
    bytemuck::cast_slice_mut(values)
}

/// View an interleaved `re, im, re, im, ...` array as complex values.
pub fn from_interleaved(values: &[f64]) -> Result<&[Complex], BufferError> {
    if values.len() % 2 != 0 {
        log::warn!("Rejected interleaved buffer of odd length {}", values.len());
        return Err(BufferError::OddInterleavedLength(values.len()));
    }
    let complex: &[Complex] = bytemuck::try_cast_slice(values)?;
    log::debug!("Viewing {} f64 as {} complex values", values.len(), complex.len());
    Ok(complex)
}

/// Mutable variant of [`from_interleaved`].
pub fn from_interleaved_mut(values: &mut [f64]) -> Result<&mut [Complex], BufferError> {
    if values.len() % 2 != 0 {
        log::warn!("Rejected interleaved buffer of odd length {}", values.len());
        return Err(BufferError::OddInterleavedLength(values.len()));
    }
    let len = values.len();
    let complex: &mut [Complex] = bytemuck::try_cast_slice_mut(values)?;
    log::debug!("Viewing {len} f64 as {} complex values", complex.len());
    Ok(complex)
}

/// Interleaved `re, im` view of a complex slice.
pub fn to_interleaved(values: &[Complex]) -> &[f64] {
    bytemuck::cast_slice(values)
}
