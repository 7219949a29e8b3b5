//! Buffer error types.

use bytemuck::PodCastError;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    #[error("Buffer cast failed: {0:?}")]
    Cast(PodCastError),

    #[error("Interleaved buffer has odd length {0}")]
    OddInterleavedLength(usize),

    #[error("Buffer length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}

impl From<PodCastError> for BufferError {
    fn from(e: PodCastError) -> Self {
        BufferError::Cast(e)
    }
}
