//! Error types for dqconv-rs.

use thiserror::Error;

/// The main error type for dqconv-rs operations.
#[derive(Error, Debug)]
pub enum DqError {
    /// The real part of a dual quaternion is (numerically) zero or not finite, so it cannot be normalized.
    #[error("degenerate dual quaternion: real part norm {norm} is zero or not finite")]
    DegenerateInput { norm: f32 },

    /// The conversion overflowed to a non-finite value.
    #[error("conversion produced a non-finite result")]
    NonFiniteResult,

    /// A quaternion expected to be unit length is not.
    #[error("expected a unit quaternion, got norm {norm}")]
    NotUnitQuaternion { norm: f32 },

    /// The dual part is not orthogonal to the real part.
    #[error("dual part is not orthogonal to real part (real . dual = {dot})")]
    NotOrthogonal { dot: f32 },

    /// Conversion options failed validation.
    #[error("invalid conversion options: {0}")]
    InvalidOptions(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for dqconv-rs operations.
pub type Result<T> = std::result::Result<T, DqError>;
