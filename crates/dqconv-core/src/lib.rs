//! Core types and conversions for dqconv-rs.
//!
//! This crate provides:
//! - [`DualQuat`] and its `#[repr(C)]` mirror [`DualQuatRaw`]
//! - The three conversion primitives between (unit quaternion, translation)
//!   and dual quaternions, plus checked and array-based variants
//! - [`RigidTransform`] for the (rotation, translation) pair
//! - [`ConversionOptions`] and the [`DqError`] type

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod convert;
pub mod dual_quat;
pub mod error;
pub mod options;
pub mod transform;

pub use convert::{
    dq_to_quat_trans, dq_to_quat_trans_arrays, dq_to_quat_trans_with, quat_trans_to_udq,
    quat_trans_to_udq_arrays, try_quat_trans_to_udq, try_udq_to_quat_trans, udq_to_quat_trans,
    udq_to_quat_trans_arrays,
};
pub use dual_quat::{quat_from_wxyz, quat_to_wxyz, DualQuat, DualQuatRaw};
pub use error::{DqError, Result};
pub use options::{ConversionOptions, TranslationScaling};
pub use transform::RigidTransform;

// Re-export glam types for convenience
pub use glam::{Quat, Vec3};
