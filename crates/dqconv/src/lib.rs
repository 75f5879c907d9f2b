//! dqconv-rs: conversions between (unit quaternion, translation) pairs and unit dual quaternions.
//!
//! A unit dual quaternion `real + ε·dual` encodes a rigid motion: the real part is
//! the rotation and the dual part is `0.5 * t * real`. Dual quaternions are the
//! usual per-bone representation for dual quaternion skinning.
//!
//! # Quick Start
//!
//! ```
//! use dqconv_rs::*;
//!
//! fn main() -> Result<()> {
//!     let rotation = Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);
//!     let translation = Vec3::new(2.0, 3.0, 4.0);
//!
//!     let dq = quat_trans_to_udq(rotation, translation);
//!     let (q, t) = udq_to_quat_trans(&dq);
//!     assert!((t - translation).length() < 1e-5);
//!
//!     // Blended or scaled dual quaternions go through the normalizing conversion.
//!     let (q2, _) = dq_to_quat_trans(&(dq * 3.0))?;
//!     assert!((q2 - q).length() < 1e-5);
//!     Ok(())
//! }
//! ```
//!
//! # Component order
//!
//! Array-based APIs ([`quat_trans_to_udq_arrays`], [`DualQuat::from_arrays`],
//! [`DualQuatRaw`]) use `(w, x, y, z)` order for every quaternion, unlike glam's
//! internal `xyzw` storage.
//!
//! # Preconditions
//!
//! [`quat_trans_to_udq`] and [`udq_to_quat_trans`] trust the caller to pass unit
//! inputs. Use [`try_quat_trans_to_udq`] / [`try_udq_to_quat_trans`] with
//! [`ConversionOptions::with_validation`] to have them checked.
//! [`dq_to_quat_trans`] always rejects a zero real part with
//! [`DqError::DegenerateInput`].

pub use dqconv_core::{
    convert::{
        dq_to_quat_trans, dq_to_quat_trans_arrays, dq_to_quat_trans_with, quat_trans_to_udq,
        quat_trans_to_udq_arrays, try_quat_trans_to_udq, try_udq_to_quat_trans,
        udq_to_quat_trans, udq_to_quat_trans_arrays,
    },
    dual_quat::{quat_from_wxyz, quat_to_wxyz, DualQuat, DualQuatRaw},
    error::{DqError, Result},
    options::{ConversionOptions, TranslationScaling},
    transform::RigidTransform,
};

pub use glam::{Quat, Vec3};
