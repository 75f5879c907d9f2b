//! Conversions between (quaternion, translation) and dual quaternions.
//!
//! Quaternion components are written `q = (q0, q1, q2, q3) = (w, x, y, z)`,
//! translations `t = (t0, t1, t2)` and dual parts `d = (d0, d1, d2, d3)`.
//! The component ordering matters: the formulas below are the expanded forms of
//! `d = 0.5 * (0, t) * q` and `t = 2 * vec(d * conj(q))` under the Hamilton product.

use glam::{Quat, Vec3};

use crate::dual_quat::{quat_from_wxyz, quat_to_wxyz, DualQuat};
use crate::error::{DqError, Result};
use crate::options::{ConversionOptions, TranslationScaling};

/// Computes the dual part `0.5 * (0, t) * q`.
fn dual_part(q: [f32; 4], t: [f32; 3]) -> [f32; 4] {
    [
        -0.5 * (t[0] * q[1] + t[1] * q[2] + t[2] * q[3]),
        0.5 * (t[0] * q[0] + t[1] * q[3] - t[2] * q[2]),
        0.5 * (-t[0] * q[3] + t[1] * q[0] + t[2] * q[1]),
        0.5 * (t[0] * q[2] - t[1] * q[1] + t[2] * q[0]),
    ]
}

/// Computes `2 * vec(d * conj(q))`, the translation for a unit real part `q`.
fn translation_part(q: [f32; 4], d: [f32; 4]) -> [f32; 3] {
    [
        2.0 * (-d[0] * q[1] + d[1] * q[0] - d[2] * q[3] + d[3] * q[2]),
        2.0 * (-d[0] * q[2] + d[1] * q[3] + d[2] * q[0] - d[3] * q[1]),
        2.0 * (-d[0] * q[3] - d[1] * q[2] + d[2] * q[1] + d[3] * q[0]),
    ]
}

/// Converts a unit quaternion and a translation into a unit dual quaternion.
///
/// The real part is `rotation`, copied unchanged. `rotation` must be unit length;
/// this is not checked (see [`try_quat_trans_to_udq`]).
#[must_use]
pub fn quat_trans_to_udq(rotation: Quat, translation: Vec3) -> DualQuat {
    let dual = dual_part(quat_to_wxyz(rotation), translation.to_array());
    DualQuat::new(rotation, quat_from_wxyz(dual))
}

/// Converts a unit dual quaternion into its rotation and translation.
///
/// The real part is returned unchanged. If it is not unit length the translation
/// is wrong; this is not checked (see [`try_udq_to_quat_trans`]).
#[must_use]
pub fn udq_to_quat_trans(dq: &DualQuat) -> (Quat, Vec3) {
    let t = translation_part(quat_to_wxyz(dq.real), quat_to_wxyz(dq.dual));
    (dq.real, Vec3::from_array(t))
}

/// Converts a general dual quaternion into a unit rotation and a translation,
/// using [`ConversionOptions::default`].
///
/// # Errors
///
/// Returns [`DqError::DegenerateInput`] if the real part has (near) zero or
/// non-finite norm.
pub fn dq_to_quat_trans(dq: &DualQuat) -> Result<(Quat, Vec3)> {
    dq_to_quat_trans_with(dq, &ConversionOptions::default())
}

/// Converts a general dual quaternion into a unit rotation and a translation.
///
/// The rotation is the real part divided by its norm `len`. The translation is
/// formed from the original, un-normalized parts and then divided by `len`
/// ([`TranslationScaling::SingleLength`]) or `len²`
/// ([`TranslationScaling::SquaredLength`]).
///
/// # Errors
///
/// Returns [`DqError::InvalidOptions`] if `options` fail validation,
/// [`DqError::DegenerateInput`] if the real-part norm is not finite or not greater
/// than `options.degenerate_epsilon`, and [`DqError::NonFiniteResult`] if the
/// translation overflows.
pub fn dq_to_quat_trans_with(dq: &DualQuat, options: &ConversionOptions) -> Result<(Quat, Vec3)> {
    options.validate()?;
    let real = quat_to_wxyz(dq.real);
    let len = checked_real_norm(real, options.degenerate_epsilon)?;

    let divisor = match options.translation_scaling {
        TranslationScaling::SingleLength => len,
        TranslationScaling::SquaredLength => len * len,
    };
    let rotation = quat_from_wxyz(real.map(|c| c / len));
    let t = translation_part(real, quat_to_wxyz(dq.dual)).map(|c| c / divisor);
    let translation = Vec3::from_array(t);
    if !translation.is_finite() {
        log::debug!("translation overflowed for real-part norm {len}");
        return Err(DqError::NonFiniteResult);
    }
    Ok((rotation, translation))
}

/// Euclidean norm of a wxyz real part, rejected when it is not finite or not
/// greater than `epsilon`.
pub(crate) fn checked_real_norm(real: [f32; 4], epsilon: f32) -> Result<f32> {
    let len = real.iter().map(|c| c * c).sum::<f32>().sqrt();
    if !len.is_finite() || len <= epsilon {
        log::debug!("rejecting dual quaternion with real-part norm {len}");
        return Err(DqError::DegenerateInput { norm: len });
    }
    Ok(len)
}

fn check_unit(q: Quat, tolerance: f32) -> Result<()> {
    let norm = q.length();
    if (norm - 1.0).abs() > tolerance {
        log::debug!("expected unit quaternion, norm is {norm}");
        return Err(DqError::NotUnitQuaternion { norm });
    }
    Ok(())
}

/// Like [`quat_trans_to_udq`], but rejects a non-unit rotation when
/// `options.validate_unit_inputs` is set.
///
/// # Errors
///
/// Returns [`DqError::NotUnitQuaternion`] if validation is enabled and the rotation's
/// norm differs from one by more than `options.unit_tolerance`.
pub fn try_quat_trans_to_udq(
    rotation: Quat,
    translation: Vec3,
    options: &ConversionOptions,
) -> Result<DualQuat> {
    options.validate()?;
    if options.validate_unit_inputs {
        check_unit(rotation, options.unit_tolerance)?;
    }
    Ok(quat_trans_to_udq(rotation, translation))
}

/// Like [`udq_to_quat_trans`], but checks that `dq` is a unit dual quaternion when
/// `options.validate_unit_inputs` is set.
///
/// # Errors
///
/// With validation enabled, returns [`DqError::NotUnitQuaternion`] for a non-unit real
/// part and [`DqError::NotOrthogonal`] if `real . dual` exceeds `options.unit_tolerance`.
pub fn try_udq_to_quat_trans(dq: &DualQuat, options: &ConversionOptions) -> Result<(Quat, Vec3)> {
    options.validate()?;
    if options.validate_unit_inputs {
        check_unit(dq.real, options.unit_tolerance)?;
        let dot = dq.orthogonality();
        if dot.abs() > options.unit_tolerance {
            log::debug!("dual part not orthogonal to real part: real . dual = {dot}");
            return Err(DqError::NotOrthogonal { dot });
        }
    }
    Ok(udq_to_quat_trans(dq))
}

/// [`quat_trans_to_udq`] on wxyz arrays; returns `[real, dual]`.
#[must_use]
pub fn quat_trans_to_udq_arrays(quaternion: [f32; 4], translation: [f32; 3]) -> [[f32; 4]; 2] {
    [quaternion, dual_part(quaternion, translation)]
}

/// [`udq_to_quat_trans`] on a `[real, dual]` pair of wxyz arrays.
#[must_use]
pub fn udq_to_quat_trans_arrays(dq: [[f32; 4]; 2]) -> ([f32; 4], [f32; 3]) {
    (dq[0], translation_part(dq[0], dq[1]))
}

/// [`dq_to_quat_trans`] on a `[real, dual]` pair of wxyz arrays.
///
/// # Errors
///
/// Returns [`DqError::DegenerateInput`] if the real part has (near) zero norm.
pub fn dq_to_quat_trans_arrays(dq: [[f32; 4]; 2]) -> Result<([f32; 4], [f32; 3])> {
    let (rotation, translation) = dq_to_quat_trans(&DualQuat::from_arrays(dq))?;
    Ok((quat_to_wxyz(rotation), translation.to_array()))
}
