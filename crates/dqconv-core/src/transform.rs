//! Rigid transforms as separate rotation and translation components.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::convert::{dq_to_quat_trans_with, quat_trans_to_udq, udq_to_quat_trans};
use crate::dual_quat::DualQuat;
use crate::error::Result;
use crate::options::ConversionOptions;

/// A rigid transform: rotation followed by translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidTransform {
    /// Rotation component as a unit quaternion.
    pub rotation: Quat,
    /// Translation component.
    pub translation: Vec3,
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self {
            rotation: Quat::IDENTITY,
            translation: Vec3::ZERO,
        }
    }
}

impl RigidTransform {
    /// Creates a transform from a rotation and a translation.
    #[must_use]
    pub fn new(rotation: Quat, translation: Vec3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Creates a new identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Creates a transform from a translation.
    #[must_use]
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    /// Creates a transform from a rotation.
    #[must_use]
    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            rotation,
            ..Default::default()
        }
    }

    /// Applies the transform to a point.
    #[must_use]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation * point + self.translation
    }

    /// Encodes this transform as a unit dual quaternion.
    #[must_use]
    pub fn to_dual_quat(&self) -> DualQuat {
        quat_trans_to_udq(self.rotation, self.translation)
    }

    /// Decodes a dual quaternion already known to be unit length.
    #[must_use]
    pub fn from_unit_dual_quat(dq: &DualQuat) -> Self {
        udq_to_quat_trans(dq).into()
    }

    /// Decodes a possibly unnormalized dual quaternion.
    pub fn try_from_dual_quat(dq: &DualQuat, options: &ConversionOptions) -> Result<Self> {
        dq_to_quat_trans_with(dq, options).map(Self::from)
    }
}

impl From<(Quat, Vec3)> for RigidTransform {
    fn from((rotation, translation): (Quat, Vec3)) -> Self {
        Self::new(rotation, translation)
    }
}

impl From<RigidTransform> for (Quat, Vec3) {
    fn from(transform: RigidTransform) -> Self {
        (transform.rotation, transform.translation)
    }
}

impl From<RigidTransform> for DualQuat {
    fn from(transform: RigidTransform) -> Self {
        transform.to_dual_quat()
    }
}
