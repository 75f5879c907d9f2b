//! Dual quaternion value type.
//!
//! All array-based accessors use `(w, x, y, z)` component order, matching the
//! `float dq[2][4]` convention where row 0 is the real (non-dual) part and row 1
//! the dual part. `glam::Quat` stores its components as `xyzw`, so conversions
//! between the two orders go through [`quat_from_wxyz`] and [`quat_to_wxyz`].

use std::fmt;
use std::ops::Mul;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::convert::{checked_real_norm, quat_trans_to_udq, udq_to_quat_trans};
use crate::error::Result;
use crate::options::ConversionOptions;

/// Builds a quaternion from `(w, x, y, z)` components.
#[must_use]
pub fn quat_from_wxyz(wxyz: [f32; 4]) -> Quat {
    let [w, x, y, z] = wxyz;
    Quat::from_xyzw(x, y, z, w)
}

/// Returns the components of a quaternion in `(w, x, y, z)` order.
#[must_use]
pub fn quat_to_wxyz(q: Quat) -> [f32; 4] {
    [q.w, q.x, q.y, q.z]
}

/// A dual quaternion `real + ε·dual` encoding a rigid motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DualQuat {
    /// Non-dual part; the rotation for a unit dual quaternion.
    pub real: Quat,
    /// Dual part; `0.5 * t * real` for a unit dual quaternion.
    pub dual: Quat,
}

impl Default for DualQuat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl DualQuat {
    /// The identity motion: no rotation, no translation.
    pub const IDENTITY: Self = Self {
        real: Quat::IDENTITY,
        dual: Quat::from_xyzw(0.0, 0.0, 0.0, 0.0),
    };

    /// Creates a dual quaternion from its two parts.
    #[must_use]
    pub fn new(real: Quat, dual: Quat) -> Self {
        Self { real, dual }
    }

    /// Creates a dual quaternion from a `[real, dual]` pair of wxyz arrays.
    #[must_use]
    pub fn from_arrays(dq: [[f32; 4]; 2]) -> Self {
        Self {
            real: quat_from_wxyz(dq[0]),
            dual: quat_from_wxyz(dq[1]),
        }
    }

    /// Returns the `[real, dual]` pair of wxyz arrays.
    #[must_use]
    pub fn to_arrays(&self) -> [[f32; 4]; 2] {
        [quat_to_wxyz(self.real), quat_to_wxyz(self.dual)]
    }

    /// Euclidean norm of the real part.
    #[must_use]
    pub fn real_norm(&self) -> f32 {
        self.real.length()
    }

    /// Four-dimensional dot product `real . dual`; zero for a valid rigid transform.
    #[must_use]
    pub fn orthogonality(&self) -> f32 {
        self.real.dot(self.dual)
    }

    /// Returns whether the real part has unit norm and is orthogonal to the dual part.
    #[must_use]
    pub fn is_unit(&self, tolerance: f32) -> bool {
        (self.real_norm() - 1.0).abs() <= tolerance && self.orthogonality().abs() <= tolerance
    }

    /// Scales both parts by `1 / |real|`.
    ///
    /// The result has a unit real part and encodes the same rigid motion as the
    /// input decoded with [`TranslationScaling::SquaredLength`].
    ///
    /// [`TranslationScaling::SquaredLength`]: crate::options::TranslationScaling::SquaredLength
    pub fn normalize(&self) -> Result<Self> {
        let epsilon = ConversionOptions::default().degenerate_epsilon;
        let len = checked_real_norm(quat_to_wxyz(self.real), epsilon)?;
        Ok(*self * len.recip())
    }

    /// Translation encoded by a unit dual quaternion.
    #[must_use]
    pub fn translation(&self) -> Vec3 {
        udq_to_quat_trans(self).1
    }

    /// Replaces the dual part so that it encodes `translation`, keeping the rotation.
    pub fn set_translation(&mut self, translation: Vec3) {
        self.dual = quat_trans_to_udq(self.real, translation).dual;
    }

    /// Applies the rigid motion of a unit dual quaternion to a point.
    #[must_use]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.real * point + self.translation()
    }
}

impl fmt::Display for DualQuat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [rw, rx, ry, rz] = quat_to_wxyz(self.real);
        let [dw, dx, dy, dz] = quat_to_wxyz(self.dual);
        write!(
            f,
            "real: ({rw:.5}, {rx:.5}, {ry:.5}, {rz:.5}), dual: ({dw:.5}, {dx:.5}, {dy:.5}, {dz:.5})"
        )
    }
}

impl Mul<f32> for DualQuat {
    type Output = Self;

    fn mul(self, k: f32) -> Self {
        Self {
            real: self.real * k,
            dual: self.dual * k,
        }
    }
}

/// GPU/FFI-compatible dual quaternion with `(w, x, y, z)` rows.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DualQuatRaw {
    /// Real part, wxyz.
    pub real: [f32; 4],
    /// Dual part, wxyz.
    pub dual: [f32; 4],
}

impl Default for DualQuatRaw {
    fn default() -> Self {
        DualQuat::IDENTITY.into()
    }
}

impl From<DualQuat> for DualQuatRaw {
    fn from(dq: DualQuat) -> Self {
        Self {
            real: quat_to_wxyz(dq.real),
            dual: quat_to_wxyz(dq.dual),
        }
    }
}

impl From<DualQuatRaw> for DualQuat {
    fn from(raw: DualQuatRaw) -> Self {
        Self::from_arrays([raw.real, raw.dual])
    }
}

impl From<[[f32; 4]; 2]> for DualQuat {
    fn from(dq: [[f32; 4]; 2]) -> Self {
        Self::from_arrays(dq)
    }
}

impl From<DualQuat> for [[f32; 4]; 2] {
    fn from(dq: DualQuat) -> Self {
        dq.to_arrays()
    }
}
