//! Quaternion helpers for the rotation demo.

use splot_core::geometry::{add, cross, normalize, scale, Vec3};

/// Quaternion `x*i + y*j + z*k + w`, stored as `[x, y, z, w]`.
pub type Quat = [f32; 4];

/// Unit quaternion in the direction of `q`.
#[must_use]
pub fn normalize_quat(q: Quat) -> Quat {
    let len = (q[0] * q[0] + q[1] * q[1] + q[2] * q[2] + q[3] * q[3]).sqrt();
    if len <= f32::MIN_POSITIVE {
        return [0.0, 0.0, 0.0, 1.0];
    }
    [q[0] / len, q[1] / len, q[2] / len, q[3] / len]
}

/// Rotation by `angle` radians about `axis`.
#[must_use]
pub fn from_axis_angle(axis: Vec3, angle: f32) -> Quat {
    let a = normalize(axis);
    let (sin, cos) = (angle * 0.5).sin_cos();
    [a[0] * sin, a[1] * sin, a[2] * sin, cos]
}

/// Vector part of `q`.
#[must_use]
pub fn axis(q: Quat) -> Vec3 {
    [q[0], q[1], q[2]]
}

/// Rotation angle of a unit quaternion, in `[0, 2*pi]`.
#[must_use]
pub fn angle(q: Quat) -> f32 {
    2.0 * q[3].clamp(-1.0, 1.0).acos()
}

/// Rotate `v` by the unit quaternion `q`.
#[must_use]
pub fn rotate(q: Quat, v: Vec3) -> Vec3 {
    let t = scale(cross(axis(q), v), 2.0);
    add(add(v, scale(t, q[3])), cross(axis(q), t))
}
