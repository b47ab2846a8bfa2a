//! Minimal 3D vector helpers used by the builder.

/// A point or direction in 3D space.
pub type Vec3 = [f32; 3];

/// The zero vector.
pub const ORIGIN: Vec3 = [0.0, 0.0, 0.0];

/// Component-wise `a + b`.
#[must_use]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

/// Component-wise `a - b`.
#[must_use]
pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

/// Multiply every component by `s`.
#[must_use]
pub fn scale(v: Vec3, s: f32) -> Vec3 {
    [v[0] * s, v[1] * s, v[2] * s]
}

/// Dot product.
#[must_use]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Cross product.
#[must_use]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Unit vector in the direction of `v`.
///
/// Vectors too short to normalize map to the X axis.
#[must_use]
pub fn normalize(v: Vec3) -> Vec3 {
    let len2 = dot(v, v);
    if len2 <= f32::MIN_POSITIVE {
        return [1.0, 0.0, 0.0];
    }
    scale(v, 1.0 / len2.sqrt())
}
