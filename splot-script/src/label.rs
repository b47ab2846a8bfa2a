//! Label placement.

use splot_core::geometry::{add, scale, Vec3};
use splot_core::{Primitive, Shape};

/// Nearest and farthest fraction along a segment where its label may sit.
pub const LABEL_BAND: (f32, f32) = (0.6, 0.9);

/// Where to anchor a primitive's label.
///
/// Points are labelled at their position. Segment labels sit toward the far
/// end, at a fraction in `(0.6, 0.9]` picked from the mantissas of the
/// direction components, so labels of segments sharing a start point rarely
/// land on the same spot.
#[must_use]
pub fn label_anchor(primitive: &Primitive) -> Vec3 {
    match primitive.shape {
        Shape::Point { position } => position,
        Shape::Segment { start, .. } => {
            let dir = primitive.direction();
            add(start, scale(dir, segment_fraction(dir)))
        }
    }
}

/// Fraction along a segment with direction `dir` for its label.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn segment_fraction(dir: Vec3) -> f32 {
    let spread = 1.0 - (mantissa(dir[0]) + mantissa(dir[1]) + mantissa(dir[2])) / 3.0;
    let (near, far) = LABEL_BAND;
    near + (far - near) * spread as f32
}

/// Magnitude of the binary mantissa of `x`, in `[0.5, 1)`; `0` for zero and
/// non-finite values.
fn mantissa(x: f32) -> f64 {
    let x = f64::from(x).abs();
    if x == 0.0 || !x.is_finite() {
        return 0.0;
    }
    let bits = x.to_bits();
    f64::from_bits((bits & !(0x7ff_u64 << 52)) | (1022_u64 << 52))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mantissa() {
        assert!((mantissa(1.0) - 0.5).abs() < f64::EPSILON);
        assert!((mantissa(3.0) - 0.75).abs() < f64::EPSILON);
        assert!((mantissa(-0.375) - 0.75).abs() < f64::EPSILON);
        assert!(mantissa(0.0).abs() < f64::EPSILON);
        assert!(mantissa(f32::NAN).abs() < f64::EPSILON);
    }

    #[test]
    fn test_point_label_at_point() {
        let prim = Primitive::point([1.0, 2.0, 3.0]);
        assert_eq!(label_anchor(&prim), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_segment_label_biased_to_far_end() {
        let prim = Primitive::segment([0.0, 0.0, 0.0], [1.0, 0.0, 0.0]);
        let anchor = label_anchor(&prim);
        assert!((anchor[0] - 0.85).abs() < 1e-6);
        assert_eq!(anchor[1], 0.0);
    }

    #[test]
    fn test_fraction_stays_in_band() {
        let dirs = [
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0],
            [0.999, -0.999, 0.999],
            [123.4, -5.5, 0.001],
            [f32::MAX, f32::MIN_POSITIVE, -1.0],
        ];
        for dir in dirs {
            let f = segment_fraction(dir);
            assert!(f > LABEL_BAND.0 && f <= LABEL_BAND.1 + 1e-6, "{dir:?} -> {f}");
        }
    }

    #[test]
    fn test_zero_length_segment_label_at_start() {
        let prim = Primitive::segment([2.0, 2.0, 2.0], [2.0, 2.0, 2.0]);
        assert_eq!(label_anchor(&prim), [2.0, 2.0, 2.0]);
    }
}
