//! Vector math helpers
//!
//! Vectors are plain nalgebra fixed-size vectors over `f64`; elementwise
//! arithmetic, scalar multiplication and `norm()` come from nalgebra
//! (`component_mul` for the elementwise product). This module adds the
//! tolerance-based comparisons used for geometric equality and a
//! normalization that is safe on the zero vector.

use nalgebra::SVector;

/// 2D vector type
pub type Vec2 = nalgebra::Vector2<f64>;

/// 3D vector type
pub type Vec3 = nalgebra::Vector3<f64>;

/// Check whether two floats differ by no more than the given tolerance
pub fn almost_equal(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

/// Check whether two vectors are componentwise within the given tolerance
///
/// Equality of the vector types themselves (`==`) is exact; geometric
/// comparisons go through this predicate with a caller-supplied tolerance.
pub fn vector_almost_equal<const D: usize>(
    a: &SVector<f64, D>,
    b: &SVector<f64, D>,
    tolerance: f64,
) -> bool {
    a.iter()
        .zip(b.iter())
        .all(|(x, y)| almost_equal(*x, *y, tolerance))
}

/// Return the unit-length version of a vector
///
/// The zero vector is returned unchanged instead of dividing by zero.
pub fn normalized_or_zero<const D: usize>(v: &SVector<f64, D>) -> SVector<f64, D> {
    let length = v.norm();
    if length == 0.0 {
        *v
    } else {
        *v / length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOLERANCE: f64 = 1e-8;

    #[test]
    fn test_length() {
        assert_relative_eq!(Vec2::new(3.0, 4.0).norm(), 5.0, epsilon = TOLERANCE);
        assert_relative_eq!(Vec2::new(-3.0, -4.0).norm(), 5.0, epsilon = TOLERANCE);
        assert_relative_eq!(
            Vec3::new(3.0, 4.0, 5.0).norm(),
            7.07106781,
            epsilon = TOLERANCE
        );
        assert_relative_eq!(
            Vec3::new(-5.0, 3.0, -9.0).norm(),
            10.7238053,
            epsilon = TOLERANCE
        );
    }

    #[test]
    fn test_normalized_has_unit_length() {
        let vectors = [
            Vec3::new(3.0, 4.0, 5.0),
            Vec3::new(6.0, 3.0, 7.0),
            Vec3::new(-5.0, 3.0, -9.0),
        ];

        for v in vectors {
            assert_relative_eq!(normalized_or_zero(&v).norm(), 1.0, epsilon = TOLERANCE);
        }
    }

    #[test]
    fn test_normalized_zero_vector_unchanged() {
        let zero = Vec3::zeros();
        assert_eq!(normalized_or_zero(&zero), zero);

        let zero2 = Vec2::zeros();
        assert_eq!(normalized_or_zero(&zero2), zero2);
    }

    #[test]
    fn test_elementwise_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert!(vector_almost_equal(
            &(a + b),
            &Vec3::new(5.0, 7.0, 9.0),
            TOLERANCE
        ));
        assert!(vector_almost_equal(
            &(a - b),
            &Vec3::new(-3.0, -3.0, -3.0),
            TOLERANCE
        ));
        assert!(vector_almost_equal(
            &a.component_mul(&b),
            &Vec3::new(4.0, 10.0, 18.0),
            TOLERANCE
        ));
        assert!(vector_almost_equal(
            &(a * 2.5),
            &Vec3::new(2.5, 5.0, 7.5),
            TOLERANCE
        ));

        // Operands are unmodified by value-semantics arithmetic
        assert_eq!(a, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_add_then_subtract_is_identity() {
        let a = Vec3::new(0.25, -7.5, 3.125);
        let b = Vec3::new(-1.5, 2.0, 9.75);

        assert!(vector_almost_equal(&(a + b - b), &a, TOLERANCE));
    }

    #[test]
    fn test_vector_almost_equal_tolerance() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(1.0 + 1e-10, 2.0, 3.0 - 1e-10);

        assert!(vector_almost_equal(&a, &b, 1e-9));
        assert!(!vector_almost_equal(&a, &b, 1e-11));
    }
}
