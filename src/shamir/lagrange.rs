use num_bigint::BigInt;
use num_traits::One;

use super::{InterpolationError, Point, fraction::Fraction};

/// Evaluates at `at` the unique polynomial of degree < `points.len()` going through `points`.
///
/// Each Lagrange term `y_i * prod_{j != i} (at - x_j) / (x_i - x_j)` is built as a single
/// fraction and summed exactly, no intermediate division is performed.
pub fn interpolate_at(points: &[Point], at: &BigInt) -> Result<Fraction, InterpolationError> {
    let mut total = Fraction::zero();
    for (i, point) in points.iter().enumerate() {
        let mut numerator = point.y.clone();
        let mut denominator = BigInt::one();
        for (j, other) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator *= at - &other.x;
            denominator *= &point.x - &other.x;
        }
        let term = Fraction::new(numerator, denominator)
            .ok_or_else(|| InterpolationError::DuplicateAbscissa(point.x.clone()))?;
        total = total + term;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use num_traits::Zero;

    use super::*;

    fn points(coordinates: &[(i64, i64)]) -> Vec<Point> {
        coordinates
            .iter()
            .map(|&(x, y)| Point::new(x.into(), y.into()))
            .collect()
    }

    #[test]
    fn test_interpolation_at_zero() {
        // y = x^2 + 3
        let value = interpolate_at(&points(&[(1, 4), (2, 7), (3, 12)]), &BigInt::zero()).unwrap();
        assert!(value.equals_integer(&BigInt::from(3)));
    }

    #[test]
    fn test_interpolation_goes_through_points() {
        let points = points(&[(-2, 17), (1, -4), (4, 5), (7, 50)]);
        for point in &points {
            let value = interpolate_at(&points, &point.x).unwrap();
            assert!(value.equals_integer(&point.y));
        }
    }

    #[test]
    fn test_interpolation_may_be_fractional() {
        // Line through (1, 0) and (3, 1) crosses x = 0 at y = -1/2
        let value = interpolate_at(&points(&[(1, 0), (3, 1)]), &BigInt::zero()).unwrap();
        let reduced = value.reduced();
        assert_eq!(reduced.numerator(), &BigInt::from(-1));
        assert_eq!(reduced.denominator(), &BigInt::from(2));
    }

    #[test]
    fn test_single_point_is_constant() {
        let value = interpolate_at(&points(&[(5, 42)]), &BigInt::from(1_000)).unwrap();
        assert_eq!(value.into_integer().unwrap(), BigInt::from(42));
    }

    #[test]
    fn test_duplicate_abscissa_is_detected() {
        let result = interpolate_at(&points(&[(1, 4), (2, 7), (1, 5)]), &BigInt::zero());
        assert!(matches!(
            result,
            Err(InterpolationError::DuplicateAbscissa(x)) if x == BigInt::from(1)
        ));
    }
}
