//! Validation for trajectories before any distance work starts.

use crate::compute::metric::Coordinates;
use crate::error::{Result, SimilarityError};
use geo::CoordFloat;

/// Validates a single trajectory and returns its point dimension.
///
/// The trajectory must be non-empty, every point must have the same
/// non-zero number of coordinates and, when `require_finite` is set, no
/// coordinate may be NaN or infinite.
///
/// # Examples
///
/// ```
/// use spatio_similarity::compute::validation::validate_trajectory;
///
/// let line = vec![[0.0_f64, 0.0], [1.0, 0.0]];
/// assert_eq!(validate_trajectory(&line, "first", true)?, 2);
///
/// let empty: Vec<[f64; 2]> = Vec::new();
/// assert!(validate_trajectory(&empty, "first", true).is_err());
///
/// let broken = vec![[0.0_f64, f64::NAN]];
/// assert!(validate_trajectory(&broken, "first", true).is_err());
/// # Ok::<(), spatio_similarity::SimilarityError>(())
/// ```
pub fn validate_trajectory<P, T>(
    points: &[P],
    which: &'static str,
    require_finite: bool,
) -> Result<usize>
where
    P: Coordinates<Scalar = T>,
    T: CoordFloat,
{
    let first = points
        .first()
        .ok_or(SimilarityError::EmptyTrajectory { which })?;

    let dimension = first.dimension();
    if dimension == 0 {
        return Err(SimilarityError::ZeroDimension);
    }

    for (index, point) in points.iter().enumerate() {
        let coords = point.coords();
        if coords.len() != dimension {
            return Err(SimilarityError::DimensionMismatch {
                expected: dimension,
                found: coords.len(),
            });
        }

        if require_finite && let Some(axis) = coords.iter().position(|&c| !c.is_finite()) {
            return Err(SimilarityError::NonFiniteCoordinate { which, index, axis });
        }
    }

    Ok(dimension)
}

/// Validates both trajectories of a query and checks they share a dimension.
pub fn validate_pair<P, Q, T>(a: &[P], b: &[Q], require_finite: bool) -> Result<usize>
where
    P: Coordinates<Scalar = T>,
    Q: Coordinates<Scalar = T>,
    T: CoordFloat,
{
    let dim_a = validate_trajectory(a, "first", require_finite)?;
    let dim_b = validate_trajectory(b, "second", require_finite)?;

    if dim_a != dim_b {
        return Err(SimilarityError::DimensionMismatch {
            expected: dim_a,
            found: dim_b,
        });
    }

    Ok(dim_a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_pair() {
        let a = vec![[0.0_f64, 0.0, 0.0], [1.0, 1.0, 1.0]];
        let b = vec![vec![2.0_f64, 2.0, 2.0]];
        assert_eq!(validate_pair(&a, &b, true).unwrap(), 3);
    }

    #[test]
    fn test_empty_trajectories() {
        let a = vec![[0.0_f64, 0.0]];
        let empty: Vec<[f64; 2]> = vec![];

        let err = validate_pair(&a, &empty, true).unwrap_err();
        assert!(matches!(
            err,
            SimilarityError::EmptyTrajectory { which: "second" }
        ));

        let err = validate_pair(&empty, &a, true).unwrap_err();
        assert!(matches!(err, SimilarityError::EmptyTrajectory { which: "first" }));
    }

    #[test]
    fn test_ragged_trajectory() {
        let ragged = vec![vec![0.0_f64, 0.0], vec![1.0, 1.0, 1.0]];
        let err = validate_trajectory(&ragged, "first", true).unwrap_err();
        assert!(matches!(
            err,
            SimilarityError::DimensionMismatch {
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn test_cross_trajectory_dimension_mismatch() {
        let a = vec![[0.0_f64, 0.0]];
        let b = vec![[0.0_f64, 0.0, 0.0]];
        assert!(matches!(
            validate_pair(&a, &b, true),
            Err(SimilarityError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_zero_dimension() {
        let a: Vec<Vec<f64>> = vec![vec![]];
        assert!(matches!(
            validate_trajectory(&a, "first", true),
            Err(SimilarityError::ZeroDimension)
        ));
    }

    #[test]
    fn test_non_finite_toggle() {
        let a = vec![[0.0_f64, 0.0], [f64::INFINITY, 1.0]];
        match validate_trajectory(&a, "first", true) {
            Err(SimilarityError::NonFiniteCoordinate { index, axis, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(axis, 0);
            }
            other => panic!("expected non-finite error, got {:?}", other),
        }

        assert_eq!(validate_trajectory(&a, "first", false).unwrap(), 2);
    }

    #[test]
    fn test_non_finite_f32_in_second_trajectory() {
        let a = vec![[0.0_f32, 0.0]];
        let b = vec![vec![1.0_f32, 1.0], vec![2.0, f32::NAN]];
        match validate_pair(&a, &b, true) {
            Err(SimilarityError::NonFiniteCoordinate { which, index, axis }) => {
                assert_eq!(which, "second");
                assert_eq!(index, 1);
                assert_eq!(axis, 1);
            }
            other => panic!("expected non-finite error, got {:?}", other),
        }
        assert_eq!(validate_pair(&a, &b, false).unwrap(), 2);
    }
}
