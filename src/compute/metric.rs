//! Euclidean point-distance primitive and the `Coordinates` point abstraction.

use crate::error::{Result, SimilarityError};
use geo::CoordFloat;

/// A point as a fixed-length slice of coordinates.
///
/// Implemented for arrays, vectors and slices so callers can hand in
/// whatever container they already hold. Both trajectories of one query
/// must agree on `Scalar` and on the number of coordinates.
pub trait Coordinates {
    type Scalar: CoordFloat;

    fn coords(&self) -> &[Self::Scalar];

    fn dimension(&self) -> usize {
        self.coords().len()
    }
}

impl<T: CoordFloat, const N: usize> Coordinates for [T; N] {
    type Scalar = T;

    fn coords(&self) -> &[T] {
        self
    }
}

impl<T: CoordFloat> Coordinates for Vec<T> {
    type Scalar = T;

    fn coords(&self) -> &[T] {
        self
    }
}

impl<T: CoordFloat> Coordinates for &[T] {
    type Scalar = T;

    fn coords(&self) -> &[T] {
        self
    }
}

/// Euclidean distance between two points of equal dimension.
///
/// Coordinates whose squares would overflow are rescaled first, so the
/// result is finite whenever the true distance is representable.
///
/// # Examples
///
/// ```
/// use spatio_similarity::compute::metric::euclidean_distance;
///
/// let d = euclidean_distance(&[0.0_f64, 0.0], &[3.0, 4.0])?;
/// assert_eq!(d, 5.0);
///
/// assert!(euclidean_distance(&[0.0_f64, 0.0], &[0.0, 0.0, 1.0]).is_err());
/// # Ok::<(), spatio_similarity::SimilarityError>(())
/// ```
pub fn euclidean_distance<P, Q, T>(a: &P, b: &Q) -> Result<T>
where
    P: Coordinates<Scalar = T> + ?Sized,
    Q: Coordinates<Scalar = T> + ?Sized,
    T: CoordFloat,
{
    let (a, b) = check_dimensions(a.coords(), b.coords())?;
    let scale = Scale::for_coords(a.iter().chain(b), a.len());
    scale.check(scale.distance(a, b))
}

/// Squared Euclidean distance. Avoids the root when only ordering matters.
///
/// Fails with `DistanceOverflow` when the squared value itself is out of
/// range for `T`, even if the plain distance would not be.
pub fn squared_euclidean_distance<P, Q, T>(a: &P, b: &Q) -> Result<T>
where
    P: Coordinates<Scalar = T> + ?Sized,
    Q: Coordinates<Scalar = T> + ?Sized,
    T: CoordFloat,
{
    let (a, b) = check_dimensions(a.coords(), b.coords())?;
    let squared = squared_unchecked(a, b);
    if !squared.is_finite() && a.iter().chain(b).all(|c| c.is_finite()) {
        return Err(SimilarityError::DistanceOverflow);
    }
    Ok(squared)
}

fn check_dimensions<'a, T>(a: &'a [T], b: &'a [T]) -> Result<(&'a [T], &'a [T])> {
    if a.len() != b.len() {
        return Err(SimilarityError::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok((a, b))
}

/// Callers must have validated that both slices have equal length.
#[inline]
pub(crate) fn squared_unchecked<T: CoordFloat>(a: &[T], b: &[T]) -> T {
    a.iter().zip(b).fold(T::zero(), |acc, (&x, &y)| {
        let delta = x - y;
        acc + delta * delta
    })
}

/// Power-of-two rescaling shared by every distance of one query.
///
/// When `(2 * max|c|)^2 * dimension` fits in `T`, no squared distance
/// between the query's points can overflow and the factor is one, which
/// leaves every result bit-identical to the plain formula. Otherwise
/// coordinates are multiplied by `2^-(k-1)` with `2^k >= max|c|`, which is
/// exact, and distances are multiplied back at the end.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Scale<T> {
    factor: T,
    inverse: T,
    finite_input: bool,
}

impl<T: CoordFloat> Scale<T> {
    pub(crate) fn for_coords<'a, I>(coords: I, dimension: usize) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let mut max_abs = T::zero();
        let mut finite_input = true;
        for &c in coords {
            finite_input &= c.is_finite();
            max_abs = max_abs.max(c.abs());
        }

        let unit = Self {
            factor: T::one(),
            inverse: T::one(),
            finite_input,
        };
        if !max_abs.is_finite() {
            return unit;
        }

        let span = max_abs + max_abs;
        let bound = (0..dimension).fold(T::zero(), |acc, _| acc + span * span);
        if bound.is_finite() {
            return unit;
        }

        let exponent = max_abs.log2().ceil().to_i32().unwrap_or(0);
        let factor = (T::one() + T::one()).powi(exponent - 1);
        Self {
            factor,
            inverse: factor.recip(),
            finite_input,
        }
    }

    /// Scale covering every point of both trajectories.
    pub(crate) fn for_pair<P, Q>(a: &[P], b: &[Q]) -> Self
    where
        P: Coordinates<Scalar = T>,
        Q: Coordinates<Scalar = T>,
    {
        let dimension = a.first().map_or(0, |p| p.dimension());
        let coords = a
            .iter()
            .flat_map(|p| p.coords())
            .chain(b.iter().flat_map(|q| q.coords()));
        Self::for_coords(coords, dimension)
    }

    /// Squared distance in scaled units. Only comparable with other values
    /// from the same scale.
    #[inline]
    pub(crate) fn squared(&self, a: &[T], b: &[T]) -> T {
        a.iter().zip(b).fold(T::zero(), |acc, (&x, &y)| {
            let delta = x * self.inverse - y * self.inverse;
            acc + delta * delta
        })
    }

    #[inline]
    pub(crate) fn distance(&self, a: &[T], b: &[T]) -> T {
        self.squared(a, b).sqrt() * self.factor
    }

    /// Converts a scaled squared distance back to a plain distance.
    pub(crate) fn restore(&self, squared: T) -> T {
        squared.sqrt() * self.factor
    }

    /// Rejects a result that overflowed although every input was finite.
    pub(crate) fn check(&self, distance: T) -> Result<T> {
        if self.finite_input && !distance.is_finite() {
            return Err(SimilarityError::DistanceOverflow);
        }
        Ok(distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean_distance_2d() {
        let d = euclidean_distance(&[0.0_f64, 1.0], &[0.0, 0.0]).unwrap();
        assert_eq!(d, 1.0);

        let d = euclidean_distance(&[1.0_f64, 1.0], &[4.0, 5.0]).unwrap();
        assert_eq!(d, 5.0);
    }

    #[test]
    fn test_euclidean_distance_symmetric_and_identity() {
        let a = vec![1.5_f64, -2.0, 7.25];
        let b = vec![-3.0_f64, 0.5, 2.0];
        assert_eq!(
            euclidean_distance(&a, &b).unwrap(),
            euclidean_distance(&b, &a).unwrap()
        );
        assert_eq!(euclidean_distance(&a, &a).unwrap(), 0.0);
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let err = euclidean_distance(&[0.0_f64, 0.0], &[0.0, 0.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            SimilarityError::DimensionMismatch {
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn test_mixed_containers_and_f32() {
        let a: &[f32] = &[0.0, 0.0];
        let b = vec![0.0_f32, 2.0];
        let d = euclidean_distance(&a, &b).unwrap();
        assert_eq!(d, 2.0_f32);

        let sq = squared_euclidean_distance(&[1.0_f64, 1.0], &[2.0, 3.0]).unwrap();
        assert_eq!(sq, 5.0);
    }

    #[test]
    fn test_large_coordinates_do_not_overflow() {
        let d = euclidean_distance(&[0.0_f32, 0.0], &[1e20, 0.0]).unwrap();
        assert!((d - 1e20).abs() <= 1e20 * 1e-6, "got {}", d);

        let d = euclidean_distance(&[3e200_f64, 0.0], &[0.0, 4e200]).unwrap();
        assert!((d - 5e200).abs() <= 5e200 * 1e-12, "got {}", d);

        assert!(matches!(
            squared_euclidean_distance(&[0.0_f32], &[1e20]),
            Err(SimilarityError::DistanceOverflow)
        ));
    }

    #[test]
    fn test_unrepresentable_distance_is_error() {
        assert!(matches!(
            euclidean_distance(&[3e38_f32], &[-3e38]),
            Err(SimilarityError::DistanceOverflow)
        ));
        assert!(euclidean_distance(&[f64::INFINITY], &[0.0]).unwrap().is_infinite());
    }

    #[test]
    fn test_unit_scale_for_ordinary_magnitudes() {
        let a = [1.0_f64, 1.0];
        let b = [4.0_f64, 5.0];
        let scale = Scale::for_coords(a.iter().chain(&b), 2);
        assert_eq!(scale.factor, 1.0);
        assert_eq!(scale.squared(&a, &b), squared_unchecked(&a, &b));
    }
}
