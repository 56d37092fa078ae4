//! Randomized directed Hausdorff distance with early termination.
//!
//! For every point of `a` the nearest point of `b` is searched, but the
//! search for a given point is abandoned as soon as some point of `b` is
//! closer than the running maximum: that point can no longer raise the
//! result. Visiting both trajectories in shuffled order makes such early
//! exits likely, because neighbouring trajectory points tend to have similar
//! nearest-neighbour distances.
//!
//! The returned value does not depend on the traversal order; only the
//! amount of work does.

use crate::compute::metric::{Coordinates, Scale};
use crate::compute::validation::validate_pair;
use crate::error::{Result, SimilarityError};
use geo::CoordFloat;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Directed Hausdorff distance from `a` to `b`: the largest distance from a
/// point of `a` to its nearest point of `b`.
///
/// Traversal order is shuffled with a generator seeded from OS entropy.
///
/// # Examples
///
/// ```
/// use spatio_similarity::compute::hausdorff::directed_hausdorff;
///
/// let a = vec![[0.0_f64, 0.0], [1.0, 0.0]];
/// let b = vec![[0.0_f64, 1.0], [1.0, 1.0]];
/// assert_eq!(directed_hausdorff(&a, &b)?, 1.0);
///
/// let empty: Vec<[f64; 2]> = Vec::new();
/// assert!(directed_hausdorff(&a, &empty).is_err());
/// # Ok::<(), spatio_similarity::SimilarityError>(())
/// ```
pub fn directed_hausdorff<P, Q, T>(a: &[P], b: &[Q]) -> Result<T>
where
    P: Coordinates<Scalar = T>,
    Q: Coordinates<Scalar = T>,
    T: CoordFloat,
{
    let mut rng = StdRng::from_entropy();
    directed_hausdorff_with_rng(a, b, &mut rng)
}

/// Directed Hausdorff distance using the supplied random source for the
/// traversal order.
pub fn directed_hausdorff_with_rng<P, Q, T, R>(a: &[P], b: &[Q], rng: &mut R) -> Result<T>
where
    P: Coordinates<Scalar = T>,
    Q: Coordinates<Scalar = T>,
    T: CoordFloat,
    R: Rng + ?Sized,
{
    validate_pair(a, b, true)?;
    shuffled_unchecked(a, b, rng)
}

/// Directed Hausdorff distance visiting points in the given orders.
///
/// `order_a` and `order_b` must be permutations of `0..a.len()` and
/// `0..b.len()`.
pub fn directed_hausdorff_in_order<P, Q, T>(
    a: &[P],
    b: &[Q],
    order_a: &[usize],
    order_b: &[usize],
) -> Result<T>
where
    P: Coordinates<Scalar = T>,
    Q: Coordinates<Scalar = T>,
    T: CoordFloat,
{
    validate_pair(a, b, true)?;
    check_permutation(order_a, a.len(), "first")?;
    check_permutation(order_b, b.len(), "second")?;
    in_order_unchecked(a, b, order_a, order_b)
}

/// Symmetric Hausdorff distance: `max(h(a, b), h(b, a))`.
pub fn hausdorff_distance<P, Q, T>(a: &[P], b: &[Q]) -> Result<T>
where
    P: Coordinates<Scalar = T>,
    Q: Coordinates<Scalar = T>,
    T: CoordFloat,
{
    validate_pair(a, b, true)?;
    let mut rng = StdRng::from_entropy();
    symmetric_unchecked(a, b, &mut rng)
}

pub(crate) fn symmetric_unchecked<P, Q, T, R>(a: &[P], b: &[Q], rng: &mut R) -> Result<T>
where
    P: Coordinates<Scalar = T>,
    Q: Coordinates<Scalar = T>,
    T: CoordFloat,
    R: Rng + ?Sized,
{
    let forward = shuffled_unchecked(a, b, rng)?;
    let backward = shuffled_unchecked(b, a, rng)?;
    Ok(forward.max(backward))
}

pub(crate) fn shuffled_unchecked<P, Q, T, R>(a: &[P], b: &[Q], rng: &mut R) -> Result<T>
where
    P: Coordinates<Scalar = T>,
    Q: Coordinates<Scalar = T>,
    T: CoordFloat,
    R: Rng + ?Sized,
{
    let mut order_a: Vec<usize> = (0..a.len()).collect();
    let mut order_b: Vec<usize> = (0..b.len()).collect();
    order_a.shuffle(rng);
    order_b.shuffle(rng);
    in_order_unchecked(a, b, &order_a, &order_b)
}

fn in_order_unchecked<P, Q, T>(
    a: &[P],
    b: &[Q],
    order_a: &[usize],
    order_b: &[usize],
) -> Result<T>
where
    P: Coordinates<Scalar = T>,
    Q: Coordinates<Scalar = T>,
    T: CoordFloat,
{
    // Scaled squared distances throughout; one root at the end.
    let scale = Scale::for_pair(a, b);
    let mut c_max = T::zero();
    let mut short_circuited = 0usize;

    for &ia in order_a {
        let pa = a[ia].coords();
        let mut c_min = T::infinity();
        let mut abandoned = false;

        for &ib in order_b {
            let d = scale.squared(pa, b[ib].coords());
            if d < c_max {
                abandoned = true;
                break;
            }
            if d < c_min {
                c_min = d;
            }
        }

        if abandoned {
            short_circuited += 1;
        } else if c_min.is_finite() && c_min >= c_max {
            c_max = c_min;
        }
    }

    log::trace!(
        "directed hausdorff over {}x{} points: {} of {} searches cut short",
        a.len(),
        b.len(),
        short_circuited,
        a.len()
    );

    scale.check(scale.restore(c_max))
}

fn check_permutation(order: &[usize], len: usize, which: &'static str) -> Result<()> {
    let invalid = SimilarityError::InvalidTraversalOrder { which, len };
    if order.len() != len {
        return Err(invalid);
    }
    let mut seen = vec![false; len];
    for &index in order {
        match seen.get_mut(index) {
            Some(slot) if !*slot => *slot = true,
            _ => return Err(invalid),
        }
    }
    Ok(())
}
