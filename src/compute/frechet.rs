//! Discrete Fréchet distance.
//!
//! Two flavours are provided:
//!
//! - [`frechet_distance`]: dynamic programming restricted to the band built by
//!   [`BandedDistanceMatrix`]. Output-sensitive, exact whenever the optimal
//!   coupling stays inside the band.
//! - [`exact_frechet_distance`]: the classic O(n·m) recurrence over the full
//!   matrix with two rolling rows.
//!
//! # Example
//!
//! ```
//! use spatio_similarity::compute::frechet::frechet_distance;
//!
//! let a = vec![[0.0_f64, 0.0], [1.0, 0.0]];
//! let b = vec![[0.0_f64, 1.0], [1.0, 1.0]];
//!
//! assert_eq!(frechet_distance(&a, &b)?, 1.0);
//! # Ok::<(), spatio_similarity::SimilarityError>(())
//! ```

use crate::compute::banded::{BandedDistanceMatrix, DistanceMatrix};
use crate::compute::metric::{Coordinates, Scale};
use crate::compute::validation::validate_pair;
use crate::error::{Result, SimilarityError};
use geo::CoordFloat;

/// Coupling values for every cell reachable inside the band.
///
/// Cell `(i, j)` holds the smallest possible worst-step distance over all
/// monotone paths from `(0, 0)` to `(i, j)` that only use set cells of the
/// distance matrix. Unreachable cells are `None`.
#[derive(Debug, Clone)]
pub struct CouplingMatrix<T> {
    rows: usize,
    cols: usize,
    cells: Vec<Option<T>>,
}

impl<T: CoordFloat> CouplingMatrix<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col]
    }

    /// Value at the terminal cell, i.e. the discrete Fréchet distance.
    pub fn distance(&self) -> Result<T> {
        let (row, col) = (self.rows.saturating_sub(1), self.cols.saturating_sub(1));
        self.get(row, col).ok_or(SimilarityError::BandCoverage {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        })
    }
}

/// Dynamic-programming sweep over a banded distance matrix.
pub struct FrechetCoupling;

impl FrechetCoupling {
    /// Propagates coupling values row by row through the set cells of
    /// `distances`.
    ///
    /// Each row is walked left to right from its first set cell to its last.
    /// A cell takes `max(d(i, j), min(predecessors))` where only reachable
    /// predecessors among `(i-1, j-1)`, `(i-1, j)` and `(i, j-1)` count. A
    /// cell without reachable predecessors stays unreachable, except the
    /// origin which is seeded with its own distance.
    pub fn compute<T: CoordFloat>(distances: &DistanceMatrix<T>) -> CouplingMatrix<T> {
        let rows = distances.rows();
        let cols = distances.cols();
        let mut cells: Vec<Option<T>> = vec![None; rows * cols];
        let at = |row: usize, col: usize| row * cols + col;

        for row in 0..rows {
            let Some(span) = distances.row_span(row) else {
                continue;
            };

            for col in span {
                let Some(d) = distances.get(row, col) else {
                    continue;
                };

                if row == 0 && col == 0 {
                    cells[0] = Some(d);
                    continue;
                }

                let mut best: Option<T> = None;
                let mut consider = |value: Option<T>| {
                    if let Some(v) = value {
                        best = Some(best.map_or(v, |b| b.min(v)));
                    }
                };
                if row > 0 && col > 0 {
                    consider(cells[at(row - 1, col - 1)]);
                }
                if row > 0 {
                    consider(cells[at(row - 1, col)]);
                }
                if col > 0 {
                    consider(cells[at(row, col - 1)]);
                }

                cells[at(row, col)] = best.map(|b| b.max(d));
            }
        }

        CouplingMatrix { rows, cols, cells }
    }
}

/// Banded discrete Fréchet distance between `a` and `b`.
///
/// The result is symmetric in its arguments. It equals the exact discrete
/// Fréchet distance when the optimal coupling lies within the band and is
/// otherwise an upper bound that never exceeds the band's `diag_max`.
///
/// Non-finite coordinates are rejected.
pub fn frechet_distance<P, Q, T>(a: &[P], b: &[Q]) -> Result<T>
where
    P: Coordinates<Scalar = T>,
    Q: Coordinates<Scalar = T>,
    T: CoordFloat,
{
    validate_pair(a, b, true)?;
    banded_unchecked(a, b)
}

/// Exact discrete Fréchet distance over the full `n x m` matrix.
///
/// O(n·m) time, O(m) memory. Non-finite coordinates are rejected.
pub fn exact_frechet_distance<P, Q, T>(a: &[P], b: &[Q]) -> Result<T>
where
    P: Coordinates<Scalar = T>,
    Q: Coordinates<Scalar = T>,
    T: CoordFloat,
{
    validate_pair(a, b, true)?;
    exact_unchecked(a, b)
}

pub(crate) fn banded_unchecked<P, Q, T>(a: &[P], b: &[Q]) -> Result<T>
where
    P: Coordinates<Scalar = T>,
    Q: Coordinates<Scalar = T>,
    T: CoordFloat,
{
    let band = BandedDistanceMatrix::build(a, b);
    let distance = FrechetCoupling::compute(band.matrix()).distance()?;
    band.scale().check(distance)
}

pub(crate) fn exact_unchecked<P, Q, T>(a: &[P], b: &[Q]) -> Result<T>
where
    P: Coordinates<Scalar = T>,
    Q: Coordinates<Scalar = T>,
    T: CoordFloat,
{
    let scale = Scale::for_pair(a, b);
    let m = b.len();
    let mut prev = vec![T::zero(); m];
    let mut curr = vec![T::zero(); m];

    let first = a[0].coords();
    prev[0] = scale.distance(first, b[0].coords());
    for j in 1..m {
        prev[j] = prev[j - 1].max(scale.distance(first, b[j].coords()));
    }

    for point in &a[1..] {
        let p = point.coords();
        curr[0] = prev[0].max(scale.distance(p, b[0].coords()));
        for j in 1..m {
            let reach = prev[j].min(curr[j - 1]).min(prev[j - 1]);
            curr[j] = reach.max(scale.distance(p, b[j].coords()));
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    scale.check(prev[m - 1])
}
