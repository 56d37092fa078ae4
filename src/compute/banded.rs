//! Band-limited pairwise distance matrix.
//!
//! Instead of filling all `n * m` cells, only a band around an evenly spread
//! "core diagonal" is computed. The largest distance found on that diagonal
//! (`diag_max`) bounds every coupling path through the band, so cells at or
//! above it can never improve the result and are left unset.
//!
//! The band is a heuristic: it covers the optimal coupling for trajectories
//! that progress at a similar pace. For strongly non-uniform sampling the
//! optimal path may leave the band, in which case the banded Fréchet
//! distance overstates the exact one (it never exceeds `diag_max`).

use crate::compute::metric::{Coordinates, Scale};
use crate::compute::validation::validate_pair;
use crate::error::{Result, SimilarityError};
use geo::CoordFloat;
use std::ops::Range;

/// Dense `rows x cols` table where each cell is either computed or unset.
///
/// Unset cells are `None`, so a true zero distance between coincident
/// points is never mistaken for a missing value.
#[derive(Debug, Clone)]
pub struct DistanceMatrix<T> {
    rows: usize,
    cols: usize,
    cells: Vec<Option<T>>,
    /// Leftmost and one-past-rightmost set column per row.
    row_spans: Vec<Option<(usize, usize)>>,
}

impl<T: CoordFloat> DistanceMatrix<T> {
    /// Creates a matrix with every cell unset.
    pub fn unset(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
            row_spans: vec![None; rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Distance stored at `(row, col)`, or `None` if unset or out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[row * self.cols + col]
    }

    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some()
    }

    /// Stores a computed distance.
    ///
    /// Fails with `CellOutOfRange` when `(row, col)` lies outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, distance: T) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(SimilarityError::CellOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.store(row, col, distance);
        Ok(())
    }

    /// Callers must keep `(row, col)` inside the matrix.
    fn store(&mut self, row: usize, col: usize, distance: T) {
        self.cells[row * self.cols + col] = Some(distance);
        self.row_spans[row] = Some(match self.row_spans[row] {
            Some((start, end)) => (start.min(col), end.max(col + 1)),
            None => (col, col + 1),
        });
    }

    /// Columns between the first and last set cell of `row`.
    ///
    /// Cells inside the range may still be unset; cells outside it are
    /// guaranteed unset.
    pub fn row_span(&self, row: usize) -> Option<Range<usize>> {
        self.row_spans
            .get(row)
            .copied()
            .flatten()
            .map(|(start, end)| start..end)
    }

    /// Number of set cells.
    pub fn set_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

/// Result of the banded construction for one trajectory pair.
#[derive(Debug, Clone)]
pub struct BandedDistanceMatrix<T> {
    matrix: DistanceMatrix<T>,
    diag_max: T,
    transposed: bool,
    evaluations: usize,
    scale: Scale<T>,
}

impl<T: CoordFloat> BandedDistanceMatrix<T> {
    /// Builds the band for `a` against `b`.
    ///
    /// Rows always index the longer trajectory; if `b` is longer than `a`
    /// the matrix is transposed and [`is_transposed`](Self::is_transposed)
    /// reports it.
    ///
    /// # Examples
    ///
    /// ```
    /// use spatio_similarity::compute::banded::BandedDistanceMatrix;
    ///
    /// let a = vec![[0.0_f64, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0], [4.0, 0.0]];
    /// let b = vec![[0.0_f64, 0.0], [4.0, 0.0]];
    ///
    /// let band = BandedDistanceMatrix::compute(&a, &b)?;
    /// assert_eq!(band.matrix().rows(), 5);
    /// assert_eq!(band.matrix().cols(), 2);
    /// assert!(band.matrix().is_set(4, 1));
    /// # Ok::<(), spatio_similarity::SimilarityError>(())
    /// ```
    pub fn compute<P, Q>(a: &[P], b: &[Q]) -> Result<Self>
    where
        P: Coordinates<Scalar = T>,
        Q: Coordinates<Scalar = T>,
    {
        validate_pair(a, b, false)?;
        Ok(Self::build(a, b))
    }

    /// Callers must have run [`validate_pair`] on the inputs.
    pub(crate) fn build<P, Q>(a: &[P], b: &[Q]) -> Self
    where
        P: Coordinates<Scalar = T>,
        Q: Coordinates<Scalar = T>,
    {
        let transposed = a.len() < b.len();
        let (n, m) = if transposed {
            (b.len(), a.len())
        } else {
            (a.len(), b.len())
        };

        let scale = Scale::for_pair(a, b);
        let mut evaluations = 0usize;
        let mut distance = |row: usize, col: usize| {
            evaluations += 1;
            if transposed {
                scale.distance(b[row].coords(), a[col].coords())
            } else {
                scale.distance(a[row].coords(), b[col].coords())
            }
        };

        let mut matrix = DistanceMatrix::unset(n, m);
        let mut diag_max = T::zero();

        let core: Vec<usize> = (0..n).map(|row| core_column(row, n, m)).collect();
        for (row, &col) in core.iter().enumerate() {
            let d = distance(row, col);
            matrix.store(row, col, d);
            diag_max = diag_max.max(d);
        }

        // Extend every row to the right of its core cell.
        for (row, &core_col) in core.iter().enumerate() {
            for col in core_col + 1..m {
                let d = distance(row, col);
                if d >= diag_max {
                    break;
                }
                matrix.store(row, col, d);
            }
        }

        // Extend every column below its last core cell. The core column is
        // non-decreasing, so the last write per column wins.
        let mut last_core_row = vec![0usize; m];
        for (row, &col) in core.iter().enumerate() {
            last_core_row[col] = row;
        }
        for (col, &core_row) in last_core_row.iter().enumerate() {
            for row in core_row + 1..n {
                let d = distance(row, col);
                if d >= diag_max {
                    break;
                }
                matrix.store(row, col, d);
            }
        }

        log::debug!(
            "banded distance matrix {}x{}: {} cells set, {} evaluations, diag_max={:?}",
            n,
            m,
            matrix.set_count(),
            evaluations,
            diag_max
        );

        Self {
            matrix,
            diag_max,
            transposed,
            evaluations,
            scale,
        }
    }

    pub fn matrix(&self) -> &DistanceMatrix<T> {
        &self.matrix
    }

    /// Largest distance on the core diagonal.
    pub fn diag_max(&self) -> T {
        self.diag_max
    }

    /// `true` when rows index the second trajectory.
    pub fn is_transposed(&self) -> bool {
        self.transposed
    }

    /// Point-distance evaluations performed, including rejected cells.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    pub fn into_matrix(self) -> DistanceMatrix<T> {
        self.matrix
    }

    pub(crate) fn scale(&self) -> Scale<T> {
        self.scale
    }
}

/// Column paired with `row` on the core diagonal of an `n x m` matrix.
///
/// With `q = n / m` and `r = n % m`, the first `r` columns receive `q + 1`
/// rows each and the remaining ones `q` rows, so the diagonal runs from
/// `(0, 0)` to `(n - 1, m - 1)` and advances by at most one column per row.
///
/// Requires `n >= m >= 1`, which the transposition in
/// [`BandedDistanceMatrix::build`] guarantees for validated input.
pub(crate) fn core_column(row: usize, n: usize, m: usize) -> usize {
    debug_assert!(m >= 1 && n >= m, "core diagonal needs n >= m >= 1, got {}x{}", n, m);
    let q = n / m;
    let r = n % m;
    if row <= r * (q + 1) {
        row / (q + 1)
    } else {
        (row - r) / q
    }
}
