//! Similarity engine applying a [`SimilarityConfig`] to distance queries.

use crate::compute::banded::BandedDistanceMatrix;
use crate::compute::frechet::{banded_unchecked, exact_unchecked};
use crate::compute::hausdorff::{shuffled_unchecked, symmetric_unchecked};
use crate::compute::metric::Coordinates;
use crate::compute::validation::validate_pair;
use crate::config::{FrechetStrategy, SimilarityConfig};
use crate::error::Result;
use geo::CoordFloat;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Computes trajectory distances under one configuration.
///
/// Holds no state besides the configuration, so a single instance can be
/// shared across threads and queries.
///
/// ```rust
/// use spatio_similarity::{FrechetStrategy, SimilarityConfig, TrajectorySimilarity};
///
/// let engine = TrajectorySimilarity::with_config(
///     SimilarityConfig::default()
///         .with_frechet_strategy(FrechetStrategy::Exact)
///         .with_hausdorff_seed(7),
/// );
///
/// let a = vec![[0.0_f64, 0.0], [1.0, 0.0], [2.0, 0.0]];
/// let b = vec![[0.0_f64, 1.0], [2.0, 1.0]];
///
/// let frechet = engine.frechet(&a, &b)?;
/// let hausdorff = engine.hausdorff(&a, &b)?;
/// assert!(hausdorff <= frechet);
/// # Ok::<(), spatio_similarity::SimilarityError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TrajectorySimilarity {
    config: SimilarityConfig,
}

impl TrajectorySimilarity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SimilarityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimilarityConfig {
        &self.config
    }

    /// Discrete Fréchet distance using the configured strategy.
    pub fn frechet<P, Q, T>(&self, a: &[P], b: &[Q]) -> Result<T>
    where
        P: Coordinates<Scalar = T>,
        Q: Coordinates<Scalar = T>,
        T: CoordFloat,
    {
        validate_pair(a, b, self.config.require_finite)?;

        match self.config.frechet_strategy {
            FrechetStrategy::Banded => banded_unchecked(a, b),
            FrechetStrategy::Exact => exact_unchecked(a, b),
        }
    }

    /// The banded distance matrix the Fréchet sweep would run on.
    pub fn banded_matrix<P, Q, T>(&self, a: &[P], b: &[Q]) -> Result<BandedDistanceMatrix<T>>
    where
        P: Coordinates<Scalar = T>,
        Q: Coordinates<Scalar = T>,
        T: CoordFloat,
    {
        validate_pair(a, b, self.config.require_finite)?;
        Ok(BandedDistanceMatrix::build(a, b))
    }

    /// Directed Hausdorff distance from `a` to `b`.
    pub fn directed_hausdorff<P, Q, T>(&self, a: &[P], b: &[Q]) -> Result<T>
    where
        P: Coordinates<Scalar = T>,
        Q: Coordinates<Scalar = T>,
        T: CoordFloat,
    {
        validate_pair(a, b, self.config.require_finite)?;
        let mut rng = self.rng();
        shuffled_unchecked(a, b, &mut rng)
    }

    /// Symmetric Hausdorff distance, the larger of both directed distances.
    pub fn hausdorff<P, Q, T>(&self, a: &[P], b: &[Q]) -> Result<T>
    where
        P: Coordinates<Scalar = T>,
        Q: Coordinates<Scalar = T>,
        T: CoordFloat,
    {
        validate_pair(a, b, self.config.require_finite)?;
        let mut rng = self.rng();
        symmetric_unchecked(a, b, &mut rng)
    }

    fn rng(&self) -> StdRng {
        match self.config.hausdorff_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
