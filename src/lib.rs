//! Trajectory similarity measures: banded discrete Fréchet distance and
//! randomized directed Hausdorff distance.
//!
//! ## Features
//! - **Banded Fréchet**: only cells near an evenly spread diagonal are computed
//! - **Exact Fréchet**: full dynamic programming for comparison
//! - **Directed Hausdorff**: shuffled traversal with running-maximum pruning
//! - **Generic scalars**: any `geo::CoordFloat` (`f32`, `f64`), any dimension
//!
//! ```rust
//! use spatio_similarity::{directed_hausdorff, frechet_distance, hausdorff_distance};
//!
//! let a = vec![[0.0_f64, 0.0], [1.0, 0.0], [2.0, 0.0]];
//! let b = vec![[0.0_f64, 1.0], [1.0, 1.0], [2.0, 1.0]];
//!
//! assert_eq!(frechet_distance(&a, &b)?, 1.0);
//! assert_eq!(directed_hausdorff(&a, &b)?, 1.0);
//!
//! // Symmetric Hausdorff is the larger of both directions.
//! assert_eq!(hausdorff_distance(&a, &b)?, 1.0);
//! # Ok::<(), spatio_similarity::SimilarityError>(())
//! ```

pub mod compute;
pub mod config;
pub mod error;
pub mod similarity;
pub mod trajectory;

pub use config::{FrechetStrategy, SimilarityConfig};
pub use error::{Result, SimilarityError};
pub use similarity::TrajectorySimilarity;

pub use compute::banded::{BandedDistanceMatrix, DistanceMatrix};
pub use compute::frechet::{
    CouplingMatrix, FrechetCoupling, exact_frechet_distance, frechet_distance,
};
pub use compute::hausdorff::{
    directed_hausdorff, directed_hausdorff_in_order, directed_hausdorff_with_rng,
    hausdorff_distance,
};
pub use compute::metric::{Coordinates, euclidean_distance, squared_euclidean_distance};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Result, SimilarityError};

    pub use crate::{FrechetStrategy, SimilarityConfig, TrajectorySimilarity};

    pub use crate::{Coordinates, euclidean_distance};

    pub use crate::{
        directed_hausdorff, exact_frechet_distance, frechet_distance, hausdorff_distance,
    };
}
