//! Error types for trajectory similarity queries.

use thiserror::Error;

/// Errors returned by distance computations and configuration loading.
#[derive(Error, Debug)]
pub enum SimilarityError {
    /// One of the trajectories has no points.
    #[error("{which} trajectory is empty")]
    EmptyTrajectory { which: &'static str },

    /// Two points do not share the same number of coordinates.
    #[error("dimension mismatch: expected {expected} coordinates, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A point with zero coordinates.
    #[error("points must have at least one coordinate")]
    ZeroDimension,

    /// NaN or infinite coordinate value.
    #[error("non-finite coordinate in {which} trajectory at point {index}, axis {axis}")]
    NonFiniteCoordinate {
        which: &'static str,
        index: usize,
        axis: usize,
    },

    /// The band never reached the terminal cell of the coupling matrix.
    #[error("band does not cover terminal cell ({row}, {col}) of a {rows}x{cols} matrix")]
    BandCoverage {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// The distance between finite points exceeds the scalar type's range.
    #[error("distance overflows the coordinate scalar type")]
    DistanceOverflow,

    /// Write outside the bounds of a distance matrix.
    #[error("cell ({row}, {col}) is outside a {rows}x{cols} matrix")]
    CellOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A caller-supplied traversal order is not a permutation of the point indices.
    #[error("traversal order for {which} trajectory is not a permutation of 0..{len}")]
    InvalidTraversalOrder { which: &'static str, len: usize },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[cfg(feature = "toml")]
    #[error("TOML parse error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SimilarityError>;
