//! Distance algorithms over trajectories.
//!
//! - `metric`: Euclidean point-distance primitive
//! - `banded`: band-limited pairwise distance matrix
//! - `frechet`: coupling sweep and discrete Fréchet distance
//! - `hausdorff`: randomized directed Hausdorff distance
//! - `validation`: input checks shared by all of the above

pub mod banded;
pub mod frechet;
pub mod hausdorff;
pub mod metric;
pub mod validation;
