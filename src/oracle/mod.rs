//! Distance oracles.
//!
//! An oracle answers pairwise distance queries for a fixed instance.
//! Location identifiers at this boundary are **1-based** (`1..=dimension`),
//! the convention of TSPLIB-style instances. Tours are 0-based internally and
//! translate at the call site.

mod euclidean;
mod matrix;

pub use euclidean::EuclideanPlane;
pub use matrix::DistanceMatrix;

use crate::error::OracleError;

/// Source of pairwise distances for a problem instance.
///
/// Implementations must be deterministic for a fixed instance and return
/// non-negative distances. Asymmetric instances are allowed:
/// `distance(a, b)` need not equal `distance(b, a)`.
pub trait DistanceOracle: Send + Sync {
    /// Number of locations in the instance.
    fn dimension(&self) -> usize;

    /// Distance travelled from location `from` to location `to` (1-based ids).
    fn distance(&self, from: usize, to: usize) -> Result<f64, OracleError>;
}

impl<O: DistanceOracle + ?Sized> DistanceOracle for &O {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn distance(&self, from: usize, to: usize) -> Result<f64, OracleError> {
        (**self).distance(from, to)
    }
}

/// Maps a 1-based identifier onto a 0-based index, rejecting unknown ids.
pub(crate) fn location_index(id: usize, dimension: usize) -> Result<usize, OracleError> {
    if id == 0 || id > dimension {
        return Err(OracleError::UnknownLocation { id, dimension });
    }
    Ok(id - 1)
}
