//! Error types for annealing runs and distance lookups.

use thiserror::Error;

/// Failure to resolve a distance between two locations.
///
/// Location identifiers in these variants are the 1-based ids used at the
/// oracle boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OracleError {
    /// The identifier lies outside `1..=dimension`.
    #[error("unknown location {id} (dimension {dimension})")]
    UnknownLocation { id: usize, dimension: usize },

    /// The instance defines no distance for this ordered pair.
    #[error("no distance defined from location {from} to location {to}")]
    MissingDistance { from: usize, to: usize },
}

/// Main error type for annealing operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnnealError {
    /// The instance has too few locations to form a tour.
    #[error("instance dimension must be at least 2, got {0}")]
    InvalidDimension(usize),

    /// Error in engine configuration.
    #[error("configuration error: {0}")]
    InvalidConfig(String),

    /// A sequence handed in as a tour is not a permutation.
    #[error("invalid tour: {0}")]
    InvalidTour(String),

    /// Distance data rejected while building an oracle.
    #[error("invalid distance data: {0}")]
    InvalidOracle(String),

    /// Distance lookup failed during evaluation.
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

/// Result type alias for annealing operations.
pub type Result<T> = std::result::Result<T, AnnealError>;
