//! Simulated annealing search for short closed tours.
//!
//! Given a set of locations and a distance oracle, the crate searches for a
//! short tour visiting every location once and returning to the start (the
//! Traveling Salesperson Problem):
//!
//! - **Tour**: a permutation of 0-based location indices.
//! - **Oracles**: [`oracle::DistanceOracle`] answers 1-based distance
//!   queries; dense matrices and Euclidean point sets are provided.
//! - **Simulated Annealing (SA)**: value function, neighbor moves (swap,
//!   subroute flip, subroute relocation), acceptance criteria and the
//!   annealing engine with step and staleness budgets.
//! - **Experiments**: repeated seeded trials with summary statistics,
//!   optionally in parallel.
//!
//! # Example
//!
//! ```
//! use u_satsp::oracle::EuclideanPlane;
//! use u_satsp::sa::{AnnealConfig, AnnealingEngine};
//!
//! let plane = EuclideanPlane::new(vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap();
//! let config = AnnealConfig::default().with_max_steps(2_000).with_seed(42);
//! let result = AnnealingEngine::new(&plane, config).unwrap().run().unwrap();
//! println!("best tour {:?} with length {}", result.best.location_ids(), result.best_cost());
//! ```

pub mod error;
pub mod experiment;
pub mod oracle;
pub mod random;
pub mod sa;
pub mod tour;

pub use error::{AnnealError, OracleError, Result};
pub use tour::Tour;
