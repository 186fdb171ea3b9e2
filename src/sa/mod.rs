//! Simulated Annealing (SA) over tours.
//!
//! A single-solution trajectory search: each step proposes a neighbor of
//! the current tour, and worse neighbors are accepted with a probability
//! that decays as the step count grows, letting the search leave local
//! optima early on and settle later.
//!
//! Values use a maximization framing: the value of a tour is its negated
//! length, so larger is better.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod acceptance;
mod config;
mod neighbor;
mod runner;
mod types;
mod value;

pub use acceptance::{AcceptanceCriterion, HillClimbing, StepPowerAcceptance};
pub use config::AnnealConfig;
pub use neighbor::{propose, propose_move, Move};
pub use runner::{AnnealResult, AnnealingEngine, SearchState};
pub use types::{MoveKind, MoveSet, StepOutcome, StopReason};
pub use value::{tour_length, tour_value};
