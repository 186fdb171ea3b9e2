//! Annealing engine and execution loop.
//!
//! # Algorithm
//!
//! 1. Start from a uniformly random permutation; it is also the best tour
//! 2. At each step `n`:
//!    a. Propose a neighbor with a randomly chosen move kind
//!    b. Evaluate it and ask the acceptance criterion
//!    c. On acceptance, move there; record a copy if it beats the best
//! 3. Stop once `n` reaches the step budget or more than `stale_after`
//!    steps have passed since the last improvement of the best tour

use super::acceptance::{AcceptanceCriterion, StepPowerAcceptance};
use super::config::AnnealConfig;
use super::neighbor::propose_move;
use super::types::{StepOutcome, StopReason};
use super::value::tour_value;
use crate::error::{AnnealError, Result};
use crate::oracle::DistanceOracle;
use crate::random::{rng_from_seed, AnnealRng};
use crate::tour::Tour;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, trace};

/// Mutable record of a search in progress.
#[derive(Debug, Clone)]
pub struct SearchState {
    /// Tour the search currently sits on.
    pub current: Tour,
    /// Value of `current`.
    pub current_value: f64,
    /// Best tour seen so far (an independent copy).
    pub best: Tour,
    /// Value of `best`.
    pub best_value: f64,
    /// Number of steps executed.
    pub step: usize,
    /// Step index at which `best` was last improved.
    pub last_update: usize,
}

/// Result of a completed annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult {
    /// The best tour found.
    pub best: Tour,

    /// Value of the best tour (negated length).
    pub best_value: f64,

    /// Total number of steps executed.
    pub steps: usize,

    /// Step index of the last improvement of the best tour.
    pub last_update: usize,

    /// Number of accepted candidates (including improvements).
    pub accepted_moves: usize,

    /// Number of accepted candidates that beat the current tour.
    pub improving_moves: usize,

    /// Why the run ended.
    pub stop_reason: StopReason,

    /// Current value after every step; empty when history is disabled.
    pub history: Vec<f64>,
}

impl AnnealResult {
    /// Length of the best tour.
    pub fn best_cost(&self) -> f64 {
        -self.best_value
    }
}

/// Simulated annealing over tours of one instance.
///
/// The engine owns its oracle handle (pass `&oracle` to borrow), its
/// acceptance criterion and its random generator, so independent engines
/// share no state.
///
/// # Examples
///
/// ```
/// use u_satsp::oracle::EuclideanPlane;
/// use u_satsp::sa::{AnnealConfig, AnnealingEngine};
///
/// let plane = EuclideanPlane::new(vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap();
/// let config = AnnealConfig::default().with_max_steps(1_000).with_seed(7);
/// let mut engine = AnnealingEngine::new(&plane, config).unwrap();
/// let result = engine.run().unwrap();
/// assert!(result.best_cost() >= 4.0 - 1e-9);
/// ```
#[derive(Debug)]
pub struct AnnealingEngine<O, A = StepPowerAcceptance, R = AnnealRng> {
    oracle: O,
    config: AnnealConfig,
    acceptance: A,
    rng: R,
    state: SearchState,
    history: Vec<f64>,
    accepted_moves: usize,
    improving_moves: usize,
    cancelled: bool,
}

impl<O: DistanceOracle> AnnealingEngine<O> {
    /// Creates an engine with step-power acceptance and a generator seeded
    /// from `config.seed`.
    ///
    /// # Errors
    ///
    /// Fails on an invalid configuration, an instance with fewer than two
    /// locations, or an oracle error while evaluating the initial tour.
    pub fn new(oracle: O, config: AnnealConfig) -> Result<Self> {
        let rng = rng_from_seed(config.seed);
        Self::with_parts(oracle, config, StepPowerAcceptance, rng)
    }
}

impl<O, A, R> AnnealingEngine<O, A, R>
where
    O: DistanceOracle,
    A: AcceptanceCriterion,
    R: Rng,
{
    /// Creates an engine with an injected acceptance criterion and random
    /// generator. `config.seed` is ignored; `rng` drives every draw.
    pub fn with_parts(oracle: O, config: AnnealConfig, acceptance: A, mut rng: R) -> Result<Self> {
        config.validate()?;
        let dimension = oracle.dimension();
        if dimension < 2 {
            return Err(AnnealError::InvalidDimension(dimension));
        }

        let current = Tour::random(dimension, &mut rng);
        let current_value = tour_value(&oracle, &current)?;
        let state = SearchState {
            best: current.clone(),
            best_value: current_value,
            current,
            current_value,
            step: 0,
            last_update: 0,
        };

        let history = if config.record_history {
            Vec::with_capacity(config.max_steps.min(1 << 20))
        } else {
            Vec::new()
        };

        Ok(Self {
            oracle,
            config,
            acceptance,
            rng,
            state,
            history,
            accepted_moves: 0,
            improving_moves: 0,
            cancelled: false,
        })
    }

    pub fn config(&self) -> &AnnealConfig {
        &self.config
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn best_tour(&self) -> &Tour {
        &self.state.best
    }

    pub fn best_value(&self) -> f64 {
        self.state.best_value
    }

    /// Number of steps executed so far.
    pub fn steps(&self) -> usize {
        self.state.step
    }

    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// The reason the engine has stopped, or `None` while it is still searching.
    pub fn stop_reason(&self) -> Option<StopReason> {
        if self.cancelled {
            Some(StopReason::Cancelled)
        } else if self.state.step >= self.config.max_steps {
            Some(StopReason::StepBudget)
        } else if self.state.step - self.state.last_update > self.config.stale_after {
            Some(StopReason::Stale)
        } else {
            None
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stop_reason().is_some()
    }

    /// Executes one step of the search.
    ///
    /// Returns [`StepOutcome::Stopped`] without drawing anything once a
    /// stopping condition holds.
    ///
    /// # Errors
    ///
    /// Propagates oracle failures. The state is left as it was before the
    /// step, including the recorded best tour.
    pub fn step(&mut self) -> Result<StepOutcome> {
        if self.is_stopped() {
            return Ok(StepOutcome::Stopped);
        }

        let n = self.state.step;
        let (mv, candidate) = propose_move(&self.state.current, &self.config.moves, &mut self.rng);
        let candidate_value = tour_value(&self.oracle, &candidate)?;

        let outcome = if self.acceptance.accept(
            self.state.current_value,
            candidate_value,
            n,
            &mut self.rng,
        ) {
            self.accepted_moves += 1;
            if candidate_value > self.state.current_value {
                self.improving_moves += 1;
            }
            self.state.current = candidate;
            self.state.current_value = candidate_value;

            if self.state.current_value > self.state.best_value {
                self.state.best = self.state.current.clone();
                self.state.best_value = self.state.current_value;
                self.state.last_update = n;
                debug!(event = "new_best", step = n, cost = -self.state.best_value);
                StepOutcome::Improved
            } else {
                StepOutcome::Accepted
            }
        } else {
            StepOutcome::Rejected
        };

        trace!(step = n, ?mv, ?outcome, value = self.state.current_value);

        if self.config.record_history {
            self.history.push(self.state.current_value);
        }
        self.state.step += 1;
        Ok(outcome)
    }

    /// Runs until a stopping condition holds.
    pub fn run(&mut self) -> Result<AnnealResult> {
        self.run_with_cancel(None)
    }

    /// Runs until a stopping condition holds or `cancel` is raised.
    ///
    /// The flag is polled before every step.
    pub fn run_with_cancel(&mut self, cancel: Option<Arc<AtomicBool>>) -> Result<AnnealResult> {
        let started = Instant::now();
        info!(
            event = "anneal_start",
            dimension = self.oracle.dimension(),
            max_steps = self.config.max_steps,
            stale_after = self.config.stale_after,
            moves = ?self.config.moves.as_slice(),
            initial_cost = -self.state.current_value,
        );

        let stop_reason = loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    self.cancelled = true;
                }
            }
            if let Some(reason) = self.stop_reason() {
                break reason;
            }
            self.step()?;
        };

        info!(
            event = "anneal_end",
            steps = self.state.step,
            last_update = self.state.last_update,
            best_cost = -self.state.best_value,
            accepted_moves = self.accepted_moves,
            stop_reason = ?stop_reason,
            duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );

        Ok(AnnealResult {
            best: self.state.best.clone(),
            best_value: self.state.best_value,
            steps: self.state.step,
            last_update: self.state.last_update,
            accepted_moves: self.accepted_moves,
            improving_moves: self.improving_moves,
            stop_reason,
            history: self.history.clone(),
        })
    }
}
