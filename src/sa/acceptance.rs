//! Acceptance criteria.
//!
//! Values follow the maximization framing of [`tour_value`](super::tour_value):
//! a candidate is better when its value is larger.

use rand::Rng;

/// Decides whether the search moves to a candidate tour.
pub trait AcceptanceCriterion {
    /// Returns `true` to replace the current tour with the candidate.
    ///
    /// `step` is the 0-based index of the step being taken. Implementations
    /// draw any randomness from `rng`.
    fn accept<R: Rng + ?Sized>(&self, current: f64, candidate: f64, step: usize, rng: &mut R)
        -> bool;
}

/// Step-power acceptance.
///
/// Strict improvements are always taken. Otherwise, with
/// `ΔV = candidate - current ≤ 0`, the candidate is taken with probability
/// `(1 + step)^ΔV`. The base grows with the step count, so worsening moves
/// become rarer as the run progresses without an explicit temperature.
///
/// Unlike the Metropolis rule `exp(ΔV / T)`, the scale of `ΔV` is not
/// normalized here: on instances with large edge lengths almost no
/// worsening move survives past the first few steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepPowerAcceptance;

impl StepPowerAcceptance {
    pub fn new() -> Self {
        Self
    }

    /// Probability of accepting a non-improving candidate at `step`.
    pub fn probability(current: f64, candidate: f64, step: usize) -> f64 {
        (1.0 + step as f64).powf(candidate - current)
    }
}

impl AcceptanceCriterion for StepPowerAcceptance {
    fn accept<R: Rng + ?Sized>(
        &self,
        current: f64,
        candidate: f64,
        step: usize,
        rng: &mut R,
    ) -> bool {
        if candidate > current {
            return true;
        }
        rng.random::<f64>() < Self::probability(current, candidate, step)
    }
}

/// Hill climbing: accepts only strict improvements and never draws.
#[derive(Debug, Clone, Copy, Default)]
pub struct HillClimbing;

impl HillClimbing {
    pub fn new() -> Self {
        Self
    }
}

impl AcceptanceCriterion for HillClimbing {
    fn accept<R: Rng + ?Sized>(
        &self,
        current: f64,
        candidate: f64,
        _step: usize,
        _rng: &mut R,
    ) -> bool {
        candidate > current
    }
}
