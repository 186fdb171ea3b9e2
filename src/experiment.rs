//! Repeated independent trials and summary statistics.
//!
//! Each trial is a separate [`AnnealingEngine`] with its own seed, so trials
//! share no state. With the `parallel` feature they run on the rayon thread
//! pool; results are identical either way since every trial is seeded
//! deterministically.

use crate::error::{AnnealError, Result};
use crate::oracle::DistanceOracle;
use crate::sa::{AnnealConfig, AnnealResult, AnnealingEngine};
use crate::tour::Tour;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info};

/// Outcome of a batch of trials on one instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialSummary {
    /// Seed used by each trial.
    pub seeds: Vec<u64>,
    /// Best tour length of each trial.
    pub costs: Vec<f64>,
    /// Steps executed by each trial.
    pub steps: Vec<usize>,
    /// Mean of `costs`.
    pub mean_cost: f64,
    /// Sample standard deviation of `costs` (0 for a single trial).
    pub std_cost: f64,
    /// Shortest tour over all trials (earliest trial on ties).
    pub best: Tour,
    /// Length of `best`.
    pub best_cost: f64,
    /// Per-step value history of each trial; empty when history is disabled.
    pub trajectories: Vec<Vec<f64>>,
}

impl TrialSummary {
    /// Element-wise mean of the trial trajectories.
    pub fn mean_trajectory(&self) -> Vec<f64> {
        mean_trajectory(&self.trajectories)
    }
}

/// Runs `trials` independent annealing runs on `oracle`.
///
/// Trial `i` uses seed `base + i`, where `base` is `config.seed` or a random
/// value when unset.
///
/// # Errors
///
/// Fails if `trials` is zero or any trial fails; the first error in trial
/// order is returned.
///
/// # Examples
///
/// ```
/// use u_satsp::experiment::run_trials;
/// use u_satsp::oracle::EuclideanPlane;
/// use u_satsp::sa::AnnealConfig;
///
/// let plane = EuclideanPlane::new(vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap();
/// let config = AnnealConfig::default().with_max_steps(500).with_seed(1);
/// let summary = run_trials(&plane, &config, 3).unwrap();
/// assert_eq!(summary.costs.len(), 3);
/// ```
pub fn run_trials<O: DistanceOracle>(
    oracle: &O,
    config: &AnnealConfig,
    trials: usize,
) -> Result<TrialSummary> {
    if trials == 0 {
        return Err(AnnealError::InvalidConfig(
            "at least one trial is required".into(),
        ));
    }
    config.validate()?;

    let base = config.seed.unwrap_or_else(rand::random);
    let seeds: Vec<u64> = (0..trials as u64).map(|i| base.wrapping_add(i)).collect();
    info!(event = "trials_start", trials, base_seed = base);

    let run_one = |seed: u64| -> Result<AnnealResult> {
        let trial_config = config.clone().with_seed(seed);
        let result = AnnealingEngine::new(oracle, trial_config)?.run()?;
        debug!(event = "trial_end", seed, cost = result.best_cost(), steps = result.steps);
        Ok(result)
    };

    #[cfg(feature = "parallel")]
    let results: Vec<AnnealResult> = seeds
        .par_iter()
        .map(|&seed| run_one(seed))
        .collect::<Result<_>>()?;
    #[cfg(not(feature = "parallel"))]
    let results: Vec<AnnealResult> = seeds
        .iter()
        .map(|&seed| run_one(seed))
        .collect::<Result<_>>()?;

    let summary = summarize(seeds, results);
    info!(
        event = "trials_end",
        trials,
        mean_cost = summary.mean_cost,
        std_cost = summary.std_cost,
        best_cost = summary.best_cost,
    );
    Ok(summary)
}

/// Folds per-trial results into a summary. `results` must not be empty.
fn summarize(seeds: Vec<u64>, mut results: Vec<AnnealResult>) -> TrialSummary {
    let costs: Vec<f64> = results.iter().map(AnnealResult::best_cost).collect();
    let steps = results.iter().map(|r| r.steps).collect();
    let (mean_cost, std_cost) = mean_and_std(&costs);

    let mut best_idx = 0;
    for (i, &c) in costs.iter().enumerate() {
        if c < costs[best_idx] {
            best_idx = i;
        }
    }

    let trajectories = results
        .iter_mut()
        .map(|r| std::mem::take(&mut r.history))
        .filter(|t| !t.is_empty())
        .collect();
    let best: Tour = results.swap_remove(best_idx).best;

    TrialSummary {
        best_cost: costs[best_idx],
        seeds,
        costs,
        steps,
        mean_cost,
        std_cost,
        best,
        trajectories,
    }
}

/// Mean and sample standard deviation. The deviation of fewer than two
/// values is 0.
pub fn mean_and_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    if values.len() < 2 {
        return (mean, 0.0);
    }
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, var.sqrt())
}

/// Element-wise mean of several value trajectories.
///
/// A run that stopped early kept its last value, so shorter trajectories
/// are extended with their final entry up to the longest length. Empty
/// trajectories are ignored.
pub fn mean_trajectory(trajectories: &[Vec<f64>]) -> Vec<f64> {
    let runs: Vec<&Vec<f64>> = trajectories.iter().filter(|t| !t.is_empty()).collect();
    let len = runs.iter().map(|t| t.len()).max().unwrap_or(0);
    let count = runs.len() as f64;
    (0..len)
        .map(|i| {
            runs.iter()
                .map(|t| t.get(i).or_else(|| t.last()).copied().unwrap_or(0.0))
                .sum::<f64>()
                / count
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::{DistanceMatrix, EuclideanPlane};
    use crate::sa::MoveKind;
    use crate::tour::is_permutation;

    fn ring(n: usize) -> EuclideanPlane {
        let points = (0..n)
            .map(|i| {
                let a = i as f64 / n as f64 * std::f64::consts::TAU;
                (a.cos(), a.sin())
            })
            .collect();
        EuclideanPlane::new(points).unwrap()
    }

    #[test]
    fn test_mean_and_std() {
        let (mean, std) = mean_and_std(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((mean - 5.0).abs() < 1e-12);
        // sample variance = 32 / 7
        assert!((std - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_mean_and_std_single() {
        assert_eq!(mean_and_std(&[3.5]), (3.5, 0.0));
        assert_eq!(mean_and_std(&[]), (0.0, 0.0));
    }

    #[test]
    fn test_mean_trajectory_pads_short_runs() {
        let mean = mean_trajectory(&[vec![-4.0, -2.0, -1.0], vec![-6.0], vec![]]);
        assert_eq!(mean, vec![-5.0, -4.0, -3.5]);
    }

    #[test]
    fn test_mean_trajectory_empty() {
        assert!(mean_trajectory(&[]).is_empty());
    }

    #[test]
    fn test_run_trials_summary() {
        let plane = ring(12);
        let config = AnnealConfig::default()
            .with_max_steps(2_000)
            .with_stale_after(500)
            .with_seed(100);
        let summary = run_trials(&plane, &config, 4).unwrap();
        assert_eq!(summary.seeds, vec![100, 101, 102, 103]);
        assert_eq!(summary.costs.len(), 4);
        assert_eq!(summary.trajectories.len(), 4);
        assert!(is_permutation(&summary.best));
        let min = summary.costs.iter().cloned().fold(f64::INFINITY, f64::min);
        assert_eq!(summary.best_cost, min);
        let recomputed = crate::sa::tour_length(&plane, &summary.best).unwrap();
        assert!((recomputed - summary.best_cost).abs() < 1e-9);
        assert!(summary.std_cost >= 0.0);
        for (steps, trajectory) in summary.steps.iter().zip(&summary.trajectories) {
            assert_eq!(*steps, trajectory.len());
        }
    }

    #[test]
    fn test_run_trials_reproducible() {
        let plane = ring(10);
        let config = AnnealConfig::default()
            .with_max_steps(1_000)
            .with_moves([MoveKind::Swap])
            .with_seed(7);
        let a = run_trials(&plane, &config, 3).unwrap();
        let b = run_trials(&plane, &config, 3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_run_trials_zero() {
        let plane = ring(5);
        assert!(matches!(
            run_trials(&plane, &AnnealConfig::default(), 0),
            Err(AnnealError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_run_trials_propagates_oracle_error() {
        let m = DistanceMatrix::from_entries(4, &[(1, 2, 1.0)]).unwrap();
        let config = AnnealConfig::default().with_seed(1);
        assert!(matches!(
            run_trials(&m, &config, 2),
            Err(AnnealError::Oracle(_))
        ));
    }

    #[test]
    fn test_history_disabled_no_trajectories() {
        let plane = ring(6);
        let config = AnnealConfig::default()
            .with_max_steps(100)
            .with_history(false)
            .with_seed(3);
        let summary = run_trials(&plane, &config, 2).unwrap();
        assert!(summary.trajectories.is_empty());
        assert!(summary.mean_trajectory().is_empty());
    }
}
