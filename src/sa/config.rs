//! Engine configuration.

use super::types::{MoveKind, MoveSet};
use crate::error::{AnnealError, Result};

/// Configuration for an annealing run.
///
/// # Examples
///
/// ```
/// use u_satsp::sa::{AnnealConfig, MoveKind};
///
/// let config = AnnealConfig::default()
///     .with_max_steps(50_000)
///     .with_stale_after(5_000)
///     .with_moves([MoveKind::Swap, MoveKind::FlipSubroute])
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnnealConfig {
    /// Step budget `N`. The run never executes more steps than this.
    pub max_steps: usize,

    /// Steps allowed without improving the best tour before stopping.
    pub stale_after: usize,

    /// Move kinds the neighbor generator draws from.
    pub moves: MoveSet,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Whether to keep the current value after every step.
    pub record_history: bool,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            max_steps: 100_000,
            stale_after: 10_000,
            moves: MoveSet::all(),
            seed: None,
            record_history: true,
        }
    }
}

impl AnnealConfig {
    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    pub fn with_stale_after(mut self, n: usize) -> Self {
        self.stale_after = n;
        self
    }

    pub fn with_moves(mut self, moves: impl IntoIterator<Item = MoveKind>) -> Self {
        self.moves = MoveSet::new(moves);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.moves.is_empty() {
            return Err(AnnealError::InvalidConfig(
                "at least one move kind must be enabled".into(),
            ));
        }
        Ok(())
    }
}
