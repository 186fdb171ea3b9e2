//! Move kinds and step/stop outcomes.

/// Neighborhood move families available to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveKind {
    /// Exchange the locations at two positions.
    Swap,
    /// Reverse the order of a contiguous stretch of the tour.
    FlipSubroute,
    /// Cut a contiguous stretch out and reinsert it elsewhere.
    MoveSubroute,
}

impl MoveKind {
    /// All move kinds, in declaration order.
    pub const ALL: [MoveKind; 3] = [
        MoveKind::Swap,
        MoveKind::FlipSubroute,
        MoveKind::MoveSubroute,
    ];
}

/// The set of move kinds a run may draw from.
///
/// Kinds are kept sorted and free of duplicates, so each listed kind is
/// drawn with equal probability.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Vec<MoveKind>", into = "Vec<MoveKind>")
)]
pub struct MoveSet(Vec<MoveKind>);

impl MoveSet {
    /// Builds a set from any collection of kinds, dropping duplicates.
    pub fn new(kinds: impl IntoIterator<Item = MoveKind>) -> Self {
        let mut kinds: Vec<MoveKind> = kinds.into_iter().collect();
        kinds.sort();
        kinds.dedup();
        Self(kinds)
    }

    /// Every move kind.
    pub fn all() -> Self {
        Self(MoveKind::ALL.to_vec())
    }

    pub fn as_slice(&self) -> &[MoveKind] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Default for MoveSet {
    fn default() -> Self {
        Self::all()
    }
}

impl From<Vec<MoveKind>> for MoveSet {
    fn from(kinds: Vec<MoveKind>) -> Self {
        Self::new(kinds)
    }
}

impl From<MoveSet> for Vec<MoveKind> {
    fn from(set: MoveSet) -> Self {
        set.0
    }
}

impl FromIterator<MoveKind> for MoveSet {
    fn from_iter<I: IntoIterator<Item = MoveKind>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// What a single engine step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The candidate was accepted and is a new best tour.
    Improved,
    /// The candidate was accepted without beating the best tour.
    Accepted,
    /// The candidate was rejected; the current tour is unchanged.
    Rejected,
    /// The engine had already stopped; nothing happened.
    Stopped,
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The step budget was exhausted.
    StepBudget,
    /// Too many steps passed without improving the best tour.
    Stale,
    /// A cancellation flag was raised.
    Cancelled,
}
