//! Tour representation.

use crate::error::{AnnealError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::Deref;

/// A visiting order over all locations of an instance.
///
/// Holds a permutation of `0..len` (0-based location indices); the tour
/// returns from its last location to its first. Every constructor upholds
/// the permutation invariant, and moves build new tours rather than
/// editing existing ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct Tour(Vec<usize>);

impl Tour {
    /// The identity order `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// A uniformly random permutation of `0..n`.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(rng);
        Self(order)
    }

    /// Wraps `order` after checking it is a permutation of `0..order.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`AnnealError::InvalidTour`] on an out-of-range or repeated
    /// index.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_satsp::Tour;
    ///
    /// assert!(Tour::from_vec(vec![2, 0, 1]).is_ok());
    /// assert!(Tour::from_vec(vec![0, 0, 1]).is_err());
    /// ```
    pub fn from_vec(order: Vec<usize>) -> Result<Self> {
        let n = order.len();
        let mut seen = vec![false; n];
        for &v in &order {
            if v >= n {
                return Err(AnnealError::InvalidTour(format!(
                    "index {v} out of range for {n} locations"
                )));
            }
            if seen[v] {
                return Err(AnnealError::InvalidTour(format!("index {v} appears twice")));
            }
            seen[v] = true;
        }
        Ok(Self(order))
    }

    /// Wraps a sequence a move produced from a valid tour.
    pub(crate) fn from_vec_unchecked(order: Vec<usize>) -> Self {
        debug_assert!(is_permutation(&order));
        Self(order)
    }

    /// The visiting order as 0-based indices.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Consumes the tour, returning its visiting order.
    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    /// The visiting order as 1-based location identifiers.
    pub fn location_ids(&self) -> Vec<usize> {
        self.0.iter().map(|&i| i + 1).collect()
    }
}

impl Deref for Tour {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl TryFrom<Vec<usize>> for Tour {
    type Error = AnnealError;

    fn try_from(order: Vec<usize>) -> Result<Self> {
        Self::from_vec(order)
    }
}

impl From<Tour> for Vec<usize> {
    fn from(tour: Tour) -> Self {
        tour.0
    }
}

impl AsRef<[usize]> for Tour {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

/// Whether `order` contains every index of `0..order.len()` exactly once.
pub fn is_permutation(order: &[usize]) -> bool {
    let mut seen = vec![false; order.len()];
    order.iter().all(|&v| v < seen.len() && !std::mem::replace(&mut seen[v], true))
}
