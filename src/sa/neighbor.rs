//! Neighbor generation.
//!
//! # Moves
//!
//! - [`Move::Swap`]: exchange two positions, O(1) edits
//! - [`Move::FlipSubroute`]: reverse `[start, stop)` (2-opt style), O(n)
//! - [`Move::MoveSubroute`]: relocate the block `[start, stop)` (or-opt style), O(n)
//!
//! Every move reads a tour and returns a fresh one; the input is never
//! touched.

use super::types::{MoveKind, MoveSet};
use crate::tour::Tour;
use rand::seq::index;
use rand::Rng;

/// A fully parameterized neighborhood move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Exchange the locations at positions `i` and `j`.
    Swap { i: usize, j: usize },
    /// Reverse positions `start..stop`.
    FlipSubroute { start: usize, stop: usize },
    /// Remove positions `start..stop`, then insert the block at
    /// `insert_at` in the remaining sequence.
    MoveSubroute {
        start: usize,
        stop: usize,
        insert_at: usize,
    },
}

impl Move {
    /// Draws the parameters of a `kind` move for a tour of length `n`.
    ///
    /// Position pairs are drawn uniformly without replacement; for the
    /// subroute moves they are sorted into `start < stop`. The insertion
    /// point of a relocation is drawn after the block is removed, from
    /// `0..=n - (stop - start)`.
    ///
    /// # Panics
    ///
    /// Panics if `n < 2`.
    pub fn sample<R: Rng + ?Sized>(kind: MoveKind, n: usize, rng: &mut R) -> Self {
        assert!(n >= 2, "a move needs at least 2 positions, got {n}");
        let picked = index::sample(rng, n, 2);
        let (a, b) = (picked.index(0), picked.index(1));
        let (start, stop) = (a.min(b), a.max(b));
        match kind {
            MoveKind::Swap => Move::Swap { i: a, j: b },
            MoveKind::FlipSubroute => Move::FlipSubroute { start, stop },
            MoveKind::MoveSubroute => {
                let insert_at = rng.random_range(0..=n - (stop - start));
                Move::MoveSubroute {
                    start,
                    stop,
                    insert_at,
                }
            }
        }
    }

    pub fn kind(&self) -> MoveKind {
        match self {
            Move::Swap { .. } => MoveKind::Swap,
            Move::FlipSubroute { .. } => MoveKind::FlipSubroute,
            Move::MoveSubroute { .. } => MoveKind::MoveSubroute,
        }
    }

    /// Returns the tour obtained by applying this move to `tour`.
    ///
    /// # Panics
    ///
    /// Panics if a position lies outside the tour.
    pub fn apply(&self, tour: &Tour) -> Tour {
        let mut order = tour.to_vec();
        match *self {
            Move::Swap { i, j } => order.swap(i, j),
            Move::FlipSubroute { start, stop } => order[start..stop].reverse(),
            Move::MoveSubroute {
                start,
                stop,
                insert_at,
            } => {
                let block: Vec<usize> = order.drain(start..stop).collect();
                let tail = order.split_off(insert_at);
                order.extend(block);
                order.extend(tail);
            }
        }
        Tour::from_vec_unchecked(order)
    }
}

/// Picks a move kind uniformly from `moves`, draws its parameters and
/// returns the resulting candidate together with the move that built it.
///
/// # Panics
///
/// Panics if `moves` is empty or the tour has fewer than 2 locations.
pub fn propose_move<R: Rng + ?Sized>(tour: &Tour, moves: &MoveSet, rng: &mut R) -> (Move, Tour) {
    let kinds = moves.as_slice();
    assert!(!kinds.is_empty(), "move set must not be empty");
    let kind = kinds[rng.random_range(0..kinds.len())];
    let mv = Move::sample(kind, tour.len(), rng);
    let candidate = mv.apply(tour);
    (mv, candidate)
}

/// Produces a candidate neighbor of `tour`. See [`propose_move`].
pub fn propose<R: Rng + ?Sized>(tour: &Tour, moves: &MoveSet, rng: &mut R) -> Tour {
    propose_move(tour, moves, rng).1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::tour::is_permutation;
    use proptest::prelude::*;

    fn tour(order: &[usize]) -> Tour {
        Tour::from_vec(order.to_vec()).unwrap()
    }

    #[test]
    fn test_swap_apply() {
        let t = tour(&[0, 1, 2, 3, 4]);
        let next = Move::Swap { i: 1, j: 3 }.apply(&t);
        assert_eq!(next.as_slice(), &[0, 3, 2, 1, 4]);
        assert_eq!(t.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_flip_apply() {
        let t = tour(&[0, 1, 2, 3, 4, 5]);
        let next = Move::FlipSubroute { start: 1, stop: 4 }.apply(&t);
        assert_eq!(next.as_slice(), &[0, 3, 2, 1, 4, 5]);
    }

    #[test]
    fn test_move_subroute_apply() {
        let t = tour(&[0, 1, 2, 3, 4, 5]);
        // remove [1, 2] -> [0, 3, 4, 5], insert at 3 -> [0, 3, 4, 1, 2, 5]
        let next = Move::MoveSubroute {
            start: 1,
            stop: 3,
            insert_at: 3,
        }
        .apply(&t);
        assert_eq!(next.as_slice(), &[0, 3, 4, 1, 2, 5]);
    }

    #[test]
    fn test_move_subroute_to_ends() {
        let t = tour(&[0, 1, 2, 3]);
        let front = Move::MoveSubroute {
            start: 2,
            stop: 4,
            insert_at: 0,
        }
        .apply(&t);
        assert_eq!(front.as_slice(), &[2, 3, 0, 1]);
        let back = Move::MoveSubroute {
            start: 0,
            stop: 1,
            insert_at: 3,
        }
        .apply(&t);
        assert_eq!(back.as_slice(), &[1, 2, 3, 0]);
    }

    #[test]
    fn test_sample_respects_kind() {
        let mut rng = create_rng(1);
        for kind in MoveKind::ALL {
            for _ in 0..50 {
                assert_eq!(Move::sample(kind, 6, &mut rng).kind(), kind);
            }
        }
    }

    #[test]
    fn test_sample_two_positions() {
        let mut rng = create_rng(3);
        for _ in 0..50 {
            match Move::sample(MoveKind::Swap, 2, &mut rng) {
                Move::Swap { i, j } => {
                    assert_ne!(i, j);
                    assert!(i < 2 && j < 2);
                }
                other => panic!("unexpected move {other:?}"),
            }
        }
    }

    #[test]
    fn test_propose_only_allowed_kinds() {
        let mut rng = create_rng(5);
        let moves = MoveSet::new([MoveKind::FlipSubroute]);
        let t = Tour::identity(8);
        for _ in 0..100 {
            let (mv, _) = propose_move(&t, &moves, &mut rng);
            assert_eq!(mv.kind(), MoveKind::FlipSubroute);
        }
    }

    #[test]
    fn test_propose_uses_every_kind() {
        let mut rng = create_rng(9);
        let moves = MoveSet::all();
        let t = Tour::identity(8);
        let mut seen = [false; 3];
        for _ in 0..300 {
            let (mv, _) = propose_move(&t, &moves, &mut rng);
            seen[mv.kind() as usize] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    #[should_panic]
    fn test_sample_single_location_panics() {
        Move::sample(MoveKind::Swap, 1, &mut create_rng(0));
    }

    proptest! {
        #[test]
        fn prop_swap_changes_exactly_two(n in 2usize..40, seed in any::<u64>()) {
            let mut rng = create_rng(seed);
            let t = Tour::random(n, &mut rng);
            let mv = Move::sample(MoveKind::Swap, n, &mut rng);
            let next = mv.apply(&t);
            prop_assert!(is_permutation(&next));
            let changed = t.iter().zip(next.iter()).filter(|(a, b)| a != b).count();
            prop_assert_eq!(changed, 2);
        }

        #[test]
        fn prop_flip_reverses_range(n in 2usize..40, seed in any::<u64>()) {
            let mut rng = create_rng(seed);
            let t = Tour::random(n, &mut rng);
            let mv = Move::sample(MoveKind::FlipSubroute, n, &mut rng);
            let Move::FlipSubroute { start, stop } = mv else {
                return Err(TestCaseError::fail("wrong move kind"));
            };
            let next = mv.apply(&t);
            prop_assert!(is_permutation(&next));
            prop_assert_eq!(&next[..start], &t[..start]);
            prop_assert_eq!(&next[stop..], &t[stop..]);
            let reversed: Vec<usize> = t[start..stop].iter().rev().copied().collect();
            prop_assert_eq!(&next[start..stop], reversed.as_slice());
        }

        #[test]
        fn prop_move_subroute_preserves_orders(n in 2usize..40, seed in any::<u64>()) {
            let mut rng = create_rng(seed);
            let t = Tour::random(n, &mut rng);
            let mv = Move::sample(MoveKind::MoveSubroute, n, &mut rng);
            let Move::MoveSubroute { start, stop, insert_at } = mv else {
                return Err(TestCaseError::fail("wrong move kind"));
            };
            let next = mv.apply(&t);
            prop_assert!(is_permutation(&next));

            let len = stop - start;
            prop_assert!(insert_at <= n - len);
            // block is contiguous and in order at its new position
            prop_assert_eq!(&next[insert_at..insert_at + len], &t[start..stop]);
            // everything else keeps its relative order
            let rest_before: Vec<usize> = t[..start].iter().chain(&t[stop..]).copied().collect();
            let rest_after: Vec<usize> = next[..insert_at]
                .iter()
                .chain(&next[insert_at + len..])
                .copied()
                .collect();
            prop_assert_eq!(rest_before, rest_after);
        }

        #[test]
        fn prop_propose_keeps_permutation(n in 2usize..40, seed in any::<u64>(), steps in 1usize..30) {
            let mut rng = create_rng(seed);
            let mut t = Tour::random(n, &mut rng);
            for _ in 0..steps {
                t = propose(&t, &MoveSet::all(), &mut rng);
                prop_assert!(is_permutation(&t));
                prop_assert_eq!(t.len(), n);
            }
        }
    }
}
