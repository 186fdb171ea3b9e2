//! Tour value function.

use crate::error::Result;
use crate::oracle::DistanceOracle;

/// Negated cyclic length of `tour`: `-Σ d(t[i], t[(i+1) mod n])`.
///
/// Larger values mean shorter tours. `tour` holds 0-based indices, which are
/// shifted to the oracle's 1-based identifiers for each lookup.
///
/// # Errors
///
/// Propagates the first oracle failure.
///
/// # Examples
///
/// ```
/// use u_satsp::oracle::EuclideanPlane;
/// use u_satsp::sa::tour_value;
///
/// let plane = EuclideanPlane::new(vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap();
/// assert_eq!(tour_value(&plane, &[0, 1, 2, 3]).unwrap(), -4.0);
/// ```
pub fn tour_value<O: DistanceOracle + ?Sized>(oracle: &O, tour: &[usize]) -> Result<f64> {
    let successors = tour.iter().skip(1).chain(tour.first());
    let mut length = 0.0;
    for (&from, &to) in tour.iter().zip(successors) {
        length += oracle.distance(from + 1, to + 1)?;
    }
    Ok(-length)
}

/// Total cyclic length of `tour`, the cost a report would show.
pub fn tour_length<O: DistanceOracle + ?Sized>(oracle: &O, tour: &[usize]) -> Result<f64> {
    tour_value(oracle, tour).map(|v| -v)
}
