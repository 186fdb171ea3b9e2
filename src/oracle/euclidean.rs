//! Points in the plane with straight-line distances.

use super::{location_index, DistanceOracle};
use crate::error::{AnnealError, OracleError, Result};

/// Distance oracle over 2-D coordinates using Euclidean distance.
///
/// Coordinates stay available through [`EuclideanPlane::coordinate`] so a
/// renderer can draw the resulting tour.
///
/// # Examples
///
/// ```
/// use u_satsp::oracle::{DistanceOracle, EuclideanPlane};
///
/// let plane = EuclideanPlane::new(vec![(0.0, 0.0), (3.0, 4.0)]).unwrap();
/// assert_eq!(plane.distance(1, 2), Ok(5.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EuclideanPlane {
    points: Vec<(f64, f64)>,
}

impl EuclideanPlane {
    /// Creates an instance from coordinates; location `i + 1` sits at `points[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`AnnealError::InvalidOracle`] if any coordinate is not finite.
    pub fn new(points: Vec<(f64, f64)>) -> Result<Self> {
        if let Some(i) = points
            .iter()
            .position(|&(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(AnnealError::InvalidOracle(format!(
                "location {} has non-finite coordinates",
                i + 1
            )));
        }
        Ok(Self { points })
    }

    /// Coordinates of location `id` (1-based).
    pub fn coordinate(&self, id: usize) -> std::result::Result<(f64, f64), OracleError> {
        let i = location_index(id, self.points.len())?;
        Ok(self.points[i])
    }

    /// Coordinates visited by a 0-based tour, closed back to its start.
    pub fn path(&self, tour: &[usize]) -> std::result::Result<Vec<(f64, f64)>, OracleError> {
        tour.iter()
            .chain(tour.first())
            .map(|&i| self.coordinate(i + 1))
            .collect()
    }
}

impl DistanceOracle for EuclideanPlane {
    fn dimension(&self) -> usize {
        self.points.len()
    }

    fn distance(&self, from: usize, to: usize) -> std::result::Result<f64, OracleError> {
        let (x1, y1) = self.coordinate(from)?;
        let (x2, y2) = self.coordinate(to)?;
        Ok((x1 - x2).hypot(y1 - y2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> EuclideanPlane {
        EuclideanPlane::new(vec![(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap()
    }

    #[test]
    fn test_distances() {
        let plane = unit_square();
        assert_eq!(plane.dimension(), 4);
        assert!((plane.distance(1, 2).unwrap() - 1.0).abs() < 1e-12);
        assert!((plane.distance(1, 3).unwrap() - 2f64.sqrt()).abs() < 1e-12);
        assert_eq!(plane.distance(2, 2), Ok(0.0));
    }

    #[test]
    fn test_unknown_location() {
        let plane = unit_square();
        assert_eq!(
            plane.distance(1, 5),
            Err(OracleError::UnknownLocation { id: 5, dimension: 4 })
        );
    }

    #[test]
    fn test_rejects_non_finite() {
        let err = EuclideanPlane::new(vec![(0.0, 0.0), (f64::INFINITY, 1.0)]).unwrap_err();
        assert!(matches!(err, AnnealError::InvalidOracle(_)));
    }

    #[test]
    fn test_path_closes_loop() {
        let plane = unit_square();
        let path = plane.path(&[2, 0, 1]).unwrap();
        assert_eq!(path, vec![(1.0, 1.0), (0.0, 0.0), (0.0, 1.0), (1.0, 1.0)]);
    }
}
