//! Dense distance matrix.

use super::{location_index, DistanceOracle};
use crate::error::{AnnealError, OracleError, Result};

/// Distance oracle backed by an `n × n` adjacency matrix.
///
/// Entries may be absent; querying an absent pair yields
/// [`OracleError::MissingDistance`]. The matrix may be asymmetric.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    cells: Vec<Option<f64>>,
    dimension: usize,
}

impl DistanceMatrix {
    /// Builds a complete matrix from rows. Row `i` holds the distances
    /// leaving location `i + 1`.
    ///
    /// # Errors
    ///
    /// Returns [`AnnealError::InvalidOracle`] if the rows do not form a
    /// square matrix or contain a negative or non-finite distance.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_satsp::oracle::{DistanceMatrix, DistanceOracle};
    ///
    /// let m = DistanceMatrix::from_rows(vec![
    ///     vec![0.0, 2.0],
    ///     vec![3.0, 0.0],
    /// ]).unwrap();
    /// assert_eq!(m.distance(1, 2), Ok(2.0));
    /// assert_eq!(m.distance(2, 1), Ok(3.0));
    /// ```
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let dimension = rows.len();
        let mut cells = Vec::with_capacity(dimension * dimension);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != dimension {
                return Err(AnnealError::InvalidOracle(format!(
                    "row {} has {} entries, expected {dimension}",
                    i + 1,
                    row.len()
                )));
            }
            for (j, d) in row.into_iter().enumerate() {
                check_distance(i + 1, j + 1, d)?;
                cells.push(Some(d));
            }
        }
        Ok(Self { cells, dimension })
    }

    /// Builds a sparse matrix from `(from, to, distance)` triples with
    /// 1-based ids. Pairs not listed stay undefined.
    ///
    /// # Errors
    ///
    /// Returns [`AnnealError::InvalidOracle`] for an id outside
    /// `1..=dimension` or a negative or non-finite distance.
    pub fn from_entries(dimension: usize, entries: &[(usize, usize, f64)]) -> Result<Self> {
        let mut cells = vec![None; dimension * dimension];
        for &(from, to, d) in entries {
            let i = location_index(from, dimension)
                .map_err(|e| AnnealError::InvalidOracle(e.to_string()))?;
            let j = location_index(to, dimension)
                .map_err(|e| AnnealError::InvalidOracle(e.to_string()))?;
            check_distance(from, to, d)?;
            cells[i * dimension + j] = Some(d);
        }
        Ok(Self { cells, dimension })
    }
}

fn check_distance(from: usize, to: usize, d: f64) -> Result<()> {
    if !d.is_finite() || d < 0.0 {
        return Err(AnnealError::InvalidOracle(format!(
            "distance from {from} to {to} must be finite and non-negative, got {d}"
        )));
    }
    Ok(())
}

impl DistanceOracle for DistanceMatrix {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn distance(&self, from: usize, to: usize) -> std::result::Result<f64, OracleError> {
        let i = location_index(from, self.dimension)?;
        let j = location_index(to, self.dimension)?;
        self.cells[i * self.dimension + j].ok_or(OracleError::MissingDistance { from, to })
    }
}
