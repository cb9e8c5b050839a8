//! Square matrix helpers shared by the comparison, consistency and aggregation modules.

use nalgebra::{DMatrix, Scalar};

use super::ValidationError;

/// Dense n×n real matrix.
pub type SquareMatrix = DMatrix<f64>;

/// Builds a square matrix from row-major data.
pub fn from_rows(rows: &[Vec<f64>]) -> Result<SquareMatrix, ValidationError> {
    let n = rows.len();
    for (index, row) in rows.iter().enumerate() {
        if row.len() != n {
            return Err(ValidationError::invalid_format(
                "matrix",
                format!("row {} has {} columns, expected {}", index, row.len(), n),
            ));
        }
    }
    Ok(DMatrix::from_fn(n, n, |i, j| rows[i][j]))
}

/// Copies a matrix out as row-major nested vectors.
pub fn to_rows<T: Scalar>(matrix: &DMatrix<T>) -> Vec<Vec<T>> {
    (0..matrix.nrows())
        .map(|i| (0..matrix.ncols()).map(|j| matrix[(i, j)].clone()).collect())
        .collect()
}

/// Returns true when every filled off-diagonal pair satisfies `m[j,i] == 1/m[i,j]`
/// within `tolerance`.
pub fn is_reciprocal(matrix: &SquareMatrix, tolerance: f64) -> bool {
    let n = matrix.nrows();
    for i in 0..n {
        for j in (i + 1)..n {
            let upper = matrix[(i, j)];
            if upper == 0.0 {
                return false;
            }
            if (matrix[(j, i)] - 1.0 / upper).abs() > tolerance {
                return false;
            }
        }
    }
    true
}

/// Serde adapter writing a matrix as `[[row0...], [row1...], ...]`.
pub mod rows {
    use nalgebra::{DMatrix, Scalar};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S, T>(matrix: &DMatrix<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Scalar + Serialize,
    {
        super::to_rows(matrix).serialize(serializer)
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<DMatrix<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Scalar + Deserialize<'de>,
    {
        let rows: Vec<Vec<T>> = Vec::deserialize(deserializer)?;
        let n = rows.len();
        if let Some(bad) = rows.iter().position(|row| row.len() != n) {
            return Err(D::Error::custom(format!(
                "matrix row {} has {} columns, expected {}",
                bad,
                rows[bad].len(),
                n
            )));
        }
        Ok(DMatrix::from_fn(n, n, |i, j| rows[i][j].clone()))
    }
}
