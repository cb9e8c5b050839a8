//! Principal eigenpair of a general real matrix.

use nalgebra::{DMatrix, DVector, Schur, SVD};

use super::ConsistencyError;
use crate::domain::foundation::SquareMatrix;

const MAX_ITERATIONS: usize = 10_000;

/// Returns n for an n×n matrix.
pub(crate) fn ensure_square(matrix: &SquareMatrix) -> Result<usize, ConsistencyError> {
    let (rows, cols) = matrix.shape();
    if rows != cols {
        return Err(ConsistencyError::NotSquare { rows, cols });
    }
    Ok(rows)
}

/// Largest real part among all (possibly complex) eigenvalues.
pub fn principal_eigenvalue(matrix: &SquareMatrix) -> Result<f64, ConsistencyError> {
    let n = ensure_square(matrix)?;
    match n {
        0 => return Err(ConsistencyError::EmptyMatrix),
        1 => return Ok(matrix[(0, 0)]),
        _ => {}
    }

    let schur = Schur::try_new(matrix.clone(), f64::EPSILON, MAX_ITERATIONS)
        .ok_or(ConsistencyError::DecompositionFailed("Schur"))?;

    Ok(schur
        .complex_eigenvalues()
        .iter()
        .map(|eigenvalue| eigenvalue.re)
        .fold(f64::NEG_INFINITY, f64::max))
}

/// Eigenvector of the eigenvalue with the largest real part.
///
/// Taken as the right singular vector of `A - λI` with the smallest singular
/// value. The sign is arbitrary.
pub fn principal_eigenvector(matrix: &SquareMatrix) -> Result<DVector<f64>, ConsistencyError> {
    let lambda = principal_eigenvalue(matrix)?;
    let n = matrix.nrows();
    if n == 1 {
        return Ok(DVector::from_element(1, 1.0));
    }

    let shifted = matrix - DMatrix::<f64>::identity(n, n) * lambda;
    let svd = SVD::try_new(shifted, false, true, f64::EPSILON, MAX_ITERATIONS)
        .ok_or(ConsistencyError::DecompositionFailed("SVD"))?;
    let v_t = svd
        .v_t
        .ok_or(ConsistencyError::DecompositionFailed("SVD"))?;

    let smallest = svd
        .singular_values
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(index, _)| index)
        .ok_or(ConsistencyError::EmptyMatrix)?;

    Ok(v_t.row(smallest).transpose())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::matrix::from_rows;

    fn saaty_example() -> SquareMatrix {
        from_rows(&[
            vec![1.0, 3.0, 5.0],
            vec![1.0 / 3.0, 1.0, 3.0],
            vec![1.0 / 5.0, 1.0 / 3.0, 1.0],
        ])
        .unwrap()
    }

    #[test]
    fn eigenvalue_of_near_consistent_matrix_is_close_to_n() {
        let lambda = principal_eigenvalue(&saaty_example()).unwrap();
        assert!((3.0..=3.1).contains(&lambda), "lambda = {}", lambda);
    }

    #[test]
    fn eigenvalue_of_one_by_one_matrix_is_its_entry() {
        let m = from_rows(&[vec![1.0]]).unwrap();
        assert_eq!(principal_eigenvalue(&m).unwrap(), 1.0);
    }

    #[test]
    fn empty_matrix_is_rejected() {
        let m = SquareMatrix::zeros(0, 0);
        assert_eq!(principal_eigenvalue(&m), Err(ConsistencyError::EmptyMatrix));
    }

    #[test]
    fn non_square_matrix_is_rejected() {
        let m = DMatrix::from_element(2, 3, 1.0);
        assert_eq!(
            principal_eigenvalue(&m),
            Err(ConsistencyError::NotSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn eigenvector_satisfies_eigen_equation() {
        let m = saaty_example();
        let lambda = principal_eigenvalue(&m).unwrap();
        let v = principal_eigenvector(&m).unwrap();
        let residual = &m * &v - &v * lambda;
        assert!(residual.norm() < 1e-8, "residual = {}", residual.norm());
    }

    #[test]
    fn cyclic_matrix_has_real_principal_eigenvalue() {
        let m = from_rows(&[
            vec![1.0, 9.0, 1.0 / 9.0],
            vec![1.0 / 9.0, 1.0, 9.0],
            vec![9.0, 1.0 / 9.0, 1.0],
        ])
        .unwrap();
        let lambda = principal_eigenvalue(&m).unwrap();
        assert!((lambda - (1.0 + 9.0 + 1.0 / 9.0)).abs() < 1e-8);
    }
}
