use nalgebra::{DMatrix, DVector};

use crate::error::{ApproximationError, Result};

/// Square tridiagonal system.
/// - `lower` - sub-diagonal, `lower[i]` multiplies `x[i - 1]` in row `i` (`lower[0]` unused),
/// - `diagonal` - main diagonal,
/// - `upper` - super-diagonal, `upper[i]` multiplies `x[i + 1]` in row `i` (last entry unused),
/// - `rhs` - right hand side.
#[derive(Debug, Clone)]
pub struct TridiagonalSystem {
    lower: Vec<f64>,
    diagonal: Vec<f64>,
    upper: Vec<f64>,
    rhs: Vec<f64>,
}

impl TridiagonalSystem {
    /// Identity system of size `n` with zero right hand side.
    pub fn identity(n: usize) -> Self {
        TridiagonalSystem {
            lower: vec![0.0; n],
            diagonal: vec![1.0; n],
            upper: vec![0.0; n],
            rhs: vec![0.0; n],
        }
    }

    pub fn set_row(&mut self, row: usize, lower: f64, diagonal: f64, upper: f64, rhs: f64) {
        self.lower[row] = lower;
        self.diagonal[row] = diagonal;
        self.upper[row] = upper;
        self.rhs[row] = rhs;
    }

    pub fn size(&self) -> usize {
        self.diagonal.len()
    }

    /// Thomas algorithm.
    pub fn solve(&self) -> Result<Vec<f64>> {
        let n = self.size();
        if n == 0 {
            return Ok(Vec::new());
        }

        let mut c_prime = vec![0.0; n];
        let mut d_prime = vec![0.0; n];

        if self.diagonal[0].abs() < 1e-300 {
            return Err(ApproximationError::singular("zero pivot in row 0"));
        }
        c_prime[0] = self.upper[0] / self.diagonal[0];
        d_prime[0] = self.rhs[0] / self.diagonal[0];

        for i in 1..n {
            let denominator = self.diagonal[i] - self.lower[i] * c_prime[i - 1];
            if denominator.abs() < 1e-300 {
                return Err(ApproximationError::singular(format!("zero pivot in row {i}")));
            }
            c_prime[i] = self.upper[i] / denominator;
            d_prime[i] = (self.rhs[i] - self.lower[i] * d_prime[i - 1]) / denominator;
        }

        let mut x = vec![0.0; n];
        x[n - 1] = d_prime[n - 1];
        for i in (0..n - 1).rev() {
            x[i] = d_prime[i] - c_prime[i] * x[i + 1];
        }
        Ok(x)
    }

    /// Solves the same system as a dense matrix with LU decomposition.
    pub fn solve_dense(&self) -> Result<Vec<f64>> {
        let (matrix, rhs) = self.to_dense();
        let solution = match matrix.lu().solve(&rhs) {
            Some(solution) => solution,
            None => return Err(ApproximationError::singular("dense LU decomposition failed")),
        };
        Ok(solution.iter().copied().collect())
    }

    pub fn to_dense(&self) -> (DMatrix<f64>, DVector<f64>) {
        let n = self.size();
        let mut matrix = DMatrix::<f64>::zeros(n, n);
        for i in 0..n {
            matrix[(i, i)] = self.diagonal[i];
            if i > 0 {
                matrix[(i, i - 1)] = self.lower[i];
            }
            if i + 1 < n {
                matrix[(i, i + 1)] = self.upper[i];
            }
        }
        (matrix, DVector::from_vec(self.rhs.clone()))
    }
}
