// src/numerics/types/determinant.rs
// Determinant of square matrices.

use crate::numerics::error::MatrixError;
use crate::numerics::types::matrix::Matrix;
use crate::numerics::types::traits::FloatingPoint;
use crate::MatrixConfig;

impl<T: FloatingPoint> Matrix<T> {
    /// Determinant using the default [`MatrixConfig`].
    ///
    /// # Returns
    /// * `Ok(T)` - The determinant; `ad - bc` for a 2x2 matrix
    /// * `Err(MatrixError::InvalidOperation)` - The matrix is not square
    pub fn determinant(&self) -> Result<T, MatrixError> {
        self.determinant_with(&MatrixConfig::default())
    }

    /// Determinant with an explicit configuration.
    ///
    /// Sizes up to `config.cofactor_limit` use cofactor expansion along the
    /// first row. Larger matrices use Gaussian elimination with partial
    /// pivoting, which accumulates rounding error: results for
    /// ill-conditioned input are approximate.
    pub fn determinant_with(&self, config: &MatrixConfig) -> Result<T, MatrixError> {
        if !self.is_square() {
            tracing::debug!(rows = self.rows(), columns = self.columns(), "determinant of non-square matrix");
            return Err(MatrixError::InvalidOperation(format!(
                "determinant requires a square matrix, got {}x{}",
                self.rows(),
                self.columns()
            )));
        }

        let n = self.rows();
        let values = self.as_slice();
        if n <= config.cofactor_limit.max(2) {
            tracing::trace!(n, "determinant by cofactor expansion");
            Ok(cofactor_expansion(values, n))
        } else {
            tracing::trace!(n, tolerance = config.singular_tolerance, "determinant by elimination");
            Ok(elimination(values.to_vec(), n, config.singular_tolerance))
        }
    }
}

fn cofactor_expansion<T: FloatingPoint>(m: &[T], n: usize) -> T {
    match n {
        0 => T::one(),
        1 => m[0],
        2 => m[0] * m[3] - m[1] * m[2],
        _ => {
            let mut result = T::zero();
            let mut minor = Vec::with_capacity((n - 1) * (n - 1));
            for column in 0..n {
                minor.clear();
                for i in 1..n {
                    for j in (0..n).filter(|&j| j != column) {
                        minor.push(m[i * n + j]);
                    }
                }

                let term = m[column] * cofactor_expansion(&minor, n - 1);
                result = if column % 2 == 0 { result + term } else { result - term };
            }
            result
        }
    }
}

fn elimination<T: FloatingPoint>(mut m: Vec<T>, n: usize, tolerance: f64) -> T {
    // Tolerance is relative to the largest absolute entry.
    let scale = m.iter().map(|v| v.abs().to_f64()).fold(0.0, f64::max);
    let threshold = tolerance * scale;
    let mut det = T::one();
    for k in 0..n {
        let pivot_row = (k..n)
            .max_by(|&a, &b| {
                m[a * n + k]
                    .abs()
                    .partial_cmp(&m[b * n + k].abs())
                    .unwrap_or(core::cmp::Ordering::Equal)
            })
            .unwrap_or(k);

        let pivot = m[pivot_row * n + k];
        if pivot.abs().to_f64() <= threshold {
            return T::zero();
        }
        if pivot_row != k {
            for j in 0..n {
                m.swap(k * n + j, pivot_row * n + j);
            }
            det = -det;
        }

        det = det * pivot;
        for i in (k + 1)..n {
            let factor = m[i * n + k] / pivot;
            for j in (k + 1)..n {
                m[i * n + j] = m[i * n + j] - factor * m[k * n + j];
            }
        }
    }
    det
}
