// src/numerics/types/arithmetic.rs
// Element-wise addition and multiplication between equally shaped matrices.
//
// The operators return `Result` because the shapes are only known at runtime.

use core::ops::{Add, Mul};

use crate::numerics::error::MatrixError;
use crate::numerics::types::matrix::Matrix;
use crate::numerics::types::traits::FloatingPoint;

impl<T: FloatingPoint> Matrix<T> {
    /// Cell-by-cell sum.
    ///
    /// # Returns
    /// * `Ok(Matrix)` - `result[(i, j)] == self[(i, j)] + other[(i, j)]`
    /// * `Err(MatrixError::SizeMismatch)` - The shapes differ
    pub fn try_add(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.zip_with(other, "addition", |a, b| a + b)
    }

    /// Hadamard product: `result[(i, j)] == self[(i, j)] * other[(i, j)]`.
    ///
    /// This is not row-by-column multiplication; both operands must have the
    /// same shape, otherwise `MatrixError::SizeMismatch` is returned.
    pub fn hadamard(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.zip_with(other, "multiplication", |a, b| a * b)
    }

    fn zip_with(
        &self,
        other: &Matrix<T>,
        operation: &'static str,
        f: impl Fn(T, T) -> T,
    ) -> Result<Matrix<T>, MatrixError> {
        if self.shape() != other.shape() {
            return Err(MatrixError::size_mismatch(operation, self.shape(), other.shape()));
        }
        let values = self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix::from_parts(self.rows(), self.columns(), values))
    }
}

impl<'a, T: FloatingPoint> Add<&'a Matrix<T>> for &'a Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn add(self, other: &'a Matrix<T>) -> Self::Output {
        self.try_add(other)
    }
}

impl<T: FloatingPoint> Add for Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn add(self, other: Self) -> Self::Output {
        self.try_add(&other)
    }
}

impl<'a, T: FloatingPoint> Mul<&'a Matrix<T>> for &'a Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn mul(self, other: &'a Matrix<T>) -> Self::Output {
        self.hadamard(other)
    }
}

impl<T: FloatingPoint> Mul for Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn mul(self, other: Self) -> Self::Output {
        self.hadamard(&other)
    }
}
