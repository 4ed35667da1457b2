// src/numerics/types/ordering.rs
// Comparison, hashing and truthiness, all derived from the element sum.
//
// Two matrices are equal when their sums are equal, whatever their layout or
// shape. Hash is computed from the same sum so that equal values hash equally.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use crate::numerics::types::matrix::Matrix;
use crate::numerics::types::traits::FloatingPoint;

impl<T: FloatingPoint> Matrix<T> {
    /// Total of all elements. An empty matrix sums to zero.
    pub fn sum(&self) -> T {
        self.as_slice().iter().fold(T::zero(), |acc, &v| acc + v)
    }

    /// True iff the element sum is strictly positive.
    pub fn is_truthy(&self) -> bool {
        self.sum() > T::zero()
    }

    /// Complement of [`Matrix::is_truthy`]: zero, negative and NaN sums are falsy.
    pub fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }
}

impl<T: FloatingPoint> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.sum() == other.sum()
    }
}

impl<T: FloatingPoint> PartialOrd for Matrix<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.sum().partial_cmp(&other.sum())
    }
}

impl<T: FloatingPoint> Hash for Matrix<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sum().hash_bits().hash(state);
    }
}
