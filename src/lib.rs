//! # Matrix Calculator
//!
//! A small dense matrix value type. Shapes are fixed at construction, element
//! values are mutable in place.
//!
//! ## Semantics worth knowing
//!
//! - `+` and `*` are element-wise and return `Result`, failing with
//!   [`MatrixError::SizeMismatch`] when the shapes differ. `*` is the Hadamard
//!   product, not row-by-column multiplication.
//! - Equality, ordering and hashing compare the sum of all elements only.
//! - A matrix is truthy iff its element sum is strictly positive.
//!
//! ## Quick Start
//!
//! ```rust
//! use matrix_calculator::Matrix;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut m = Matrix::<f64>::new(2, 2);
//! m[(0, 0)] = 1.0; m[(0, 1)] = 2.0;
//! m[(1, 0)] = 3.0; m[(1, 1)] = 4.0;
//!
//! assert_eq!(m.to_string(), "1\t2\t\n3\t4\t\n");
//! assert_eq!(m.determinant()?, -2.0);
//!
//! let doubled = (&m + &m)?;
//! assert!(doubled > m);
//! # Ok(())
//! # }
//! ```

pub mod numerics;

// Re-export commonly used types for convenience
pub use numerics::error::MatrixError;
pub use numerics::types::matrix::Matrix;
pub use numerics::types::traits::FloatingPoint;

/// Version information for the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration for determinant computation
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixConfig {
    /// Largest size solved by cofactor expansion; larger matrices use elimination.
    /// Sizes up to 2 always use the closed form.
    pub cofactor_limit: usize,
    /// Pivot magnitude, relative to the largest absolute entry, at or below
    /// which elimination reports a singular matrix
    pub singular_tolerance: f64,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            cofactor_limit: 4,
            singular_tolerance: 1e-12,
        }
    }
}

impl MatrixConfig {
    /// Always use cofactor expansion. Exact for integral inputs, O(n!) time.
    pub fn exact() -> Self {
        Self {
            cofactor_limit: usize::MAX,
            ..Self::default()
        }
    }

    /// Use elimination for everything larger than 2x2
    pub fn fast() -> Self {
        Self {
            cofactor_limit: 2,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_config_defaults() {
        let config = MatrixConfig::default();
        assert_eq!(config.cofactor_limit, 4);
        assert_eq!(config.singular_tolerance, 1e-12);
    }

    #[test]
    fn test_presets_keep_tolerance() {
        assert_eq!(MatrixConfig::exact().singular_tolerance, MatrixConfig::default().singular_tolerance);
        assert_eq!(MatrixConfig::fast().cofactor_limit, 2);
    }

    #[test]
    fn test_version_constant() {
        assert!(!VERSION.is_empty());
    }
}
