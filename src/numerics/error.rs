// src/numerics/error.rs

/// Errors that can occur during matrix operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    #[error("Matrix size mismatch in {operation}: left is {}x{}, right is {}x{}", .left.0, .left.1, .right.0, .right.1)]
    SizeMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Ragged rows: row {row} has {found} columns, expected {expected}")]
    RaggedRows { row: usize, expected: usize, found: usize },

    #[error("Encoding failed: {0}")]
    Encoding(String),
}

impl MatrixError {
    pub(crate) fn size_mismatch(
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    ) -> Self {
        tracing::debug!(operation, ?left, ?right, "rejecting matrix operation on mismatched shapes");
        MatrixError::SizeMismatch { operation, left, right }
    }
}
