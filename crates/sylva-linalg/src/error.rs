use thiserror::Error;

/// Error type for matrix and vector operations.
///
/// Every variant is a deterministic, recoverable failure detected before any
/// numerical work is done on the offending operands.
#[derive(Error, Debug, PartialEq)]
pub enum LinalgError {
    /// Operand shapes are incompatible for the requested operation.
    ///
    /// # Examples
    /// - Adding a 2x3 matrix to a 3x2 matrix
    /// - Multiplying a 2x3 matrix by a 2x3 matrix
    /// - Building a rotation around an axis that is not a 3-vector
    #[error("Dimension mismatch: {message}. Expected shape: {expected}, got: {actual}")]
    DimensionMismatch {
        /// Human-readable description of the mismatch
        message: String,
        /// Expected shape description
        expected: String,
        /// Actual shape description
        actual: String,
    },

    /// The operation is only defined for square matrices.
    #[error("Matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Number of rows of the operand
        rows: usize,
        /// Number of columns of the operand
        cols: usize,
    },

    /// The matrix has no inverse because its determinant is zero.
    #[error("Matrix is singular: determinant is zero")]
    Singular,

    /// A 1-indexed row, column or element index is outside the valid range.
    ///
    /// Valid indices are `1..=size`.
    #[error("Index {index} out of range for dimension of size {size}")]
    OutOfRange {
        /// The invalid index that was attempted
        index: usize,
        /// The size of the dimension being indexed
        size: usize,
    },

    /// A grid used to build a matrix has rows of different lengths.
    #[error("Ragged rows: row {row} has {actual} elements, expected {expected}")]
    RaggedRows {
        /// Index (0-based) of the first row with the wrong length
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// The operands have valid shapes but the operation cannot act on them.
    ///
    /// # Examples
    /// - Substitution over a triangular matrix with a zero on its diagonal
    /// - Normalizing the zero vector
    #[error("Invalid operation: {operation} - {reason}")]
    InvalidOperation {
        /// Name of the operation that failed
        operation: String,
        /// Reason why the operation cannot be carried out
        reason: String,
    },
}

impl LinalgError {
    /// Creates a DimensionMismatch error with formatted shapes.
    pub fn dimension_mismatch(
        message: impl Into<String>,
        expected: &[usize],
        actual: &[usize],
    ) -> Self {
        Self::DimensionMismatch {
            message: message.into(),
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        }
    }

    /// Creates an OutOfRange error.
    pub fn out_of_range(index: usize, size: usize) -> Self {
        Self::OutOfRange { index, size }
    }

    /// Creates an InvalidOperation error.
    pub fn invalid_operation(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOperation {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error belongs to the dimensionality family.
    ///
    /// Non-square operands, singular matrices, ragged grids and shape
    /// mismatches are all reported to callers as dimensionality failures.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            Self::DimensionMismatch { .. }
                | Self::NotSquare { .. }
                | Self::Singular
                | Self::RaggedRows { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LinalgError::dimension_mismatch("cannot add matrices", &[2, 3], &[3, 2]);
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: cannot add matrices. Expected shape: [2, 3], got: [3, 2]"
        );
        assert_eq!(
            LinalgError::Singular.to_string(),
            "Matrix is singular: determinant is zero"
        );
        assert_eq!(
            LinalgError::out_of_range(0, 3).to_string(),
            "Index 0 out of range for dimension of size 3"
        );
    }

    #[test]
    fn test_error_families() {
        assert!(LinalgError::Singular.is_dimension_error());
        assert!(LinalgError::NotSquare { rows: 1, cols: 2 }.is_dimension_error());
        assert!(!LinalgError::out_of_range(4, 3).is_dimension_error());
        assert!(!LinalgError::invalid_operation("solve", "zero pivot").is_dimension_error());
    }
}
