//! Shape of a pending list, fixed at creation.

use spmx_core::ScalarType;

use crate::error::PendingError;

/// Value type and column presence of a pending list.
///
/// Decided once by the owning matrix before any tuple is added and never
/// changed for the lifetime of the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingLayout {
    /// Type of the stored values. Its size is the list's element size.
    pub value_type: ScalarType,
    /// Whether tuples carry a column index. False for vectors.
    pub has_cols: bool,
}

impl PendingLayout {
    /// Layout for a matrix: `(row, col, value)` tuples.
    pub fn matrix(value_type: ScalarType) -> Self {
        Self {
            value_type,
            has_cols: true,
        }
    }

    /// Layout for a vector: `(row, value)` tuples.
    pub fn vector(value_type: ScalarType) -> Self {
        Self {
            value_type,
            has_cols: false,
        }
    }

    /// Size in bytes of one stored value.
    pub fn elem_size(&self) -> usize {
        self.value_type.size()
    }

    /// Reject value types that cannot size a list.
    pub fn validate(&self) -> Result<(), PendingError> {
        self.value_type
            .validate()
            .map_err(|reason| PendingError::InvalidValueType { reason })
    }
}
