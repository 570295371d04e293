//! Pending-list error types.

use std::error::Error;
use std::fmt;

use spmx_core::CoreError;

/// Errors from pending-list growth and tuple appends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PendingError {
    /// Growth failed. The list has been torn down and the handle is absent.
    OutOfMemory {
        /// Capacity, in tuples, that growth tried to reach.
        requested: usize,
        /// Capacity, in tuples, before the attempt.
        capacity: usize,
    },
    /// The handle holds no pending list.
    NoList,
    /// `count + nnew` does not fit in `usize`. The list has been torn down.
    CapacityOverflow {
        /// Tuples already stored.
        count: usize,
        /// Tuples requested.
        nnew: usize,
    },
    /// More tuples were committed than the reserved tail holds.
    CommitOverrun {
        /// Tuples the caller tried to commit.
        requested: usize,
        /// Free slots in the tail.
        available: usize,
    },
    /// A value buffer did not match the list's element size.
    ValueSize {
        /// The list's element size in bytes.
        expected: usize,
        /// Length of the supplied value.
        actual: usize,
    },
    /// A matrix list was given a tuple without a column index.
    MissingColumn,
    /// A vector list was given a tuple with a column index.
    UnexpectedColumn,
    /// The requested layout differs from the layout of the existing list.
    LayoutMismatch,
    /// The layout's value type is malformed, e.g. a builtin variant holding
    /// a user-defined code. No list is created.
    InvalidValueType {
        /// Why the value type was rejected.
        reason: CoreError,
    },
}

impl fmt::Display for PendingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "out of memory growing pending list from {capacity} to {requested} tuples"
                )
            }
            Self::NoList => write!(f, "no pending list"),
            Self::CapacityOverflow { count, nnew } => {
                write!(f, "pending list capacity overflow: {count} + {nnew} tuples")
            }
            Self::CommitOverrun {
                requested,
                available,
            } => {
                write!(
                    f,
                    "commit of {requested} tuples exceeds {available} reserved slots"
                )
            }
            Self::ValueSize { expected, actual } => {
                write!(f, "value is {actual} bytes, pending list holds {expected}-byte values")
            }
            Self::MissingColumn => write!(f, "matrix pending tuple has no column index"),
            Self::UnexpectedColumn => write!(f, "vector pending tuple has a column index"),
            Self::LayoutMismatch => write!(f, "layout differs from existing pending list"),
            Self::InvalidValueType { reason } => {
                write!(f, "invalid pending value type: {reason}")
            }
        }
    }
}

impl Error for PendingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidValueType { reason } => Some(reason),
            _ => None,
        }
    }
}
