//! Staging single-entry writes into a pending list.
//!
//! A write arrives as a scalar of some type; the pending list stores values
//! of the matrix's type. [`set_element`] resolves the cast once, converts
//! the scalar into a scratch buffer, and appends the tuple.

use std::error::Error;
use std::fmt;

use smallvec::SmallVec;
use spmx_cast::cast_factory_for;
use spmx_core::{Builtin, CoreError, Index, ScalarType};
use spmx_pending::{GrowAlloc, PendingError, PendingHandle, PendingLayout};

/// Scratch for one converted value; builtins never spill to the heap.
type ScalarBuf = SmallVec<[u8; 16]>;

/// Errors from staging a write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StageError {
    /// The input scalar does not fit its declared type or cannot be
    /// byte-copied into the list's value type.
    Scalar(CoreError),
    /// The pending list rejected the tuple or failed to grow.
    Pending(PendingError),
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(err) => write!(f, "invalid scalar: {err}"),
            Self::Pending(err) => write!(f, "pending list: {err}"),
        }
    }
}

impl Error for StageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Scalar(err) => Some(err),
            Self::Pending(err) => Some(err),
        }
    }
}

impl From<CoreError> for StageError {
    fn from(err: CoreError) -> Self {
        Self::Scalar(err)
    }
}

impl From<PendingError> for StageError {
    fn from(err: PendingError) -> Self {
        Self::Pending(err)
    }
}

/// Cast `scalar` to the list's value type and append `(row, col, value)`.
///
/// Both types must pass [`ScalarType::validate`], and `scalar` must be
/// exactly `scalar_type.size()` bytes. A user-defined type
/// on either side is a raw copy, so both sizes must then agree. On a
/// growth failure the handle is left absent, as with
/// [`PendingHandle::add`].
pub fn set_element<A: GrowAlloc>(
    pending: &mut PendingHandle<A>,
    layout: PendingLayout,
    row: Index,
    col: Option<Index>,
    scalar: &[u8],
    scalar_type: ScalarType,
) -> Result<(), StageError> {
    let dst_type = layout.value_type;
    dst_type.validate()?;
    scalar_type.validate()?;
    if scalar.len() != scalar_type.size() {
        return Err(CoreError::SizeMismatch {
            expected: scalar_type.size(),
            actual: scalar.len(),
        }
        .into());
    }
    if (dst_type.is_opaque() || scalar_type.is_opaque()) && dst_type.size() != scalar_type.size() {
        return Err(CoreError::SizeMismatch {
            expected: dst_type.size(),
            actual: scalar_type.size(),
        }
        .into());
    }

    let cast = cast_factory_for(dst_type, scalar_type);
    let mut value: ScalarBuf = SmallVec::from_elem(0, dst_type.size());
    cast(&mut value, scalar, dst_type.size());

    if let Err(err) = pending.add(layout, row, col, &value) {
        log::debug!("staging ({row}, {col:?}) as {dst_type} failed: {err}");
        return Err(err.into());
    }
    Ok(())
}

/// [`set_element`] for a typed builtin scalar.
pub fn set_typed<A: GrowAlloc, T: Builtin>(
    pending: &mut PendingHandle<A>,
    layout: PendingLayout,
    row: Index,
    col: Option<Index>,
    scalar: T,
) -> Result<(), StageError> {
    let mut buf: ScalarBuf = SmallVec::from_elem(0, T::SIZE);
    scalar.write(&mut buf);
    set_element(pending, layout, row, col, &buf, ScalarType::Builtin(T::CODE))
}
