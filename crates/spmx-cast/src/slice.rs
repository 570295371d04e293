//! Casting contiguous runs of values.

use spmx_core::{CoreError, ScalarType};

use crate::factory::cast_factory_for;

/// Cast `n` packed `src_type` values into `dst` as `dst_type` values.
///
/// The routine is resolved once. Values are strided by each type's size.
/// Pairs with a user-defined side are byte copies and therefore require
/// both sizes to agree. Malformed types are rejected by
/// [`ScalarType::validate`].
pub fn cast_slice(
    dst: &mut [u8],
    dst_type: ScalarType,
    src: &[u8],
    src_type: ScalarType,
    n: usize,
) -> Result<(), CoreError> {
    dst_type.validate()?;
    src_type.validate()?;
    let dst_size = dst_type.size();
    let src_size = src_type.size();

    if (dst_type.is_opaque() || src_type.is_opaque()) && dst_size != src_size {
        return Err(CoreError::SizeMismatch {
            expected: dst_size,
            actual: src_size,
        });
    }
    check_len(dst.len(), n, dst_size)?;
    check_len(src.len(), n, src_size)?;

    let f = cast_factory_for(dst_type, src_type);
    for (z, x) in dst
        .chunks_exact_mut(dst_size)
        .zip(src.chunks_exact(src_size))
        .take(n)
    {
        f(z, x, dst_size);
    }
    Ok(())
}

fn check_len(actual: usize, n: usize, size: usize) -> Result<(), CoreError> {
    let expected = n.checked_mul(size).ok_or(CoreError::SizeMismatch {
        expected: usize::MAX,
        actual,
    })?;
    if actual < expected {
        return Err(CoreError::SizeMismatch { expected, actual });
    }
    Ok(())
}
