//! The cast dispatch table and its factory.

use spmx_core::{Builtin, Complex32, Complex64, ScalarType, TypeCode};

use crate::convert::CastFrom;

/// A cast routine: `f(dst, src, size)` writes `src` converted to the
/// destination type into `dst`.
///
/// Builtin routines read `X::SIZE` bytes from `src`, write `Z::SIZE` bytes
/// to `dst`, and ignore `size`. [`copy_user_user`] copies exactly `size`
/// bytes. Buffers shorter than that panic.
pub type CastFn = fn(&mut [u8], &[u8], usize);

fn cast_builtin<Z, X>(dst: &mut [u8], src: &[u8], _size: usize)
where
    Z: Builtin + CastFrom<X>,
    X: Builtin,
{
    Z::cast_from(X::read(src)).write(dst);
}

/// Copy `size` bytes from `src` to `dst` with no interpretation.
///
/// Used for every pair involving a user-defined type, whose layout is
/// unknown here. `size` is trusted: it must be the destination type's size.
pub fn copy_user_user(dst: &mut [u8], src: &[u8], size: usize) {
    dst[..size].copy_from_slice(&src[..size]);
}

macro_rules! cast_row {
    ($z:ty; $($x:ty),*) => {
        [$(cast_builtin::<$z, $x> as CastFn),*]
    };
}

// Row and column order must match TypeCode ordinals.
macro_rules! cast_table {
    ($($z:ty),*) => {
        [$(cast_row!($z; bool, i8, u8, i16, u16, i32, u32, i64, u64, f32, f64, Complex32, Complex64)),*]
    };
}

/// Specialised routines for every ordered builtin pair.
///
/// Indexed `[destination ordinal][source ordinal]`.
pub static BUILTIN_CASTS: [[CastFn; TypeCode::BUILTIN_COUNT]; TypeCode::BUILTIN_COUNT] = cast_table!(
    bool, i8, u8, i16, u16, i32, u32, i64, u64, f32, f64, Complex32, Complex64
);

/// Resolve the routine that casts a `src`-typed value to `dst`.
///
/// Total over all code pairs. Builtin pairs get their specialised routine;
/// if either side is user-defined the result is [`copy_user_user`].
pub fn cast_factory(dst: TypeCode, src: TypeCode) -> CastFn {
    match (dst.builtin_index(), src.builtin_index()) {
        (Some(z), Some(x)) => BUILTIN_CASTS[z][x],
        _ => copy_user_user,
    }
}

/// [`cast_factory`] for scalar types.
pub fn cast_factory_for(dst: ScalarType, src: ScalarType) -> CastFn {
    cast_factory(dst.code(), src.code())
}
