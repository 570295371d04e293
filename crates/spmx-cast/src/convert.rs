//! Value conversions between builtin scalars.
//!
//! Rules, for destination `Z` and source `X`:
//!
//! | source → destination | result |
//! |----------------------|--------|
//! | real → real          | Rust `as` (wrapping for integers, saturating float → int, NaN → 0) |
//! | anything → `bool`    | `x != 0`; complex is true if either part is nonzero |
//! | `bool` → number      | `false` → 0, `true` → 1 |
//! | complex → real       | real part, then `as` |
//! | real → complex       | `(x, 0)` |
//! | complex → complex    | each part with `as` |

use spmx_core::{Complex32, Complex64};

/// Conversion from builtin scalar `X` into `Self`.
pub trait CastFrom<X>: Sized {
    /// Convert `x`.
    fn cast_from(x: X) -> Self;
}

/// Convert `x` to `Z` with the builtin cast rules.
pub fn cast<Z: CastFrom<X>, X>(x: X) -> Z {
    Z::cast_from(x)
}

// Internal arms come first so `@` is never offered to a `ty` matcher.
macro_rules! impl_real {
    (@from $z:ty; $($x:ty),*) => {
        $(
            #[allow(clippy::unnecessary_cast)]
            impl CastFrom<$x> for $z {
                #[inline]
                fn cast_from(x: $x) -> Self {
                    x as $z
                }
            }
        )*
    };
    (@bool $($t:ty),*) => {
        $(
            impl CastFrom<$t> for bool {
                #[inline]
                fn cast_from(x: $t) -> Self {
                    x != (0 as $t)
                }
            }

            impl CastFrom<bool> for $t {
                #[inline]
                fn cast_from(x: bool) -> Self {
                    (x as u8) as $t
                }
            }
        )*
    };
    ($($z:ty),*) => {
        $(impl_real!(@from $z; i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);)*
        impl_real!(@bool $($z),*);
    };
}

impl_real!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

impl CastFrom<bool> for bool {
    #[inline]
    fn cast_from(x: bool) -> Self {
        x
    }
}

macro_rules! impl_complex {
    (@real $c:ty, $p:ty; $($t:ty),*) => {
        $(
            impl CastFrom<$c> for $t {
                #[inline]
                fn cast_from(x: $c) -> Self {
                    x.re as $t
                }
            }

            impl CastFrom<$t> for $c {
                #[inline]
                fn cast_from(x: $t) -> Self {
                    <$c>::new(x as $p, 0.0)
                }
            }
        )*
    };
    ($($c:ty => $p:ty),*) => {
        $(
            impl_complex!(@real $c, $p; i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

            impl CastFrom<$c> for bool {
                #[inline]
                fn cast_from(x: $c) -> Self {
                    x.re != 0.0 || x.im != 0.0
                }
            }

            impl CastFrom<bool> for $c {
                #[inline]
                fn cast_from(x: bool) -> Self {
                    <$c>::new((x as u8) as $p, 0.0)
                }
            }

            impl CastFrom<Complex32> for $c {
                #[inline]
                fn cast_from(x: Complex32) -> Self {
                    <$c>::new(x.re as $p, x.im as $p)
                }
            }

            impl CastFrom<Complex64> for $c {
                #[inline]
                fn cast_from(x: Complex64) -> Self {
                    <$c>::new(x.re as $p, x.im as $p)
                }
            }
        )*
    };
}

impl_complex!(Complex32 => f32, Complex64 => f64);
