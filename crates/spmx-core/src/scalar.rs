//! Builtin scalar trait and complex scalar types.
//!
//! Scalars live in untyped byte buffers (pending-tuple values, cast
//! operands). [`Builtin`] moves a typed value in and out of such a buffer
//! in native byte order without any alignment requirement.

use bytemuck::{Pod, Zeroable};

use crate::types::TypeCode;

/// Single-precision complex scalar (`Fc32`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Complex32 {
    /// Real part.
    pub re: f32,
    /// Imaginary part.
    pub im: f32,
}

impl Complex32 {
    /// Create a complex value from its parts.
    pub const fn new(re: f32, im: f32) -> Self {
        Self { re, im }
    }
}

/// Double-precision complex scalar (`Fc64`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Complex64 {
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
}

impl Complex64 {
    /// Create a complex value from its parts.
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

/// A scalar with a builtin [`TypeCode`] and a fixed byte layout.
///
/// # Panics
///
/// [`read`](Builtin::read) and [`write`](Builtin::write) panic if the
/// buffer is shorter than [`SIZE`](Builtin::SIZE).
pub trait Builtin: Copy + std::fmt::Debug + PartialEq + Send + Sync + 'static {
    /// The type code of this scalar.
    const CODE: TypeCode;

    /// Size in bytes. Always equals `CODE.size()`.
    const SIZE: usize = std::mem::size_of::<Self>();

    /// Read one value from the start of `bytes`.
    fn read(bytes: &[u8]) -> Self;

    /// Write this value to the start of `bytes`.
    fn write(self, bytes: &mut [u8]);
}

impl Builtin for bool {
    const CODE: TypeCode = TypeCode::Bool;

    // Any nonzero byte is true; `bool` is not `Pod`.
    fn read(bytes: &[u8]) -> Self {
        bytes[0] != 0
    }

    fn write(self, bytes: &mut [u8]) {
        bytes[0] = self as u8;
    }
}

macro_rules! impl_builtin_pod {
    ($($ty:ty => $code:ident),* $(,)?) => {
        $(
            impl Builtin for $ty {
                const CODE: TypeCode = TypeCode::$code;

                fn read(bytes: &[u8]) -> Self {
                    bytemuck::pod_read_unaligned(&bytes[..Self::SIZE])
                }

                fn write(self, bytes: &mut [u8]) {
                    bytes[..Self::SIZE].copy_from_slice(bytemuck::bytes_of(&self));
                }
            }
        )*
    };
}

impl_builtin_pod!(
    i8 => Int8,
    u8 => UInt8,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    f32 => Fp32,
    f64 => Fp64,
    Complex32 => Fc32,
    Complex64 => Fc64,
);
