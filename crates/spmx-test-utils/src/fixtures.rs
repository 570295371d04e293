//! Scalar fixtures.
//!
//! Byte encodings of a representative value for every type code, used by
//! cast and staging tests that iterate over the whole enumeration.

use spmx_core::{Builtin, Complex32, Complex64, TypeCode};

/// Eight bytes with no numeric meaning, used as an opaque value.
pub const OPAQUE_PATTERN: [u8; 8] = [0xde, 0xad, 0xbe, 0xef, 0x01, 0x23, 0x45, 0x67];

/// Encode a builtin scalar as bytes.
pub fn to_bytes<T: Builtin>(value: T) -> Vec<u8> {
    let mut buf = vec![0u8; T::SIZE];
    value.write(&mut buf);
    buf
}

/// A representative value of `code`, encoded.
///
/// User-defined codes get [`OPAQUE_PATTERN`].
pub fn sample_bytes(code: TypeCode) -> Vec<u8> {
    match code {
        TypeCode::Bool => to_bytes(true),
        TypeCode::Int8 => to_bytes(-7i8),
        TypeCode::UInt8 => to_bytes(200u8),
        TypeCode::Int16 => to_bytes(-1234i16),
        TypeCode::UInt16 => to_bytes(54321u16),
        TypeCode::Int32 => to_bytes(-100_000i32),
        TypeCode::UInt32 => to_bytes(3_000_000_000u32),
        TypeCode::Int64 => to_bytes(-5_000_000_000i64),
        TypeCode::UInt64 => to_bytes(u64::MAX),
        TypeCode::Fp32 => to_bytes(2.5f32),
        TypeCode::Fp64 => to_bytes(-3.9f64),
        TypeCode::Fc32 => to_bytes(Complex32::new(1.5, -0.5)),
        TypeCode::Fc64 => to_bytes(Complex64::new(-2.25, 4.0)),
        TypeCode::Udt | TypeCode::Uct => OPAQUE_PATTERN.to_vec(),
    }
}

/// Byte size used for `code` in tests: the builtin size, or
/// [`OPAQUE_PATTERN`]'s length for user-defined codes.
pub fn test_size(code: TypeCode) -> usize {
    code.size().unwrap_or(OPAQUE_PATTERN.len())
}
