//! Scalar type codes and the [`ScalarType`] tagged variant.

use std::fmt;

use crate::error::CoreError;

/// Closed enumeration of scalar type codes.
///
/// The first thirteen codes are builtin numeric kinds with a fixed layout.
/// The last two are the user-defined sentinels: [`TypeCode::Udt`] is used
/// when an opaque value is read, [`TypeCode::Uct`] when it is the carrier
/// type of an operator. Both behave identically for casting.
///
/// The discriminant is the ordinal used to index the cast table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TypeCode {
    /// `bool`, one byte, nonzero is true.
    Bool = 0,
    /// `i8`.
    Int8 = 1,
    /// `u8`.
    UInt8 = 2,
    /// `i16`.
    Int16 = 3,
    /// `u16`.
    UInt16 = 4,
    /// `i32`.
    Int32 = 5,
    /// `u32`.
    UInt32 = 6,
    /// `i64`.
    Int64 = 7,
    /// `u64`.
    UInt64 = 8,
    /// `f32`.
    Fp32 = 9,
    /// `f64`.
    Fp64 = 10,
    /// Single-precision complex, two `f32`.
    Fc32 = 11,
    /// Double-precision complex, two `f64`.
    Fc64 = 12,
    /// User-defined value type (opaque).
    Udt = 13,
    /// User-defined carrier type (opaque).
    Uct = 14,
}

impl TypeCode {
    /// Number of builtin codes. The cast table is `BUILTIN_COUNT²`.
    pub const BUILTIN_COUNT: usize = 13;

    /// Every builtin code in ordinal order.
    pub const BUILTINS: [TypeCode; Self::BUILTIN_COUNT] = [
        Self::Bool,
        Self::Int8,
        Self::UInt8,
        Self::Int16,
        Self::UInt16,
        Self::Int32,
        Self::UInt32,
        Self::Int64,
        Self::UInt64,
        Self::Fp32,
        Self::Fp64,
        Self::Fc32,
        Self::Fc64,
    ];

    /// Every code, builtins followed by the two user-defined sentinels.
    pub const ALL: [TypeCode; 15] = [
        Self::Bool,
        Self::Int8,
        Self::UInt8,
        Self::Int16,
        Self::UInt16,
        Self::Int32,
        Self::UInt32,
        Self::Int64,
        Self::UInt64,
        Self::Fp32,
        Self::Fp64,
        Self::Fc32,
        Self::Fc64,
        Self::Udt,
        Self::Uct,
    ];

    /// Decode a raw code, rejecting values outside the enumeration.
    pub fn from_u8(code: u8) -> Result<Self, CoreError> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(CoreError::UnknownTypeCode { code })
    }

    /// Whether this code names a builtin numeric kind.
    pub const fn is_builtin(self) -> bool {
        (self as usize) < Self::BUILTIN_COUNT
    }

    /// Whether this code is one of the two user-defined sentinels.
    pub const fn is_user_defined(self) -> bool {
        matches!(self, Self::Udt | Self::Uct)
    }

    /// Row/column position in the builtin cast table, or `None` for
    /// user-defined codes.
    pub const fn builtin_index(self) -> Option<usize> {
        if self.is_builtin() {
            Some(self as usize)
        } else {
            None
        }
    }

    /// Size in bytes of one value, or `None` for user-defined codes whose
    /// size is supplied by the caller.
    pub const fn size(self) -> Option<usize> {
        match self {
            Self::Bool | Self::Int8 | Self::UInt8 => Some(1),
            Self::Int16 | Self::UInt16 => Some(2),
            Self::Int32 | Self::UInt32 | Self::Fp32 => Some(4),
            Self::Int64 | Self::UInt64 | Self::Fp64 | Self::Fc32 => Some(8),
            Self::Fc64 => Some(16),
            Self::Udt | Self::Uct => None,
        }
    }

    /// Short lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int8 => "int8",
            Self::UInt8 => "uint8",
            Self::Int16 => "int16",
            Self::UInt16 => "uint16",
            Self::Int32 => "int32",
            Self::UInt32 => "uint32",
            Self::Int64 => "int64",
            Self::UInt64 => "uint64",
            Self::Fp32 => "fp32",
            Self::Fp64 => "fp64",
            Self::Fc32 => "fc32",
            Self::Fc64 => "fc64",
            Self::Udt => "udt",
            Self::Uct => "uct",
        }
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for TypeCode {
    type Error = CoreError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_u8(code)
    }
}

/// A scalar type: either a builtin kind or an opaque user-defined layout.
///
/// Opaque types carry their own byte size; nothing else about their
/// representation is known to this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// A builtin numeric kind. Never holds `Udt` or `Uct`.
    Builtin(TypeCode),
    /// A user-defined type of `size` bytes.
    Opaque {
        /// Either [`TypeCode::Udt`] or [`TypeCode::Uct`].
        code: TypeCode,
        /// Byte size of one value. Always > 0.
        size: usize,
    },
}

impl ScalarType {
    /// Scalar type for a builtin code.
    ///
    /// User-defined codes are rejected because they have no intrinsic size.
    pub fn builtin(code: TypeCode) -> Result<Self, CoreError> {
        let t = Self::Builtin(code);
        t.validate()?;
        Ok(t)
    }

    /// Opaque value type of `size` bytes.
    pub fn opaque(size: usize) -> Result<Self, CoreError> {
        Self::opaque_with(TypeCode::Udt, size)
    }

    /// Opaque carrier type of `size` bytes.
    pub fn opaque_carrier(size: usize) -> Result<Self, CoreError> {
        Self::opaque_with(TypeCode::Uct, size)
    }

    fn opaque_with(code: TypeCode, size: usize) -> Result<Self, CoreError> {
        if size == 0 {
            return Err(CoreError::InvalidSize { size });
        }
        Ok(Self::Opaque { code, size })
    }

    /// Check that the variant and its code agree and that the size is
    /// nonzero.
    ///
    /// Both variants are public, so a `Builtin(Udt)` or a zero-sized
    /// `Opaque` can be written directly. Consumers that size buffers from a
    /// `ScalarType` call this first.
    pub fn validate(&self) -> Result<(), CoreError> {
        match *self {
            Self::Builtin(code) if code.is_user_defined() => {
                Err(CoreError::NotBuiltin { code })
            }
            Self::Builtin(_) => Ok(()),
            Self::Opaque { code, .. } if code.is_builtin() => {
                Err(CoreError::NotUserDefined { code })
            }
            Self::Opaque { size: 0, .. } => Err(CoreError::InvalidSize { size: 0 }),
            Self::Opaque { .. } => Ok(()),
        }
    }

    /// The type code used for cast dispatch.
    pub fn code(&self) -> TypeCode {
        match *self {
            Self::Builtin(code) => code,
            Self::Opaque { code, .. } => code,
        }
    }

    /// Byte size of one value.
    pub fn size(&self) -> usize {
        match *self {
            // Zero only for an invalid `Builtin(Udt | Uct)`; see `validate`.
            Self::Builtin(code) => code.size().unwrap_or(0),
            Self::Opaque { size, .. } => size,
        }
    }

    /// Whether values of this type can only be byte-copied.
    pub fn is_opaque(&self) -> bool {
        matches!(self, Self::Opaque { .. })
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(code) => write!(f, "{code}"),
            Self::Opaque { code, size } => write!(f, "{code}[{size}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_match_position_in_all() {
        for (i, code) in TypeCode::ALL.iter().enumerate() {
            assert_eq!(*code as usize, i);
            assert_eq!(TypeCode::from_u8(i as u8), Ok(*code));
        }
    }

    #[test]
    fn from_u8_rejects_out_of_range() {
        assert_eq!(
            TypeCode::from_u8(15),
            Err(CoreError::UnknownTypeCode { code: 15 })
        );
        assert!(TypeCode::try_from(255u8).is_err());
    }

    #[test]
    fn builtin_index_only_for_builtins() {
        for code in TypeCode::BUILTINS {
            assert_eq!(code.builtin_index(), Some(code as usize));
            assert!(code.size().is_some());
        }
        assert_eq!(TypeCode::Udt.builtin_index(), None);
        assert_eq!(TypeCode::Uct.builtin_index(), None);
        assert!(TypeCode::Udt.is_user_defined());
        assert!(!TypeCode::Fc64.is_user_defined());
    }

    #[test]
    fn builtin_sizes() {
        assert_eq!(TypeCode::Bool.size(), Some(1));
        assert_eq!(TypeCode::UInt16.size(), Some(2));
        assert_eq!(TypeCode::Fp32.size(), Some(4));
        assert_eq!(TypeCode::Fc32.size(), Some(8));
        assert_eq!(TypeCode::Fc64.size(), Some(16));
        assert_eq!(TypeCode::Uct.size(), None);
    }

    #[test]
    fn scalar_type_sizes_and_codes() {
        let t = ScalarType::builtin(TypeCode::Int64).unwrap();
        assert_eq!(t.size(), 8);
        assert_eq!(t.code(), TypeCode::Int64);
        assert!(!t.is_opaque());

        let u = ScalarType::opaque(24).unwrap();
        assert_eq!(u.size(), 24);
        assert_eq!(u.code(), TypeCode::Udt);
        assert!(u.is_opaque());

        let c = ScalarType::opaque_carrier(3).unwrap();
        assert_eq!(c.code(), TypeCode::Uct);
        assert_eq!(c.to_string(), "uct[3]");
    }

    #[test]
    fn zero_sized_opaque_rejected() {
        assert_eq!(
            ScalarType::opaque(0),
            Err(CoreError::InvalidSize { size: 0 })
        );
        assert_eq!(
            ScalarType::builtin(TypeCode::Udt),
            Err(CoreError::NotBuiltin {
                code: TypeCode::Udt
            })
        );
    }

    #[test]
    fn validate_rejects_hand_built_mismatches() {
        assert!(ScalarType::Builtin(TypeCode::Fc64).validate().is_ok());
        assert!(ScalarType::opaque(1).unwrap().validate().is_ok());

        let bad_builtin = ScalarType::Builtin(TypeCode::Uct);
        assert_eq!(bad_builtin.size(), 0);
        assert_eq!(
            bad_builtin.validate(),
            Err(CoreError::NotBuiltin {
                code: TypeCode::Uct
            })
        );
        assert_eq!(
            ScalarType::Opaque {
                code: TypeCode::Int32,
                size: 4
            }
            .validate(),
            Err(CoreError::NotUserDefined {
                code: TypeCode::Int32
            })
        );
        assert_eq!(
            ScalarType::Opaque {
                code: TypeCode::Udt,
                size: 0
            }
            .validate(),
            Err(CoreError::InvalidSize { size: 0 })
        );
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn from_u8_accepts_exactly_the_listed_codes(code in any::<u8>()) {
                match TypeCode::from_u8(code) {
                    Ok(t) => prop_assert_eq!(t as u8, code),
                    Err(e) => {
                        prop_assert!(code as usize >= TypeCode::ALL.len());
                        prop_assert_eq!(e, CoreError::UnknownTypeCode { code });
                    }
                }
            }

            #[test]
            fn opaque_size_round_trips(size in 1usize..4096) {
                let t = ScalarType::opaque(size).unwrap();
                prop_assert_eq!(t.size(), size);
                prop_assert!(t.is_opaque());
                prop_assert!(ScalarType::builtin(t.code()).is_err());
            }
        }
    }
}
