// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Scalar kinds and their native byte representation.
//!
//! | Kind   | Width | Interpretation |
//! |--------|-------|----------------|
//! | `bool` | 1     | 0 = false, non-zero = true |
//! | `u8` `i8` | 1  | integer        |
//! | `u16` `i16` | 2 | integer       |
//! | `u32` `i32` | 4 | integer       |
//! | `u64` `i64` | 8 | integer       |
//! | `f32`  | 4     | IEEE-754 binary32 |
//! | `f64`  | 8     | IEEE-754 binary64 |

use crate::swap::ByteBlock;
use std::fmt;
use std::str::FromStr;

/// Runtime tag naming a scalar type and its wire width.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
}

impl ScalarKind {
    /// Every kind, in wire-width order.
    pub const ALL: [ScalarKind; 11] = [
        ScalarKind::Bool,
        ScalarKind::U8,
        ScalarKind::I8,
        ScalarKind::U16,
        ScalarKind::I16,
        ScalarKind::U32,
        ScalarKind::I32,
        ScalarKind::U64,
        ScalarKind::I64,
        ScalarKind::F32,
        ScalarKind::F64,
    ];

    /// Number of bytes the kind occupies on the wire.
    pub const fn width(self) -> usize {
        match self {
            ScalarKind::Bool | ScalarKind::U8 | ScalarKind::I8 => 1,
            ScalarKind::U16 | ScalarKind::I16 => 2,
            ScalarKind::U32 | ScalarKind::I32 | ScalarKind::F32 => 4,
            ScalarKind::U64 | ScalarKind::I64 | ScalarKind::F64 => 8,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::U8 => "u8",
            ScalarKind::I8 => "i8",
            ScalarKind::U16 => "u16",
            ScalarKind::I16 => "i16",
            ScalarKind::U32 => "u32",
            ScalarKind::I32 => "i32",
            ScalarKind::U64 => "u64",
            ScalarKind::I64 => "i64",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
        }
    }

    pub const fn is_float(self) -> bool {
        matches!(self, ScalarKind::F32 | ScalarKind::F64)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScalarKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bool" | "boolean" => Ok(ScalarKind::Bool),
            "u8" | "uint8" => Ok(ScalarKind::U8),
            "i8" | "int8" => Ok(ScalarKind::I8),
            "u16" | "uint16" => Ok(ScalarKind::U16),
            "i16" | "int16" => Ok(ScalarKind::I16),
            "u32" | "uint32" => Ok(ScalarKind::U32),
            "i32" | "int32" => Ok(ScalarKind::I32),
            "u64" | "uint64" => Ok(ScalarKind::U64),
            "i64" | "int64" => Ok(ScalarKind::I64),
            "f32" | "float" => Ok(ScalarKind::F32),
            "f64" | "double" => Ok(ScalarKind::F64),
            _ => Err(format!("Unknown scalar kind: {}", s)),
        }
    }
}

/// A fixed-width value the codec can put on the wire.
///
/// Conversions go through `to_ne_bytes`/`from_ne_bytes`, so floats keep
/// their exact bit pattern.
pub trait PortableScalar: Copy + Sized {
    /// Native byte representation.
    type Bytes: ByteBlock;

    const KIND: ScalarKind;

    fn to_native_bytes(self) -> Self::Bytes;

    fn from_native_bytes(bytes: Self::Bytes) -> Self;
}

/// Implement `PortableScalar` for a primitive with `to_ne_bytes`.
macro_rules! impl_portable_scalar {
    ($type:ty, $kind:ident, $size:expr) => {
        impl PortableScalar for $type {
            type Bytes = [u8; $size];

            const KIND: ScalarKind = ScalarKind::$kind;

            #[inline]
            fn to_native_bytes(self) -> Self::Bytes {
                self.to_ne_bytes()
            }

            #[inline]
            fn from_native_bytes(bytes: Self::Bytes) -> Self {
                <$type>::from_ne_bytes(bytes)
            }
        }
    };
}

impl_portable_scalar!(u8, U8, 1);
impl_portable_scalar!(i8, I8, 1);
impl_portable_scalar!(u16, U16, 2);
impl_portable_scalar!(i16, I16, 2);
impl_portable_scalar!(u32, U32, 4);
impl_portable_scalar!(i32, I32, 4);
impl_portable_scalar!(u64, U64, 8);
impl_portable_scalar!(i64, I64, 8);
impl_portable_scalar!(f32, F32, 4);
impl_portable_scalar!(f64, F64, 8);

impl PortableScalar for bool {
    type Bytes = [u8; 1];

    const KIND: ScalarKind = ScalarKind::Bool;

    #[inline]
    fn to_native_bytes(self) -> Self::Bytes {
        [u8::from(self)]
    }

    #[inline]
    fn from_native_bytes(bytes: Self::Bytes) -> Self {
        bytes[0] != 0
    }
}

/// A dynamically typed scalar value.
///
/// Equality is bit-exact: two `F64(NAN)` with the same payload compare
/// equal, `F32(0.0)` and `F32(-0.0)` do not.
#[derive(Debug, Copy, Clone)]
pub enum Scalar {
    Bool(bool),
    U8(u8),
    I8(i8),
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
    F32(f32),
    F64(f64),
}

impl Scalar {
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Bool(_) => ScalarKind::Bool,
            Scalar::U8(_) => ScalarKind::U8,
            Scalar::I8(_) => ScalarKind::I8,
            Scalar::U16(_) => ScalarKind::U16,
            Scalar::I16(_) => ScalarKind::I16,
            Scalar::U32(_) => ScalarKind::U32,
            Scalar::I32(_) => ScalarKind::I32,
            Scalar::U64(_) => ScalarKind::U64,
            Scalar::I64(_) => ScalarKind::I64,
            Scalar::F32(_) => ScalarKind::F32,
            Scalar::F64(_) => ScalarKind::F64,
        }
    }

    pub const fn width(&self) -> usize {
        self.kind().width()
    }

    /// Raw bit pattern, zero-extended to 64 bits.
    pub fn to_bits(&self) -> u64 {
        match *self {
            Scalar::Bool(v) => u64::from(v),
            Scalar::U8(v) => u64::from(v),
            Scalar::I8(v) => u64::from(v as u8),
            Scalar::U16(v) => u64::from(v),
            Scalar::I16(v) => u64::from(v as u16),
            Scalar::U32(v) => u64::from(v),
            Scalar::I32(v) => u64::from(v as u32),
            Scalar::U64(v) => v,
            Scalar::I64(v) => v as u64,
            Scalar::F32(v) => u64::from(v.to_bits()),
            Scalar::F64(v) => v.to_bits(),
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.to_bits() == other.to_bits()
    }
}

impl Eq for Scalar {}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(v) => write!(f, "{}", v),
            Scalar::U8(v) => write!(f, "{}", v),
            Scalar::I8(v) => write!(f, "{}", v),
            Scalar::U16(v) => write!(f, "{}", v),
            Scalar::I16(v) => write!(f, "{}", v),
            Scalar::U32(v) => write!(f, "{}", v),
            Scalar::I32(v) => write!(f, "{}", v),
            Scalar::U64(v) => write!(f, "{}", v),
            Scalar::I64(v) => write!(f, "{}", v),
            Scalar::F32(v) => write!(f, "{:?}", v),
            Scalar::F64(v) => write!(f, "{:?}", v),
        }
    }
}

macro_rules! impl_scalar_from {
    ($type:ty, $variant:ident) => {
        impl From<$type> for Scalar {
            fn from(value: $type) -> Self {
                Scalar::$variant(value)
            }
        }
    };
}

impl_scalar_from!(bool, Bool);
impl_scalar_from!(u8, U8);
impl_scalar_from!(i8, I8);
impl_scalar_from!(u16, U16);
impl_scalar_from!(i16, I16);
impl_scalar_from!(u32, U32);
impl_scalar_from!(i32, I32);
impl_scalar_from!(u64, U64);
impl_scalar_from!(i64, I64);
impl_scalar_from!(f32, F32);
impl_scalar_from!(f64, F64);
