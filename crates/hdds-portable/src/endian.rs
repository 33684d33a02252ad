// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Host byte order detection and the stream endianness flag.
//!
//! The flag is the first byte of every portable stream:
//!
//! | Flag | Payload byte order |
//! |------|--------------------|
//! | `0`  | little-endian      |
//! | `1`  | big-endian         |

use crate::error::{PortableError, Result};
use std::fmt;

/// Flag byte declaring a little-endian payload.
pub const FLAG_LITTLE: u8 = 0;
/// Flag byte declaring a big-endian payload.
pub const FLAG_BIG: u8 = 1;

/// Byte order of multi-byte scalars.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

impl Endianness {
    /// Byte order of the current platform.
    pub const fn native() -> Self {
        if cfg!(target_endian = "little") {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }

    /// Detect the byte order by storing a known pattern and inspecting its
    /// first byte. Always agrees with [`Endianness::native`].
    pub const fn probe() -> Self {
        let bytes = 0x0102_u16.to_ne_bytes();
        if bytes[0] == 0x02 {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }

    /// The other byte order.
    pub const fn opposite(self) -> Self {
        match self {
            Endianness::Little => Endianness::Big,
            Endianness::Big => Endianness::Little,
        }
    }

    pub const fn is_little(self) -> bool {
        matches!(self, Endianness::Little)
    }

    /// Flag byte recorded at the head of a stream.
    pub const fn flag(self) -> u8 {
        match self {
            Endianness::Little => FLAG_LITTLE,
            Endianness::Big => FLAG_BIG,
        }
    }

    /// Decode a flag byte read from a stream.
    pub fn from_flag(flag: u8) -> Result<Self> {
        match flag {
            FLAG_LITTLE => Ok(Endianness::Little),
            FLAG_BIG => Ok(Endianness::Big),
            other => Err(PortableError::InvalidFlag(other)),
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endianness::Little => write!(f, "little-endian"),
            Endianness::Big => write!(f, "big-endian"),
        }
    }
}

/// True when the current platform stores scalars least significant byte first.
pub const fn is_little_endian() -> bool {
    Endianness::native().is_little()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_agrees_with_target() {
        assert_eq!(Endianness::probe(), Endianness::native());
        assert_eq!(is_little_endian(), cfg!(target_endian = "little"));
    }

    #[test]
    fn test_native_matches_integer_layout() {
        let first = 0x1122_3344_u32.to_ne_bytes()[0];
        match Endianness::native() {
            Endianness::Little => assert_eq!(first, 0x44),
            Endianness::Big => assert_eq!(first, 0x11),
        }
    }

    #[test]
    fn test_flag_values() {
        assert_eq!(Endianness::Little.flag(), 0);
        assert_eq!(Endianness::Big.flag(), 1);
        assert_eq!(Endianness::from_flag(0).unwrap(), Endianness::Little);
        assert_eq!(Endianness::from_flag(1).unwrap(), Endianness::Big);
    }

    #[test]
    fn test_invalid_flag_rejected() {
        match Endianness::from_flag(0xFF) {
            Err(PortableError::InvalidFlag(0xFF)) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Endianness::Little.opposite(), Endianness::Big);
        assert_eq!(Endianness::Big.opposite().opposite(), Endianness::Big);
        assert_ne!(Endianness::native(), Endianness::native().opposite());
    }
}
