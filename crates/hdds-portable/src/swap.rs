// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Byte reversal for fixed-width blocks.
//!
//! Works on raw bytes only, so a float and an integer sharing a bit pattern
//! reverse to the same bytes. NaN payloads and infinities are never
//! interpreted.

mod private {
    pub trait Sealed {}

    impl Sealed for [u8; 1] {}
    impl Sealed for [u8; 2] {}
    impl Sealed for [u8; 4] {}
    impl Sealed for [u8; 8] {}
}

/// A fixed-width byte block (1, 2, 4 or 8 bytes).
///
/// Sealed: only the widths the codec puts on the wire implement it.
pub trait ByteBlock: private::Sealed + Copy + Default + AsRef<[u8]> + AsMut<[u8]> {
    /// Width of the block in bytes.
    const WIDTH: usize;

    /// Reverse the byte order in place.
    fn swap_bytes(&mut self);
}

impl ByteBlock for [u8; 1] {
    const WIDTH: usize = 1;

    #[inline]
    fn swap_bytes(&mut self) {}
}

impl ByteBlock for [u8; 2] {
    const WIDTH: usize = 2;

    #[inline]
    fn swap_bytes(&mut self) {
        self.swap(0, 1);
    }
}

impl ByteBlock for [u8; 4] {
    const WIDTH: usize = 4;

    #[inline]
    fn swap_bytes(&mut self) {
        self.swap(0, 3);
        self.swap(1, 2);
    }
}

impl ByteBlock for [u8; 8] {
    const WIDTH: usize = 8;

    #[inline]
    fn swap_bytes(&mut self) {
        self.swap(0, 7);
        self.swap(1, 6);
        self.swap(2, 5);
        self.swap(3, 4);
    }
}

/// Return `block` with its bytes reversed.
#[inline]
pub fn reverse_bytes<B: ByteBlock>(mut block: B) -> B {
    block.swap_bytes();
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_one_is_identity() {
        for b in 0..=u8::MAX {
            assert_eq!(reverse_bytes([b]), [b]);
        }
    }

    #[test]
    fn test_reverse_positions() {
        assert_eq!(reverse_bytes([0x01, 0x02]), [0x02, 0x01]);
        assert_eq!(reverse_bytes([1, 2, 3, 4]), [4, 3, 2, 1]);
        assert_eq!(
            reverse_bytes([1, 2, 3, 4, 5, 6, 7, 8]),
            [8, 7, 6, 5, 4, 3, 2, 1]
        );
    }

    #[test]
    fn test_matches_integer_swap_bytes() {
        let value = 0x0102_0304_0506_0708_u64;
        assert_eq!(
            reverse_bytes(value.to_ne_bytes()),
            value.swap_bytes().to_ne_bytes()
        );
        let value = 0xA1B2_u16;
        assert_eq!(
            reverse_bytes(value.to_ne_bytes()),
            value.swap_bytes().to_ne_bytes()
        );
    }

    #[test]
    fn test_float_and_integer_reverse_identically() {
        let float = -1234.5678_f64;
        let int = float.to_bits();
        assert_eq!(
            reverse_bytes(float.to_ne_bytes()),
            reverse_bytes(int.to_ne_bytes())
        );

        let float = f32::NAN;
        assert_eq!(
            reverse_bytes(float.to_ne_bytes()),
            reverse_bytes(float.to_bits().to_ne_bytes())
        );
    }

    #[test]
    fn test_involution_exhaustive_u16() {
        for v in 0..=u16::MAX {
            let block = v.to_ne_bytes();
            assert_eq!(reverse_bytes(reverse_bytes(block)), block);
        }
    }

    #[test]
    fn test_involution_special_float_patterns() {
        let patterns_32 = [
            f32::NAN.to_bits(),
            0x7FC0_0001, // quiet NaN with payload
            0x7F80_0001, // signalling NaN
            f32::INFINITY.to_bits(),
            f32::NEG_INFINITY.to_bits(),
            (-0.0_f32).to_bits(),
        ];
        for bits in patterns_32 {
            let block = bits.to_ne_bytes();
            let twice = reverse_bytes(reverse_bytes(block));
            assert_eq!(u32::from_ne_bytes(twice), bits);
        }

        let patterns_64 = [
            f64::NAN.to_bits(),
            0x7FF0_0000_0000_0001,
            0xFFF8_0000_0000_00FF,
            f64::INFINITY.to_bits(),
            f64::NEG_INFINITY.to_bits(),
        ];
        for bits in patterns_64 {
            let block = bits.to_ne_bytes();
            let twice = reverse_bytes(reverse_bytes(block));
            assert_eq!(u64::from_ne_bytes(twice), bits);
        }
    }

    #[test]
    fn test_block_widths() {
        assert_eq!(<[u8; 1] as ByteBlock>::WIDTH, 1);
        assert_eq!(<[u8; 2] as ByteBlock>::WIDTH, 2);
        assert_eq!(<[u8; 4] as ByteBlock>::WIDTH, 4);
        assert_eq!(<[u8; 8] as ByteBlock>::WIDTH, 8);
    }
}
