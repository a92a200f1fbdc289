// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixveil

//! Bit-level codec between text, unsigned integers and bit vectors.
//!
//! Bits are represented as `Vec<u8>` with one 0/1 value per element,
//! MSB first within each group. All conversions here are bijective for
//! their valid inputs; range filtering of code points is the caller's job.

use crate::error::StegoError;

/// Convert text to a bit vector, `char_width` bits per character
/// (big-endian within each group).
///
/// `char_width` is 8 except at `bit_level == 7`, where 7-bit groups let the
/// payload tile the channel segments without padding. Code points are taken
/// modulo `2^char_width`; callers filter out-of-range characters beforehand.
pub fn text_to_bits(s: &str, char_width: usize) -> Vec<u8> {
    let mut bits = Vec::with_capacity(s.chars().count() * char_width);
    for ch in s.chars() {
        let code = ch as u32;
        for pos in (0..char_width).rev() {
            bits.push(((code >> pos) & 1) as u8);
        }
    }
    bits
}

/// Convert a bit vector back to text, `char_width` bits per character.
///
/// The inverse of [`text_to_bits`]. Code points decode as Latin-1, which is
/// total over `0..=255`, so the only failure mode is a bit count that is not
/// a positive multiple of `char_width`.
pub fn bits_to_text(bits: &[u8], char_width: usize) -> Result<String, StegoError> {
    if bits.is_empty() || bits.len() % char_width != 0 {
        return Err(StegoError::InvalidBitStream);
    }
    let mut s = String::with_capacity(bits.len() / char_width);
    for group in bits.chunks(char_width) {
        let code = value_of_bits(group) as u32;
        // char_width <= 8, so code <= 255 and the conversion cannot fail.
        s.push(char::from_u32(code).ok_or(StegoError::InvalidBitStream)?);
    }
    Ok(s)
}

/// Fixed-width unsigned binary representation of `v`, zero-padded on the
/// left to `width` bits, MSB first.
pub fn bits_of_value(v: u64, width: usize) -> Vec<u8> {
    let mut bits = Vec::with_capacity(width);
    for pos in (0..width).rev() {
        if pos >= 64 {
            bits.push(0);
        } else {
            bits.push(((v >> pos) & 1) as u8);
        }
    }
    bits
}

/// Interpret a bit vector (MSB first) as an unsigned integer.
///
/// Saturates at `u64::MAX` when the value has more than 64 significant
/// bits; callers treat such lengths as exceeding any real image and fail
/// their bounds checks.
pub fn value_of_bits(bits: &[u8]) -> u64 {
    let mut v: u64 = 0;
    for &bit in bits {
        match v.checked_mul(2) {
            Some(doubled) => v = doubled + (bit & 1) as u64,
            None => return u64::MAX,
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_bits_roundtrip() {
        let s = "hello";
        let bits = text_to_bits(s, 8);
        assert_eq!(bits.len(), 40);
        assert_eq!(bits_to_text(&bits, 8).unwrap(), s);
    }

    #[test]
    fn hello_known_pattern() {
        // 'h' = 0x68 = 01101000
        let bits = text_to_bits("h", 8);
        assert_eq!(bits, vec![0, 1, 1, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn seven_bit_width() {
        let s = "Hi!";
        let bits = text_to_bits(s, 7);
        assert_eq!(bits.len(), 21);
        assert_eq!(bits_to_text(&bits, 7).unwrap(), s);
    }

    #[test]
    fn latin1_range_roundtrip() {
        let s: String = (1u8..=254).map(|b| b as char).collect();
        let bits = text_to_bits(&s, 8);
        assert_eq!(bits_to_text(&bits, 8).unwrap(), s);
    }

    #[test]
    fn empty_bits_rejected() {
        assert_eq!(bits_to_text(&[], 8), Err(StegoError::InvalidBitStream));
    }

    #[test]
    fn ragged_bit_count_rejected() {
        let bits = vec![0u8; 12];
        assert_eq!(bits_to_text(&bits, 8), Err(StegoError::InvalidBitStream));
    }

    #[test]
    fn value_bits_roundtrip() {
        for v in [0u64, 1, 27, 170, 255, 65_535] {
            let bits = bits_of_value(v, 24);
            assert_eq!(bits.len(), 24);
            assert_eq!(value_of_bits(&bits), v);
        }
    }

    #[test]
    fn value_zero_padding() {
        // 27 at width 5 is 11011, at width 7 it is 0011011.
        assert_eq!(bits_of_value(27, 5), vec![1, 1, 0, 1, 1]);
        assert_eq!(bits_of_value(27, 7), vec![0, 0, 1, 1, 0, 1, 1]);
    }

    #[test]
    fn oversized_value_saturates() {
        let bits = vec![1u8; 72];
        assert_eq!(value_of_bits(&bits), u64::MAX);
    }
}
