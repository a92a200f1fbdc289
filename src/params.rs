// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixveil

//! Encoding parameters and the frame header layout.
//!
//! A frame is laid out as three bit segments:
//!
//! ```text
//! [24·bit_level bits] preamble: alternating 1,0,1,0,… (8 pixels)
//! [24·bit_level bits] length field: payload bit count, unsigned BE (8 pixels)
//! [N bits           ] payload, zero-padded to a multiple of bit_level
//! ```
//!
//! The preamble is a self-synchronizing marker: an alternating run of this
//! length is improbable in natural pixel low bits and independent of payload
//! content. Preamble and length field are each exactly 8 pixels wide at every
//! bit depth (8 pixels × 3 channels × bit_level bits).

use crate::bits;
use crate::error::StegoError;

/// Parameters of one encode or decode pass. Validated once at construction,
/// immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecParams {
    /// Low-order bits used per colour channel, 1–8.
    pub bit_level: u8,
    /// Pixel stride between embedding sites, >= 1.
    pub skipping: usize,
    /// Linear pixel position where the frame starts.
    pub offset: usize,
}

impl CodecParams {
    pub fn new(bit_level: u8, skipping: usize, offset: usize) -> Result<Self, StegoError> {
        if !(1..=8).contains(&bit_level) {
            return Err(StegoError::InvalidParams("bit_level must be within 1..=8"));
        }
        if skipping == 0 {
            return Err(StegoError::InvalidParams("skipping must be >= 1"));
        }
        Ok(Self { bit_level, skipping, offset })
    }

    /// Residue modulus for channel perturbation: `2^bit_level`.
    pub fn modulus(&self) -> u16 {
        1u16 << self.bit_level
    }

    /// Bits per character in the payload text encoding. 7-bit characters at
    /// `bit_level == 7` let payload groups tile the channel segments exactly.
    pub fn char_width(&self) -> usize {
        if self.bit_level == 7 {
            7
        } else {
            8
        }
    }

    /// Length in bits of the preamble, and equally of the length field:
    /// `3 · 8 · bit_level` (8 pixels worth of segments).
    pub fn marker_bits(&self) -> usize {
        24 * self.bit_level as usize
    }

    /// The preamble bit pattern for this bit depth.
    pub fn preamble(&self) -> Vec<u8> {
        preamble(self.bit_level)
    }

    /// Largest payload bit count the length field can represent:
    /// `2^(24·bit_level) − 1`. At `bit_level >= 3` the field is wider than
    /// `usize`, so no real image can exceed it.
    pub fn length_field_max(&self) -> usize {
        let bits = self.marker_bits();
        if bits >= usize::BITS as usize {
            usize::MAX
        } else {
            (1usize << bits) - 1
        }
    }
}

/// Alternating `1,0,1,0,…` marker of `24·bit_level` bits.
pub fn preamble(bit_level: u8) -> Vec<u8> {
    (0..24 * bit_level as usize).map(|i| (1 - i % 2) as u8).collect()
}

/// Build the full frame for a payload: preamble, length field holding
/// `stored_len` (the payload bit count a decoder should read back), the
/// payload itself, and zero padding up to a multiple of `bit_level`.
pub fn build_frame(params: &CodecParams, stored_len: usize, payload: &[u8]) -> Vec<u8> {
    let marker = params.marker_bits();
    let mut frame = Vec::with_capacity(2 * marker + payload.len() + params.bit_level as usize);
    frame.extend_from_slice(&preamble(params.bit_level));
    frame.extend_from_slice(&bits::bits_of_value(stored_len as u64, marker));
    frame.extend_from_slice(payload);
    while frame.len() % params.bit_level as usize != 0 {
        frame.push(0);
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_bounds() {
        assert!(CodecParams::new(1, 1, 0).is_ok());
        assert!(CodecParams::new(8, 1, 0).is_ok());
        assert!(matches!(CodecParams::new(0, 1, 0), Err(StegoError::InvalidParams(_))));
        assert!(matches!(CodecParams::new(9, 1, 0), Err(StegoError::InvalidParams(_))));
        assert!(matches!(CodecParams::new(1, 0, 0), Err(StegoError::InvalidParams(_))));
    }

    #[test]
    fn preamble_alternates_and_sizes() {
        for bit_level in 1..=8u8 {
            let p = preamble(bit_level);
            assert_eq!(p.len(), 24 * bit_level as usize);
            for (i, &b) in p.iter().enumerate() {
                assert_eq!(b, (1 - i % 2) as u8);
            }
        }
    }

    #[test]
    fn char_width_special_cases_seven() {
        assert_eq!(CodecParams::new(7, 1, 0).unwrap().char_width(), 7);
        assert_eq!(CodecParams::new(1, 1, 0).unwrap().char_width(), 8);
        assert_eq!(CodecParams::new(8, 1, 0).unwrap().char_width(), 8);
    }

    #[test]
    fn length_field_max_per_depth() {
        assert_eq!(CodecParams::new(1, 1, 0).unwrap().length_field_max(), (1 << 24) - 1);
        // 24·3 = 72 bits is wider than usize; the field cannot bind.
        assert_eq!(CodecParams::new(3, 1, 0).unwrap().length_field_max(), usize::MAX);
        assert_eq!(CodecParams::new(8, 1, 0).unwrap().length_field_max(), usize::MAX);
    }

    #[test]
    fn frame_layout() {
        let params = CodecParams::new(3, 1, 0).unwrap();
        let payload = crate::bits::text_to_bits("hi", 8); // 16 bits
        let frame = build_frame(&params, payload.len(), &payload);
        let marker = params.marker_bits(); // 72
        assert_eq!(&frame[..marker], preamble(3).as_slice());
        assert_eq!(bits::value_of_bits(&frame[marker..2 * marker]), 16);
        assert_eq!(&frame[2 * marker..2 * marker + 16], payload.as_slice());
        // padded to a multiple of bit_level
        assert_eq!(frame.len() % 3, 0);
        assert!(frame[2 * marker + 16..].iter().all(|&b| b == 0));
    }
}
