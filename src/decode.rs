// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixveil

//! Frame extraction: read a framed message back out of a pixel grid.
//!
//! A single linear pass: verify the preamble in the 16-pixel header window,
//! take the payload bit count from the length field, then collect segments
//! at the same stride until exactly that many bits are in hand. No
//! backtracking once the preamble is confirmed.

use crate::bits;
use crate::error::StegoError;
use crate::grid::{PixelGrid, CHANNEL_ORDER};
use crate::params::CodecParams;

/// Push the `bit_level`-bit residues of all three channels of the pixel at
/// `pos` onto `out`.
fn read_segments(grid: &PixelGrid, pos: usize, params: &CodecParams, out: &mut Vec<u8>) {
    for &ch in &CHANNEL_ORDER {
        let residue = (grid.channel(pos, ch) as u16 % params.modulus()) as u64;
        out.extend_from_slice(&bits::bits_of_value(residue, params.bit_level as usize));
    }
}

/// Verify the preamble at `params` and return the length-field value: the
/// number of payload bits that follow the 16-pixel header.
///
/// # Errors
/// [`StegoError::NoMessageFound`] if the header window runs past the grid or
/// the preamble does not match.
pub fn frame_length_bits(grid: &PixelGrid, params: &CodecParams) -> Result<u64, StegoError> {
    let pixel_count = grid.pixel_count();
    let marker = params.marker_bits();

    let mut header = Vec::with_capacity(2 * marker);
    for i in 0..16 {
        let pos = params.offset + i * params.skipping;
        if pos >= pixel_count {
            return Err(StegoError::NoMessageFound);
        }
        read_segments(grid, pos, params, &mut header);
    }

    if header[..marker] != params.preamble()[..] {
        return Err(StegoError::NoMessageFound);
    }
    Ok(bits::value_of_bits(&header[marker..]))
}

/// Extract the message embedded at the given parameters.
///
/// # Errors
/// - [`StegoError::NoMessageFound`] if the preamble check fails, or the
///   length field claims more bits than the grid holds past the header.
/// - [`StegoError::InvalidBitStream`] if the payload bit count does not form
///   whole characters.
pub fn decode(grid: &PixelGrid, params: &CodecParams) -> Result<String, StegoError> {
    let payload_len = frame_length_bits(grid, params)?;

    let pixel_count = grid.pixel_count();
    let start = params.offset + 16 * params.skipping;
    let remaining_pixels = if start >= pixel_count {
        0
    } else {
        (pixel_count - start).div_ceil(params.skipping)
    };
    let remaining_bits = remaining_pixels as u64 * 3 * params.bit_level as u64;
    if payload_len > remaining_bits {
        // A frame this long cannot have been written here.
        return Err(StegoError::NoMessageFound);
    }
    let payload_len = payload_len as usize;

    let mut payload = Vec::with_capacity(payload_len + 3 * params.bit_level as usize);
    let mut pos = start;
    while payload.len() < payload_len {
        read_segments(grid, pos, params, &mut payload);
        pos += params.skipping;
    }
    // The final pixel may carry trailing padding bits past the true length.
    payload.truncate(payload_len);

    bits::bits_to_text(&payload, params.char_width())
}
