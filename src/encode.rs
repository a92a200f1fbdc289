// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixveil

//! Frame embedding: write a framed message into a pixel grid.
//!
//! The encoder builds the frame (preamble + length field + payload), then
//! walks positions `offset, offset+skipping, …` writing one `bit_level`-bit
//! segment per channel per visited pixel, red then green then blue, by
//! congruence-rounding each channel to the segment value. A message larger
//! than the remaining capacity is written up to capacity; the length field
//! already holds the truncated bit count, so a later decode returns exactly
//! the bits that made it into the image.

use rand::Rng;

use crate::bits;
use crate::capacity::payload_capacity_bits;
use crate::error::StegoError;
use crate::grid::{PixelGrid, CHANNEL_ORDER};
use crate::params::{build_frame, CodecParams};
use crate::rounding::round_to_congruence;

/// Result of a successful encode pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EncodeOutcome {
    /// The whole frame was written.
    Complete,
    /// Pixels ran out first. `percent` is how much of the payload (header
    /// overhead excluded) made it into the image, in `[0, 100)`.
    Partial { percent: f64 },
}

/// Embed `message` into `grid` at the given parameters.
///
/// The grid is mutated in place; on a [`EncodeOutcome::Partial`] outcome the
/// grid still holds a well-formed, decodable frame for the truncated payload.
///
/// # Errors
/// [`StegoError::ImageTooSmall`] if the grid has 16 pixels or fewer — too few
/// to hold the preamble and length field at any stride.
pub fn encode<R: Rng + ?Sized>(
    grid: &mut PixelGrid,
    message: &str,
    params: &CodecParams,
    rng: &mut R,
) -> Result<EncodeOutcome, StegoError> {
    let pixel_count = grid.pixel_count();
    if pixel_count <= 16 {
        return Err(StegoError::ImageTooSmall);
    }

    let payload = bits::text_to_bits(message, params.char_width());
    // The length field is 24·bit_level bits wide; a payload bigger than it
    // can name is truncated just like one bigger than pixel capacity.
    let stored_len = payload
        .len()
        .min(payload_capacity_bits(pixel_count, params))
        .min(params.length_field_max());
    let frame = build_frame(params, stored_len, &payload);

    let bit_level = params.bit_level as usize;
    let modulus = params.modulus();
    let mut frame_pos = 0;
    let mut pos = params.offset;

    // build_frame pads to a multiple of bit_level, so segments never rag.
    while pos < pixel_count && frame_pos < frame.len() {
        for &ch in &CHANNEL_ORDER {
            if frame_pos >= frame.len() {
                break;
            }
            let segment = bits::value_of_bits(&frame[frame_pos..frame_pos + bit_level]) as u16;
            let current = grid.channel(pos, ch);
            grid.set_channel(pos, ch, round_to_congruence(current, segment, modulus, rng));
            frame_pos += bit_level;
        }
        pos += params.skipping;
    }

    if frame_pos >= frame.len() && stored_len == payload.len() {
        return Ok(EncodeOutcome::Complete);
    }

    // Completion is measured over the payload bits a decode can recover:
    // written into pixels and countable by the length field. Header bits are
    // excluded, and the clamp keeps tiny capacities from pushing it below
    // zero.
    let overhead = 2 * params.marker_bits();
    let written = frame_pos.saturating_sub(overhead).min(stored_len);
    let percent = if payload.is_empty() {
        0.0
    } else {
        (100.0 * written as f64 / payload.len() as f64).clamp(0.0, 100.0)
    };
    Ok(EncodeOutcome::Partial { percent })
}
