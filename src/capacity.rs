// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixveil

//! Capacity accounting and stride derivation.
//!
//! Every visited pixel carries `3 · bit_level` frame bits. The preamble and
//! length field occupy the first 16 visited pixels (`48 · bit_level` bits);
//! what remains is payload capacity.

use crate::params::CodecParams;

/// Number of pixels the walk `offset, offset+skipping, …` visits before
/// running past `pixel_count`.
pub fn visited_pixels(pixel_count: usize, params: &CodecParams) -> usize {
    if params.offset >= pixel_count {
        return 0;
    }
    (pixel_count - params.offset).div_ceil(params.skipping)
}

/// Payload bits the grid can hold at these parameters, after the
/// preamble + length-field overhead. Saturates at zero.
pub fn payload_capacity_bits(pixel_count: usize, params: &CodecParams) -> usize {
    let total = visited_pixels(pixel_count, params) * 3 * params.bit_level as usize;
    total.saturating_sub(2 * params.marker_bits())
}

/// Stride that spreads a message of `msg_chars` characters evenly across the
/// whole image (the `-s 0` mode). 16 pixels of header plus however many
/// pixels the payload needs, divided into the pixel count.
pub fn auto_skip(msg_chars: usize, bit_level: u8, width: usize, height: usize) -> usize {
    let required_pixels = 16 + (msg_chars * 8).div_ceil(3 * bit_level as usize);
    ((width * height) / required_pixels).max(1)
}

/// Upper stride bound for the blind scan: the widest stride any evenly
/// spread single-character message could have used at the densest bit depth.
pub fn max_scan_skip(width: usize, height: usize) -> usize {
    auto_skip(1, 8, width, height)
}
