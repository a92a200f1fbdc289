// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixveil

//! Blind parameter recovery: find which bit depth and stride an image was
//! encoded with, given nothing but the pixels.
//!
//! The search tries bit depths high to low — an 8-bit preamble read at a
//! lower depth is also a valid alternating prefix, so scanning high first
//! lands on the densest encoding that actually matches. Per depth, the
//! stride bound shrinks (`ceil(max_skip / (9 - bit_level))`): denser
//! encodings plausibly used smaller strides. Trials are independent, so they
//! run on the rayon pool and matches merge deterministically back to the
//! sequential order (highest bit depth, then lowest stride).

use rayon::prelude::*;

use crate::decode::frame_length_bits;
use crate::error::StegoError;
use crate::grid::{PixelGrid, CHANNEL_ORDER};
use crate::params::{preamble, CodecParams};

/// One scan trial at stride `skip` from position 0. The diagnostic window
/// is 16 pixels (preamble plus length field); only its first half is read
/// and compared against the alternating marker, but a candidate whose full
/// window would run past the grid never matches.
fn preamble_at(grid: &PixelGrid, bit_level: u8, skip: usize) -> bool {
    let pixel_count = grid.pixel_count();
    let modulus = 1u16 << bit_level;
    let marker = preamble(bit_level);

    // The full diagnostic window is 16 pixels; reject candidates whose
    // window does not fit even though the marker half might.
    if 15 * skip >= pixel_count {
        return false;
    }

    let mut window = Vec::with_capacity(marker.len());
    for i in 0..8 {
        let pos = i * skip;
        for &ch in &CHANNEL_ORDER {
            let residue = grid.channel(pos, ch) as u16 % modulus;
            for shift in (0..bit_level).rev() {
                window.push(((residue >> shift) & 1) as u8);
            }
        }
    }
    window == marker
}

/// Search `(bit_level, skip)` space for an embedded frame's preamble.
///
/// Returns the match that the sequential high-depth-first, low-stride-first
/// search would find. `max_skip` bounds the stride range; callers usually
/// derive it from image capacity via
/// [`max_scan_skip`](crate::capacity::max_scan_skip).
///
/// # Errors
/// [`StegoError::NoMessageFound`] if no candidate pair matches.
pub fn scan(grid: &PixelGrid, max_skip: usize) -> Result<(u8, usize), StegoError> {
    let candidates: Vec<(u8, usize)> = (1..=8u8)
        .rev()
        .flat_map(|bit_level| {
            let skip_bound = max_skip.div_ceil((9 - bit_level) as usize).max(1);
            (1..=skip_bound).map(move |skip| (bit_level, skip))
        })
        .collect();

    candidates
        .par_iter()
        .copied()
        .filter(|&(bit_level, skip)| preamble_at(grid, bit_level, skip))
        // Deterministic merge: identical to the sequential search order.
        .min_by_key(|&(bit_level, skip)| (8 - bit_level, skip))
        .ok_or(StegoError::NoMessageFound)
}

/// Blind decode: recover parameters with [`scan`], then extract the message
/// at offset 0.
pub fn auto_decode(grid: &PixelGrid, max_skip: usize) -> Result<String, StegoError> {
    let (bit_level, skipping) = scan(grid, max_skip)?;
    let params = CodecParams::new(bit_level, skipping, 0)?;
    crate::decode::decode(grid, &params)
}

/// Parameters and payload size of a detected frame, for reporting without
/// decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanReport {
    pub bit_level: u8,
    pub skipping: usize,
    /// Payload size from the length field, in bits.
    pub message_bits: u64,
}

/// Run [`scan`] and read the detected frame's length field.
pub fn analyze(grid: &PixelGrid, max_skip: usize) -> Result<ScanReport, StegoError> {
    let (bit_level, skipping) = scan(grid, max_skip)?;
    let params = CodecParams::new(bit_level, skipping, 0)?;
    let message_bits = frame_length_bits(grid, &params)?;
    Ok(ScanReport { bit_level, skipping, message_bits })
}
