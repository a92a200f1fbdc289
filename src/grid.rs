// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixveil

//! Pixel grid with linear column-major addressing.
//!
//! The codec never touches image files; it operates on a [`PixelGrid`] of
//! 3-channel 8-bit pixels supplied by the frontend. Positions are linear,
//! `p ∈ [0, width·height)`, and map to coordinates as
//!
//! ```text
//! x = p / height,   y = p % height
//! ```
//!
//! i.e. positions walk each column top to bottom before moving right. This
//! convention is load-bearing: encoder, decoder and scanner must all traverse
//! pixels in the same order or round-trips silently corrupt.

/// Channel iteration order shared by encode, decode and scan: red, green,
/// blue. A single constant so the order cannot drift between components.
pub const CHANNEL_ORDER: [usize; 3] = [0, 1, 2];

/// A width×height grid of RGB pixels, stored row-major
/// (`data[y * width + x]`).
#[derive(Clone)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    data: Vec<[u8; 3]>,
}

impl PixelGrid {
    /// Build a grid from per-pixel RGB triples in row-major order.
    ///
    /// # Panics
    /// Panics if `data.len() != width * height`.
    pub fn new(width: usize, height: usize, data: Vec<[u8; 3]>) -> Self {
        assert_eq!(data.len(), width * height, "pixel buffer size mismatch");
        Self { width, height, data }
    }

    /// Build a uniformly coloured grid. Used by tests and capacity probes.
    pub fn filled(width: usize, height: usize, pixel: [u8; 3]) -> Self {
        Self { width, height, data: vec![pixel; width * height] }
    }

    /// Build a grid from a packed RGB8 byte buffer (3 bytes per pixel,
    /// row-major), as produced by `image::RgbImage::into_raw`.
    ///
    /// # Panics
    /// Panics if `raw.len() != width * height * 3`.
    pub fn from_raw_rgb(width: usize, height: usize, raw: &[u8]) -> Self {
        assert_eq!(raw.len(), width * height * 3, "raw RGB buffer size mismatch");
        let data = raw.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect();
        Self { width, height, data }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of pixels (`width * height`).
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Row-major storage index for linear position `p` under the
    /// column-major traversal convention.
    fn index(&self, pos: usize) -> usize {
        let x = pos / self.height;
        let y = pos % self.height;
        y * self.width + x
    }

    /// Read one channel of the pixel at linear position `pos`.
    pub fn channel(&self, pos: usize, ch: usize) -> u8 {
        self.data[self.index(pos)][ch]
    }

    /// Overwrite one channel of the pixel at linear position `pos`.
    pub fn set_channel(&mut self, pos: usize, ch: usize, value: u8) {
        let idx = self.index(pos);
        self.data[idx][ch] = value;
    }

    /// Flatten back into a packed RGB8 byte buffer (row-major), ready to
    /// hand to the image writer.
    pub fn into_raw_rgb(self) -> Vec<u8> {
        let mut raw = Vec::with_capacity(self.data.len() * 3);
        for px in &self.data {
            raw.extend_from_slice(px);
        }
        raw
    }
}
