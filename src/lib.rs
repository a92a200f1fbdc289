// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixveil

//! # pixveil
//!
//! LSB steganography for RGB pixel grids, with blind parameter recovery.
//! A text payload is framed (synchronization preamble + length field) and
//! written into the low `bit_level` bits of each colour channel at a
//! configurable pixel stride and starting offset. Extraction works with
//! known parameters, or blindly: the scanner searches the
//! bit-depth × stride space for the preamble.
//!
//! The codec never performs I/O — it operates on an in-memory [`PixelGrid`]
//! supplied by the frontend (see `src/main.rs` for the PNG-backed CLI).
//! Rounding ties during embedding are broken by an injected RNG, so
//! production runs stay randomized while tests seed a `ChaCha20Rng`.
//!
//! # Quick start
//!
//! ```rust
//! use pixveil::{encode, decode, scan, CodecParams, PixelGrid};
//! use rand::SeedableRng;
//!
//! let mut grid = PixelGrid::filled(100, 100, [0, 0, 0]);
//! let params = CodecParams::new(1, 1, 0).unwrap();
//! let mut rng = rand_chacha::ChaCha20Rng::from_entropy();
//!
//! encode(&mut grid, "hi", &params, &mut rng).unwrap();
//! assert_eq!(decode(&grid, &params).unwrap(), "hi");
//! assert_eq!(scan(&grid, 10).unwrap(), (1, 1));
//! ```

pub mod bits;
pub mod capacity;
pub mod decode;
pub mod encode;
pub mod error;
pub mod grid;
pub mod params;
pub mod rounding;
pub mod scan;

pub use decode::{decode, frame_length_bits};
pub use encode::{encode, EncodeOutcome};
pub use error::StegoError;
pub use grid::{PixelGrid, CHANNEL_ORDER};
pub use params::CodecParams;
pub use rounding::round_to_congruence;
pub use scan::{analyze, auto_decode, scan, ScanReport};
