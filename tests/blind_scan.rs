// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixveil

//! Integration tests for blind parameter recovery.

use pixveil::capacity::max_scan_skip;
use pixveil::{analyze, auto_decode, encode, scan, CodecParams, PixelGrid, StegoError};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::from_seed([3u8; 32])
}

fn cover(width: usize, height: usize) -> PixelGrid {
    let data = (0..width * height)
        .map(|i| [(i * 31 % 256) as u8, (i * 5 % 256) as u8, (i * 11 % 256) as u8])
        .collect();
    PixelGrid::new(width, height, data)
}

#[test]
fn scan_finds_the_encoding_parameters() {
    for (bit_level, skipping) in [(1u8, 1usize), (1, 4), (4, 3), (6, 2), (8, 1)] {
        let mut grid = cover(128, 128);
        let params = CodecParams::new(bit_level, skipping, 0).unwrap();
        encode(&mut grid, "find my parameters", &params, &mut rng()).unwrap();

        let max_skip = max_scan_skip(grid.width(), grid.height());
        let found = scan(&grid, max_skip).unwrap();
        assert_eq!(found, (bit_level, skipping), "encoded at ({bit_level}, {skipping})");
    }
}

#[test]
fn hi_scenario_scan_returns_one_one() {
    let mut grid = PixelGrid::filled(100, 100, [0, 0, 0]);
    let params = CodecParams::new(1, 1, 0).unwrap();
    encode(&mut grid, "hi", &params, &mut rng()).unwrap();
    assert_eq!(scan(&grid, 1).unwrap(), (1, 1));
    assert_eq!(scan(&grid, 500).unwrap(), (1, 1));
}

#[test]
fn unmodified_images_scan_to_nothing() {
    for pixel in [[0u8, 0, 0], [255, 255, 255], [170, 85, 170]] {
        let grid = PixelGrid::filled(100, 100, pixel);
        let max_skip = max_scan_skip(100, 100);
        assert_eq!(scan(&grid, max_skip), Err(StegoError::NoMessageFound), "pixel {pixel:?}");
    }
}

#[test]
fn scan_result_is_reproducible() {
    // The parallel trials must merge back to the sequential search order.
    let mut grid = cover(160, 120);
    let params = CodecParams::new(5, 2, 0).unwrap();
    encode(&mut grid, "deterministic merge", &params, &mut rng()).unwrap();
    let max_skip = max_scan_skip(grid.width(), grid.height());
    let first = scan(&grid, max_skip).unwrap();
    for _ in 0..8 {
        assert_eq!(scan(&grid, max_skip).unwrap(), first);
    }
}

#[test]
fn auto_decode_roundtrips_without_parameters() {
    let message = "recovered without being told how";
    for (bit_level, skipping) in [(2u8, 3usize), (8, 1)] {
        let mut grid = cover(200, 150);
        let params = CodecParams::new(bit_level, skipping, 0).unwrap();
        encode(&mut grid, message, &params, &mut rng()).unwrap();
        let max_skip = max_scan_skip(grid.width(), grid.height());
        assert_eq!(auto_decode(&grid, max_skip).unwrap(), message);
    }
}

#[test]
fn analyze_reports_parameters_and_size() {
    let mut grid = cover(128, 128);
    let params = CodecParams::new(3, 2, 0).unwrap();
    let message = "analyze, don't decode";
    encode(&mut grid, message, &params, &mut rng()).unwrap();

    let report = analyze(&grid, max_scan_skip(128, 128)).unwrap();
    assert_eq!(report.bit_level, 3);
    assert_eq!(report.skipping, 2);
    assert_eq!(report.message_bits, message.chars().count() as u64 * 8);
}

#[test]
fn auto_decode_on_clean_image_fails_cleanly() {
    let grid = cover(64, 64);
    let max_skip = max_scan_skip(64, 64);
    assert_eq!(auto_decode(&grid, max_skip), Err(StegoError::NoMessageFound));
}
