// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixveil

//! Command-line frontend: PNG-backed image I/O around the pixveil codec.
//!
//! The codec itself never touches files; this binary loads the cover image
//! into a [`PixelGrid`], runs the requested operation, and saves mutated
//! grids losslessly to `encoded.png`.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use pixveil::capacity::{auto_skip, max_scan_skip};
use pixveil::{analyze, auto_decode, decode, encode, CodecParams, EncodeOutcome, PixelGrid};

/// File the mutated image is written to. PNG keeps channel values exact.
const OUTPUT_FILE: &str = "encoded.png";

#[derive(Parser)]
#[command(
    name = "pixveil",
    about = "Encode and decode a message into and from the colour channels of an image."
)]
struct Cli {
    /// Name of the image file.
    filename: PathBuf,

    /// Encode the contents of a text file into the image.
    #[arg(short, long, value_name = "TEXTFILE", conflicts_with = "message")]
    input: Option<PathBuf>,

    /// Type directly to encode a message into the image file.
    #[arg(short = 't', long = "type", value_name = "MESSAGE")]
    message: Option<String>,

    /// Read a message from the image file.
    #[arg(short, long)]
    decode: bool,

    /// Store n bits per colour channel. Higher is less discreet.
    #[arg(short, long, value_name = "BITS_PER_CHANNEL")]
    bit_level: Option<u8>,

    /// Skip all but every Nth pixel while encoding. 0 spreads the message
    /// evenly across the image.
    #[arg(short, long, value_name = "N")]
    skipping: Option<usize>,

    /// Start encoding at the Kth pixel. Allows multiple messages per image
    /// when the stride matches.
    #[arg(short, long, value_name = "K")]
    offset: Option<usize>,

    /// Try to automatically find an encoded message and its settings.
    #[arg(short, long)]
    analyze: bool,
}

fn load_grid(path: &PathBuf) -> Result<PixelGrid> {
    let img = image::open(path)
        .with_context(|| format!("cannot open image '{}'", path.display()))?
        .to_rgb8();
    let (width, height) = img.dimensions();
    info!("loaded {}x{} image from '{}'", width, height, path.display());
    Ok(PixelGrid::from_raw_rgb(width as usize, height as usize, img.as_raw()))
}

fn save_grid(grid: PixelGrid) -> Result<()> {
    let (width, height) = (grid.width() as u32, grid.height() as u32);
    let img = image::RgbImage::from_raw(width, height, grid.into_raw_rgb())
        .context("pixel buffer does not match image dimensions")?;
    img.save(OUTPUT_FILE)
        .with_context(|| format!("cannot save '{OUTPUT_FILE}'"))?;
    info!("saved stego image to '{OUTPUT_FILE}'");
    Ok(())
}

/// Keep only characters the bit codec can carry: code points in (0, 255),
/// or (0, 128) at bit_level 7 where characters are stored in 7 bits.
fn filter_encodable(text: &str, bit_level: u8) -> String {
    let limit = if bit_level == 7 { 128 } else { 255 };
    text.chars().filter(|&c| (c as u32) > 0 && (c as u32) < limit).collect()
}

fn run_encode(grid: &mut PixelGrid, message: &str, cli: &Cli) -> Result<()> {
    let bit_level = cli.bit_level.unwrap_or(1);
    let message = filter_encodable(message, bit_level);
    let skipping = match cli.skipping {
        Some(0) => auto_skip(message.chars().count(), bit_level, grid.width(), grid.height()),
        Some(s) => s,
        None => 1,
    };
    let params = CodecParams::new(bit_level, skipping, cli.offset.unwrap_or(0))?;

    let mut rng = ChaCha20Rng::from_entropy();
    match encode(grid, &message, &params, &mut rng)? {
        EncodeOutcome::Complete => println!(
            "Encoded with bit_level = {}, skipping = {}, offset = {}.",
            params.bit_level, params.skipping, params.offset
        ),
        EncodeOutcome::Partial { percent } => println!(
            "Couldn't fit entire message in image ({:.1} % completed).",
            percent
        ),
    }
    Ok(())
}

fn run_decode(grid: &PixelGrid, cli: &Cli) -> Result<()> {
    let manual = cli.bit_level.is_some() || cli.skipping.is_some() || cli.offset.is_some();
    let message = if manual {
        let params = CodecParams::new(
            cli.bit_level.unwrap_or(1),
            cli.skipping.unwrap_or(1).max(1),
            cli.offset.unwrap_or(0),
        )?;
        decode(grid, &params)?
    } else {
        auto_decode(grid, max_scan_skip(grid.width(), grid.height()))?
    };
    println!("{message}");
    Ok(())
}

fn run_analyze(grid: &PixelGrid) -> Result<()> {
    let report = analyze(grid, max_scan_skip(grid.width(), grid.height()))?;
    println!(
        "{:.2}kB message detected with bit_level = {} and skipping = {}.",
        report.message_bits as f64 / 8000.0,
        report.bit_level,
        report.skipping
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut grid = load_grid(&cli.filename)?;

    if cli.decode {
        run_decode(&grid, &cli)?;
    } else if let Some(path) = &cli.input {
        let text = fs::read_to_string(path)
            .with_context(|| format!("supplied text file '{}' not found", path.display()))?;
        run_encode(&mut grid, &text, &cli)?;
        save_grid(grid)?;
    } else if let Some(message) = cli.message.clone() {
        run_encode(&mut grid, &message, &cli)?;
        save_grid(grid)?;
    } else if cli.analyze {
        run_analyze(&grid)?;
    } else {
        bail!("nothing to do: pass one of --type, --input, --decode or --analyze");
    }

    Ok(())
}
