// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixveil

//! Error types for the steganography codec.
//!
//! [`StegoError`] covers all failure modes from parameter validation through
//! bit extraction. A message that only partially fits the cover image is
//! *not* an error — it is reported as
//! [`EncodeOutcome::Partial`](crate::encode::EncodeOutcome::Partial).

use core::fmt;

/// Errors that can occur during steganographic encoding or decoding.
#[derive(Debug, PartialEq, Eq)]
pub enum StegoError {
    /// The cover image has too few pixels to hold even the frame header.
    ImageTooSmall,
    /// No synchronization preamble was found at the given (or any scanned)
    /// parameters.
    NoMessageFound,
    /// The extracted bit sequence cannot be converted back to text
    /// (bit count not a positive multiple of the character width).
    InvalidBitStream,
    /// An encoding parameter is outside its valid range.
    InvalidParams(&'static str),
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageTooSmall => write!(f, "image too small for embedding"),
            Self::NoMessageFound => write!(f, "no message found"),
            Self::InvalidBitStream => write!(f, "extracted bits do not form valid text"),
            Self::InvalidParams(what) => write!(f, "invalid parameter: {what}"),
        }
    }
}

impl std::error::Error for StegoError {}
