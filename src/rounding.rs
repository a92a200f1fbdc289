// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pixveil

//! Congruence rounding: move a channel value to the nearest integer with a
//! target residue.
//!
//! Every embedded segment forces its channel to satisfy
//! `value % 2^bit_level == segment`. Rounding to the *nearest* such value
//! keeps the visual perturbation minimal. When the two bracketing candidates
//! are equidistant (`|d| == modulus/2`) the choice is made uniformly at
//! random from the injected RNG, so that stego images do not carry a
//! deterministic up/down bias. The RNG is a parameter, not ambient state,
//! so tests can seed it.

use rand::Rng;

/// Round `k` to the nearest `n ∈ [0, 255]` with `n % modulus == residue`.
///
/// `modulus` is a power of two in `2..=256` and `residue < modulus`. The two
/// candidates bracketing `k` are `k + d` and `k + d ∓ modulus` for the
/// minimal signed adjustment `d`; the nearer one wins, ties are broken by
/// `rng`, and at the value-range boundaries the single in-range candidate is
/// taken.
pub fn round_to_congruence<R: Rng + ?Sized>(
    k: u8,
    residue: u16,
    modulus: u16,
    rng: &mut R,
) -> u8 {
    let modulus = modulus as i32;
    let residue = (residue as i32) % modulus;
    let k = k as i32;

    // Minimal signed adjustment d in (-modulus/2, modulus/2].
    let mut d = residue - k.rem_euclid(modulus);
    if d > modulus / 2 {
        d -= modulus;
    } else if d <= -modulus / 2 {
        d += modulus;
    }

    let near = k + d;
    // The other congruent value bracketing k from the opposite side.
    let far = if d > 0 { near - modulus } else { near + modulus };

    let n = if !(0..=255).contains(&near) {
        far
    } else if !(0..=255).contains(&far) {
        near
    } else if d.abs() * 2 == modulus && rng.gen_bool(0.5) {
        far
    } else {
        near
    };

    debug_assert!((0..=255).contains(&n), "both congruent candidates out of range");
    n as u8
}
