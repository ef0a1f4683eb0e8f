// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Carrier capacity: how many payload bits fit in an image's RGB bit-plane.
//!
//! One bit per R, G and B channel per pixel; alpha is never used. The guard
//! runs once on the hide path, before any pixel is touched, so an oversized
//! payload can never leave a half-written stego image behind. The reveal
//! path has no guard — the extractor trusts the embedded length fields and
//! degrades to garbage on a wrong password (see [`crate::lsb`]).

use crate::error::StegoError;

/// Embedding capacity of a `width`×`height` carrier in bits.
pub fn available_bits(width: u32, height: u32) -> usize {
    width as usize * height as usize * 3
}

/// Embedding capacity of a `width`×`height` carrier in whole bytes.
pub fn available_bytes(width: u32, height: u32) -> usize {
    available_bits(width, height) / 8
}

/// Check that a framed payload of `payload_len` bytes fits the carrier.
///
/// # Errors
/// [`StegoError::PayloadTooLarge`] if `payload_len * 8` exceeds
/// [`available_bits`].
pub fn check_capacity(width: u32, height: u32, payload_len: usize) -> Result<(), StegoError> {
    if payload_len * 8 > available_bits(width, height) {
        return Err(StegoError::PayloadTooLarge);
    }
    Ok(())
}
