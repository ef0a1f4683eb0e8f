// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Bit-plane codec: embeds a byte buffer into the least-significant bits of
//! an RGBA image's color channels, and extracts it back.
//!
//! Traversal is row-major from the top-left: `y` outer, `x` inner. Each
//! visited pixel carries up to three payload bits, one in the LSB of R, G
//! and B in that fixed order; alpha is never touched. Bit order within a
//! source byte is MSB-first: bit `k` of byte `i` is `(byte[i] >> (7-k)) & 1`.
//!
//! Both encoder and decoder walk the identical path, so the payload needs no
//! position table. The stego image must reach the decoder losslessly (PNG or
//! similar) — any recompression that perturbs channel values destroys the
//! payload.
//!
//! No capacity checks happen here. The hide pipeline guards with
//! [`crate::capacity::check_capacity`] before calling [`embed_bytes`]; on
//! extraction the requested byte count comes from an embedded header and may
//! legitimately exceed what the grid holds after a wrong-password decrypt,
//! in which case [`extract_bytes`] reads to exhaustion and zero-fills the
//! unfinished low bits of the final byte.

use image::RgbaImage;

/// Embed `data` into the RGB LSBs of `img`, mutating it in place.
///
/// Stops as soon as the last bit is written, even mid-pixel: the remaining
/// channels of the final pixel keep their original values. Bits beyond the
/// grid's capacity are silently dropped — callers must capacity-check first.
pub fn embed_bytes(img: &mut RgbaImage, data: &[u8]) {
    let (width, height) = img.dimensions();
    let total_bits = data.len() * 8;
    let mut bit_index = 0usize;

    'grid: for y in 0..height {
        for x in 0..width {
            if bit_index >= total_bits {
                break 'grid;
            }
            let pixel = img.get_pixel_mut(x, y);
            // R, G, B in fixed channel order; alpha (channel 3) untouched.
            for channel in 0..3 {
                if bit_index >= total_bits {
                    break;
                }
                let bit = (data[bit_index / 8] >> (7 - (bit_index % 8))) & 1;
                pixel.0[channel] = (pixel.0[channel] & 0xFE) | bit;
                bit_index += 1;
            }
        }
    }
}

/// Extract `num_bytes` from the RGB LSBs of `img`.
///
/// Mirrors the traversal of [`embed_bytes`], accumulating 8 bits MSB-first
/// per output byte. If `num_bytes * 8` exceeds the grid's bit capacity the
/// result is shorter than requested (plus one zero-padded partial byte when
/// the available bit count is not a multiple of 8). The allocation is
/// bounded by the grid, not by the request, so a garbage header cannot
/// force a huge buffer.
pub fn extract_bytes(img: &RgbaImage, num_bytes: usize) -> Vec<u8> {
    let (width, height) = img.dimensions();
    let available_bits = width as usize * height as usize * 3;
    // saturating: num_bytes may come from a garbage 32-bit length field.
    let total_bits = num_bytes.saturating_mul(8).min(available_bits);

    let mut bytes = Vec::with_capacity((total_bits + 7) / 8);
    let mut acc = 0u8;
    let mut bit_index = 0usize;

    'grid: for y in 0..height {
        for x in 0..width {
            if bit_index >= total_bits {
                break 'grid;
            }
            let pixel = img.get_pixel(x, y);
            for channel in 0..3 {
                if bit_index >= total_bits {
                    break;
                }
                acc = (acc << 1) | (pixel.0[channel] & 1);
                bit_index += 1;
                if bit_index % 8 == 0 {
                    bytes.push(acc);
                    acc = 0;
                }
            }
        }
    }

    // Partial final byte: shift the collected bits up and zero-fill.
    let rem = bit_index % 8;
    if rem != 0 {
        bytes.push(acc << (8 - rem));
    }

    bytes
}
