// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Hide/reveal pipelines composing the cipher, framer and bit-plane codec.
//!
//! Hide: derive keystream → frame + encrypt the payload → capacity-check
//! against the cover → embed into a clone of the cover's pixel grid. The
//! cover itself is never mutated, and nothing is embedded if the capacity
//! check fails.
//!
//! Reveal runs the pipeline backwards, in two extraction passes: first the
//! 4-byte header to learn the total frame length (message mode reads the
//! clear-text length prefix; image mode decrypts the dimension header), then
//! the full frame, which is decrypted and deframed. Each call is a pure
//! single pass with no cross-call state.
//!
//! Password acquisition is the caller's concern: the pipeline takes the
//! final string. Interactive flows (prompt with confirmation, etc.) belong
//! to the frontend, not here.

use crate::capacity::check_capacity;
use crate::crypto::{derive_keystream, KEY_LEN};
use crate::error::StegoError;
use crate::frame::{self, Payload, HEADER_LEN};
use crate::lsb;
use image::RgbaImage;

/// Hide a payload in a cover image, returning the stego image.
///
/// # Errors
/// - [`StegoError::InvalidKey`] if the password is empty.
/// - [`StegoError::SecretTooLarge`] if an image payload exceeds u16 dimensions.
/// - [`StegoError::PayloadTooLarge`] if the framed payload exceeds the
///   cover's `width*height*3`-bit capacity. Checked before any mutation.
pub fn hide(cover: &RgbaImage, payload: &Payload, password: &str) -> Result<RgbaImage, StegoError> {
    let key = derive_keystream(password, KEY_LEN)?;
    let frame_bytes = payload.encode(&key)?;

    let (width, height) = cover.dimensions();
    check_capacity(width, height, frame_bytes.len())?;

    let mut stego = cover.clone();
    lsb::embed_bytes(&mut stego, &frame_bytes);
    Ok(stego)
}

/// Hide a text message in a cover image.
pub fn hide_message(cover: &RgbaImage, message: &str, password: &str) -> Result<RgbaImage, StegoError> {
    hide(cover, &Payload::Text(message.to_owned()), password)
}

/// Hide a secret image in a cover image.
pub fn hide_image(cover: &RgbaImage, secret: &RgbaImage, password: &str) -> Result<RgbaImage, StegoError> {
    hide(cover, &Payload::Image(secret.clone()), password)
}

/// Reveal a hidden text message from a stego image.
///
/// # Errors
/// - [`StegoError::InvalidKey`] if the password is empty.
/// - [`StegoError::FrameTruncated`], [`StegoError::InvalidPadding`] or
///   [`StegoError::WrongPassword`] on a wrong password or corrupted image;
///   all three display as "incorrect password or corrupted data".
pub fn reveal_message(stego: &RgbaImage, password: &str) -> Result<String, StegoError> {
    let key = derive_keystream(password, KEY_LEN)?;
    let header = extract_header(stego)?;

    let total = frame::message_frame_total_len(&header);
    let frame_bytes = lsb::extract_bytes(stego, total);
    frame::decode_message_frame(&frame_bytes, &key)
}

/// Reveal a hidden secret image from a stego image.
///
/// Image framing carries no tag, so a wrong password usually surfaces as
/// [`StegoError::FrameTruncated`] from implausible decrypted dimensions —
/// and can in rare cases produce a garbage image with no error at all.
/// This is a known limitation of the format, not detectable here.
pub fn reveal_image(stego: &RgbaImage, password: &str) -> Result<RgbaImage, StegoError> {
    let key = derive_keystream(password, KEY_LEN)?;
    let header = extract_header(stego)?;

    let total = frame::image_frame_total_len(&header, &key)?;
    let frame_bytes = lsb::extract_bytes(stego, total);
    frame::decode_image_frame(&frame_bytes, &key)
}

/// Extract the fixed-size frame header from the stego image.
///
/// Fails only when the grid is too small to hold even 4 bytes.
fn extract_header(stego: &RgbaImage) -> Result<[u8; HEADER_LEN], StegoError> {
    let bytes = lsb::extract_bytes(stego, HEADER_LEN);
    bytes
        .get(..HEADER_LEN)
        .and_then(|b| b.try_into().ok())
        .ok_or(StegoError::FrameTruncated)
}
