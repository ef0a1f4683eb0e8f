// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/veilcore

//! Payload framing: the byte-level layout wrapped around a hidden payload
//! before it is embedded into the carrier's bit-plane.
//!
//! Two framings share the embedding substrate ([`crate::lsb`]) and the
//! cipher ([`crate::crypto`]):
//!
//! **Message framing** (text payloads):
//! ```text
//! [4 bytes] ciphertext length (big-endian u32, NOT encrypted)
//! [N bytes] XOR ciphertext of: "SECRET:" + utf-8 text + block padding
//! ```
//! The plaintext is padded to a multiple of 16 bytes with trailing-byte-count
//! padding (every pad byte equals the pad count; a full extra block when the
//! length is already aligned), so N is always a positive multiple of 16.
//! The known `SECRET:` prefix doubles as a coarse wrong-password check.
//!
//! **Image framing** (image payloads):
//! ```text
//! [2 bytes] secret width  (big-endian u16) ┐
//! [2 bytes] secret height (big-endian u16) ├─ all XOR-encrypted
//! [w*h*4]   raw RGBA bytes, row-major      ┘
//! ```
//! No length prefix and no tag: the dimensions in the header describe the
//! body. A wrong password here decrypts to implausible dimensions and
//! surfaces as [`StegoError::FrameTruncated`] rather than a clean
//! authentication failure — a known asymmetry between the two framings.

use crate::crypto::xor_transform;
use crate::error::StegoError;
use image::RgbaImage;

/// Known plaintext prefix for message framing.
pub const MESSAGE_TAG: &[u8] = b"SECRET:";

/// Padding block size for message framing.
pub const PAD_BLOCK: usize = 16;

/// Length of the clear-text ciphertext-length prefix (message framing) and
/// of the encrypted dimension header (image framing). Both framings need
/// exactly this many bytes extracted before the total frame size is known.
pub const HEADER_LEN: usize = 4;

/// A payload to hide: either a short text message or a secret image.
///
/// The two variants share the bit-plane codec and the cipher; only the
/// framing differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Text(String),
    Image(RgbaImage),
}

impl Payload {
    /// Frame and encrypt this payload, producing the bytes to embed.
    pub fn encode(&self, key: &[u8]) -> Result<Vec<u8>, StegoError> {
        match self {
            Self::Text(text) => encode_message_frame(text, key),
            Self::Image(img) => encode_image_frame(img, key),
        }
    }
}

/// Pad `data` to a multiple of [`PAD_BLOCK`] bytes.
///
/// Trailing-byte-count scheme: appends `k` bytes of value `k`, where
/// `k = 16 - (len % 16)`. Always appends at least one byte — an already
/// aligned input gains a full 16-byte block, so unpadding is unambiguous.
pub fn pad_block(data: &[u8]) -> Vec<u8> {
    let pad_len = PAD_BLOCK - (data.len() % PAD_BLOCK);
    let mut out = Vec::with_capacity(data.len() + pad_len);
    out.extend_from_slice(data);
    out.extend(std::iter::repeat(pad_len as u8).take(pad_len));
    out
}

/// Strip trailing-byte-count padding.
///
/// # Errors
/// [`StegoError::InvalidPadding`] if the final byte is not in `1..=16`, the
/// pad count exceeds the input length, or the trailing bytes disagree with
/// the count. After a wrong-password decrypt the final byte is effectively
/// random, so this rejects with probability ~250/256 before the tag check.
pub fn unpad_block(data: &[u8]) -> Result<&[u8], StegoError> {
    let pad_len = match data.last() {
        Some(&b) if (1..=PAD_BLOCK as u8).contains(&b) => b as usize,
        _ => return Err(StegoError::InvalidPadding),
    };
    if pad_len > data.len() {
        return Err(StegoError::InvalidPadding);
    }
    let (body, pad) = data.split_at(data.len() - pad_len);
    if pad.iter().any(|&b| b != pad_len as u8) {
        return Err(StegoError::InvalidPadding);
    }
    Ok(body)
}

/// Frame a text message: tag, pad, encrypt, prepend the ciphertext length.
pub fn encode_message_frame(text: &str, key: &[u8]) -> Result<Vec<u8>, StegoError> {
    let mut plaintext = Vec::with_capacity(MESSAGE_TAG.len() + text.len() + PAD_BLOCK);
    plaintext.extend_from_slice(MESSAGE_TAG);
    plaintext.extend_from_slice(text.as_bytes());
    let padded = pad_block(&plaintext);

    let ciphertext = xor_transform(&padded, key)?;

    let mut frame = Vec::with_capacity(HEADER_LEN + ciphertext.len());
    frame.extend_from_slice(&(ciphertext.len() as u32).to_be_bytes());
    frame.extend_from_slice(&ciphertext);
    Ok(frame)
}

/// Parse a message frame: read the length, decrypt, unpad, verify the tag.
///
/// The input may be longer than the frame (trailing extraction slack is
/// ignored). Only the declared ciphertext bytes are decrypted.
///
/// # Errors
/// - [`StegoError::FrameTruncated`] if fewer bytes are available than the
///   length prefix declares.
/// - [`StegoError::InvalidPadding`] if the decrypted pad is inconsistent.
/// - [`StegoError::WrongPassword`] if the tag is absent or the text is not
///   valid UTF-8 — the explicit wrong-password signal of this framing.
pub fn decode_message_frame(frame: &[u8], key: &[u8]) -> Result<String, StegoError> {
    if frame.len() < HEADER_LEN {
        return Err(StegoError::FrameTruncated);
    }
    let len = u32::from_be_bytes([frame[0], frame[1], frame[2], frame[3]]) as usize;
    let body = &frame[HEADER_LEN..];
    if body.len() < len {
        return Err(StegoError::FrameTruncated);
    }

    let padded = xor_transform(&body[..len], key)?;
    let plaintext = unpad_block(&padded)?;

    let text = plaintext
        .strip_prefix(MESSAGE_TAG)
        .ok_or(StegoError::WrongPassword)?;
    let text = std::str::from_utf8(text).map_err(|_| StegoError::WrongPassword)?;
    Ok(text.to_owned())
}

/// Frame a secret image: 2+2 byte dimension header plus raw RGBA bytes,
/// all encrypted.
///
/// # Errors
/// [`StegoError::SecretTooLarge`] if either dimension exceeds `u16::MAX`
/// (the header stores dimensions in two bytes each).
pub fn encode_image_frame(secret: &RgbaImage, key: &[u8]) -> Result<Vec<u8>, StegoError> {
    let (w, h) = secret.dimensions();
    if w > u16::MAX as u32 || h > u16::MAX as u32 {
        return Err(StegoError::SecretTooLarge);
    }

    let raw = secret.as_raw();
    let mut frame = Vec::with_capacity(HEADER_LEN + raw.len());
    frame.extend_from_slice(&(w as u16).to_be_bytes());
    frame.extend_from_slice(&(h as u16).to_be_bytes());
    frame.extend_from_slice(raw);

    xor_transform(&frame, key)
}

/// Parse an image frame: decrypt, read dimensions, rebuild the image.
///
/// # Errors
/// [`StegoError::FrameTruncated`] if fewer pixel bytes are available than
/// the decrypted header declares, or the dimensions are implausible (zero).
/// With a wrong password the decrypted dimensions are effectively random,
/// so this is the usual failure mode — there is no tag to check.
pub fn decode_image_frame(frame: &[u8], key: &[u8]) -> Result<RgbaImage, StegoError> {
    if frame.len() < HEADER_LEN {
        return Err(StegoError::FrameTruncated);
    }
    let decrypted = xor_transform(frame, key)?;

    let w = u16::from_be_bytes([decrypted[0], decrypted[1]]) as u32;
    let h = u16::from_be_bytes([decrypted[2], decrypted[3]]) as u32;
    if w == 0 || h == 0 {
        return Err(StegoError::FrameTruncated);
    }

    // usize arithmetic: u16-max dimensions overflow a u32 byte count.
    let expected = w as usize * h as usize * 4;
    let body = &decrypted[HEADER_LEN..];
    if body.len() < expected {
        return Err(StegoError::FrameTruncated);
    }

    RgbaImage::from_raw(w, h, body[..expected].to_vec()).ok_or(StegoError::FrameTruncated)
}

/// Decrypt an extracted image-frame header and return the total frame size
/// in bytes: `4 + width*height*4`.
///
/// Used by the reveal pipeline to learn how many bytes to extract. The
/// header must be decrypted before interpreting — it was encrypted along
/// with the pixel data.
pub fn image_frame_total_len(header: &[u8; HEADER_LEN], key: &[u8]) -> Result<usize, StegoError> {
    let plain = xor_transform(header, key)?;
    let w = u16::from_be_bytes([plain[0], plain[1]]) as usize;
    let h = u16::from_be_bytes([plain[2], plain[3]]) as usize;
    Ok(HEADER_LEN + w * h * 4)
}

/// Read a message-frame length prefix and return the total frame size in
/// bytes: `4 + ciphertext_len`. The prefix is stored in the clear.
pub fn message_frame_total_len(header: &[u8; HEADER_LEN]) -> usize {
    HEADER_LEN + u32::from_be_bytes(*header) as usize
}
