// SPDX-FileCopyrightText: 2026 The ut2qbt Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::errors::TransferError;

/// Characters Windows refuses inside a single path segment.
pub const PROHIBITED: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Decodes a bencode byte string that is supposed to carry text.
///
/// uTorrent-era clients persisted names in CESU-8: a supplementary code
/// point becomes a UTF-16 surrogate pair where each half is encoded as its
/// own three-byte sequence. Rust strings reject those bytes outright, so we
/// collapse each high/low pair back into the single four-byte scalar.
/// Well-formed UTF-8 passes through untouched; anything else is an error.
pub fn decode_text(bytes: &[u8], field: &str) -> Result<String, TransferError> {
    let mut out = String::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match std::str::from_utf8(&bytes[i..]) {
            Ok(tail) => {
                out.push_str(tail);
                break;
            }
            Err(err) => {
                let valid = err.valid_up_to();
                if valid > 0 {
                    if let Ok(prefix) = std::str::from_utf8(&bytes[i..i + valid]) {
                        out.push_str(prefix);
                    }
                    i += valid;
                    continue;
                }
                match decode_surrogate_pair(&bytes[i..]) {
                    Some(ch) => {
                        out.push(ch);
                        i += 6;
                    }
                    None => return Err(TransferError::EncodingFailure(field.to_string())),
                }
            }
        }
    }
    Ok(out)
}

/// Reads a CESU-8 surrogate pair (two three-byte sequences) from the front
/// of `bytes` and returns the supplementary code point it encodes.
fn decode_surrogate_pair(bytes: &[u8]) -> Option<char> {
    if bytes.len() < 6 {
        return None;
    }
    let high = decode_surrogate_half(bytes[0], bytes[1], bytes[2])?;
    let low = decode_surrogate_half(bytes[3], bytes[4], bytes[5])?;
    if !(0xD800..=0xDBFF).contains(&high) || !(0xDC00..=0xDFFF).contains(&low) {
        return None;
    }
    let code_point = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
    char::from_u32(code_point)
}

fn decode_surrogate_half(b0: u8, b1: u8, b2: u8) -> Option<u32> {
    if b0 != 0xED || b1 & 0xC0 != 0x80 || b2 & 0xC0 != 0x80 {
        return None;
    }
    // 1110xxxx 10xxxxxx 10xxxxxx with the leading nibble fixed to 0xD.
    Some(0xD000 | (u32::from(b1 & 0x3F) << 6) | u32::from(b2 & 0x3F))
}

/// Cleans one path segment: prohibited characters become `_`, trailing
/// spaces are trimmed. Separators are never part of a segment, so the
/// substitution cannot eat them.
pub fn sanitize_segment(segment: &str) -> String {
    let replaced: String = segment
        .chars()
        .map(|c| if PROHIBITED.contains(&c) { '_' } else { c })
        .collect();
    replaced.trim_end_matches(' ').to_string()
}

/// Decode + sanitize in one step, for fields that name a file or folder.
pub fn sanitize_text(bytes: &[u8], field: &str) -> Result<String, TransferError> {
    Ok(sanitize_segment(&decode_text(bytes, field)?))
}
