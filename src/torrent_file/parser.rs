// SPDX-FileCopyrightText: 2026 The ut2qbt Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::errors::TransferError;
use crate::torrent_file::Torrent;

use serde_bencode::de;
use serde_bencode::value::Value;
use sha1::{Digest, Sha1};

/// Parses a .torrent file and computes the SHA-1 of its info dictionary.
///
/// The data is decoded twice: once into a generic bencode value so the raw
/// `info` dictionary can be re-encoded for hashing, and once into the typed
/// model. Bencode dictionaries re-encode in canonical sorted order, so the
/// digest matches what the original client announced.
pub fn from_bytes(bencode_data: &[u8]) -> Result<Torrent, TransferError> {
    let generic: Value = de::from_bytes(bencode_data)?;

    let info_value = match generic {
        Value::Dict(mut top_level) => top_level.remove("info".as_bytes()).ok_or_else(|| {
            TransferError::MetadataMalformed("missing 'info' dictionary".to_string())
        })?,
        _ => {
            return Err(TransferError::MetadataMalformed(
                "torrent file is not a bencoded dictionary".to_string(),
            ))
        }
    };
    let info_bencode = serde_bencode::to_bytes(&info_value)?;

    let mut torrent: Torrent = de::from_bytes(bencode_data)?;
    torrent.info_hash = Sha1::digest(&info_bencode).to_vec();

    if torrent.info.piece_length <= 0 {
        return Err(TransferError::MetadataMalformed(
            "missing or non-positive 'piece length'".to_string(),
        ));
    }

    Ok(torrent)
}
