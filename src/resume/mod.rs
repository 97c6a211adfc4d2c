// SPDX-FileCopyrightText: 2026 The ut2qbt Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Deserialize;
use serde::Serialize;
use serde_bencode::de;
use serde_bencode::value::Value;
use serde_bytes::ByteBuf;

use crate::errors::TransferError;
use crate::sanitize;

/// Housekeeping keys of resume.dat that do not name torrents.
const HOUSEKEEPING_KEYS: [&[u8]; 2] = [b".fileguard", b"rec"];

/// One torrent's record in the uTorrent resume database.
///
/// Text-carrying byte strings stay raw here (the save path, caption and
/// labels may be CESU-8) and are decoded through the sanitizer inside the
/// transfer engine. Unknown keys are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ResumeItem {
    #[serde(default)]
    pub path: ByteBuf,

    #[serde(default)]
    pub started: i64,

    #[serde(default)]
    pub added_on: i64,

    #[serde(default)]
    pub completed_on: i64,

    #[serde(default)]
    pub label: Option<ByteBuf>,

    #[serde(default)]
    pub labels: Option<Vec<ByteBuf>>,

    // User-facing name override shown in the client's list.
    #[serde(default)]
    pub caption: Option<ByteBuf>,

    // Name the client actually used on disk after stripping prohibited
    // symbols, when it differs from the torrent name.
    #[serde(default)]
    pub sanitized_name: Option<ByteBuf>,

    // Heterogeneous nested sequence: flat URL or tier group. Kept generic
    // and interpreted by the tracker flattener.
    #[serde(default)]
    pub trackers: Option<Value>,

    // One byte per file (v1) or two bytes per file (v2).
    #[serde(default)]
    pub prio: Option<ByteBuf>,

    // `[file-index, new-path]` pairs; the path is a leaf name or an
    // absolute path.
    #[serde(default)]
    pub targets: Option<Vec<(i64, ByteBuf)>>,

    #[serde(default)]
    pub blocksize: i64,

    // Raw have bitmap, one bit per piece, when the client recorded one.
    #[serde(default)]
    pub have: Option<ByteBuf>,

    // Presence marks the download as not yet complete.
    #[serde(default)]
    pub unfinished: Option<Value>,

    // Raw info hash bytes.
    #[serde(default)]
    pub info: Option<ByteBuf>,
}

impl ResumeItem {
    /// Decodes one resume.dat entry from its generic bencode value by
    /// round-tripping it through the encoder, the same two-pass trick the
    /// torrent parser uses.
    pub fn from_value(value: &Value) -> Result<Self, TransferError> {
        let bytes = serde_bencode::to_bytes(value)?;
        Ok(de::from_bytes(&bytes)?)
    }

    /// Info hash as lowercase hex, when the record carries one.
    pub fn info_hash_hex(&self) -> Option<String> {
        self.info.as_ref().map(|raw| hex::encode(raw.as_slice()))
    }
}

/// Reads resume.dat into `(torrent-file-name, raw record)` pairs, filtering
/// the housekeeping keys and sorting by key for a deterministic batch order.
pub fn read_resume_dict(data: &[u8]) -> Result<Vec<(String, Value)>, TransferError> {
    let generic: Value = de::from_bytes(data)?;
    let dict = match generic {
        Value::Dict(dict) => dict,
        _ => {
            return Err(TransferError::MetadataMalformed(
                "resume database is not a bencoded dictionary".to_string(),
            ))
        }
    };

    let mut entries: Vec<(Vec<u8>, Value)> = dict
        .into_iter()
        .filter(|(key, _)| !HOUSEKEEPING_KEYS.contains(&key.as_slice()))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut out = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let name = sanitize::decode_text(&key, "resume key")?;
        out.push((name, value));
    }
    Ok(out)
}
