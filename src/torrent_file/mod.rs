// SPDX-FileCopyrightText: 2026 The ut2qbt Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod parser;

use serde::Deserialize;
use serde::Serialize;
use serde_bencode::value::Value;
use serde_bytes::ByteBuf;

use crate::errors::TransferError;
use crate::sanitize;

/// Typed view of a .torrent file. Only the keys the converter consumes are
/// modeled; everything else is ignored on decode and the original file is
/// copied to the target directory byte-for-byte anyway.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Torrent {
    // Not part of the bencode source; filled by the parser from the
    // re-encoded info dictionary.
    #[serde(skip)]
    pub info_hash: Vec<u8>,

    #[serde(default)]
    pub info: TorrentInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TorrentInfo {
    #[serde(rename = "piece length", default)]
    pub piece_length: i64,

    // v1 flat hash blob, 20 bytes per piece. Binary, never text.
    #[serde(default)]
    pub pieces: ByteBuf,

    // Names may be CESU-8 on old clients, so they stay raw bytes here and
    // are decoded through the sanitizer.
    #[serde(default)]
    pub name: ByteBuf,

    #[serde(rename = "name.utf-8", default)]
    pub name_utf8: Option<ByteBuf>,

    // v1 multi-file list; absent for single-file torrents.
    #[serde(default)]
    pub files: Option<Vec<TorrentInfoFile>>,

    // v2 file tree: recursive dictionary keyed by path segments, leaves
    // under the empty key carrying `length` and `pieces_root`.
    #[serde(rename = "file tree", default)]
    pub file_tree: Option<Value>,

    // v1 single-file length.
    #[serde(default)]
    pub length: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TorrentInfoFile {
    #[serde(default)]
    pub length: i64,

    #[serde(default)]
    pub path: Vec<ByteBuf>,

    #[serde(rename = "path.utf-8", default)]
    pub path_utf8: Option<Vec<ByteBuf>>,
}

/// One payload file: decoded (but unsanitized) path segments plus length.
#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    pub segments: Vec<String>,
    pub length: i64,
}

/// Unified view over the v1 files list and the v2 file tree.
///
/// `single` marks the classic single-file convention: the torrent name *is*
/// the file name and no folder is implied. A multi-file torrent that happens
/// to contain one file is not `single`.
#[derive(Debug, Clone, PartialEq)]
pub struct FileView {
    pub entries: Vec<FileEntry>,
    pub single: bool,
}

impl FileView {
    pub fn file_count(&self) -> usize {
        self.entries.len()
    }

    pub fn total_length(&self) -> i64 {
        self.entries.iter().map(|e| e.length).sum()
    }

    pub fn lengths(&self) -> Vec<i64> {
        self.entries.iter().map(|e| e.length).collect()
    }
}

impl TorrentInfo {
    /// The stored name bytes, preferring the UTF-8 override when present.
    pub fn name_bytes(&self) -> &[u8] {
        match &self.name_utf8 {
            Some(utf8) if !utf8.is_empty() => utf8,
            _ => &self.name,
        }
    }
}

impl Torrent {
    /// Torrent name decoded to text (CESU-8 repaired), without any path
    /// sanitization.
    pub fn raw_name(&self) -> Result<String, TransferError> {
        sanitize::decode_text(self.info.name_bytes(), "info.name")
    }

    /// Torrent name as qBittorrent will use it on disk.
    pub fn normalized_name(&self) -> Result<String, TransferError> {
        sanitize::sanitize_text(self.info.name_bytes(), "info.name")
    }

    /// Builds the unified file view. The v2 file tree is authoritative for
    /// hybrid torrents; a v1 files list that disagrees with it is rejected.
    pub fn file_view(&self) -> Result<FileView, TransferError> {
        let v1_files = self.info.files.as_ref().filter(|f| !f.is_empty());

        if let Some(tree) = &self.info.file_tree {
            let mut entries = Vec::new();
            let mut prefix = Vec::new();
            walk_file_tree(tree, &mut prefix, &mut entries)?;
            if entries.is_empty() {
                return Err(TransferError::MetadataMalformed(
                    "file tree has no files".to_string(),
                ));
            }
            if let Some(files) = v1_files {
                if files.len() != entries.len() {
                    return Err(TransferError::MetadataMalformed(format!(
                        "hybrid torrent file counts disagree: v1 has {}, v2 has {}",
                        files.len(),
                        entries.len()
                    )));
                }
            }
            let single = entries.len() == 1
                && entries[0].segments.len() == 1
                && entries[0].segments[0] == self.raw_name()?;
            return Ok(FileView { entries, single });
        }

        if let Some(files) = v1_files {
            let mut entries = Vec::with_capacity(files.len());
            for file in files {
                let raw_segments = match &file.path_utf8 {
                    Some(utf8) if !utf8.is_empty() => utf8,
                    _ => &file.path,
                };
                let mut segments = Vec::with_capacity(raw_segments.len());
                for segment in raw_segments {
                    segments.push(sanitize::decode_text(segment, "file path")?);
                }
                entries.push(FileEntry {
                    segments,
                    length: file.length,
                });
            }
            return Ok(FileView {
                entries,
                single: false,
            });
        }

        // Single-file v1: the torrent name names the one file.
        Ok(FileView {
            entries: vec![FileEntry {
                segments: vec![self.raw_name()?],
                length: self.info.length,
            }],
            single: true,
        })
    }

    /// Number of pieces: derived from the v1 hash blob when present,
    /// otherwise from the total payload length.
    pub fn piece_count(&self, total_length: i64) -> usize {
        if !self.info.pieces.is_empty() {
            return self.info.pieces.len() / 20;
        }
        if self.info.piece_length <= 0 {
            return 0;
        }
        ((total_length + self.info.piece_length - 1) / self.info.piece_length) as usize
    }
}

fn walk_file_tree(
    node: &Value,
    prefix: &mut Vec<String>,
    out: &mut Vec<FileEntry>,
) -> Result<(), TransferError> {
    let dict = match node {
        Value::Dict(dict) => dict,
        _ => {
            return Err(TransferError::MetadataMalformed(
                "file tree node is not a dictionary".to_string(),
            ))
        }
    };

    // Bencode dictionaries are canonically sorted on disk; the decoded map
    // loses that, so restore byte order for a stable file enumeration.
    let mut keys: Vec<&Vec<u8>> = dict.keys().collect();
    keys.sort();

    for key in keys {
        let child = &dict[key];
        if key.is_empty() {
            // Leaf payload for the file named by the current prefix.
            let length = match child {
                Value::Dict(leaf) => match leaf.get("length".as_bytes()) {
                    Some(Value::Int(length)) => *length,
                    _ => {
                        return Err(TransferError::MetadataMalformed(
                            "file tree leaf lacks a length".to_string(),
                        ))
                    }
                },
                _ => {
                    return Err(TransferError::MetadataMalformed(
                        "file tree leaf is not a dictionary".to_string(),
                    ))
                }
            };
            out.push(FileEntry {
                segments: prefix.clone(),
                length,
            });
        } else {
            prefix.push(sanitize::decode_text(key, "file tree")?);
            walk_file_tree(child, prefix, out)?;
            prefix.pop();
        }
    }
    Ok(())
}
