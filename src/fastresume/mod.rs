// SPDX-FileCopyrightText: 2026 The ut2qbt Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::Deserialize;
use serde::Serialize;
use serde_bytes::ByteBuf;

use crate::errors::TransferError;

/// How qBittorrent lays the payload out under the save path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentLayout {
    /// The torrent name forms a directory under the save path.
    #[default]
    Original,
    /// The save path already is the content directory.
    NoSubfolder,
    /// The client wraps the content in an extra directory.
    Subfolder,
}

impl ContentLayout {
    pub fn as_str(self) -> &'static str {
        match self {
            ContentLayout::Original => "Original",
            ContentLayout::NoSubfolder => "NoSubfolder",
            ContentLayout::Subfolder => "Subfolder",
        }
    }
}

// Serialized as its bare tag string so the bencode side sees a plain
// byte string, never an enum encoding.
impl Serialize for ContentLayout {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContentLayout {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LayoutVisitor;

        impl Visitor<'_> for LayoutVisitor {
            type Value = ContentLayout;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("one of Original, NoSubfolder, Subfolder")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ContentLayout, E> {
                match v {
                    "Original" => Ok(ContentLayout::Original),
                    "NoSubfolder" => Ok(ContentLayout::NoSubfolder),
                    "Subfolder" => Ok(ContentLayout::Subfolder),
                    other => Err(E::unknown_variant(
                        other,
                        &["Original", "NoSubfolder", "Subfolder"],
                    )),
                }
            }

            fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<ContentLayout, E> {
                match std::str::from_utf8(v) {
                    Ok(s) => self.visit_str(s),
                    Err(_) => Err(E::invalid_value(de::Unexpected::Bytes(v), &self)),
                }
            }
        }

        deserializer.deserialize_any(LayoutVisitor)
    }
}

/// The qBittorrent fastresume sidecar, one per torrent.
///
/// Exactly this key set is emitted, nothing else; fields the transfer has
/// no input for keep their sentinel defaults. serde_bencode writes
/// dictionaries in canonical sorted order, so the declaration order below
/// (already sorted) is cosmetic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Fastresume {
    #[serde(default)]
    pub active_time: i64,

    #[serde(default)]
    pub added_time: i64,

    #[serde(default)]
    pub auto_managed: i64,

    #[serde(rename = "blocks per piece", default)]
    pub blocks_per_piece: i64,

    #[serde(default)]
    pub completed_time: i64,

    #[serde(rename = "file-format", default)]
    pub file_format: String,

    #[serde(rename = "file-version", default)]
    pub file_version: i64,

    #[serde(default)]
    pub file_priority: Vec<i64>,

    #[serde(default)]
    pub finished_time: i64,

    #[serde(rename = "info-hash", default)]
    pub info_hash: ByteBuf,

    #[serde(rename = "libtorrent-version", default)]
    pub libtorrent_version: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mapped_files: Vec<String>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub paused: i64,

    #[serde(default)]
    pub pieces: ByteBuf,

    #[serde(rename = "qBt-category", default)]
    pub qbt_category: String,

    #[serde(rename = "qBt-contentLayout", default)]
    pub qbt_content_layout: ContentLayout,

    #[serde(rename = "qBt-firstLastPiecePriority", default)]
    pub qbt_first_last_piece_priority: i64,

    #[serde(rename = "qBt-hasRootFolder", default)]
    pub qbt_has_root_folder: i64,

    #[serde(rename = "qBt-name", default, skip_serializing_if = "Option::is_none")]
    pub qbt_name: Option<String>,

    #[serde(rename = "qBt-queuePosition", default)]
    pub qbt_queue_position: i64,

    #[serde(rename = "qBt-ratioLimit", default)]
    pub qbt_ratio_limit: i64,

    #[serde(rename = "qBt-savePath", default)]
    pub qbt_save_path: String,

    #[serde(rename = "qBt-seedStatus", default)]
    pub qbt_seed_status: i64,

    #[serde(rename = "qBt-seedingTimeLimit", default)]
    pub qbt_seeding_time_limit: i64,

    #[serde(rename = "qBt-tags", default)]
    pub qbt_tags: Vec<String>,

    #[serde(default)]
    pub save_path: String,

    #[serde(default)]
    pub seeding_time: i64,

    #[serde(default)]
    pub total_downloaded: i64,

    #[serde(default)]
    pub total_uploaded: i64,

    #[serde(default)]
    pub trackers: Vec<Vec<String>>,
}

impl Default for Fastresume {
    fn default() -> Self {
        Self {
            active_time: 0,
            added_time: 0,
            auto_managed: 0,
            blocks_per_piece: 0,
            completed_time: 0,
            file_format: "libtorrent resume file".to_string(),
            file_version: 1,
            file_priority: Vec::new(),
            finished_time: 0,
            info_hash: ByteBuf::new(),
            libtorrent_version: "2.x".to_string(),
            mapped_files: Vec::new(),
            name: String::new(),
            paused: 0,
            pieces: ByteBuf::new(),
            qbt_category: String::new(),
            qbt_content_layout: ContentLayout::Original,
            qbt_first_last_piece_priority: 0,
            qbt_has_root_folder: 0,
            qbt_name: None,
            qbt_queue_position: 1,
            qbt_ratio_limit: -2000,
            qbt_save_path: String::new(),
            qbt_seed_status: 1,
            qbt_seeding_time_limit: -2,
            qbt_tags: Vec::new(),
            save_path: String::new(),
            seeding_time: 0,
            total_downloaded: 0,
            total_uploaded: 0,
            trackers: Vec::new(),
        }
    }
}

impl Fastresume {
    /// Serializes the record to its on-disk bencode form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TransferError> {
        Ok(serde_bencode::to_bytes(self)?)
    }
}
