// SPDX-FileCopyrightText: 2026 The ut2qbt Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

/// Per-torrent conversion failure. The driver logs the kind and moves on;
/// one bad torrent never aborts the batch.
#[derive(Error, Debug)]
pub enum TransferError {
    #[error("torrent metadata file not found: {0}")]
    MetadataMissing(String),

    #[error("malformed torrent metadata: {0}")]
    MetadataMalformed(String),

    #[error("failed to decode bencoded data")]
    Bencode(#[from] serde_bencode::Error),

    #[error("file priority bytes do not align with the file count (expected {expected}, got {actual})")]
    PriorityLengthMismatch { expected: usize, actual: usize },

    #[error("save path cannot be resolved: {0:?}")]
    PathUnresolvable(String),

    #[error("byte sequence is neither valid UTF-8 nor repairable CESU-8 in {0}")]
    EncodingFailure(String),

    #[error("malformed replace rule {0:?}, expected FROM,TO")]
    InvalidReplace(String),

    #[error("An I/O error occurred")]
    Io(#[from] std::io::Error),
}
