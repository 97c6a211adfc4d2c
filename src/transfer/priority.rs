// SPDX-FileCopyrightText: 2026 The ut2qbt Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::errors::TransferError;
use crate::transfer::TransferStructure;

/// qBittorrent priority domain.
pub const PRIORITY_SKIP: i64 = 0;
pub const PRIORITY_NORMAL: i64 = 1;
pub const PRIORITY_HIGH: i64 = 6;

impl TransferStructure<'_> {
    pub(crate) fn handle_priority(&mut self) -> Result<(), TransferError> {
        let prio = self
            .resume
            .prio
            .as_ref()
            .map(|raw| raw.as_slice())
            .unwrap_or_default();
        // v2 records carry a trailing sentinel byte per file.
        let paired = self.torrent.info.file_tree.is_some();
        self.fastresume.file_priority =
            translate_priorities(prio, self.files.file_count(), paired)?;
        Ok(())
    }
}

/// Maps source priority bytes to target priorities, one per file. The file
/// count comes from the metadata and is authoritative; an empty or
/// misaligned source array is an error, never an empty output.
pub fn translate_priorities(
    prio: &[u8],
    file_count: usize,
    paired: bool,
) -> Result<Vec<i64>, TransferError> {
    let stride = if paired { 2 } else { 1 };
    if prio.is_empty() || prio.len() != file_count * stride {
        return Err(TransferError::PriorityLengthMismatch {
            expected: file_count * stride,
            actual: prio.len(),
        });
    }
    Ok(prio.chunks(stride).map(|pair| translate_byte(pair[0])).collect())
}

fn translate_byte(byte: u8) -> i64 {
    match byte {
        1..=8 => PRIORITY_NORMAL,
        9..=15 => PRIORITY_HIGH,
        // 0 is skip, 128 is the don't-care sentinel; unknown bytes also
        // map to skip.
        _ => PRIORITY_SKIP,
    }
}
