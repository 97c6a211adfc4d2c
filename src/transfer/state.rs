// SPDX-FileCopyrightText: 2026 The ut2qbt Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::transfer::TransferStructure;

impl TransferStructure<'_> {
    /// Maps the source started flag plus completeness onto qBittorrent's
    /// (paused, auto_managed) pair. Only a running, fully selected torrent
    /// resumes under automatic management; everything else starts paused.
    pub(crate) fn handle_state(&mut self) {
        let complete = is_fully_selected(&self.fastresume.file_priority);
        let (paused, auto_managed) = translate_state(self.resume.started != 0, complete);
        self.fastresume.paused = paused;
        self.fastresume.auto_managed = auto_managed;
    }
}

/// Complete means every file is wanted; a missing priority array counts as
/// complete (nothing was deselected).
pub fn is_fully_selected(priorities: &[i64]) -> bool {
    priorities.iter().all(|priority| *priority != 0)
}

pub fn translate_state(started: bool, complete: bool) -> (i64, i64) {
    if started && complete {
        (0, 1)
    } else {
        (1, 0)
    }
}
