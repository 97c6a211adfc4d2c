// SPDX-FileCopyrightText: 2026 The ut2qbt Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod paths;
pub mod pieces;
pub mod priority;
pub mod state;
pub mod trackers;

use serde_bytes::ByteBuf;

use crate::errors::TransferError;
use crate::fastresume::Fastresume;
use crate::options::{Opts, DEFAULT_BLOCK_SIZE};
use crate::resume::ResumeItem;
use crate::sanitize;
use crate::torrent_file::{FileView, Torrent};

/// One torrent's conversion in flight: the source record, its metadata and
/// the fastresume being assembled. Created per torrent, consumed by
/// [`TransferStructure::build`], never reused.
pub struct TransferStructure<'a> {
    fastresume: Fastresume,
    resume: &'a ResumeItem,
    torrent: &'a Torrent,
    opts: &'a Opts,
    files: FileView,
    num_pieces: usize,
}

/// Converts one source resume record plus its torrent metadata into the
/// target fastresume record. Pure: equal inputs produce equal outputs.
pub fn transfer(
    resume: &ResumeItem,
    torrent: &Torrent,
    opts: &Opts,
) -> Result<Fastresume, TransferError> {
    TransferStructure::new(resume, torrent, opts)?.build()
}

impl<'a> TransferStructure<'a> {
    pub fn new(
        resume: &'a ResumeItem,
        torrent: &'a Torrent,
        opts: &'a Opts,
    ) -> Result<Self, TransferError> {
        if torrent.info.piece_length <= 0 {
            return Err(TransferError::MetadataMalformed(
                "missing or non-positive 'piece length'".to_string(),
            ));
        }
        let files = torrent.file_view()?;
        let num_pieces = torrent.piece_count(files.total_length());
        Ok(Self {
            fastresume: Fastresume::default(),
            resume,
            torrent,
            opts,
            files,
            num_pieces,
        })
    }

    pub fn build(mut self) -> Result<Fastresume, TransferError> {
        self.handle_name()?;
        self.handle_caption()?;
        // Priorities feed both the piece bitmap reconstruction and the
        // completeness side of the state translation.
        self.handle_priority()?;
        self.handle_pieces();
        self.handle_state();
        self.handle_trackers()?;
        self.handle_save_paths()?;
        self.handle_bookkeeping()?;
        Ok(self.fastresume)
    }

    fn handle_name(&mut self) -> Result<(), TransferError> {
        self.fastresume.name = self.torrent.normalized_name()?;
        Ok(())
    }

    /// The client-side display name override becomes qBt-name. It names
    /// nothing on disk, so it only gets the encoding repair.
    fn handle_caption(&mut self) -> Result<(), TransferError> {
        if let Some(caption) = &self.resume.caption {
            if !caption.is_empty() {
                self.fastresume.qbt_name = Some(sanitize::decode_text(caption, "caption")?);
            }
        }
        Ok(())
    }

    /// Times, labels, info hash and the block count: the fields that map
    /// one-to-one from the source record.
    fn handle_bookkeeping(&mut self) -> Result<(), TransferError> {
        let resume = self.resume;
        self.fastresume.added_time = resume.added_on;
        self.fastresume.completed_time = resume.completed_on;

        let blocksize = if resume.blocksize > 0 {
            resume.blocksize
        } else {
            DEFAULT_BLOCK_SIZE
        };
        self.fastresume.blocks_per_piece = self.torrent.info.piece_length / blocksize;

        self.fastresume.info_hash = ByteBuf::from(match &resume.info {
            Some(raw) if !raw.is_empty() => raw.to_vec(),
            _ => self.torrent.info_hash.clone(),
        });

        self.fastresume.qbt_category = match (&self.opts.category, &resume.label) {
            (Some(category), _) => category.clone(),
            (None, Some(label)) if !label.is_empty() => {
                sanitize::decode_text(label, "label")?
            }
            _ => String::new(),
        };

        let mut tags = self.opts.tags.clone();
        if let Some(labels) = &resume.labels {
            for label in labels {
                if label.is_empty() {
                    continue;
                }
                let tag = sanitize::decode_text(label, "label")?;
                if !tags.contains(&tag) {
                    tags.push(tag);
                }
            }
        }
        self.fastresume.qbt_tags = tags;
        Ok(())
    }
}
