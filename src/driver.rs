// SPDX-FileCopyrightText: 2026 The ut2qbt Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_bencode::value::Value;
use tokio::fs;
use tracing::{error, info};

use crate::errors::TransferError;
use crate::options::Opts;
use crate::resume::{self, ResumeItem};
use crate::torrent_file::parser;
use crate::transfer;

#[derive(Debug, Default)]
pub struct Report {
    pub converted: usize,
    pub failed: usize,
}

/// Converts every selected torrent in `<source>/resume.dat`, one tokio task
/// per torrent. Failures are logged per torrent and counted; the batch
/// always runs to completion.
pub async fn run(
    source: PathBuf,
    target: PathBuf,
    only: Vec<String>,
    opts: Opts,
) -> Result<Report, TransferError> {
    let resume_path = source.join("resume.dat");
    let data = fs::read(&resume_path).await?;
    let entries = resume::read_resume_dict(&data)?;
    info!(
        database = %resume_path.display(),
        torrents = entries.len(),
        "loaded resume database"
    );

    fs::create_dir_all(&target).await?;

    let source = Arc::new(source);
    let target = Arc::new(target);
    let opts = Arc::new(opts);

    let mut handles = Vec::new();
    for (key, value) in entries {
        if !only.is_empty() && !only.iter().any(|wanted| wanted == &key) {
            continue;
        }
        let source = Arc::clone(&source);
        let target = Arc::clone(&target);
        let opts = Arc::clone(&opts);
        let task_key = key.clone();
        let handle = tokio::spawn(async move {
            convert_one(&source, &target, &task_key, value, &opts).await
        });
        handles.push((key, handle));
    }

    let mut report = Report::default();
    for (key, handle) in handles {
        match handle.await {
            Ok(Ok(hash)) => {
                info!(torrent = %key, hash = %hash, "converted");
                report.converted += 1;
            }
            Ok(Err(err)) => {
                error!(torrent = %key, error = %err, "conversion failed");
                report.failed += 1;
            }
            Err(join_error) => {
                error!(torrent = %key, error = %join_error, "conversion task died");
                report.failed += 1;
            }
        }
    }
    Ok(report)
}

/// One torrent end to end: decode the record, read and parse the metadata,
/// run the transfer, then write both sidecars. The fastresume bytes are
/// fully assembled before anything touches the disk.
async fn convert_one(
    source: &Path,
    target: &Path,
    key: &str,
    value: Value,
    opts: &Opts,
) -> Result<String, TransferError> {
    let item = ResumeItem::from_value(&value)?;

    let torrent_path = resolve_torrent_path(source, key);
    let torrent_data = fs::read(&torrent_path)
        .await
        .map_err(|_| TransferError::MetadataMissing(torrent_path.display().to_string()))?;
    let torrent = parser::from_bytes(&torrent_data)?;

    let fastresume = transfer::transfer(&item, &torrent, opts)?;
    let hash = hex::encode(&fastresume.info_hash);
    let encoded = fastresume.to_bytes()?;

    fs::write(target.join(format!("{hash}.fastresume")), encoded).await?;
    fs::write(target.join(format!("{hash}.torrent")), torrent_data).await?;
    Ok(hash)
}

/// resume.dat keys are usually bare file names next to the database, but
/// torrents added from elsewhere are stored under their absolute path,
/// Windows-style or not.
fn resolve_torrent_path(source: &Path, key: &str) -> PathBuf {
    let bytes = key.as_bytes();
    let windows_absolute = key.starts_with("\\\\")
        || (bytes.len() > 2 && bytes[1] == b':' && bytes[0].is_ascii_alphabetic());
    if windows_absolute || Path::new(key).is_absolute() {
        PathBuf::from(key)
    } else {
        source.join(key)
    }
}
