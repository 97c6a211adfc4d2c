// SPDX-FileCopyrightText: 2026 The ut2qbt Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

mod driver;
mod errors;
mod fastresume;
mod options;
mod resume;
mod sanitize;
mod torrent_file;
mod transfer;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

use crate::options::Opts;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding resume.dat and the .torrent files
    #[arg(short, long)]
    source: PathBuf,

    /// qBittorrent BT_backup directory the sidecars are written into
    #[arg(short, long)]
    target: PathBuf,

    /// Save-path rewrite as FROM,TO in forward-slash form; repeatable,
    /// first match wins
    #[arg(short, long = "replace")]
    replaces: Vec<String>,

    /// Tag stamped on every converted torrent; repeatable
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// Category stamped on every converted torrent
    #[arg(long)]
    category: Option<String>,

    /// Path separator convention of the target client: \ or /
    #[arg(long)]
    path_separator: Option<String>,

    /// Convert only the named resume.dat entries; repeatable
    #[arg(long = "only")]
    only: Vec<String>,
}

#[tokio::main]
async fn main() {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(LevelFilter::INFO);
    tracing_subscriber::registry().with(stderr_layer).init();

    let cli = Cli::parse();

    let path_separator = match cli.path_separator.as_deref() {
        None => std::path::MAIN_SEPARATOR,
        Some("\\") => '\\',
        Some("/") => '/',
        Some(other) => {
            eprintln!("[Error] invalid path separator {other:?}, expected \\ or /");
            std::process::exit(2);
        }
    };

    let replaces = match options::compile_replaces(&cli.replaces) {
        Ok(rules) => rules,
        Err(err) => {
            eprintln!("[Error] {err}");
            std::process::exit(2);
        }
    };

    let opts = Opts {
        path_separator,
        replaces,
        tags: cli.tags,
        category: cli.category,
    };

    match driver::run(cli.source, cli.target, cli.only, opts).await {
        Ok(report) => {
            tracing::info!(
                converted = report.converted,
                failed = report.failed,
                "conversion finished"
            );
            if report.failed > 0 {
                std::process::exit(1);
            }
        }
        Err(err) => {
            tracing::error!(error = %err, "conversion aborted");
            std::process::exit(1);
        }
    }
}
