// SPDX-FileCopyrightText: 2026 The ut2qbt Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::errors::TransferError;
use crate::fastresume::ContentLayout;
use crate::options::ReplaceRule;
use crate::sanitize;
use crate::transfer::TransferStructure;

/// Outcome of splitting a save path: a directory plus terminal segment, or
/// a bare drive/share root with nothing to split off.
enum SplitPath<'a> {
    Rooted(&'a str),
    Split { dir: &'a str, terminal: &'a str },
}

pub(crate) fn to_forward(path: &str) -> String {
    path.replace('\\', "/")
}

/// Rewrites every separator to the configured one. A UNC prefix `//` maps
/// to `\\` and back as a side effect of the blanket replacement.
pub(crate) fn with_separator(path: &str, separator: char) -> String {
    if separator == '\\' {
        path.replace('/', "\\")
    } else {
        path.replace('\\', "/")
    }
}

fn is_drive(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 2 && bytes[1] == b':' && bytes[0].is_ascii_alphabetic()
}

/// Absolute in either convention: unix-rooted, UNC, or drive-lettered.
pub(crate) fn is_absolute(forward: &str) -> bool {
    forward.starts_with('/') || forward.split('/').next().is_some_and(is_drive)
}

fn split_terminal(forward: &str) -> Result<SplitPath<'_>, TransferError> {
    let trimmed = forward.trim_end_matches('/');
    if trimmed.is_empty() {
        return if forward.is_empty() {
            Err(TransferError::PathUnresolvable(forward.to_string()))
        } else {
            Ok(SplitPath::Rooted("/"))
        };
    }

    let (root_len, rest) = if let Some(rest) = trimmed.strip_prefix("//") {
        (2, rest)
    } else if let Some(rest) = trimmed.strip_prefix('/') {
        (1, rest)
    } else {
        (0, trimmed)
    };

    match rest.rfind('/') {
        Some(pos) => Ok(SplitPath::Split {
            dir: &trimmed[..root_len + pos],
            terminal: &rest[pos + 1..],
        }),
        None if root_len == 2 => Ok(SplitPath::Rooted(trimmed)), // \\share
        None if root_len == 1 => Ok(SplitPath::Split {
            dir: "/",
            terminal: rest,
        }),
        None if is_drive(rest) => Ok(SplitPath::Rooted(trimmed)), // D: or D:\
        None => Err(TransferError::PathUnresolvable(forward.to_string())),
    }
}

fn ensure_dir_slash(dir: &str) -> String {
    if dir.ends_with('/') {
        dir.to_string()
    } else {
        format!("{dir}/")
    }
}

/// First matching rule rewrites the forward-slash path; at most one rule
/// ever applies.
pub(crate) fn apply_replaces(forward: &str, rules: &[ReplaceRule]) -> String {
    for rule in rules {
        if let Some(rest) = forward.strip_prefix(&rule.from) {
            return format!("{}{}", rule.to, rest);
        }
    }
    forward.to_string()
}

/// Sanitizes every segment of a forward-slash path while leaving the UNC
/// prefix and a leading drive letter untouched.
fn sanitize_forward_path(forward: &str) -> String {
    let (root, rest) = if let Some(rest) = forward.strip_prefix("//") {
        ("//", rest)
    } else if let Some(rest) = forward.strip_prefix('/') {
        ("/", rest)
    } else {
        ("", forward)
    };
    let cleaned: Vec<String> = rest
        .split('/')
        .enumerate()
        .map(|(index, segment)| {
            if index == 0 && root.is_empty() && is_drive(segment) {
                segment.to_string()
            } else {
                sanitize::sanitize_segment(segment)
            }
        })
        .collect();
    format!("{root}{}", cleaned.join("/"))
}

/// An absolute override path: repaired, rewritten by the replace rules and
/// re-separated, with the drive/share prefix preserved.
pub(crate) fn rewrite_absolute(path: &str, rules: &[ReplaceRule], separator: char) -> String {
    let replaced = apply_replaces(&to_forward(path), rules);
    with_separator(&sanitize_forward_path(&replaced), separator)
}

/// A relative override path, sanitized per segment and re-joined.
fn sanitize_relative(path: &str, separator: char) -> String {
    to_forward(path)
        .split('/')
        .map(sanitize::sanitize_segment)
        .collect::<Vec<_>>()
        .join(&separator.to_string())
}

impl TransferStructure<'_> {
    /// Decides the content layout and computes the three path-shaped output
    /// fields: save_path (native), qBt-savePath (forward) and mapped_files.
    pub(crate) fn handle_save_paths(&mut self) -> Result<(), TransferError> {
        let opts = self.opts;
        let separator = opts.path_separator;
        let rules = opts.replaces.as_slice();

        let raw_path = sanitize::decode_text(&self.resume.path, "resume path")?;
        let forward = to_forward(&raw_path);
        let name = self.fastresume.name.clone();
        let file_count = self.files.file_count();

        let layout;
        let save_forward;
        let mut mapped: Vec<String> = Vec::new();

        if self.files.single {
            // Single-file torrent: the terminal segment is the file itself
            // and the directory above it is the save path.
            layout = ContentLayout::Original;
            match split_terminal(&forward)? {
                SplitPath::Rooted(root) => {
                    save_forward = ensure_dir_slash(&apply_replaces(root, rules));
                }
                SplitPath::Split { dir, terminal } => {
                    save_forward = ensure_dir_slash(&apply_replaces(dir, rules));
                    let terminal_sane = sanitize::sanitize_segment(terminal);
                    // Any difference from the stored name is a rename.
                    if terminal_sane.as_bytes() != self.torrent.info.name_bytes() {
                        mapped = vec![terminal_sane];
                    }
                }
            }
        } else {
            let disk_name = match &self.resume.sanitized_name {
                Some(bytes) if !bytes.is_empty() => {
                    Some(sanitize::decode_text(bytes, "sanitized_name")?)
                }
                _ => None,
            };

            let split = split_terminal(&forward)?;
            let keeps_subfolder = match &split {
                SplitPath::Rooted(_) => false,
                SplitPath::Split { terminal, .. } => {
                    sanitize::sanitize_segment(terminal) == name
                        || disk_name.as_deref() == Some(*terminal)
                }
            };

            if keeps_subfolder {
                layout = ContentLayout::Original;
                let dir = match &split {
                    SplitPath::Split { dir, .. } => *dir,
                    SplitPath::Rooted(root) => *root,
                };
                save_forward = ensure_dir_slash(&apply_replaces(dir, rules));

                // Sparse fill: only renamed files get an entry, relative
                // renames live under the torrent-name folder.
                if let Some(targets) = &self.resume.targets {
                    if !targets.is_empty() {
                        mapped = vec![String::new(); file_count];
                        for (index, target) in targets {
                            let Ok(slot) = usize::try_from(*index) else {
                                continue;
                            };
                            if slot >= file_count {
                                continue;
                            }
                            let text = sanitize::decode_text(target, "target path")?;
                            mapped[slot] = if is_absolute(&to_forward(&text)) {
                                rewrite_absolute(&text, rules, separator)
                            } else {
                                format!("{name}{separator}{}", sanitize_relative(&text, separator))
                            };
                        }
                    }
                }
            } else {
                // The save path names the content directory directly, so
                // every file path is spelled out.
                layout = ContentLayout::NoSubfolder;
                save_forward = match &split {
                    SplitPath::Rooted(root) => ensure_dir_slash(&apply_replaces(root, rules)),
                    SplitPath::Split { .. } => {
                        apply_replaces(forward.trim_end_matches('/'), rules)
                    }
                };

                mapped = self
                    .files
                    .entries
                    .iter()
                    .map(|entry| {
                        entry
                            .segments
                            .iter()
                            .map(|segment| sanitize::sanitize_segment(segment))
                            .collect::<Vec<_>>()
                            .join(&separator.to_string())
                    })
                    .collect();

                if let Some(targets) = &self.resume.targets {
                    for (index, target) in targets {
                        let Ok(slot) = usize::try_from(*index) else {
                            continue;
                        };
                        if slot >= mapped.len() {
                            continue;
                        }
                        let text = sanitize::decode_text(target, "target path")?;
                        mapped[slot] = if is_absolute(&to_forward(&text)) {
                            rewrite_absolute(&text, rules, separator)
                        } else {
                            sanitize_relative(&text, separator)
                        };
                    }
                }
            }
        }

        self.fastresume.qbt_content_layout = layout;
        self.fastresume.save_path = with_separator(&save_forward, separator);
        self.fastresume.qbt_save_path = save_forward;
        self.fastresume.mapped_files = mapped;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fastresume::Fastresume;
    use crate::options::{compile_replaces, Opts};
    use crate::resume::ResumeItem;
    use crate::torrent_file::{Torrent, TorrentInfo, TorrentInfoFile};
    use serde_bytes::ByteBuf;

    fn bytes(s: &str) -> ByteBuf {
        ByteBuf::from(s.as_bytes().to_vec())
    }

    fn raw_bytes(b: &[u8]) -> ByteBuf {
        ByteBuf::from(b.to_vec())
    }

    fn single_file_torrent(name: &[u8]) -> Torrent {
        Torrent {
            info: TorrentInfo {
                name: raw_bytes(name),
                piece_length: 5,
                length: 5,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn pack_torrent(paths: &[&[&str]]) -> Torrent {
        Torrent {
            info: TorrentInfo {
                name: bytes("pack"),
                piece_length: 5,
                files: Some(
                    paths
                        .iter()
                        .map(|segments| TorrentInfoFile {
                            length: 5,
                            path: segments.iter().map(|s| bytes(s)).collect(),
                            path_utf8: None,
                        })
                        .collect(),
                ),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn resolve(resume: &ResumeItem, torrent: &Torrent, opts: &Opts) -> Fastresume {
        let mut transfer = TransferStructure::new(resume, torrent, opts).unwrap();
        transfer.fastresume.name = torrent.normalized_name().unwrap();
        transfer.handle_save_paths().unwrap();
        transfer.fastresume
    }

    fn windows_opts() -> Opts {
        Opts {
            path_separator: '\\',
            ..Default::default()
        }
    }

    fn linux_opts(replaces: &[&str]) -> Opts {
        let specs: Vec<String> = replaces.iter().map(|s| s.to_string()).collect();
        Opts {
            path_separator: '/',
            replaces: compile_replaces(&specs).unwrap(),
            ..Default::default()
        }
    }

    #[test]
    fn test_single_file_without_rename() {
        let resume = ResumeItem {
            path: bytes("D:\\torrents\\test.txt"),
            ..Default::default()
        };
        let torrent = single_file_torrent(b"test.txt");
        let fr = resolve(&resume, &torrent, &windows_opts());
        assert_eq!(fr.qbt_content_layout, ContentLayout::Original);
        assert_eq!(fr.save_path, "D:\\torrents\\");
        assert_eq!(fr.qbt_save_path, "D:/torrents/");
        assert!(fr.mapped_files.is_empty());
    }

    #[test]
    fn test_single_file_with_rename() {
        let resume = ResumeItem {
            path: bytes("D:\\torrents\\renamed.txt"),
            ..Default::default()
        };
        let torrent = single_file_torrent(b"test.txt");
        let fr = resolve(&resume, &torrent, &windows_opts());
        assert_eq!(fr.mapped_files, vec!["renamed.txt".to_string()]);
    }

    #[test]
    fn test_single_file_prohibited_name_records_disk_spelling() {
        // The client stripped the pipe when it created the file, so the
        // on-disk terminal no longer matches the stored name bytes.
        let resume = ResumeItem {
            path: bytes("D:\\torrents\\test_torrent.txt"),
            ..Default::default()
        };
        let torrent = single_file_torrent(b"test|torrent.txt");
        let fr = resolve(&resume, &torrent, &windows_opts());
        assert_eq!(fr.mapped_files, vec!["test_torrent.txt".to_string()]);
        assert_eq!(fr.save_path, "D:\\torrents\\");
    }

    #[test]
    fn test_single_file_at_drive_root() {
        let resume = ResumeItem {
            path: bytes("D:\\test.txt"),
            ..Default::default()
        };
        let torrent = single_file_torrent(b"test.txt");
        let fr = resolve(&resume, &torrent, &windows_opts());
        assert_eq!(fr.save_path, "D:\\");
        assert_eq!(fr.qbt_save_path, "D:/");
    }

    #[test]
    fn test_single_file_bare_root_save_path() {
        let resume = ResumeItem {
            path: bytes("D:\\"),
            ..Default::default()
        };
        let torrent = single_file_torrent(b"test.txt");
        let fr = resolve(&resume, &torrent, &windows_opts());
        assert_eq!(fr.save_path, "D:\\");
        assert!(fr.mapped_files.is_empty());
    }

    #[test]
    fn test_single_file_replace_rule() {
        let resume = ResumeItem {
            path: bytes("D:\\torrents\\test.txt"),
            ..Default::default()
        };
        let torrent = single_file_torrent(b"test.txt");
        let fr = resolve(
            &resume,
            &torrent,
            &linux_opts(&["D:/torrents,/mnt/d/torrents"]),
        );
        assert_eq!(fr.save_path, "/mnt/d/torrents/");
        assert_eq!(fr.qbt_save_path, "/mnt/d/torrents/");
    }

    #[test]
    fn test_multi_file_original_layout_strips_terminal() {
        let resume = ResumeItem {
            path: bytes("D:\\torrents\\pack"),
            ..Default::default()
        };
        let torrent = pack_torrent(&[&["dir1", "file1.txt"], &["file0.txt"]]);
        let fr = resolve(&resume, &torrent, &windows_opts());
        assert_eq!(fr.qbt_content_layout, ContentLayout::Original);
        assert_eq!(fr.save_path, "D:\\torrents\\");
        assert_eq!(fr.qbt_save_path, "D:/torrents/");
        assert!(fr.mapped_files.is_empty());
    }

    #[test]
    fn test_multi_file_original_with_relative_and_absolute_renames() {
        let resume = ResumeItem {
            path: bytes("D:\\torrents\\pack"),
            targets: Some(vec![
                (2, bytes("r.txt")),
                (3, bytes("E:\\o\\r2.txt")),
            ]),
            ..Default::default()
        };
        let torrent = pack_torrent(&[
            &["a", "1.txt"],
            &["b", "2.txt"],
            &["3.txt"],
            &["4.txt"],
            &["5.txt"],
        ]);
        let fr = resolve(&resume, &torrent, &windows_opts());
        assert_eq!(fr.qbt_content_layout, ContentLayout::Original);
        assert_eq!(
            fr.mapped_files,
            vec![
                String::new(),
                String::new(),
                "pack\\r.txt".to_string(),
                "E:\\o\\r2.txt".to_string(),
                String::new(),
            ]
        );
    }

    #[test]
    fn test_multi_file_original_absolute_renames_rewritten_for_linux() {
        let resume = ResumeItem {
            path: bytes("D:\\torrents\\pack"),
            targets: Some(vec![
                (2, bytes("renamed.txt")),
                (3, bytes("E:\\somedir1\\renamed2.txt")),
                (4, bytes("F:\\somedir\\somedir4\\renamed3.txt")),
            ]),
            ..Default::default()
        };
        let torrent = pack_torrent(&[
            &["dir1", "file1.txt"],
            &["dir2", "file2.txt"],
            &["file0.txt"],
            &["file1.txt"],
            &["file2.txt"],
        ]);
        let opts = linux_opts(&["D:/torrents,/mnt/d/torrents", "E:,/mnt/e", "F:/,/mnt/f/"]);
        let fr = resolve(&resume, &torrent, &opts);
        assert_eq!(fr.save_path, "/mnt/d/torrents/");
        assert_eq!(
            fr.mapped_files,
            vec![
                String::new(),
                String::new(),
                "pack/renamed.txt".to_string(),
                "/mnt/e/somedir1/renamed2.txt".to_string(),
                "/mnt/f/somedir/somedir4/renamed3.txt".to_string(),
            ]
        );
    }

    #[test]
    fn test_multi_file_no_subfolder_spells_out_every_file() {
        let resume = ResumeItem {
            path: bytes("D:\\torrents\\alt"),
            ..Default::default()
        };
        let torrent = pack_torrent(&[
            &["a", "1.txt"],
            &["b", "2.txt"],
            &["3.txt"],
            &["4.txt"],
            &["5.txt"],
        ]);
        let fr = resolve(
            &resume,
            &torrent,
            &linux_opts(&["D:/torrents,/mnt/d/torrents"]),
        );
        assert_eq!(fr.qbt_content_layout, ContentLayout::NoSubfolder);
        assert_eq!(fr.save_path, "/mnt/d/torrents/alt");
        assert_eq!(fr.qbt_save_path, "/mnt/d/torrents/alt");
        assert_eq!(
            fr.mapped_files,
            vec!["a/1.txt", "b/2.txt", "3.txt", "4.txt", "5.txt"]
        );
    }

    #[test]
    fn test_multi_file_no_subfolder_windows_separator_and_renames() {
        let resume = ResumeItem {
            path: bytes("D:\\torrents\\test"),
            targets: Some(vec![(2, bytes("renamed.txt"))]),
            ..Default::default()
        };
        let torrent = pack_torrent(&[
            &["dir1", "file1.txt"],
            &["dir2", "file2.txt"],
            &["file0.txt"],
        ]);
        let fr = resolve(&resume, &torrent, &windows_opts());
        assert_eq!(fr.qbt_content_layout, ContentLayout::NoSubfolder);
        assert_eq!(fr.save_path, "D:\\torrents\\test");
        assert_eq!(
            fr.mapped_files,
            vec!["dir1\\file1.txt", "dir2\\file2.txt", "renamed.txt"]
        );
    }

    #[test]
    fn test_unc_share_original_layout() {
        let resume = ResumeItem {
            path: bytes("\\\\srv\\pack"),
            ..Default::default()
        };
        let torrent = pack_torrent(&[&["file0.txt"]]);
        let fr = resolve(&resume, &torrent, &windows_opts());
        assert_eq!(fr.qbt_content_layout, ContentLayout::Original);
        assert_eq!(fr.save_path, "\\\\srv\\");
        assert_eq!(fr.qbt_save_path, "//srv/");
    }

    #[test]
    fn test_unc_absolute_rename_kept_and_rewritten() {
        let resume = ResumeItem {
            path: bytes("\\\\torrents\\pack"),
            targets: Some(vec![(0, bytes("\\\\somedir\\somedir4\\renamed3.txt"))]),
            ..Default::default()
        };
        let torrent = pack_torrent(&[&["file0.txt"]]);

        let fr = resolve(&resume, &torrent, &windows_opts());
        assert_eq!(
            fr.mapped_files,
            vec!["\\\\somedir\\somedir4\\renamed3.txt".to_string()]
        );

        let fr = resolve(&resume, &torrent, &linux_opts(&["//somedir,/mnt/share"]));
        assert_eq!(fr.qbt_save_path, "//torrents/");
        assert_eq!(
            fr.mapped_files,
            vec!["/mnt/share/somedir4/renamed3.txt".to_string()]
        );
    }

    #[test]
    fn test_prohibited_symbols_sanitized_in_mapped_files_only() {
        let resume = ResumeItem {
            path: bytes("D:\\torrents\\renamed test_torrent"),
            ..Default::default()
        };
        let torrent = Torrent {
            info: TorrentInfo {
                name: bytes("test_torrent"),
                piece_length: 5,
                files: Some(vec![
                    TorrentInfoFile {
                        length: 5,
                        path: vec![bytes("#test | test [01]{1} [6K].jpg")],
                        path_utf8: None,
                    },
                    TorrentInfoFile {
                        length: 5,
                        path: vec![bytes("testdir1 collection"), bytes("testdir2?"), bytes("1.jpg")],
                        path_utf8: None,
                    },
                ]),
                ..Default::default()
            },
            ..Default::default()
        };
        let fr = resolve(&resume, &torrent, &windows_opts());
        assert_eq!(fr.save_path, "D:\\torrents\\renamed test_torrent");
        assert_eq!(
            fr.mapped_files,
            vec![
                "#test _ test [01]{1} [6K].jpg".to_string(),
                "testdir1 collection\\testdir2_\\1.jpg".to_string(),
            ]
        );
    }

    #[test]
    fn test_cesu8_save_path_is_repaired() {
        let mut path = b"D:\\torrents\\renamed test_torrent ".to_vec();
        path.extend_from_slice(b"\xED\xA0\xBC\xED\xB6\x95");
        let mut name = b"test_torrent ".to_vec();
        name.extend_from_slice(b"\xED\xA0\xBC\xED\xB6\x95");

        let resume = ResumeItem {
            path: ByteBuf::from(path),
            ..Default::default()
        };
        let torrent = Torrent {
            info: TorrentInfo {
                name: ByteBuf::from(name),
                piece_length: 5,
                files: Some(vec![TorrentInfoFile {
                    length: 5,
                    path: vec![bytes("file0.txt")],
                    path_utf8: None,
                }]),
                ..Default::default()
            },
            ..Default::default()
        };
        let fr = resolve(&resume, &torrent, &windows_opts());
        // The folder was renamed, so the full path survives as the save
        // path with the surrogate pair collapsed to the real emoji.
        assert_eq!(fr.qbt_content_layout, ContentLayout::NoSubfolder);
        assert_eq!(fr.save_path, "D:\\torrents\\renamed test_torrent \u{1F195}");
        assert_eq!(fr.qbt_save_path, "D:/torrents/renamed test_torrent \u{1F195}");
        assert_eq!(fr.mapped_files, vec!["file0.txt".to_string()]);
    }

    #[test]
    fn test_trailing_space_in_name_forces_no_subfolder() {
        // The on-disk folder lost its trailing space, the stored name kept
        // it; after sanitization they no longer agree.
        let resume = ResumeItem {
            path: bytes("D:\\test_torrent_"),
            ..Default::default()
        };
        let torrent = Torrent {
            info: TorrentInfo {
                name: bytes("test_torrent "),
                piece_length: 5,
                files: Some(vec![TorrentInfoFile {
                    length: 5,
                    path: vec![bytes("file0.txt")],
                    path_utf8: None,
                }]),
                ..Default::default()
            },
            ..Default::default()
        };
        let fr = resolve(&resume, &torrent, &windows_opts());
        assert_eq!(fr.qbt_content_layout, ContentLayout::NoSubfolder);
        assert_eq!(fr.save_path, "D:\\test_torrent_");
    }

    #[test]
    fn test_multi_file_at_bare_root_keeps_trailing_separator() {
        let resume = ResumeItem {
            path: bytes("D:\\"),
            ..Default::default()
        };
        let torrent = pack_torrent(&[&["file0.txt"]]);
        let fr = resolve(&resume, &torrent, &windows_opts());
        assert_eq!(fr.qbt_content_layout, ContentLayout::NoSubfolder);
        assert_eq!(fr.save_path, "D:\\");
        assert_eq!(fr.qbt_save_path, "D:/");
        assert_eq!(fr.mapped_files, vec!["file0.txt".to_string()]);
    }

    #[test]
    fn test_resume_sanitized_name_selects_original_layout() {
        let resume = ResumeItem {
            path: bytes("D:\\torrents\\pack (disk)"),
            sanitized_name: Some(bytes("pack (disk)")),
            ..Default::default()
        };
        let torrent = pack_torrent(&[&["file0.txt"]]);
        let fr = resolve(&resume, &torrent, &windows_opts());
        assert_eq!(fr.qbt_content_layout, ContentLayout::Original);
        assert_eq!(fr.save_path, "D:\\torrents\\");
    }

    #[test]
    fn test_relative_save_path_without_directory_is_unresolvable() {
        let resume = ResumeItem {
            path: bytes("naked-name"),
            ..Default::default()
        };
        let torrent = single_file_torrent(b"naked-name");
        let opts = windows_opts();
        let mut transfer = TransferStructure::new(&resume, &torrent, &opts).unwrap();
        transfer.fastresume.name = torrent.normalized_name().unwrap();
        assert!(matches!(
            transfer.handle_save_paths(),
            Err(TransferError::PathUnresolvable(_))
        ));
    }

    #[test]
    fn test_path_helpers() {
        assert!(is_absolute("D:/x"));
        assert!(is_absolute("//srv/x"));
        assert!(is_absolute("/mnt/x"));
        assert!(!is_absolute("dir/x"));
        assert_eq!(with_separator("//srv/pack/", '\\'), "\\\\srv\\pack\\");
        assert_eq!(apply_replaces("D:/a/b", &[]), "D:/a/b");
        // First match wins, later rules are ignored.
        let rules = compile_replaces(&["D:,X:".to_string(), "D:/a,Y:".to_string()]).unwrap();
        assert_eq!(apply_replaces("D:/a/b", &rules), "X:/a/b");
    }
}
