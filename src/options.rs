// SPDX-FileCopyrightText: 2026 The ut2qbt Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::errors::TransferError;

/// uTorrent's default block size; used when a resume record carries
/// blocksize 0.
pub const DEFAULT_BLOCK_SIZE: i64 = 16384;

/// One `FROM,TO` save-path rewrite. `from` is matched as a prefix against
/// the forward-slash form of a path; the first matching rule wins and at
/// most one rule is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaceRule {
    pub from: String,
    pub to: String,
}

/// Converter options selected by the CLI and shared by every transfer.
#[derive(Debug, Clone)]
pub struct Opts {
    pub path_separator: char,
    pub replaces: Vec<ReplaceRule>,
    pub tags: Vec<String>,
    pub category: Option<String>,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            path_separator: '\\',
            replaces: Vec::new(),
            tags: Vec::new(),
            category: None,
        }
    }
}

/// Parses `FROM,TO` pairs into ordered rewrite rules.
pub fn compile_replaces(specs: &[String]) -> Result<Vec<ReplaceRule>, TransferError> {
    let mut rules = Vec::with_capacity(specs.len());
    for spec in specs {
        let parts: Vec<&str> = spec.split(',').collect();
        if parts.len() != 2 || parts[0].is_empty() {
            return Err(TransferError::InvalidReplace(spec.clone()));
        }
        rules.push(ReplaceRule {
            from: parts[0].to_string(),
            to: parts[1].to_string(),
        });
    }
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_replaces_keeps_order() {
        let rules = compile_replaces(&[
            "D:/torrents,/mnt/d/torrents".to_string(),
            "E:,/mnt/e".to_string(),
        ])
        .unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].from, "D:/torrents");
        assert_eq!(rules[0].to, "/mnt/d/torrents");
        assert_eq!(rules[1].from, "E:");
        assert_eq!(rules[1].to, "/mnt/e");
    }

    #[test]
    fn test_compile_replaces_allows_empty_to() {
        // Stripping a prefix entirely is a legitimate rewrite.
        let rules = compile_replaces(&["D:/torrents,".to_string()]).unwrap();
        assert_eq!(rules[0].to, "");
    }

    #[test]
    fn test_compile_replaces_rejects_malformed_pairs() {
        assert!(compile_replaces(&["no-comma".to_string()]).is_err());
        assert!(compile_replaces(&["a,b,c".to_string()]).is_err());
        assert!(compile_replaces(&[",to".to_string()]).is_err());
    }
}
