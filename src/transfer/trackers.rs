// SPDX-FileCopyrightText: 2026 The ut2qbt Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::HashMap;

use serde_bencode::value::Value;
use url::Url;

use crate::errors::TransferError;
use crate::sanitize;
use crate::transfer::TransferStructure;

/// One node of the source tracker sequence: a single-tier URL or a tier
/// group, which may nest further.
#[derive(Debug, Clone, PartialEq)]
pub enum Tracker {
    Url(String),
    Group(Vec<Tracker>),
}

impl TransferStructure<'_> {
    pub(crate) fn handle_trackers(&mut self) -> Result<(), TransferError> {
        if let Some(value) = &self.resume.trackers {
            let nodes = parse_trackers(value)?;
            self.fastresume.trackers = regroup_by_host(flatten_tiers(&nodes));
        }
        Ok(())
    }
}

/// Interprets the heterogeneous bencode sequence. Anything that is neither
/// a byte string nor a list is a malformed record.
pub fn parse_trackers(value: &Value) -> Result<Vec<Tracker>, TransferError> {
    match value {
        Value::List(items) => items.iter().map(parse_node).collect(),
        _ => Err(TransferError::MetadataMalformed(
            "trackers field is not a list".to_string(),
        )),
    }
}

fn parse_node(value: &Value) -> Result<Tracker, TransferError> {
    match value {
        Value::Bytes(url) => Ok(Tracker::Url(sanitize::decode_text(url, "tracker url")?)),
        Value::List(items) => Ok(Tracker::Group(
            items.iter().map(parse_node).collect::<Result<_, _>>()?,
        )),
        _ => Err(TransferError::MetadataMalformed(
            "tracker entry is neither a URL nor a tier group".to_string(),
        )),
    }
}

/// Flat items accumulate into the current tier; each group starts a new
/// tier and its nested groups flatten into that same tier.
pub fn flatten_tiers(nodes: &[Tracker]) -> Vec<Vec<String>> {
    let mut tiers: Vec<Vec<String>> = Vec::new();
    for node in nodes {
        match node {
            Tracker::Url(url) => {
                if tiers.is_empty() {
                    tiers.push(Vec::new());
                }
                if let Some(current) = tiers.last_mut() {
                    current.push(url.clone());
                }
            }
            Tracker::Group(group) => {
                let mut tier = Vec::new();
                collect_urls(group, &mut tier);
                tiers.push(tier);
            }
        }
    }
    tiers.retain(|tier| !tier.is_empty());
    tiers
}

fn collect_urls(nodes: &[Tracker], tier: &mut Vec<String>) {
    for node in nodes {
        match node {
            Tracker::Url(url) => tier.push(url.clone()),
            Tracker::Group(group) => collect_urls(group, tier),
        }
    }
}

/// Regroups tiers so trackers sharing a host key end up in one tier, in
/// walk order. The key is the hostname's final dot-separated label, which
/// keeps mirror sets like `test1.org`/`test2.org` together while splitting
/// them from their `.local` twins; unparseable URLs group under their full
/// text.
pub fn regroup_by_host(tiers: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let mut order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, Vec<String>> = HashMap::new();
    for tier in tiers {
        for tracker_url in tier {
            let key = host_group_key(&tracker_url);
            if !buckets.contains_key(&key) {
                order.push(key.clone());
            }
            buckets.entry(key).or_default().push(tracker_url);
        }
    }
    order
        .into_iter()
        .filter_map(|key| buckets.remove(&key))
        .collect()
}

fn host_group_key(tracker_url: &str) -> String {
    let host = Url::parse(tracker_url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_string));
    match host {
        Some(host) => host
            .rsplit('.')
            .next()
            .unwrap_or(host.as_str())
            .to_ascii_lowercase(),
        None => tracker_url.to_string(),
    }
}
