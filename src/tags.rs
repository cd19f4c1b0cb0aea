use std::collections::HashSet;

use crate::types::incident::Incident;

/// Offered by the tag picker before any incident carries a tag.
pub const DEFAULT_SUGGESTIONS: [&str; 7] = [
    "Bias",
    "Hallucination",
    "Data Leak",
    "Privacy",
    "Security",
    "Performance",
    "Ethics",
];

/// Every tag in use, in first-seen order.
pub fn distinct_tags(incidents: &[Incident]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for tag in incidents.iter().flat_map(|i| i.tag_list()) {
        if seen.insert(tag.as_str()) {
            out.push(tag.clone());
        }
    }
    out
}

/// Tags the picker should offer: the registry, or the default vocabulary
/// while the registry is still empty.
pub fn available_tags(incidents: &[Incident]) -> Vec<String> {
    let tags = distinct_tags(incidents);
    if tags.is_empty() {
        DEFAULT_SUGGESTIONS.iter().map(|t| t.to_string()).collect()
    } else {
        tags
    }
}

/// Add `tag` to a selection. Blank input and duplicates are ignored.
/// Returns whether the selection changed.
pub fn add_tag(selection: &mut Vec<String>, tag: &str) -> bool {
    let tag = tag.trim();
    if tag.is_empty() || selection.iter().any(|t| t == tag) {
        return false;
    }
    selection.push(tag.to_string());
    true
}

pub fn remove_tag(selection: &mut Vec<String>, tag: &str) -> bool {
    let before = selection.len();
    selection.retain(|t| t != tag);
    selection.len() != before
}

/// Normalize a raw selection: trimmed, non-empty, first occurrence wins.
pub fn normalize(raw: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(raw.len());
    for tag in raw {
        add_tag(&mut out, tag);
    }
    out
}

/// Available tags not yet selected that contain `input`, ignoring case.
pub fn suggest(available: &[String], selected: &[String], input: &str) -> Vec<String> {
    let needle = input.to_lowercase();
    available
        .iter()
        .filter(|tag| !selected.contains(tag))
        .filter(|tag| tag.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
