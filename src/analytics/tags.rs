use std::collections::HashMap;

use crate::types::incident::Incident;
use crate::types::stats::TagCount;

/// Tag occurrence counts, most frequent first, ties in first-seen order,
/// truncated to `limit`.
pub fn top(incidents: &[Incident], limit: usize) -> Vec<TagCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<TagCount> = Vec::new();
    for tag in incidents.iter().flat_map(|i| i.tag_list()) {
        match index.get(tag.as_str()).copied() {
            Some(pos) => counts[pos].value += 1,
            None => {
                index.insert(tag.as_str(), counts.len());
                counts.push(TagCount {
                    name: tag.clone(),
                    value: 1,
                });
            }
        }
    }
    // stable: equal counts keep first-seen order
    counts.sort_by(|a, b| b.value.cmp(&a.value));
    counts.truncate(limit);
    counts
}
