use crate::timestamp;
use crate::types::filter::SortOrder;
use crate::types::incident::Incident;

/// Stable sort by reported-at. Unparsable timestamps key as the epoch.
pub fn sort_by_reported_at(incidents: &mut [Incident], order: SortOrder) {
    incidents.sort_by_cached_key(|i| {
        let key = timestamp::sort_key(&i.reported_at);
        match order {
            SortOrder::NewestFirst => -key,
            SortOrder::OldestFirst => key,
        }
    });
}
