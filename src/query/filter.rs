use crate::types::filter::{FilterState, SeverityFilter};
use crate::types::incident::Incident;

pub fn matches_severity(incident: &Incident, filter: SeverityFilter) -> bool {
    filter.matches(incident.severity)
}

/// AND semantics: every selected tag must be present.
pub fn matches_tags(incident: &Incident, selected: &[String]) -> bool {
    selected.iter().all(|tag| incident.has_tag(tag))
}

/// Case-insensitive substring match on title or description. An empty query
/// matches everything; the query is not trimmed.
pub fn matches_search(incident: &Incident, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    incident.title.to_lowercase().contains(&needle)
        || incident.description.to_lowercase().contains(&needle)
}

pub fn matches(incident: &Incident, state: &FilterState) -> bool {
    matches_severity(incident, state.severity_filter)
        && matches_tags(incident, &state.tag_filter)
        && matches_search(incident, &state.search_query)
}
