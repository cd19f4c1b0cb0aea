use chrono::{DateTime, Utc};

use crate::form;
use crate::query;
use crate::store::IncidentStore;
use crate::types::filter::FilterState;
use crate::types::incident::{Incident, IncidentDraft};

/// The filtered, sorted incident list for the current view.
pub fn incidents_list_store(
    store: &IncidentStore,
    filter: &FilterState,
) -> Result<Vec<Incident>, String> {
    store
        .with_incidents(|incidents| query::visible(incidents, filter))
        .map_err(|e| e.to_string())
}

pub fn incidents_get_store(store: &IncidentStore, id: u64) -> Result<Option<Incident>, String> {
    store.get(id).map_err(|e| e.to_string())
}

/// Validate and append a new incident. Validation failures come back as the
/// message the form displays.
pub fn incidents_create_store(
    store: &IncidentStore,
    draft: &IncidentDraft,
    now: DateTime<Utc>,
) -> Result<Incident, String> {
    form::submit(store, draft, now).map_err(|e| e.to_string())
}

// ---------------------------------------------------------------------------
// Tauri command wrappers
// ---------------------------------------------------------------------------

#[cfg(feature = "desktop")]
#[tauri::command]
pub fn incidents_list(
    store: tauri::State<'_, IncidentStore>,
    filter: Option<FilterState>,
) -> Result<Vec<Incident>, String> {
    incidents_list_store(&store, &filter.unwrap_or_default())
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub fn incidents_get(
    store: tauri::State<'_, IncidentStore>,
    id: u64,
) -> Result<Option<Incident>, String> {
    incidents_get_store(&store, id)
}

/// Create an incident and broadcast it so open views re-derive their lists
/// and charts.
#[cfg(feature = "desktop")]
#[tauri::command]
pub fn incidents_create(
    app: tauri::AppHandle,
    store: tauri::State<'_, IncidentStore>,
    draft: IncidentDraft,
) -> Result<Incident, String> {
    use crate::events::{emit_event, event_names};

    let incident = incidents_create_store(&store, &draft, Utc::now())?;
    if let Err(e) = emit_event(&app, event_names::INCIDENT_CREATED, incident.clone()) {
        tracing::warn!(error = %e, id = incident.id, "Failed to emit incident:created");
    }
    Ok(incident)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::types::filter::{SeverityFilter, SortOrder};
    use chrono::TimeZone;

    fn seeded() -> IncidentStore {
        IncidentStore::seeded(seed::demo_incidents()).unwrap()
    }

    fn ids(list: &[Incident]) -> Vec<u64> {
        list.iter().map(|i| i.id).collect()
    }

    #[test]
    fn default_filter_lists_all_newest_first() {
        let list = incidents_list_store(&seeded(), &FilterState::default()).unwrap();
        assert_eq!(ids(&list), vec![2, 3, 1, 4, 5]);
    }

    #[test]
    fn oldest_first_reverses() {
        let filter = FilterState {
            sort_order: SortOrder::OldestFirst,
            ..Default::default()
        };
        let list = incidents_list_store(&seeded(), &filter).unwrap();
        assert_eq!(ids(&list), vec![5, 4, 1, 3, 2]);
    }

    #[test]
    fn search_hallucination_any_case() {
        let filter = FilterState {
            search_query: "HALLUCINATION".to_string(),
            ..Default::default()
        };
        let list = incidents_list_store(&seeded(), &filter).unwrap();
        assert_eq!(ids(&list), vec![2]);
    }

    #[test]
    fn severity_and_tag_filters() {
        let filter = FilterState {
            severity_filter: SeverityFilter::Medium,
            tag_filter: vec!["Ethics".to_string()],
            ..Default::default()
        };
        let list = incidents_list_store(&seeded(), &filter).unwrap();
        assert_eq!(ids(&list), vec![1]);
    }

    #[test]
    fn get_by_id() {
        let store = seeded();
        assert_eq!(incidents_get_store(&store, 3).unwrap().map(|i| i.id), Some(3));
        assert!(incidents_get_store(&store, 99).unwrap().is_none());
    }

    #[test]
    fn create_returns_form_message_on_failure() {
        let store = seeded();
        let now = Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap();
        let err = incidents_create_store(&store, &IncidentDraft::default(), now).unwrap_err();
        assert_eq!(err, "Please enter a title");
        assert_eq!(store.len().unwrap(), 5);
    }

    #[test]
    fn created_incident_shows_up_first() {
        let store = seeded();
        let now = Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap();
        let draft = IncidentDraft {
            title: "Sycophancy".to_string(),
            description: "Model agreed with false premises".to_string(),
            ..Default::default()
        };
        let created = incidents_create_store(&store, &draft, now).unwrap();
        let list = incidents_list_store(&store, &FilterState::default()).unwrap();
        assert_eq!(list[0].id, created.id);
        assert_eq!(list.len(), 6);
    }
}
