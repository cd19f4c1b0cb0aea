use crate::store::IncidentStore;
use crate::tags;

/// Every tag currently in use, first-seen order.
pub fn tags_list_store(store: &IncidentStore) -> Result<Vec<String>, String> {
    store
        .with_incidents(tags::distinct_tags)
        .map_err(|e| e.to_string())
}

/// Picker suggestions for `input`, excluding tags already selected.
pub fn tags_suggest_store(
    store: &IncidentStore,
    selected: &[String],
    input: &str,
) -> Result<Vec<String>, String> {
    store
        .with_incidents(|incidents| {
            let available = tags::available_tags(incidents);
            tags::suggest(&available, selected, input)
        })
        .map_err(|e| e.to_string())
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub fn tags_list(store: tauri::State<'_, IncidentStore>) -> Result<Vec<String>, String> {
    tags_list_store(&store)
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub fn tags_suggest(
    store: tauri::State<'_, IncidentStore>,
    selected: Vec<String>,
    input: String,
) -> Result<Vec<String>, String> {
    tags_suggest_store(&store, &selected, &input)
}
