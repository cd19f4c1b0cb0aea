/// Event names as constants, shared with the frontend listeners.
pub mod event_names {
    pub const INCIDENT_CREATED: &str = "incident:created";
}

#[cfg(feature = "desktop")]
pub fn emit_event<R: tauri::Runtime, T: serde::Serialize + Clone>(
    app: &tauri::AppHandle<R>,
    event: &str,
    payload: T,
) -> Result<(), String> {
    use tauri::Emitter;

    app.emit(event, payload).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::event_names::*;

    #[test]
    fn event_names_match_ipc_contract() {
        assert_eq!(INCIDENT_CREATED, "incident:created");
    }

    #[test]
    fn created_payload_matches_frontend_incident_shape() {
        let incident = crate::seed::demo_incidents().remove(0);
        let payload = serde_json::to_value(&incident).unwrap();
        assert_eq!(payload["id"], 1);
        assert_eq!(payload["severity"], "Medium");
        assert_eq!(payload["reported_at"], "2025-03-15T10:00:00Z");
        assert_eq!(payload["tags"][1], "Ethics");
    }
}
