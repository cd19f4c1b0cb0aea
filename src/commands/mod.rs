pub mod config;
pub mod incidents;
pub mod tags;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::IncidentStore;
    use crate::types::filter::FilterState;

    #[test]
    fn incidents_list_returns_valid_json() {
        let store = IncidentStore::seeded(crate::seed::demo_incidents()).unwrap();
        let list = incidents::incidents_list_store(&store, &FilterState::default()).unwrap();
        let json = serde_json::to_string(&list).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"reported_at\""));
    }

    #[test]
    fn config_get_returns_camel_case_json() {
        let state = config::ConfigState::default();
        let cfg = config::config_get_state(&state).unwrap();
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("\"recentWindowDays\""));
    }
}
