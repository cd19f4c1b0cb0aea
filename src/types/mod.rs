pub mod config;
pub mod filter;
pub mod incident;
pub mod stats;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    #[test]
    fn incident_roundtrip() {
        let json = r#"{
            "id": 2,
            "title": "LLM Hallucination in Critical Info",
            "description": "LLM provided incorrect safety procedure information.",
            "severity": "High",
            "reported_at": "2025-04-01T14:30:00Z",
            "tags": ["Hallucination", "Safety", "LLM"]
        }"#;
        let incident: incident::Incident = serde_json::from_str(json).unwrap();
        assert_eq!(incident.severity, incident::Severity::High);
        assert_eq!(incident.tag_list().len(), 3);
        let re_json = serde_json::to_string(&incident).unwrap();
        assert!(re_json.contains("\"reported_at\""));
        let incident2: incident::Incident = serde_json::from_str(&re_json).unwrap();
        assert_eq!(incident, incident2);
    }

    #[test]
    fn untagged_incident_omits_tags() {
        let json = r#"{
            "id": 9,
            "title": "t",
            "description": "d",
            "severity": "Low",
            "reported_at": "2025-04-01T14:30:00Z"
        }"#;
        let incident: incident::Incident = serde_json::from_str(json).unwrap();
        assert!(incident.tags.is_none());
        assert!(incident.tag_list().is_empty());
        let re_json = serde_json::to_string(&incident).unwrap();
        assert!(!re_json.contains("tags"));
    }

    #[test]
    fn unknown_severity_is_rejected() {
        let json = r#"{"id":1,"title":"t","description":"d","severity":"Critical","reported_at":""}"#;
        assert!(serde_json::from_str::<incident::Incident>(json).is_err());
    }

    #[test]
    fn filter_state_uses_ui_labels() {
        let json = r#"{
            "severityFilter": "All",
            "tagFilter": ["Ethics"],
            "searchQuery": "leak",
            "sortOrder": "Oldest First"
        }"#;
        let state: filter::FilterState = serde_json::from_str(json).unwrap();
        assert_eq!(state.severity_filter, filter::SeverityFilter::All);
        assert_eq!(state.sort_order, filter::SortOrder::OldestFirst);
        let re_json = serde_json::to_string(&state).unwrap();
        assert!(re_json.contains("\"Oldest First\""));
    }

    #[test]
    fn filter_state_defaults_when_empty() {
        let state: filter::FilterState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, filter::FilterState::default());
        assert_eq!(state.sort_order, filter::SortOrder::NewestFirst);
    }

    #[test]
    fn draft_defaults_to_low_severity() {
        let json = r#"{"title": "Prompt injection", "description": "Bypassed guardrails"}"#;
        let draft: incident::IncidentDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.severity, incident::Severity::Low);
        assert!(draft.tags.is_empty());
        assert!(draft.reported_at.is_none());
    }

    #[test]
    fn config_partial_json_fills_defaults() {
        let cfg: config::AppConfig = serde_json::from_str(r#"{"topTagLimit": 3}"#).unwrap();
        assert_eq!(cfg.top_tag_limit, 3);
        assert_eq!(cfg.recent_window_days, 30);
        assert!(cfg.seed_demo_data);
    }

    #[test]
    fn config_from_lookup_ignores_garbage() {
        let cfg = config::AppConfig::from_lookup(|key| match key {
            "SAFETYWATCH_RECENT_DAYS" => Some("14".to_string()),
            "SAFETYWATCH_TOP_TAGS" => Some("lots".to_string()),
            "SAFETYWATCH_SEED_DEMO" => Some("false".to_string()),
            _ => None,
        });
        assert_eq!(cfg.recent_window_days, 14);
        assert_eq!(cfg.top_tag_limit, 5);
        assert!(!cfg.seed_demo_data);
    }

    #[test]
    fn config_from_lookup_rejects_out_of_range_values() {
        let cfg = config::AppConfig::from_lookup(|key| match key {
            "SAFETYWATCH_RECENT_DAYS" => Some("4000000000".to_string()),
            "SAFETYWATCH_TIMELINE_MONTHS" => Some("0".to_string()),
            _ => None,
        });
        assert_eq!(cfg.recent_window_days, 30);
        assert_eq!(cfg.timeline_months, 6);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn config_from_lookup_accepts_range_edges() {
        let cfg = config::AppConfig::from_lookup(|key| match key {
            "SAFETYWATCH_RECENT_DAYS" => Some("36500".to_string()),
            "SAFETYWATCH_TIMELINE_MONTHS" => Some("120".to_string()),
            _ => None,
        });
        assert_eq!(cfg.recent_window_days, 36_500);
        assert_eq!(cfg.timeline_months, 120);
    }

    #[test]
    fn config_validate_names_offending_field() {
        let cfg = config::AppConfig {
            timeline_months: 121,
            ..config::AppConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "timelineMonths must be between 1 and 120, got 121"
        );
        let cfg = config::AppConfig {
            recent_window_days: 36_501,
            ..config::AppConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn dashboard_stats_serializes_camel_case() {
        let stats = stats::DashboardStats {
            counts: stats::SeverityCounts { low: 1, medium: 0, high: 2, total: 3 },
            severity_distribution: vec![],
            recent_count: 1,
            recent_window_days: 30,
            most_recent: None,
            top_tags: vec![stats::TagCount { name: "Bias".to_string(), value: 2 }],
            timeline: vec![stats::MonthBucket { date: "Jan".to_string(), count: 2 }],
            timeline_is_demo: true,
            insights: stats::RiskInsights {
                high_severity_open: 2,
                most_common_tag: Some("Bias".to_string()),
                recent_uptick: false,
            },
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"recentCount\":1"));
        assert!(json.contains("\"mostRecent\":null"));
        assert!(json.contains("\"highSeverityOpen\":2"));
    }
}
