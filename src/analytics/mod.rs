pub mod recent;
pub mod severity;
pub mod tags;
pub mod timeline;

use chrono::{DateTime, Utc};

use crate::store::IncidentStore;
use crate::types::config::AppConfig;
use crate::types::incident::Incident;
use crate::types::stats::{DashboardStats, RiskInsights, SeverityCounts, TagCount};

/// Everything the dashboard tab renders, derived from the full list.
pub fn compute(incidents: &[Incident], now: DateTime<Utc>, config: &AppConfig) -> DashboardStats {
    let counts = severity::compute(incidents);
    let recent_count = recent::count_within(incidents, now, config.recent_window_days);
    let top_tags = tags::top(incidents, config.top_tag_limit);
    let (timeline, timeline_is_demo) = timeline::compute(
        incidents,
        now,
        config.timeline_months,
        config.sparse_data_threshold,
    );
    let insights = insights(&counts, recent_count, &top_tags);

    DashboardStats {
        severity_distribution: severity::distribution(&counts),
        counts,
        recent_count,
        recent_window_days: config.recent_window_days,
        most_recent: recent::most_recent(incidents),
        top_tags,
        timeline,
        timeline_is_demo,
        insights,
    }
}

/// An uptick means more than half of all incidents fall in the recent window.
pub fn insights(counts: &SeverityCounts, recent_count: usize, top_tags: &[TagCount]) -> RiskInsights {
    RiskInsights {
        high_severity_open: counts.high,
        most_common_tag: top_tags.first().map(|t| t.name.clone()),
        recent_uptick: recent_count * 2 > counts.total,
    }
}

pub fn dashboard_compute_store(
    store: &IncidentStore,
    config: &AppConfig,
    now: DateTime<Utc>,
) -> Result<DashboardStats, String> {
    store
        .with_incidents(|incidents| compute(incidents, now, config))
        .map_err(|e| e.to_string())
}

#[cfg(feature = "desktop")]
#[tauri::command]
pub fn dashboard_compute(
    store: tauri::State<'_, IncidentStore>,
    config: tauri::State<'_, crate::commands::config::ConfigState>,
) -> Result<DashboardStats, String> {
    let config = config.current()?;
    dashboard_compute_store(&store, &config, Utc::now())
}
