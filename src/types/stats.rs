use serde::{Deserialize, Serialize};

use super::incident::Severity;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeverityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub total: usize,
}

impl SeverityCounts {
    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Low => self.low,
            Severity::Medium => self.medium,
            Severity::High => self.high,
        }
    }
}

/// One slice of the severity pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveritySlice {
    pub name: Severity,
    pub value: usize,
}

/// One bar of the top-tags chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub name: String,
    pub value: usize,
}

/// One point of the incidents-over-time line chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBucket {
    pub date: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskInsights {
    pub high_severity_open: usize,
    pub most_common_tag: Option<String>,
    pub recent_uptick: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub counts: SeverityCounts,
    pub severity_distribution: Vec<SeveritySlice>,
    pub recent_count: usize,
    pub recent_window_days: u32,
    pub most_recent: Option<String>,
    pub top_tags: Vec<TagCount>,
    pub timeline: Vec<MonthBucket>,
    pub timeline_is_demo: bool,
    pub insights: RiskInsights,
}
