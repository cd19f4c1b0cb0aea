use serde::{Deserialize, Serialize};

use super::incident::Severity;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeverityFilter {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl SeverityFilter {
    pub fn matches(&self, severity: Severity) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Low => severity == Severity::Low,
            SeverityFilter::Medium => severity == Severity::Medium,
            SeverityFilter::High => severity == Severity::High,
        }
    }
}

impl From<Severity> for SeverityFilter {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Low => SeverityFilter::Low,
            Severity::Medium => SeverityFilter::Medium,
            Severity::High => SeverityFilter::High,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "Newest First")]
    NewestFirst,
    #[serde(rename = "Oldest First")]
    OldestFirst,
}

impl SortOrder {
    pub fn reversed(self) -> Self {
        match self {
            SortOrder::NewestFirst => SortOrder::OldestFirst,
            SortOrder::OldestFirst => SortOrder::NewestFirst,
        }
    }
}

/// View parameters for the incident list. Every field may be omitted by the
/// caller; the defaults show everything, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(default)]
    pub severity_filter: SeverityFilter,
    #[serde(default)]
    pub tag_filter: Vec<String>,
    #[serde(default)]
    pub search_query: String,
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl FilterState {
    pub fn select_tag(&mut self, tag: &str) -> bool {
        crate::tags::add_tag(&mut self.tag_filter, tag)
    }

    pub fn deselect_tag(&mut self, tag: &str) -> bool {
        crate::tags::remove_tag(&mut self.tag_filter, tag)
    }
}
