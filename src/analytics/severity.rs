use crate::types::incident::{Incident, Severity};
use crate::types::stats::{SeverityCounts, SeveritySlice};

pub fn compute(incidents: &[Incident]) -> SeverityCounts {
    let mut counts = SeverityCounts::default();
    for incident in incidents {
        match incident.severity {
            Severity::Low => counts.low += 1,
            Severity::Medium => counts.medium += 1,
            Severity::High => counts.high += 1,
        }
    }
    counts.total = incidents.len();
    counts
}

/// Pie chart slices in Low, Medium, High order.
pub fn distribution(counts: &SeverityCounts) -> Vec<SeveritySlice> {
    Severity::ALL
        .iter()
        .map(|&s| SeveritySlice {
            name: s,
            value: counts.get(s),
        })
        .collect()
}
