pub mod filter;
pub mod sort;

use tracing::debug;

use crate::types::filter::FilterState;
use crate::types::incident::Incident;

/// The visible, ordered subset of `incidents` for `state`.
pub fn visible(incidents: &[Incident], state: &FilterState) -> Vec<Incident> {
    let mut out: Vec<Incident> = incidents
        .iter()
        .filter(|i| filter::matches(i, state))
        .cloned()
        .collect();
    sort::sort_by_reported_at(&mut out, state.sort_order);
    debug!(
        total = incidents.len(),
        visible = out.len(),
        severity = ?state.severity_filter,
        tags = state.tag_filter.len(),
        "Incident list recomputed"
    );
    out
}
