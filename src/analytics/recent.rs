use chrono::{DateTime, Duration, Utc};

use crate::timestamp;
use crate::types::incident::Incident;

/// Incidents reported at or after `now - days`. Future timestamps count.
/// A window reaching past the representable range counts everything.
pub fn count_within(incidents: &[Incident], now: DateTime<Utc>, days: u32) -> usize {
    let cutoff = Duration::try_days(i64::from(days)).and_then(|d| now.checked_sub_signed(d));
    incidents
        .iter()
        .filter_map(|i| timestamp::parse(&i.reported_at))
        .filter(|dt| cutoff.map_or(true, |c| *dt >= c))
        .count()
}

/// Latest parsable reported-at, in canonical form.
pub fn most_recent(incidents: &[Incident]) -> Option<String> {
    incidents
        .iter()
        .filter_map(|i| timestamp::parse(&i.reported_at))
        .max()
        .map(timestamp::format)
}
