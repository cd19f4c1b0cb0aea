use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::timestamp;
use crate::types::config::TIMELINE_MONTHS_RANGE;
use crate::types::incident::Incident;
use crate::types::stats::MonthBucket;

/// Placeholder series shown while there is too little data to chart.
pub const DEMO_SERIES: [(&str, usize); 6] = [
    ("Jan", 2),
    ("Feb", 5),
    ("Mar", 3),
    ("Apr", 7),
    ("May", 4),
    ("Jun", 6),
];

pub fn demo_series() -> Vec<MonthBucket> {
    DEMO_SERIES
        .iter()
        .map(|&(date, count)| MonthBucket {
            date: date.to_string(),
            count,
        })
        .collect()
}

/// Monthly series, or the demo series when `incidents.len() <= sparse_threshold`.
/// The flag reports whether the demo series was used.
pub fn compute(
    incidents: &[Incident],
    now: DateTime<Utc>,
    months: u32,
    sparse_threshold: usize,
) -> (Vec<MonthBucket>, bool) {
    if incidents.len() <= sparse_threshold {
        return (demo_series(), true);
    }
    (monthly(incidents, now, months), false)
}

/// Counts per calendar month (UTC) for the `months` months ending at the
/// month containing `now`, oldest first. `months` is capped at the largest
/// configurable timeline length.
pub fn monthly(incidents: &[Incident], now: DateTime<Utc>, months: u32) -> Vec<MonthBucket> {
    let months = months.min(*TIMELINE_MONTHS_RANGE.end()) as i32;
    let parsed: Vec<DateTime<Utc>> = incidents
        .iter()
        .filter_map(|i| timestamp::parse(&i.reported_at))
        .collect();
    let current = now.year() * 12 + now.month0() as i32;

    (0..months)
        .rev()
        .map(|back| {
            let idx = current - back;
            let year = idx.div_euclid(12);
            let month0 = idx.rem_euclid(12) as u32;
            let count = parsed
                .iter()
                .filter(|dt| dt.year() == year && dt.month0() == month0)
                .count();
            MonthBucket {
                date: month_label(year, month0),
                count,
            }
        })
        .collect()
}

fn month_label(year: i32, month0: u32) -> String {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .map(|d| d.format("%b").to_string())
        .unwrap_or_default()
}
