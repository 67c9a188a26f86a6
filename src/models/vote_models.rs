use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// One persisted cast vote. Rows are insert-only; the timestamp is assigned
/// by the store at insertion.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VoteRecord {
    pub id: i64,
    pub option: String,
    pub created_at: DateTime<Utc>,
}

/// Raw `GROUP BY option` row from the store.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct OptionCount {
    pub option: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyEntry {
    pub option: String,
    pub count: i64,
    /// Share of the total, two decimal places, e.g. "66.67".
    pub percentage: String,
    /// Bar width in percent, normalized to the option with the highest count.
    pub bar_width: i64,
}

/// On-demand aggregate over the vote store. Computed from a single grouped
/// query, so the total always agrees with the per-option counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    pub total: i64,
    pub entries: Vec<TallyEntry>,
}

impl Tally {
    /// Ordering: descending count, ties broken by option value ascending.
    pub fn from_counts(mut counts: Vec<OptionCount>) -> Self {
        counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.option.cmp(&b.option)));

        let total: i64 = counts.iter().map(|c| c.count).sum();
        // floor at 1 so a vote-free store still yields zero-width bars
        let max = counts.iter().map(|c| c.count).max().unwrap_or(0).max(1);

        let entries = counts
            .into_iter()
            .map(|c| TallyEntry {
                percentage: format_percentage(c.count, total),
                bar_width: c.count * 100 / max,
                count: c.count,
                option: c.option,
            })
            .collect();

        Self { total, entries }
    }
}

pub fn format_percentage(count: i64, total: i64) -> String {
    if total == 0 {
        return "0.00".to_string();
    }
    format!("{:.2}", count as f64 * 100.0 / total as f64)
}
