//! Dashboard grouping and stat counters.
//!
//! # Responsibility
//! - Bucket open requests by status label for column display.
//! - Apply status filter and case-insensitive text search.
//!
//! # Invariants
//! - `done` records never appear in groups, for any filter/search combination.
//! - Groups keep first-seen collection order; entries sort by received date
//!   descending with insertion-stable ties.

use crate::model::request::{Request, Status};
use crate::schedule::{due_state, DueState};
use chrono::NaiveDate;

/// Status filter selected on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Keep every open request.
    #[default]
    All,
    /// Keep only exact label matches.
    Only(Status),
}

/// One card of a dashboard column: the record plus its urgency badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardEntry {
    pub request: Request,
    pub due_state: DueState,
}

/// One dashboard column keyed by status label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardGroup {
    /// Bucket key: a recognized label, a custom label verbatim, or `future`
    /// for the empty label.
    pub key: String,
    pub entries: Vec<DashboardEntry>,
}

/// Board-wide counters shown above the dashboard.
///
/// `total` counts every record including `done`; `other` counts records
/// whose label is none of `active|pending|future|done`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatCounts {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
    pub future: usize,
    pub other: usize,
}

/// Buckets open requests into display-ready dashboard columns.
///
/// Drops `done` records unconditionally, then applies the status filter and
/// the case-insensitive search over client name and summary. Each surviving
/// entry carries its [`DueState`] computed against `today`.
pub fn dashboard_groups(
    records: &[Request],
    filter: &StatusFilter,
    search: &str,
    today: NaiveDate,
) -> Vec<DashboardGroup> {
    let needle = search.trim().to_lowercase();
    let mut groups: Vec<DashboardGroup> = Vec::new();

    for request in records {
        if request.status.is_done() {
            continue;
        }
        if let StatusFilter::Only(status) = filter {
            if request.status != *status {
                continue;
            }
        }
        if !needle.is_empty() && !matches_search(request, &needle) {
            continue;
        }

        let key = request.status.group_key();
        let entry = DashboardEntry {
            request: request.clone(),
            due_state: due_state(request, today),
        };
        match groups.iter_mut().find(|group| group.key == key) {
            Some(group) => group.entries.push(entry),
            None => groups.push(DashboardGroup {
                key: key.to_string(),
                entries: vec![entry],
            }),
        }
    }

    for group in &mut groups {
        // Stable sort keeps insertion order for equal dates.
        group
            .entries
            .sort_by(|a, b| b.request.received_date.cmp(&a.request.received_date));
    }

    groups
}

/// Counts records per recognized label.
pub fn stat_counts(records: &[Request]) -> StatCounts {
    let mut counts = StatCounts::default();
    for request in records {
        counts.total += 1;
        match &request.status {
            Status::Active => counts.active += 1,
            Status::Pending => counts.pending += 1,
            Status::Future => counts.future += 1,
            Status::Done => {}
            Status::Custom(_) => counts.other += 1,
        }
    }
    counts
}

fn matches_search(request: &Request, needle: &str) -> bool {
    request.client_name.to_lowercase().contains(needle)
        || request.summary.to_lowercase().contains(needle)
}
