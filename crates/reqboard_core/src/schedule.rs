//! Reminder-date and due-state computation.
//!
//! # Responsibility
//! - Derive the follow-up date from a request's received date and offset.
//! - Classify urgency relative to an explicit reference date.
//!
//! # Invariants
//! - All functions are pure and deterministic for the same `(request, today)`.
//! - A `done` status short-circuits every date relationship.

use crate::model::request::Request;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Thresholds in whole days; ties resolve to the stricter bucket.
const DUE_SOON_MAX_DAYS: i64 = 2;
const ON_TRACK_MAX_DAYS: i64 = 14;

/// Derived urgency bucket used for grouping and highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DueState {
    Done,
    Overdue,
    DueSoon,
    Ok,
    Future,
}

impl DueState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Done => "done",
            Self::Overdue => "overdue",
            Self::DueSoon => "due-soon",
            Self::Ok => "ok",
            Self::Future => "future",
        }
    }
}

impl Display for DueState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns `received_date + reminder_days` in calendar days.
///
/// Month and year rollover follow calendar arithmetic; an offset that would
/// leave the representable range saturates instead of panicking.
pub fn reminder_date(request: &Request) -> NaiveDate {
    request
        .received_date
        .checked_add_days(Days::new(u64::from(request.reminder_days)))
        .unwrap_or(NaiveDate::MAX)
}

/// Classifies a request against `today`.
///
/// Contract, in order:
/// 1. `done` status wins unconditionally.
/// 2. `diff < 0` days -> `Overdue`.
/// 3. `0 <= diff <= 2` -> `DueSoon`.
/// 4. `2 < diff <= 14` -> `Ok`.
/// 5. `diff > 14` -> `Future`.
pub fn due_state(request: &Request, today: NaiveDate) -> DueState {
    if request.status.is_done() {
        return DueState::Done;
    }

    let diff = reminder_date(request).signed_duration_since(today).num_days();
    if diff < 0 {
        DueState::Overdue
    } else if diff <= DUE_SOON_MAX_DAYS {
        DueState::DueSoon
    } else if diff <= ON_TRACK_MAX_DAYS {
        DueState::Ok
    } else {
        DueState::Future
    }
}
