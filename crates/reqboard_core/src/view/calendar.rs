//! Calendar projections: per-day event lists and the monthly grid.
//!
//! # Responsibility
//! - Plot requests by received date and computed reminder date.
//! - Lay out a Monday-first month grid with leading blanks.
//!
//! # Invariants
//! - A record contributes its received and reminder events independently; a
//!   zero-day reminder yields two events on the same date.
//! - Event labels distinguish the two kinds.

use crate::model::request::Request;
use crate::schedule::reminder_date;
use chrono::{Datelike, NaiveDate};

/// Why a request appears on a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// The request arrived on this day.
    Received,
    /// The computed follow-up falls on this day.
    Reminder,
}

/// One calendar badge for a single day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub kind: EventKind,
    pub date: NaiveDate,
    pub request: Request,
}

impl CalendarEvent {
    /// Display text; the prefix distinguishes the event kind.
    pub fn label(&self) -> String {
        let prefix = match self.kind {
            EventKind::Received => "[received]",
            EventKind::Reminder => "[reminder]",
        };
        format!(
            "{prefix} {} - {}",
            self.request.client_name, self.request.summary
        )
    }
}

/// Events for one calendar day, in collection order.
///
/// Each record is checked against both its received date and its computed
/// reminder date; matching both contributes two events.
pub fn calendar_day(records: &[Request], date: NaiveDate) -> Vec<CalendarEvent> {
    let mut events = Vec::new();
    for request in records {
        if request.received_date == date {
            events.push(CalendarEvent {
                kind: EventKind::Received,
                date,
                request: request.clone(),
            });
        }
        if reminder_date(request) == date {
            events.push(CalendarEvent {
                kind: EventKind::Reminder,
                date,
                request: request.clone(),
            });
        }
    }
    events
}

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_today: bool,
    pub events: Vec<CalendarEvent>,
}

/// Monday-first month layout ready for grid rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
    /// Empty cells before the 1st, Monday being column zero.
    pub leading_blanks: usize,
    pub days: Vec<DayCell>,
}

/// Builds the month grid for `year`/`month`, or `None` for an invalid month.
pub fn calendar_month(
    records: &[Request],
    year: i32,
    month: u32,
    today: NaiveDate,
) -> Option<MonthGrid> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let leading_blanks = first.weekday().num_days_from_monday() as usize;

    let mut days = Vec::new();
    let mut date = first;
    while date.month() == month {
        days.push(DayCell {
            date,
            is_today: date == today,
            events: calendar_day(records, date),
        });
        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    Some(MonthGrid {
        year,
        month,
        leading_blanks,
        days,
    })
}
