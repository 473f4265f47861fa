//! Request domain model.
//!
//! # Responsibility
//! - Define the canonical record shared by dashboard and calendar projections.
//! - Validate and normalize caller input for create/edit flows.
//!
//! # Invariants
//! - `id` is stable and never reused for another request.
//! - `client_name` is non-empty after trimming.
//! - `created_at` is set once at creation and never modified afterwards.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable, opaque identifier for a tracked request.
///
/// Freshly created ids are UUIDv4 renderings, but the type accepts any
/// non-UUID string so that ids minted elsewhere survive import unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Mints a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps a caller-provided id, used by import paths where identity
    /// already exists externally.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Status label of a request.
///
/// The label set is deliberately open: `active`, `pending`, `done` and
/// `future` are recognized, anything else (including the empty label) is
/// carried verbatim in `Custom` and never rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Active,
    Pending,
    Done,
    Future,
    /// Unrecognized label, preserved exactly as entered.
    Custom(String),
}

impl Status {
    /// Verbatim display text for this label.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Done => "done",
            Self::Future => "future",
            Self::Custom(label) => label,
        }
    }

    /// Whether this request is finished and excluded from the board.
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Dashboard bucket key for this label.
    ///
    /// Only the empty label falls back to `future`; any other custom label
    /// forms its own bucket and is displayed verbatim.
    pub fn group_key(&self) -> &str {
        match self {
            Self::Custom(label) if label.is_empty() => "future",
            other => other.as_str(),
        }
    }
}

impl Default for Status {
    /// Fresh drafts start out as `active`.
    fn default() -> Self {
        Self::Active
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Status {
    fn from(value: String) -> Self {
        match value.as_str() {
            "active" => Self::Active,
            "pending" => Self::Pending,
            "done" => Self::Done,
            "future" => Self::Future,
            _ => Self::Custom(value),
        }
    }
}

impl From<Status> for String {
    fn from(value: Status) -> Self {
        match value {
            Status::Custom(label) => label,
            other => other.as_str().to_string(),
        }
    }
}

/// Canonical record for one tracked client request.
///
/// Wire field names are fixed by the storage/export contract:
/// `id, receivedDate, clientName, summary, status, reminderDays,
/// createdAt, updatedAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// Stable id used for edit/delete addressing and import deduplication.
    pub id: RequestId,
    /// Calendar date the request arrived, date-only.
    pub received_date: NaiveDate,
    /// Client display name, trimmed and non-empty.
    pub client_name: String,
    /// Free-text description, trimmed.
    pub summary: String,
    /// Open status label.
    pub status: Status,
    /// Follow-up offset in days from `received_date`.
    pub reminder_days: u32,
    /// Set once at creation.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful mutation.
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for create/edit flows.
///
/// `received_date` stays a raw string here so that unparseable input
/// surfaces as a typed validation error instead of a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestDraft {
    pub received_date: String,
    pub client_name: String,
    pub summary: String,
    pub status: Status,
    /// Raw day offset; missing or negative values coerce to 0.
    pub reminder_days: Option<i64>,
}

/// Validation failure for create/edit input. The record is not written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyClientName,
    InvalidReceivedDate { value: String },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyClientName => write!(f, "client name must not be empty"),
            Self::InvalidReceivedDate { value } => {
                write!(f, "received date `{value}` is not a valid YYYY-MM-DD date")
            }
        }
    }
}

impl Error for ValidationError {}

impl Request {
    /// Creates a new request with a freshly minted id.
    ///
    /// Both timestamps are set to `now`; string fields are trimmed and the
    /// reminder offset is coerced to a non-negative day count.
    pub fn create(draft: &RequestDraft, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        Self::with_id(RequestId::generate(), draft, now)
    }

    /// Creates a request with a caller-provided stable id.
    ///
    /// Used by repository insert paths that must guarantee id uniqueness
    /// against an existing collection.
    pub fn with_id(
        id: RequestId,
        draft: &RequestDraft,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let (received_date, client_name, summary) = normalize_fields(draft)?;
        Ok(Self {
            id,
            received_date,
            client_name,
            summary,
            status: draft.status.clone(),
            reminder_days: coerce_reminder_days(draft.reminder_days),
            created_at: now,
            updated_at: now,
        })
    }

    /// Produces an edited copy of this request.
    ///
    /// `id` and `created_at` are retained, every other field is overwritten
    /// from the draft under the same validation rules, and `updated_at` is
    /// refreshed to `now`.
    pub fn apply_edit(
        &self,
        draft: &RequestDraft,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let (received_date, client_name, summary) = normalize_fields(draft)?;
        Ok(Self {
            id: self.id.clone(),
            received_date,
            client_name,
            summary,
            status: draft.status.clone(),
            reminder_days: coerce_reminder_days(draft.reminder_days),
            created_at: self.created_at,
            updated_at: now,
        })
    }
}

fn normalize_fields(
    draft: &RequestDraft,
) -> Result<(NaiveDate, String, String), ValidationError> {
    let client_name = draft.client_name.trim();
    if client_name.is_empty() {
        return Err(ValidationError::EmptyClientName);
    }

    let raw_date = draft.received_date.trim();
    let received_date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").map_err(|_| {
        ValidationError::InvalidReceivedDate {
            value: raw_date.to_string(),
        }
    })?;

    Ok((
        received_date,
        client_name.to_string(),
        draft.summary.trim().to_string(),
    ))
}

fn coerce_reminder_days(raw: Option<i64>) -> u32 {
    raw.and_then(|days| u32::try_from(days).ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{coerce_reminder_days, Status};

    #[test]
    fn status_string_round_trip_is_lossless() {
        for label in ["active", "pending", "done", "future", "urgent", "", "Active"] {
            let status = Status::from(label.to_string());
            assert_eq!(String::from(status), label);
        }
    }

    #[test]
    fn empty_label_buckets_as_future_but_custom_labels_do_not() {
        assert_eq!(Status::Custom(String::new()).group_key(), "future");
        assert_eq!(Status::Custom("urgent".to_string()).group_key(), "urgent");
        assert_eq!(Status::Custom(" ".to_string()).group_key(), " ");
    }

    #[test]
    fn reminder_days_coercion_clamps_invalid_input_to_zero() {
        assert_eq!(coerce_reminder_days(None), 0);
        assert_eq!(coerce_reminder_days(Some(-3)), 0);
        assert_eq!(coerce_reminder_days(Some(7)), 7);
        assert_eq!(coerce_reminder_days(Some(i64::MAX)), 0);
    }
}
