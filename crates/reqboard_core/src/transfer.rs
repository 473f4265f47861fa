//! Import/export codec for board backups.
//!
//! # Responsibility
//! - Decode import documents into a validated record sequence.
//! - Fix the export artifact name and shape.
//!
//! # Invariants
//! - Accepted top-level shapes are a bare record array or `{ "data": [...] }`;
//!   anything else is an `ImportFormatError`.
//! - Unknown status labels pass through verbatim.

use crate::model::request::{Request, RequestId, Status};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed filename of the export artifact offered to the user.
pub const EXPORT_FILE_NAME: &str = "reqboard-data.json";

/// Typed decode failure; the whole import is rejected and nothing mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportFormatError {
    message: String,
}

impl ImportFormatError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Display for ImportFormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported import document: {}", self.message)
    }
}

impl Error for ImportFormatError {}

/// One record-shaped entry of an import document.
///
/// `id` and the timestamps are optional: foreign backups may omit them, in
/// which case the merge assigns a fresh id and stamps the merge time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRecord {
    #[serde(default)]
    pub id: Option<RequestId>,
    pub received_date: NaiveDate,
    pub client_name: String,
    pub summary: String,
    /// Absent status fields behave like the empty label.
    #[serde(default = "empty_status")]
    pub status: Status,
    #[serde(default)]
    pub reminder_days: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ImportRecord {
    /// Materializes this entry under its final id.
    ///
    /// Imported field values are carried verbatim; only missing timestamps
    /// are stamped with `now`.
    pub fn into_request(self, id: RequestId, now: DateTime<Utc>) -> Request {
        Request {
            id,
            received_date: self.received_date,
            client_name: self.client_name,
            summary: self.summary,
            status: self.status,
            reminder_days: self.reminder_days,
            created_at: self.created_at.unwrap_or(now),
            updated_at: self.updated_at.unwrap_or(now),
        }
    }
}

fn empty_status() -> Status {
    Status::Custom(String::new())
}

/// Accepted top-level import shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ImportDocument {
    Bare(Vec<ImportRecord>),
    Wrapped { data: Vec<ImportRecord> },
}

/// Decodes an import document into its record sequence.
pub fn decode_import(text: &str) -> Result<Vec<ImportRecord>, ImportFormatError> {
    let document: ImportDocument = serde_json::from_str(text).map_err(|err| {
        ImportFormatError::new(format!(
            "expected a JSON array of requests or an object with a `data` array ({err})"
        ))
    })?;

    Ok(match document {
        ImportDocument::Bare(records) => records,
        ImportDocument::Wrapped { data } => data,
    })
}
