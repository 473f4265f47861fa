//! Core domain logic for the reqboard request-tracking board.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod schedule;
pub mod store;
pub mod transfer;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::request::{Request, RequestDraft, RequestId, Status, ValidationError};
pub use repo::board_repo::{MergeOutcome, RepoError, RepoResult, RequestBoard, STORAGE_KEY};
pub use schedule::{due_state, reminder_date, DueState};
pub use store::{MemoryStore, SqliteStore, StateStore, StoreError, StoreResult};
pub use transfer::{decode_import, ImportFormatError, ImportRecord, EXPORT_FILE_NAME};
pub use view::calendar::{calendar_day, calendar_month, CalendarEvent, DayCell, EventKind, MonthGrid};
pub use view::dashboard::{
    dashboard_groups, stat_counts, DashboardEntry, DashboardGroup, StatCounts, StatusFilter,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
