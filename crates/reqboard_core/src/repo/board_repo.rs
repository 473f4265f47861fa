//! Request board repository over an injected key-value store.
//!
//! # Responsibility
//! - Own the in-memory request collection loaded once at startup.
//! - Persist the whole collection write-through after every mutation.
//! - Apply the add-only merge strategy for imported backups.
//!
//! # Invariants
//! - Ids are unique across the collection; creation re-rolls on collision.
//! - Imports are all-or-nothing: a malformed document mutates nothing.
//! - Load self-heals on corrupted storage by resetting to an empty,
//!   freshly persisted collection.

use crate::model::request::{Request, RequestDraft, RequestId, ValidationError};
use crate::store::{StateStore, StoreError};
use crate::transfer::{decode_import, ImportFormatError};
use chrono::Utc;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed namespace key the collection is persisted under.
pub const STORAGE_KEY: &str = "reqboard-data-v1";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for board mutations and persistence.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    NotFound(RequestId),
    ImportFormat(ImportFormatError),
    Store(StoreError),
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "request not found: {id}"),
            Self::ImportFormat(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode board state: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::ImportFormat(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<ImportFormatError> for RepoError {
    fn from(value: ImportFormatError) -> Self {
        Self::ImportFormat(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Counts returned by a merge-import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Records appended to the collection.
    pub added: usize,
    /// Incoming records skipped because their id already existed.
    pub skipped: usize,
}

/// Authoritative request collection backed by an injected store.
///
/// Constructed once at process start; every mutation persists the whole
/// collection under [`STORAGE_KEY`] before returning.
pub struct RequestBoard<S: StateStore> {
    store: S,
    requests: Vec<Request>,
}

impl<S: StateStore> RequestBoard<S> {
    /// Loads the collection from the store.
    ///
    /// An absent value starts an empty board; a malformed value is treated
    /// the same way and overwritten with a valid empty collection. The parse
    /// error is logged, never surfaced.
    pub fn load(store: S) -> RepoResult<Self> {
        let mut board = Self {
            store,
            requests: Vec::new(),
        };

        match board.store.read(STORAGE_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<Request>>(&raw) {
                Ok(requests) => {
                    info!(
                        "event=state_load module=repo status=ok count={}",
                        requests.len()
                    );
                    board.requests = requests;
                }
                Err(err) => {
                    warn!(
                        "event=state_load module=repo status=recovered reason=parse_error error={err}"
                    );
                    board.persist()?;
                }
            },
            None => {
                info!("event=state_load module=repo status=empty");
                board.persist()?;
            }
        }

        Ok(board)
    }

    /// Current collection snapshot for projections.
    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    /// Validates, inserts and persists a new request.
    pub fn add(&mut self, draft: &RequestDraft) -> RepoResult<Request> {
        let mut request = Request::create(draft, Utc::now())?;
        while self.index_of(&request.id).is_some() {
            request.id = RequestId::generate();
        }

        self.requests.push(request.clone());
        self.persist()?;
        Ok(request)
    }

    /// Replaces the request under `id`, keeping its id and creation time.
    pub fn update(&mut self, id: &RequestId, draft: &RequestDraft) -> RepoResult<Request> {
        let index = self
            .index_of(id)
            .ok_or_else(|| RepoError::NotFound(id.clone()))?;

        let updated = self.requests[index].apply_edit(draft, Utc::now())?;
        self.requests[index] = updated.clone();
        self.persist()?;
        Ok(updated)
    }

    /// Deletes the request under `id` and returns it.
    pub fn remove(&mut self, id: &RequestId) -> RepoResult<Request> {
        let index = self
            .index_of(id)
            .ok_or_else(|| RepoError::NotFound(id.clone()))?;

        let removed = self.requests.remove(index);
        self.persist()?;
        Ok(removed)
    }

    /// Merges an imported backup document into the collection.
    ///
    /// Add-only by id: entries whose id already exists are skipped, the
    /// existing record wins. Entries without an id get a fresh one. The
    /// whole document decodes before anything mutates.
    pub fn merge_import(&mut self, text: &str) -> RepoResult<MergeOutcome> {
        let incoming = decode_import(text)?;
        let now = Utc::now();
        let mut outcome = MergeOutcome::default();

        for record in incoming {
            let id = match record.id.clone() {
                Some(id) => {
                    if self.index_of(&id).is_some() {
                        outcome.skipped += 1;
                        continue;
                    }
                    id
                }
                None => self.fresh_id(),
            };

            self.requests.push(record.into_request(id, now));
            outcome.added += 1;
        }

        self.persist()?;
        info!(
            "event=state_import module=repo status=ok added={} skipped={}",
            outcome.added, outcome.skipped
        );
        Ok(outcome)
    }

    /// The full current collection, ready for serialization. No mutation.
    pub fn export_all(&self) -> &[Request] {
        &self.requests
    }

    /// The standalone export document, same shape as the storage value.
    pub fn export_json(&self) -> RepoResult<String> {
        Ok(serde_json::to_string_pretty(&self.requests)?)
    }

    fn index_of(&self, id: &RequestId) -> Option<usize> {
        self.requests.iter().position(|request| request.id == *id)
    }

    fn fresh_id(&self) -> RequestId {
        loop {
            let id = RequestId::generate();
            if self.index_of(&id).is_none() {
                return id;
            }
        }
    }

    fn persist(&mut self) -> RepoResult<()> {
        let payload = serde_json::to_string_pretty(&self.requests)?;
        self.store.write(STORAGE_KEY, &payload)?;
        Ok(())
    }
}
