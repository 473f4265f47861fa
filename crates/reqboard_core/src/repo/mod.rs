//! Repository layer owning the authoritative request collection.
//!
//! # Responsibility
//! - Centralize every mutation (create/update/delete/merge-import).
//! - Mirror the in-memory collection to durable storage on each mutation.
//!
//! # Invariants
//! - Callers never edit records directly; all writes go through the board.
//! - A failed or malformed storage read means "empty collection", never a
//!   fatal error.

pub mod board_repo;
