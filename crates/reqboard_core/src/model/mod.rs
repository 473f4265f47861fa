//! Domain model for tracked client requests.
//!
//! # Responsibility
//! - Define the canonical request record and its open status label set.
//! - Own validation and normalization rules for create/edit input.
//!
//! # Invariants
//! - Every record is identified by a stable, opaque string `RequestId`.
//! - `status` is an open label set; unknown labels are preserved verbatim.

pub mod request;
