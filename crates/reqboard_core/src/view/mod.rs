//! Display-ready projections over the board snapshot.
//!
//! # Responsibility
//! - Derive dashboard groupings, calendar event lists and stat counters.
//! - Stay pure: consume records plus a reference date, return plain data.
//!
//! # Invariants
//! - Projections never touch a rendering surface or mutate the collection.
//! - Results are deterministic for the same snapshot and reference date.

pub mod calendar;
pub mod dashboard;
