//! Academic-record core: entity stores, enrollment rules, grades, transcripts.
//!
//! The record core is synchronous and in-memory, and it never logs;
//! failures are returned as [`error::CoreError`] values for the caller to
//! surface.

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod reports;
pub mod store;
pub mod transcripts;
pub mod validation;

/// Returns the current version of the `CampusRecords` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
