//! Shared library for `CampusRecords`
//! Contains the academic-record core plus the file and logging collaborators

pub mod core;
pub mod io;
pub mod logger;

pub use crate::core::config;
