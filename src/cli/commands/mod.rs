//! CLI command handlers for `campusrec`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod config;
pub mod courses;
pub mod data;
pub mod enroll;
pub mod reports;
pub mod students;
