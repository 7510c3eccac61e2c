//! File-based persistence: CSV codec, dataset round-trip, and backups.

pub mod backup;
pub mod csv;
pub mod dataset;

pub use dataset::Dataset;
