//! Keyed entity stores with uniqueness guarantees and snapshot queries.

pub mod courses;
pub mod students;

pub use courses::CourseStore;
pub use students::StudentStore;
