//! Entity models for `CampusRecords`

pub mod course;
pub mod enrollment;
pub mod grade;
pub mod instructor;
pub mod person;
pub mod student;
pub mod transcript;

pub use course::{Course, CourseSpec, Semester};
pub use enrollment::Enrollment;
pub use grade::Grade;
pub use instructor::Instructor;
pub use person::{Person, PersonCore, Role};
pub use student::{Student, StudentStatus};
pub use transcript::{Transcript, TranscriptEntry};
