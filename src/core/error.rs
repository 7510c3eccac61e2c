//! Typed failures returned by the record core.
//!
//! Every error is recoverable and reported to the immediate caller; nothing
//! in the core treats a failure as fatal, and a failing operation leaves the
//! stores and the enrollment sequence exactly as they were.

use thiserror::Error;

/// Failure kinds produced by stores, the enrollment engine, and entity
/// construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Malformed input: bad email, bad course-code pattern, out-of-range
    /// credits or marks, missing required fields.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A store key (or student registration number) is already taken.
    #[error("duplicate entity: {0}")]
    DuplicateEntity(String),

    /// The (student, course) pair is already enrolled.
    #[error("student {student_id} is already enrolled in course {course_code}")]
    DuplicateEnrollment {
        /// Student identifier of the rejected enrollment.
        student_id: String,
        /// Course code of the rejected enrollment.
        course_code: String,
    },

    /// A referenced store key is absent.
    #[error("not found: {0}")]
    NotFound(String),

    /// No enrollment exists for the (student, course) pair.
    #[error("no enrollment found for student {student_id} in course {course_code}")]
    EnrollmentNotFound {
        /// Student identifier of the missing enrollment.
        student_id: String,
        /// Course code of the missing enrollment.
        course_code: String,
    },

    /// Enrolling would push the student past the configured credit ceiling.
    #[error("enrolling in {course_code} would exceed the maximum credits per semester ({limit})")]
    CreditLimitExceeded {
        /// Course code whose credits tipped the sum over the ceiling.
        course_code: String,
        /// The configured ceiling.
        limit: u32,
    },
}
