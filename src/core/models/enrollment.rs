//! Enrollment record relating one student to one course.

use chrono::{Local, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Grade;

/// The relationship record linking one student to one course.
///
/// The identity is a generated composite key with no semantic meaning. Grade
/// and marks are set together as a pair; one is never present without the
/// other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    enrollment_id: String,
    student_id: String,
    course_code: String,
    enrollment_date: NaiveDateTime,
    grade: Option<Grade>,
    marks: Option<f64>,
}

impl Enrollment {
    /// Create a new ungraded enrollment dated now.
    #[must_use]
    pub fn new(student_id: String, course_code: String) -> Self {
        let enrollment_id = format!(
            "ENR_{student_id}_{course_code}_{}",
            Utc::now().timestamp_millis()
        );
        Self {
            enrollment_id,
            student_id,
            course_code,
            enrollment_date: Local::now().naive_local(),
            grade: None,
            marks: None,
        }
    }

    /// Rebuild an enrollment from persisted fields (dataset loader path).
    /// The grade/marks pairing is preserved: both or neither.
    #[must_use]
    pub fn from_parts(
        enrollment_id: String,
        student_id: String,
        course_code: String,
        enrollment_date: NaiveDateTime,
        graded: Option<(Grade, f64)>,
    ) -> Self {
        let (grade, marks) = match graded {
            Some((g, m)) => (Some(g), Some(m)),
            None => (None, None),
        };
        Self {
            enrollment_id,
            student_id,
            course_code,
            enrollment_date,
            grade,
            marks,
        }
    }

    /// Generated composite identifier.
    #[must_use]
    pub fn enrollment_id(&self) -> &str {
        &self.enrollment_id
    }

    /// Student side of the relationship (immutable).
    #[must_use]
    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    /// Course side of the relationship (immutable).
    #[must_use]
    pub fn course_code(&self) -> &str {
        &self.course_code
    }

    /// Instant the enrollment was created (immutable).
    #[must_use]
    pub const fn enrollment_date(&self) -> NaiveDateTime {
        self.enrollment_date
    }

    /// Recorded grade, if graded.
    #[must_use]
    pub const fn grade(&self) -> Option<Grade> {
        self.grade
    }

    /// Recorded marks, if graded.
    #[must_use]
    pub const fn marks(&self) -> Option<f64> {
        self.marks
    }

    /// Whether a grade has been recorded.
    #[must_use]
    pub const fn is_graded(&self) -> bool {
        self.grade.is_some()
    }

    /// Overwrite the grade and marks as a pair. Each recording replaces the
    /// previous pair; the record is never left partially set.
    pub fn set_grade(&mut self, grade: Grade, marks: f64) {
        self.grade = Some(grade);
        self.marks = Some(marks);
    }
}

impl fmt::Display for Enrollment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grade_info = match (self.grade, self.marks) {
            (Some(grade), Some(marks)) => format!(" | Grade: {grade} ({marks:.2})"),
            _ => " | Not Graded".to_string(),
        };
        write!(
            f,
            "Enrollment[{}] Student: {}, Course: {}{}",
            self.enrollment_id, self.student_id, self.course_code, grade_info
        )
    }
}
