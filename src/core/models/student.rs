//! Student entity.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as _;

use super::PersonCore;

/// Student standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudentStatus {
    /// In good standing (the default at creation).
    Active,
    /// No longer attending.
    Inactive,
    /// Temporarily barred.
    Suspended,
    /// Completed their program.
    Graduated,
}

impl fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Suspended => "SUSPENDED",
            Self::Graduated => "GRADUATED",
        };
        write!(f, "{as_str}")
    }
}

impl std::str::FromStr for StudentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            "SUSPENDED" => Ok(Self::Suspended),
            "GRADUATED" => Ok(Self::Graduated),
            other => Err(format!("Unknown student status: '{other}'")),
        }
    }
}

/// A student record.
///
/// The enrolled-course set is derived state maintained by the enrollment
/// engine as a side effect of enroll/unenroll; it is never edited directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    person: PersonCore,
    status: StudentStatus,
    enrollment_date: NaiveDate,
    enrolled_courses: Vec<String>,
}

impl Student {
    /// Create a new active student enrolled as of today.
    #[must_use]
    pub fn new(id: String, reg_no: String, full_name: String, email: String) -> Self {
        Self {
            person: PersonCore::new(id, reg_no, full_name, email),
            status: StudentStatus::Active,
            enrollment_date: Local::now().date_naive(),
            enrolled_courses: Vec::new(),
        }
    }

    /// Rebuild a student from persisted fields (dataset loader path).
    #[must_use]
    pub fn from_parts(person: PersonCore, status: StudentStatus, enrollment_date: NaiveDate) -> Self {
        Self {
            person,
            status,
            enrollment_date,
            enrolled_courses: Vec::new(),
        }
    }

    /// Shared identity fields.
    #[must_use]
    pub const fn person(&self) -> &PersonCore {
        &self.person
    }

    /// Mutable access to the shared identity fields.
    pub fn person_mut(&mut self) -> &mut PersonCore {
        &mut self.person
    }

    /// System-assigned identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        self.person.id()
    }

    /// Registration number.
    #[must_use]
    pub fn reg_no(&self) -> &str {
        self.person.reg_no()
    }

    /// Full display name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        self.person.full_name()
    }

    /// Contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        self.person.email()
    }

    /// Current standing.
    #[must_use]
    pub const fn status(&self) -> StudentStatus {
        self.status
    }

    /// Change the student's standing.
    pub fn set_status(&mut self, status: StudentStatus) {
        self.status = status;
        self.person.touch();
    }

    /// Date the student joined the institution (immutable).
    #[must_use]
    pub const fn enrollment_date(&self) -> NaiveDate {
        self.enrollment_date
    }

    /// Course codes the student is currently enrolled in.
    #[must_use]
    pub fn enrolled_courses(&self) -> &[String] {
        &self.enrolled_courses
    }

    /// Add a course code to the enrolled set (engine side effect only).
    pub(crate) fn enroll_in_course(&mut self, course_code: &str) {
        if !self.enrolled_courses.iter().any(|c| c == course_code) {
            self.enrolled_courses.push(course_code.to_string());
        }
    }

    /// Remove a course code from the enrolled set (engine side effect only).
    pub(crate) fn unenroll_from_course(&mut self, course_code: &str) {
        self.enrolled_courses.retain(|c| c != course_code);
    }

    /// Multi-line profile text.
    #[must_use]
    pub fn detailed_profile(&self) -> String {
        let mut profile = String::new();
        let _ = writeln!(profile, "=== STUDENT PROFILE ===");
        let _ = writeln!(profile, "ID: {}", self.id());
        let _ = writeln!(profile, "Registration No: {}", self.reg_no());
        let _ = writeln!(profile, "Name: {}", self.full_name());
        let _ = writeln!(profile, "Email: {}", self.email());
        let _ = writeln!(profile, "Status: {}", self.status);
        let _ = writeln!(profile, "Enrollment Date: {}", self.enrollment_date);
        let _ = writeln!(profile, "Enrolled Courses: {}", self.enrolled_courses.len());
        profile
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[STUDENT] {} ({}) - {} [{}]",
            self.full_name(),
            self.reg_no(),
            self.email(),
            self.status
        )
    }
}
