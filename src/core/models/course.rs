//! Course entity, semester enum, and the validating course builder.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::CoreError;
use crate::core::validation;

/// Academic term a course is offered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Semester {
    /// Spring term.
    Spring,
    /// Summer term.
    Summer,
    /// Fall term.
    Fall,
    /// Winter term.
    Winter,
}

impl Semester {
    /// All semesters, in calendar order.
    pub const ALL: [Self; 4] = [Self::Spring, Self::Summer, Self::Fall, Self::Winter];
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::Spring => "SPRING",
            Self::Summer => "SUMMER",
            Self::Fall => "FALL",
            Self::Winter => "WINTER",
        };
        write!(f, "{as_str}")
    }
}

impl std::str::FromStr for Semester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SPRING" => Ok(Self::Spring),
            "SUMMER" => Ok(Self::Summer),
            "FALL" => Ok(Self::Fall),
            "WINTER" => Ok(Self::Winter),
            other => Err(format!("Unknown semester: '{other}'")),
        }
    }
}

/// A course in the catalog.
///
/// The code is the identity key and is immutable; every other field mutates
/// through setters that refresh `updated_at`. Courses are constructed only
/// through [`CourseSpec`], which validates before an instance exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    code: String,
    title: String,
    credits: u32,
    instructor: Option<String>,
    department: Option<String>,
    semester: Option<Semester>,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl Course {
    /// Course code, e.g. `CS101` (immutable).
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Course title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Credit hours (always positive).
    #[must_use]
    pub const fn credits(&self) -> u32 {
        self.credits
    }

    /// Assigned instructor's full name, if any.
    #[must_use]
    pub fn instructor(&self) -> Option<&str> {
        self.instructor.as_deref()
    }

    /// Owning department, if any.
    #[must_use]
    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    /// Term the course is offered in, if scheduled.
    #[must_use]
    pub const fn semester(&self) -> Option<Semester> {
        self.semester
    }

    /// Creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Last-modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> NaiveDateTime {
        self.updated_at
    }

    /// Replace the title and refresh `updated_at`.
    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.touch();
    }

    /// Replace the credit hours and refresh `updated_at`.
    pub fn set_credits(&mut self, credits: u32) {
        self.credits = credits;
        self.touch();
    }

    /// Replace the instructor and refresh `updated_at`.
    pub fn set_instructor(&mut self, instructor: String) {
        self.instructor = Some(instructor);
        self.touch();
    }

    /// Replace the department and refresh `updated_at`.
    pub fn set_department(&mut self, department: String) {
        self.department = Some(department);
        self.touch();
    }

    /// Replace the semester and refresh `updated_at`.
    pub fn set_semester(&mut self, semester: Semester) {
        self.semester = Some(semester);
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Local::now().naive_local();
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({} credits) - {} | {} | {}",
            self.code,
            self.title,
            self.credits,
            self.instructor.as_deref().unwrap_or("No Instructor"),
            self.department.as_deref().unwrap_or("No Department"),
            self.semester
                .map_or_else(|| "No Semester".to_string(), |s| s.to_string()),
        )
    }
}

/// Staged course configuration. The sole construction path for [`Course`]:
/// [`build`](Self::build) validates the whole specification and either
/// returns a complete instance or an error. No partially built course is
/// ever observable.
#[derive(Debug, Clone, Default)]
pub struct CourseSpec {
    code: Option<String>,
    title: Option<String>,
    credits: Option<u32>,
    instructor: Option<String>,
    department: Option<String>,
    semester: Option<Semester>,
}

impl CourseSpec {
    /// Start an empty specification.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the course code.
    #[must_use]
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set the course title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the credit hours.
    #[must_use]
    pub const fn credits(mut self, credits: u32) -> Self {
        self.credits = Some(credits);
        self
    }

    /// Set the instructor's full name.
    #[must_use]
    pub fn instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = Some(instructor.into());
        self
    }

    /// Set the owning department.
    #[must_use]
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Set the semester.
    #[must_use]
    pub const fn semester(mut self, semester: Semester) -> Self {
        self.semester = Some(semester);
        self
    }

    /// Validate the specification and produce a course.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidData`] when the code is missing or does
    /// not match the 2-4 letters + 3-4 digits pattern, the title is missing
    /// or empty, or the credits are missing or zero.
    pub fn build(self) -> Result<Course, CoreError> {
        let code = self
            .code
            .filter(|c| validation::is_not_empty(c))
            .ok_or_else(|| CoreError::InvalidData("Course code is required".to_string()))?;

        if !validation::is_valid_course_code(&code) {
            return Err(CoreError::InvalidData(format!(
                "Invalid course code format: '{code}'"
            )));
        }

        let title = self
            .title
            .filter(|t| validation::is_not_empty(t))
            .ok_or_else(|| CoreError::InvalidData("Course title is required".to_string()))?;

        let credits = self
            .credits
            .ok_or_else(|| CoreError::InvalidData("Course credits are required".to_string()))?;
        if credits == 0 {
            return Err(CoreError::InvalidData(
                "Credits must be positive".to_string(),
            ));
        }

        let now = Local::now().naive_local();
        Ok(Course {
            code,
            title,
            credits,
            instructor: self.instructor,
            department: self.department,
            semester: self.semester,
            created_at: now,
            updated_at: now,
        })
    }
}
