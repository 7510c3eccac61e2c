//! Instructor entity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as _;

use super::PersonCore;

/// An instructor record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    person: PersonCore,
    department: Option<String>,
    assigned_courses: Vec<String>,
}

impl Instructor {
    /// Create a new instructor with no department assigned.
    #[must_use]
    pub fn new(id: String, reg_no: String, full_name: String, email: String) -> Self {
        Self {
            person: PersonCore::new(id, reg_no, full_name, email),
            department: None,
            assigned_courses: Vec::new(),
        }
    }

    /// Create a new instructor in a department.
    #[must_use]
    pub fn with_department(
        id: String,
        reg_no: String,
        full_name: String,
        email: String,
        department: String,
    ) -> Self {
        let mut instructor = Self::new(id, reg_no, full_name, email);
        instructor.department = Some(department);
        instructor
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

    /// Full display name.
    #[must_use]
    pub fn full_name(&self) -> &str {
        self.person.full_name()
    }

    /// Department, if assigned.
    #[must_use]
    pub fn department(&self) -> Option<&str> {
        self.department.as_deref()
    }

    /// Move the instructor to a department.
    pub fn set_department(&mut self, department: String) {
        self.department = Some(department);
        self.person.touch();
    }

    /// Course codes currently assigned to this instructor.
    #[must_use]
    pub fn assigned_courses(&self) -> &[String] {
        &self.assigned_courses
    }

    /// Assign a course (duplicate assignments are ignored).
    pub fn assign_course(&mut self, course_code: &str) {
        if !self.assigned_courses.iter().any(|c| c == course_code) {
            self.assigned_courses.push(course_code.to_string());
        }
    }

    /// Remove a course assignment.
    pub fn unassign_course(&mut self, course_code: &str) {
        self.assigned_courses.retain(|c| c != course_code);
    }

    /// Multi-line profile text.
    #[must_use]
    pub fn detailed_profile(&self) -> String {
        let mut profile = String::new();
        let _ = writeln!(profile, "=== INSTRUCTOR PROFILE ===");
        let _ = writeln!(profile, "ID: {}", self.id());
        let _ = writeln!(profile, "Employee No: {}", self.person.reg_no());
        let _ = writeln!(profile, "Name: {}", self.full_name());
        let _ = writeln!(profile, "Email: {}", self.person.email());
        let _ = writeln!(
            profile,
            "Department: {}",
            self.department.as_deref().unwrap_or("Not Assigned")
        );
        let _ = writeln!(profile, "Assigned Courses: {}", self.assigned_courses.len());
        profile
    }
}

impl fmt::Display for Instructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[INSTRUCTOR] {} ({}) - {} [{}]",
            self.full_name(),
            self.person.reg_no(),
            self.person.email(),
            self.department.as_deref().unwrap_or("No Dept")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_assignment_is_duplicate_free() {
        let mut instructor = Instructor::with_department(
            "I001".to_string(),
            "EMP042".to_string(),
            "Ada Lovelace".to_string(),
            "ada@uni.edu".to_string(),
            "Computer Science".to_string(),
        );

        instructor.assign_course("CS101");
        instructor.assign_course("CS101");
        assert_eq!(instructor.assigned_courses().len(), 1);

        instructor.unassign_course("CS101");
        assert!(instructor.assigned_courses().is_empty());
        assert_eq!(instructor.department(), Some("Computer Science"));
    }
}
