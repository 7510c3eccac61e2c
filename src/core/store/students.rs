//! Keyed student collection.

use std::collections::HashMap;

use crate::core::error::CoreError;
use crate::core::models::{Student, StudentStatus};
use crate::core::validation;

/// Students keyed by `id`, with `reg_no` uniqueness enforced across the
/// whole collection.
///
/// Every listing and search returns a snapshot of clones sorted
/// case-insensitively by full name; later mutation of the store never
/// alters a previously returned sequence.
#[derive(Debug, Default)]
pub struct StudentStore {
    students: HashMap<String, Student>,
}

impl StudentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new student.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidData`] for an empty id/registration
    /// number or a malformed email, and [`CoreError::DuplicateEntity`] when
    /// the id or registration number is already taken.
    pub fn add(&mut self, student: Student) -> Result<(), CoreError> {
        if !validation::is_not_empty(student.id()) {
            return Err(CoreError::InvalidData("Student ID is required".to_string()));
        }
        if !validation::is_not_empty(student.reg_no()) {
            return Err(CoreError::InvalidData(
                "Registration number is required".to_string(),
            ));
        }
        if !validation::is_valid_email(student.email()) {
            return Err(CoreError::InvalidData(format!(
                "Invalid email format: '{}'",
                student.email()
            )));
        }
        if self.students.contains_key(student.id()) {
            return Err(CoreError::DuplicateEntity(format!(
                "Student with ID {} already exists",
                student.id()
            )));
        }
        if self.students.values().any(|s| s.reg_no() == student.reg_no()) {
            return Err(CoreError::DuplicateEntity(format!(
                "Student with registration number {} already exists",
                student.reg_no()
            )));
        }

        self.students.insert(student.id().to_string(), student);
        Ok(())
    }

    /// Look up a student by id. Missing keys are not an error.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Student> {
        self.students.get(id)
    }

    /// Mutable lookup by id, used by callers that drive the enrollment
    /// engine against a stored student.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Student> {
        self.students.get_mut(id)
    }

    /// Look up a student by registration number.
    #[must_use]
    pub fn find_by_reg_no(&self, reg_no: &str) -> Option<&Student> {
        self.students.values().find(|s| s.reg_no() == reg_no)
    }

    /// Replace a stored student.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] when the id is absent.
    pub fn update(&mut self, student: Student) -> Result<(), CoreError> {
        if !self.students.contains_key(student.id()) {
            return Err(CoreError::NotFound(format!(
                "Student with ID {} not found",
                student.id()
            )));
        }
        self.students.insert(student.id().to_string(), student);
        Ok(())
    }

    /// Snapshot of all students sorted case-insensitively by full name.
    #[must_use]
    pub fn all(&self) -> Vec<Student> {
        let mut students: Vec<Student> = self.students.values().cloned().collect();
        Self::sort_by_name(&mut students);
        students
    }

    /// Snapshot of active students only, same sort order as [`all`](Self::all).
    #[must_use]
    pub fn active(&self) -> Vec<Student> {
        let mut students: Vec<Student> = self
            .students
            .values()
            .filter(|s| s.status() == StudentStatus::Active)
            .cloned()
            .collect();
        Self::sort_by_name(&mut students);
        students
    }

    /// Case-insensitive name-substring search, same sort order as
    /// [`all`](Self::all).
    #[must_use]
    pub fn search_by_name(&self, pattern: &str) -> Vec<Student> {
        let pattern = pattern.to_lowercase();
        let mut students: Vec<Student> = self
            .students
            .values()
            .filter(|s| s.full_name().to_lowercase().contains(&pattern))
            .cloned()
            .collect();
        Self::sort_by_name(&mut students);
        students
    }

    /// Number of stored students.
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Head count per status.
    #[must_use]
    pub fn count_by_status(&self) -> HashMap<StudentStatus, usize> {
        let mut counts = HashMap::new();
        for student in self.students.values() {
            *counts.entry(student.status()).or_insert(0) += 1;
        }
        counts
    }

    fn sort_by_name(students: &mut [Student]) {
        students.sort_by(|a, b| {
            a.full_name()
                .to_lowercase()
                .cmp(&b.full_name().to_lowercase())
        });
    }
}
