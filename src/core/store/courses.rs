//! Keyed course catalog.

use std::collections::HashMap;

use crate::core::error::CoreError;
use crate::core::models::{Course, Semester};
use crate::core::validation;

/// Courses keyed by code.
///
/// Listings and searches return snapshots of clones sorted by code; later
/// mutation of the store never alters a previously returned sequence.
#[derive(Debug, Default)]
pub struct CourseStore {
    courses: HashMap<String, Course>,
}

impl CourseStore {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new course.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidData`] when the code does not match the
    /// expected pattern and [`CoreError::DuplicateEntity`] when the code is
    /// already taken.
    pub fn add(&mut self, course: Course) -> Result<(), CoreError> {
        if !validation::is_valid_course_code(course.code()) {
            return Err(CoreError::InvalidData(format!(
                "Invalid course code format: '{}'",
                course.code()
            )));
        }
        if self.courses.contains_key(course.code()) {
            return Err(CoreError::DuplicateEntity(format!(
                "Course with code {} already exists",
                course.code()
            )));
        }
        self.courses.insert(course.code().to_string(), course);
        Ok(())
    }

    /// Look up a course by code. Missing keys are not an error.
    #[must_use]
    pub fn find(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    /// Mutable lookup by code.
    pub fn find_mut(&mut self, code: &str) -> Option<&mut Course> {
        self.courses.get_mut(code)
    }

    /// Replace a stored course.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] when the code is absent.
    pub fn update(&mut self, course: Course) -> Result<(), CoreError> {
        if !self.courses.contains_key(course.code()) {
            return Err(CoreError::NotFound(format!(
                "Course with code {} not found",
                course.code()
            )));
        }
        self.courses.insert(course.code().to_string(), course);
        Ok(())
    }

    /// Snapshot of all courses sorted by code.
    #[must_use]
    pub fn all(&self) -> Vec<Course> {
        let mut courses: Vec<Course> = self.courses.values().cloned().collect();
        courses.sort_by(|a, b| a.code().cmp(b.code()));
        courses
    }

    /// Courses in a department (case-insensitive equality), sorted by code.
    #[must_use]
    pub fn search_by_department(&self, department: &str) -> Vec<Course> {
        self.filtered(|c| {
            c.department()
                .is_some_and(|d| d.eq_ignore_ascii_case(department))
        })
    }

    /// Courses whose instructor name contains the pattern
    /// (case-insensitive), sorted by code.
    #[must_use]
    pub fn search_by_instructor(&self, instructor_name: &str) -> Vec<Course> {
        let pattern = instructor_name.to_lowercase();
        self.filtered(|c| {
            c.instructor()
                .is_some_and(|i| i.to_lowercase().contains(&pattern))
        })
    }

    /// Courses offered in a semester, sorted by code.
    #[must_use]
    pub fn search_by_semester(&self, semester: Semester) -> Vec<Course> {
        self.filtered(|c| c.semester() == Some(semester))
    }

    /// Courses whose credits fall in `[min, max]`, sorted by code.
    #[must_use]
    pub fn courses_by_credit_range(&self, min: u32, max: u32) -> Vec<Course> {
        self.filtered(|c| c.credits() >= min && c.credits() <= max)
    }

    /// Number of stored courses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    fn filtered(&self, predicate: impl Fn(&Course) -> bool) -> Vec<Course> {
        let mut courses: Vec<Course> = self
            .courses
            .values()
            .filter(|c| predicate(c))
            .cloned()
            .collect();
        courses.sort_by(|a, b| a.code().cmp(b.code()));
        courses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::CourseSpec;

    fn course(code: &str, credits: u32) -> Course {
        CourseSpec::new()
            .code(code)
            .title(format!("{code} title"))
            .credits(credits)
            .build()
            .expect("valid spec")
    }

    #[test]
    fn all_returns_code_sorted_snapshot() {
        let mut store = CourseStore::new();
        store.add(course("MATH201", 4)).unwrap();
        store.add(course("CS101", 3)).unwrap();
        store.add(course("PHYS151", 5)).unwrap();

        let all = store.all();
        let codes: Vec<&str> = all.iter().map(Course::code).collect();
        assert_eq!(codes, ["CS101", "MATH201", "PHYS151"]);
    }

    #[test]
    fn rejects_duplicate_code() {
        let mut store = CourseStore::new();
        store.add(course("CS101", 3)).unwrap();
        let err = store.add(course("CS101", 4)).unwrap_err();
        assert!(matches!(err, CoreError::DuplicateEntity(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_requires_existing_key() {
        let mut store = CourseStore::new();
        assert!(matches!(
            store.update(course("CS101", 3)),
            Err(CoreError::NotFound(_))
        ));

        store.add(course("CS101", 3)).unwrap();
        let mut updated = store.find("CS101").unwrap().clone();
        updated.set_credits(4);
        store.update(updated).unwrap();
        assert_eq!(store.find("CS101").unwrap().credits(), 4);
    }

    #[test]
    fn searches_filter_and_sort() {
        let mut store = CourseStore::new();
        let mut cs = course("CS101", 3);
        cs.set_department("Computer Science".to_string());
        cs.set_instructor("Ada Lovelace".to_string());
        cs.set_semester(Semester::Fall);
        store.add(cs).unwrap();

        let mut math = course("MATH201", 4);
        math.set_department("Mathematics".to_string());
        math.set_instructor("Emmy Noether".to_string());
        math.set_semester(Semester::Spring);
        store.add(math).unwrap();

        assert_eq!(store.search_by_department("computer science").len(), 1);
        assert_eq!(store.search_by_instructor("noether").len(), 1);
        assert_eq!(store.search_by_semester(Semester::Fall).len(), 1);
        assert_eq!(store.search_by_semester(Semester::Winter).len(), 0);
        assert_eq!(store.courses_by_credit_range(4, 6).len(), 1);
    }
}
