//! Enrollment admission control, grade recording, and GPA computation.

use crate::core::error::CoreError;
use crate::core::models::{Course, Enrollment, Grade, Student};
use crate::core::store::CourseStore;
use crate::core::validation;

/// Default credit ceiling when no configuration is supplied.
pub const DEFAULT_MAX_CREDITS: u32 = 24;

/// The enrollment engine.
///
/// Holds the append/remove-only enrollment sequence; insertion order is the
/// durable order and breaks ties when queries re-sort by date. The engine
/// never reaches into the entity stores on its own — students, courses, and
/// the catalog are passed in by the caller, which is responsible for
/// referential validity.
///
/// Every failing operation leaves the sequence and the passed-in entities
/// exactly as they were.
#[derive(Debug)]
pub struct EnrollmentEngine {
    enrollments: Vec<Enrollment>,
    max_credits: u32,
}

impl Default for EnrollmentEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CREDITS)
    }
}

impl EnrollmentEngine {
    /// Create an engine with the given credit ceiling (taken from the
    /// application configuration at startup).
    #[must_use]
    pub const fn new(max_credits: u32) -> Self {
        Self {
            enrollments: Vec::new(),
            max_credits,
        }
    }

    /// The configured credit ceiling.
    #[must_use]
    pub const fn max_credits(&self) -> u32 {
        self.max_credits
    }

    /// Enroll a student in a course.
    ///
    /// The student's committed credit load is the sum of the real credit
    /// values of their already-enrolled courses, looked up in `catalog`.
    /// The ceiling applies globally across all of a student's active
    /// enrollments regardless of semester.
    ///
    /// On success the new enrollment is appended ungraded and the course
    /// code is added to the student's enrolled set.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicateEnrollment`] when the pair is already
    /// enrolled and [`CoreError::CreditLimitExceeded`] when the course's
    /// credits would push the student past the ceiling.
    pub fn enroll(
        &mut self,
        student: &mut Student,
        course: &Course,
        catalog: &CourseStore,
    ) -> Result<&Enrollment, CoreError> {
        if self.find(student.id(), course.code()).is_some() {
            return Err(CoreError::DuplicateEnrollment {
                student_id: student.id().to_string(),
                course_code: course.code().to_string(),
            });
        }

        let current_credits = self.committed_credits(student.id(), catalog);
        if current_credits + course.credits() > self.max_credits {
            return Err(CoreError::CreditLimitExceeded {
                course_code: course.code().to_string(),
                limit: self.max_credits,
            });
        }

        self.enrollments.push(Enrollment::new(
            student.id().to_string(),
            course.code().to_string(),
        ));
        student.enroll_in_course(course.code());

        Ok(&self.enrollments[self.enrollments.len() - 1])
    }

    /// Remove a student's enrollment in a course and retract the code from
    /// their enrolled set.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EnrollmentNotFound`] when no matching
    /// enrollment exists; the student is untouched in that case.
    pub fn unenroll(&mut self, student: &mut Student, course_code: &str) -> Result<(), CoreError> {
        let before = self.enrollments.len();
        let student_id = student.id().to_string();
        self.enrollments
            .retain(|e| !(e.student_id() == student_id && e.course_code() == course_code));

        if self.enrollments.len() == before {
            return Err(CoreError::EnrollmentNotFound {
                student_id,
                course_code: course_code.to_string(),
            });
        }

        student.unenroll_from_course(course_code);
        Ok(())
    }

    /// Record a grade and marks for an enrollment, overwriting any previous
    /// pair atomically.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidData`] when marks fall outside `[0,100]`
    /// (checked before any mutation) and [`CoreError::EnrollmentNotFound`]
    /// when no matching enrollment exists.
    pub fn record_grade(
        &mut self,
        student_id: &str,
        course_code: &str,
        grade: Grade,
        marks: f64,
    ) -> Result<(), CoreError> {
        if !validation::is_valid_marks(marks) {
            return Err(CoreError::InvalidData(format!(
                "Marks must be between 0 and 100, got {marks}"
            )));
        }

        let enrollment = self
            .enrollments
            .iter_mut()
            .find(|e| e.student_id() == student_id && e.course_code() == course_code)
            .ok_or_else(|| CoreError::EnrollmentNotFound {
                student_id: student_id.to_string(),
                course_code: course_code.to_string(),
            })?;

        enrollment.set_grade(grade, marks);
        Ok(())
    }

    /// A student's enrollments sorted by enrollment date ascending, ties
    /// broken by insertion order.
    #[must_use]
    pub fn student_enrollments(&self, student_id: &str) -> Vec<&Enrollment> {
        let mut matches: Vec<&Enrollment> = self
            .enrollments
            .iter()
            .filter(|e| e.student_id() == student_id)
            .collect();
        matches.sort_by_key(|e| e.enrollment_date());
        matches
    }

    /// A course's enrollments sorted by enrollment date ascending, ties
    /// broken by insertion order.
    #[must_use]
    pub fn course_enrollments(&self, course_code: &str) -> Vec<&Enrollment> {
        let mut matches: Vec<&Enrollment> = self
            .enrollments
            .iter()
            .filter(|e| e.course_code() == course_code)
            .collect();
        matches.sort_by_key(|e| e.enrollment_date());
        matches
    }

    /// Credit-weighted GPA over a student's graded enrollments, weighting
    /// each grade by the real credit value of its course from `catalog`.
    /// Returns 0.0 when no graded enrollment resolves to a catalog course.
    #[must_use]
    pub fn gpa(&self, student_id: &str, catalog: &CourseStore) -> f64 {
        let mut weighted_points = 0.0;
        let mut graded_credits = 0u32;

        for enrollment in self.student_enrollments(student_id) {
            let Some(grade) = enrollment.grade() else {
                continue;
            };
            let Some(course) = catalog.find(enrollment.course_code()) else {
                continue;
            };
            weighted_points += grade.points() * f64::from(course.credits());
            graded_credits += course.credits();
        }

        if graded_credits > 0 {
            weighted_points / f64::from(graded_credits)
        } else {
            0.0
        }
    }

    /// The full enrollment sequence in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Enrollment] {
        &self.enrollments
    }

    /// Append a persisted enrollment without business-rule checks. Used by
    /// the dataset loader to rebuild engine state; never call this on the
    /// live mutation path.
    pub fn restore(&mut self, enrollment: Enrollment) {
        self.enrollments.push(enrollment);
    }

    fn find(&self, student_id: &str, course_code: &str) -> Option<&Enrollment> {
        self.enrollments
            .iter()
            .find(|e| e.student_id() == student_id && e.course_code() == course_code)
    }

    fn committed_credits(&self, student_id: &str, catalog: &CourseStore) -> u32 {
        self.enrollments
            .iter()
            .filter(|e| e.student_id() == student_id)
            .filter_map(|e| catalog.find(e.course_code()))
            .map(Course::credits)
            .sum()
    }
}
