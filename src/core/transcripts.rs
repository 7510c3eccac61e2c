//! Transcript assembly from engine state and the course catalog.

use crate::core::engine::EnrollmentEngine;
use crate::core::models::{Student, Transcript, TranscriptEntry};
use crate::core::store::CourseStore;

/// Build a transcript snapshot for a student.
///
/// Entries follow the student's enrollment order from the engine. An
/// enrollment whose course code no longer resolves in the catalog is
/// dropped from the transcript; the dropped codes are returned alongside
/// it so the caller can report them. The enrollment itself stays in the
/// engine and reappears once the course is restored.
#[must_use]
pub fn build(
    student: &Student,
    engine: &EnrollmentEngine,
    catalog: &CourseStore,
) -> (Transcript, Vec<String>) {
    let mut entries = Vec::new();
    let mut unresolved = Vec::new();
    for enrollment in engine.student_enrollments(student.id()) {
        let Some(course) = catalog.find(enrollment.course_code()) else {
            unresolved.push(enrollment.course_code().to_string());
            continue;
        };
        entries.push(TranscriptEntry {
            course_code: course.code().to_string(),
            course_title: course.title().to_string(),
            credits: course.credits(),
            grade: enrollment.grade(),
            marks: enrollment.marks(),
        });
    }

    let transcript = Transcript::new(
        student.id().to_string(),
        student.full_name().to_string(),
        student.reg_no().to_string(),
        entries,
    );
    (transcript, unresolved)
}
