//! Integration tests for the enrollment workflow: registering entities,
//! enrolling, grading, transcripts, and reports working together.

use campus_records::core::engine::EnrollmentEngine;
use campus_records::core::error::CoreError;
use campus_records::core::models::{CourseSpec, Grade, Semester, Student};
use campus_records::core::store::{CourseStore, StudentStore};
use campus_records::core::{reports, transcripts};

struct Campus {
    students: StudentStore,
    courses: CourseStore,
    engine: EnrollmentEngine,
}

fn setup_campus() -> Campus {
    let mut courses = CourseStore::new();
    for (code, title, credits, dept) in [
        ("CS101", "Intro to Programming", 3, "Computer Science"),
        ("CS201", "Data Structures", 4, "Computer Science"),
        ("MATH101", "Calculus I", 4, "Mathematics"),
        ("PHYS151", "Mechanics", 5, "Physics"),
    ] {
        courses
            .add(
                CourseSpec::new()
                    .code(code)
                    .title(title)
                    .credits(credits)
                    .department(dept)
                    .semester(Semester::Fall)
                    .build()
                    .expect("valid course"),
            )
            .expect("unique code");
    }

    let mut students = StudentStore::new();
    for (id, reg_no, name) in [
        ("S001", "2024CS001", "Alice Johnson"),
        ("S002", "2024CS002", "Bob Williams"),
    ] {
        students
            .add(Student::new(
                id.to_string(),
                reg_no.to_string(),
                name.to_string(),
                format!("{id}@uni.edu"),
            ))
            .expect("unique student");
    }

    Campus {
        students,
        courses,
        engine: EnrollmentEngine::new(24),
    }
}

fn enroll(campus: &mut Campus, student_id: &str, course_code: &str) -> Result<(), CoreError> {
    let course = campus.courses.find(course_code).expect("course").clone();
    let mut student = campus.students.find(student_id).expect("student").clone();
    campus
        .engine
        .enroll(&mut student, &course, &campus.courses)?;
    campus.students.update(student).expect("student exists");
    Ok(())
}

#[test]
fn full_workflow_from_enrollment_to_transcript() {
    let mut campus = setup_campus();

    enroll(&mut campus, "S001", "CS101").unwrap();
    enroll(&mut campus, "S001", "MATH101").unwrap();

    campus
        .engine
        .record_grade("S001", "CS101", Grade::from_marks(92.0), 92.0)
        .unwrap();
    campus
        .engine
        .record_grade("S001", "MATH101", Grade::from_marks(75.0), 75.0)
        .unwrap();

    let student = campus.students.find("S001").unwrap();
    assert_eq!(student.enrolled_courses().len(), 2);

    let (transcript, unresolved) = transcripts::build(student, &campus.engine, &campus.courses);
    assert!(unresolved.is_empty());
    assert_eq!(transcript.entries().len(), 2);
    assert_eq!(transcript.total_credits(), 7);
    // (3*10.0 + 4*8.0) / 7
    assert!((transcript.overall_gpa() - 8.857_142).abs() < 0.001);

    let rendered = transcript.to_string();
    assert!(rendered.contains("Alice Johnson"));
    assert!(rendered.contains("CS101"));
    assert!(rendered.contains("Calculus I"));
}

#[test]
fn duplicate_and_missing_enrollments_leave_state_unchanged() {
    let mut campus = setup_campus();
    enroll(&mut campus, "S001", "CS101").unwrap();

    let err = enroll(&mut campus, "S001", "CS101").unwrap_err();
    assert!(matches!(err, CoreError::DuplicateEnrollment { .. }));
    assert_eq!(campus.engine.all().len(), 1);
    assert_eq!(
        campus
            .students
            .find("S001")
            .unwrap()
            .enrolled_courses()
            .len(),
        1
    );

    let err = campus
        .engine
        .record_grade("S001", "PHYS151", Grade::A, 80.0)
        .unwrap_err();
    assert!(matches!(err, CoreError::EnrollmentNotFound { .. }));
    assert_eq!(campus.engine.all().len(), 1);
}

#[test]
fn credit_ceiling_spans_semesters() {
    let mut campus = setup_campus();

    // 3 + 4 + 4 + 5 = 16 fits under 24
    for code in ["CS101", "CS201", "MATH101", "PHYS151"] {
        enroll(&mut campus, "S001", code).unwrap();
    }

    // A second pass over the same ceiling: a fresh 10-credit course
    campus
        .courses
        .add(
            CourseSpec::new()
                .code("CHEM301")
                .title("Advanced Chemistry")
                .credits(10)
                .build()
                .unwrap(),
        )
        .unwrap();
    let err = enroll(&mut campus, "S001", "CHEM301").unwrap_err();
    assert!(matches!(err, CoreError::CreditLimitExceeded { limit: 24, .. }));

    // Other students are unaffected by S001's load
    enroll(&mut campus, "S002", "CHEM301").unwrap();
}

#[test]
fn unenroll_frees_credits_for_new_enrollments() {
    let mut campus = setup_campus();
    campus
        .courses
        .add(
            CourseSpec::new()
                .code("BIGX999")
                .title("Everything")
                .credits(24)
                .build()
                .unwrap(),
        )
        .unwrap();

    enroll(&mut campus, "S001", "BIGX999").unwrap();
    assert!(matches!(
        enroll(&mut campus, "S001", "CS101"),
        Err(CoreError::CreditLimitExceeded { .. })
    ));

    let mut student = campus.students.find("S001").unwrap().clone();
    campus.engine.unenroll(&mut student, "BIGX999").unwrap();
    campus.students.update(student).unwrap();

    enroll(&mut campus, "S001", "CS101").unwrap();
    let student = campus.students.find("S001").unwrap();
    assert_eq!(student.enrolled_courses(), ["CS101".to_string()]);
}

#[test]
fn reports_reflect_engine_state() {
    let mut campus = setup_campus();
    enroll(&mut campus, "S001", "CS101").unwrap();
    enroll(&mut campus, "S002", "CS101").unwrap();
    enroll(&mut campus, "S002", "MATH101").unwrap();

    campus
        .engine
        .record_grade("S001", "CS101", Grade::S, 95.0)
        .unwrap();
    campus
        .engine
        .record_grade("S002", "CS101", Grade::C, 65.0)
        .unwrap();

    let ranked =
        reports::top_students_by_gpa(&campus.students, &campus.engine, &campus.courses, 10);
    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].student_id, "S001");

    let counts = reports::course_enrollment_counts(&campus.courses, &campus.engine);
    let cs101 = counts.iter().find(|c| c.course_code == "CS101").unwrap();
    assert_eq!(cs101.enrollments, 2);
    let phys = counts.iter().find(|c| c.course_code == "PHYS151").unwrap();
    assert_eq!(phys.enrollments, 0);

    let buckets = reports::gpa_distribution(&campus.students, &campus.engine, &campus.courses);
    assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), 2);
}
