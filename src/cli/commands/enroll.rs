//! Enrollment, grading, and transcript command handlers

use campus_records::core::models::Grade;
use campus_records::core::transcripts;
use campus_records::io::Dataset;
use campus_records::warn;

/// Enroll a student in a course. Returns `true` when the dataset changed.
pub fn enroll(dataset: &mut Dataset, student_id: &str, course_code: &str) -> bool {
    let Some(course) = dataset.courses.find(course_code).cloned() else {
        eprintln!("✗ Course with code {course_code} not found");
        std::process::exit(1);
    };
    let Some(mut student) = dataset.students.find(student_id).cloned() else {
        eprintln!("✗ Student with ID {student_id} not found");
        std::process::exit(1);
    };

    match dataset.engine.enroll(&mut student, &course, &dataset.courses) {
        Ok(enrollment) => {
            println!("✓ Enrolled: {enrollment}");
        }
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }

    if let Err(e) = dataset.students.update(student) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    true
}

/// Remove an enrollment. Returns `true` when the dataset changed.
pub fn unenroll(dataset: &mut Dataset, student_id: &str, course_code: &str) -> bool {
    let Some(mut student) = dataset.students.find(student_id).cloned() else {
        eprintln!("✗ Student with ID {student_id} not found");
        std::process::exit(1);
    };

    if let Err(e) = dataset.engine.unenroll(&mut student, course_code) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }

    if let Err(e) = dataset.students.update(student) {
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
    println!("✓ Unenrolled {student_id} from {course_code}");
    true
}

/// Record marks for an enrollment; the letter grade is derived from the
/// marks. Returns `true` when the dataset changed.
pub fn grade(dataset: &mut Dataset, student_id: &str, course_code: &str, marks: f64) -> bool {
    let grade = Grade::from_marks(marks);
    match dataset
        .engine
        .record_grade(student_id, course_code, grade, marks)
    {
        Ok(()) => {
            println!(
                "✓ Recorded {grade} ({marks:.2}) for {student_id} in {course_code} - {}",
                grade.description()
            );
            true
        }
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

/// Print a student's transcript.
pub fn transcript(dataset: &Dataset, student_id: &str) {
    let Some(student) = dataset.students.find(student_id) else {
        eprintln!("✗ Student with ID {student_id} not found");
        std::process::exit(1);
    };

    let (transcript, unresolved) = transcripts::build(student, &dataset.engine, &dataset.courses);
    for code in &unresolved {
        warn!("Transcript entry skipped, course {code} is not in the catalog");
    }
    print!("{transcript}");
}
