//! CSV-backed dataset: the persistent form of the stores and engine state.
//!
//! A dataset directory holds three files: `students.csv`, `courses.csv`,
//! and `enrollments.csv`. Loading tolerates missing files (an empty
//! dataset) and skips malformed rows with a warning rather than failing
//! the whole load.

use std::error::Error;
use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};

use crate::core::engine::EnrollmentEngine;
use crate::core::models::{
    Course, CourseSpec, Enrollment, Grade, PersonCore, Semester, Student, StudentStatus,
};
use crate::core::store::{CourseStore, StudentStore};
use crate::io::csv;
use crate::{info, warn};

const STUDENTS_FILE: &str = "students.csv";
const COURSES_FILE: &str = "courses.csv";
const ENROLLMENTS_FILE: &str = "enrollments.csv";

const STUDENTS_HEADER: &str = "ID,RegNo,FullName,Email,Status,EnrollmentDate";
const COURSES_HEADER: &str = "Code,Title,Credits,Instructor,Department,Semester";
const ENROLLMENTS_HEADER: &str = "EnrollmentId,StudentId,CourseCode,EnrollmentDate,Grade,Marks";

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// The full application state, loaded from and saved to a dataset
/// directory.
#[derive(Debug)]
pub struct Dataset {
    /// Student records.
    pub students: StudentStore,
    /// Course catalog.
    pub courses: CourseStore,
    /// Enrollment engine with the enrollment sequence.
    pub engine: EnrollmentEngine,
}

impl Dataset {
    /// Load the dataset from `data_dir`, creating an empty one when the
    /// files don't exist yet. Malformed rows are skipped with a warning.
    ///
    /// Students' enrolled-course sets are rebuilt from the enrollment file
    /// rather than persisted separately.
    ///
    /// # Errors
    ///
    /// Returns an error only when an existing file cannot be read.
    pub fn load(data_dir: &Path, max_credits: u32) -> Result<Self, Box<dyn Error>> {
        let mut dataset = Self {
            students: StudentStore::new(),
            courses: CourseStore::new(),
            engine: EnrollmentEngine::new(max_credits),
        };

        for line in read_rows(&data_dir.join(STUDENTS_FILE))? {
            match parse_student(&csv::parse_line(&line)) {
                Ok(student) => {
                    if let Err(e) = dataset.students.add(student) {
                        warn!("Skipping student row: {e}");
                    }
                }
                Err(e) => warn!("Skipping student row: {e}"),
            }
        }

        for line in read_rows(&data_dir.join(COURSES_FILE))? {
            match parse_course(&csv::parse_line(&line)) {
                Ok(course) => {
                    if let Err(e) = dataset.courses.add(course) {
                        warn!("Skipping course row: {e}");
                    }
                }
                Err(e) => warn!("Skipping course row: {e}"),
            }
        }

        for line in read_rows(&data_dir.join(ENROLLMENTS_FILE))? {
            match parse_enrollment(&csv::parse_line(&line)) {
                Ok(enrollment) => {
                    match dataset.students.find_mut(enrollment.student_id()) {
                        Some(student) => student.enroll_in_course(enrollment.course_code()),
                        None => {
                            warn!(
                                "Enrollment {} references unknown student {}",
                                enrollment.enrollment_id(),
                                enrollment.student_id()
                            );
                            continue;
                        }
                    }
                    dataset.engine.restore(enrollment);
                }
                Err(e) => warn!("Skipping enrollment row: {e}"),
            }
        }

        info!(
            "Loaded {} students, {} courses, {} enrollments",
            dataset.students.len(),
            dataset.courses.len(),
            dataset.engine.all().len()
        );
        Ok(dataset)
    }

    /// Save the dataset to `data_dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created or a file
    /// cannot be written.
    pub fn save(&self, data_dir: &Path) -> Result<(), Box<dyn Error>> {
        fs::create_dir_all(data_dir)?;

        let mut students_out = vec![STUDENTS_HEADER.to_string()];
        for student in self.students.all() {
            students_out.push(student_row(&student));
        }
        fs::write(data_dir.join(STUDENTS_FILE), students_out.join("\n") + "\n")?;

        let mut courses_out = vec![COURSES_HEADER.to_string()];
        for course in self.courses.all() {
            courses_out.push(course_row(&course));
        }
        fs::write(data_dir.join(COURSES_FILE), courses_out.join("\n") + "\n")?;

        let mut enrollments_out = vec![ENROLLMENTS_HEADER.to_string()];
        for enrollment in self.engine.all() {
            enrollments_out.push(enrollment_row(enrollment));
        }
        fs::write(
            data_dir.join(ENROLLMENTS_FILE),
            enrollments_out.join("\n") + "\n",
        )?;

        Ok(())
    }

    /// Import students from an external CSV file with the same layout as
    /// `students.csv`. Rows that fail to parse or validate are skipped
    /// with a warning.
    ///
    /// # Returns
    ///
    /// The number of students actually added.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read.
    pub fn import_students(&mut self, path: &Path) -> Result<usize, Box<dyn Error>> {
        let mut imported = 0;
        for line in read_rows(path)? {
            match parse_student(&csv::parse_line(&line)) {
                Ok(student) => match self.students.add(student) {
                    Ok(()) => imported += 1,
                    Err(e) => warn!("Skipping imported student: {e}"),
                },
                Err(e) => warn!("Skipping imported student: {e}"),
            }
        }
        Ok(imported)
    }

    /// Import courses from an external CSV file with the same layout as
    /// `courses.csv`. Rows that fail to parse or validate are skipped
    /// with a warning.
    ///
    /// # Returns
    ///
    /// The number of courses actually added.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read.
    pub fn import_courses(&mut self, path: &Path) -> Result<usize, Box<dyn Error>> {
        let mut imported = 0;
        for line in read_rows(path)? {
            match parse_course(&csv::parse_line(&line)) {
                Ok(course) => match self.courses.add(course) {
                    Ok(()) => imported += 1,
                    Err(e) => warn!("Skipping imported course: {e}"),
                },
                Err(e) => warn!("Skipping imported course: {e}"),
            }
        }
        Ok(imported)
    }

    /// Export the dataset as CSV files into `export_dir`. The layout is
    /// identical to the dataset directory, so an export is also a valid
    /// import source.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created or a file
    /// cannot be written.
    pub fn export(&self, export_dir: &Path) -> Result<(), Box<dyn Error>> {
        self.save(export_dir)
    }
}

fn read_rows(path: &Path) -> Result<Vec<String>, Box<dyn Error>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .skip(1) // header
        .filter(|l| !l.trim().is_empty())
        .map(ToString::to_string)
        .collect())
}

fn student_row(student: &Student) -> String {
    csv::to_line(&[
        student.id().to_string(),
        student.reg_no().to_string(),
        student.full_name().to_string(),
        student.email().to_string(),
        student.status().to_string(),
        student.enrollment_date().format(DATE_FORMAT).to_string(),
    ])
}

fn parse_student(fields: &[String]) -> Result<Student, String> {
    if fields.len() != 6 {
        return Err(format!("expected 6 student fields, got {}", fields.len()));
    }
    let status = fields[4]
        .parse::<StudentStatus>()
        .map_err(|e| format!("bad status: {e}"))?;
    let enrollment_date = NaiveDate::parse_from_str(&fields[5], DATE_FORMAT)
        .map_err(|e| format!("bad enrollment date '{}': {e}", fields[5]))?;

    Ok(Student::from_parts(
        PersonCore::new(
            fields[0].clone(),
            fields[1].clone(),
            fields[2].clone(),
            fields[3].clone(),
        ),
        status,
        enrollment_date,
    ))
}

fn course_row(course: &Course) -> String {
    csv::to_line(&[
        course.code().to_string(),
        course.title().to_string(),
        course.credits().to_string(),
        course.instructor().unwrap_or_default().to_string(),
        course.department().unwrap_or_default().to_string(),
        course
            .semester()
            .map(|s| s.to_string())
            .unwrap_or_default(),
    ])
}

fn parse_course(fields: &[String]) -> Result<Course, String> {
    if fields.len() != 6 {
        return Err(format!("expected 6 course fields, got {}", fields.len()));
    }
    let credits = fields[2]
        .parse::<u32>()
        .map_err(|e| format!("bad credits '{}': {e}", fields[2]))?;

    let mut spec = CourseSpec::new()
        .code(fields[0].clone())
        .title(fields[1].clone())
        .credits(credits);
    if !fields[3].is_empty() {
        spec = spec.instructor(fields[3].clone());
    }
    if !fields[4].is_empty() {
        spec = spec.department(fields[4].clone());
    }
    if !fields[5].is_empty() {
        let semester = fields[5].parse::<Semester>()?;
        spec = spec.semester(semester);
    }
    spec.build().map_err(|e| e.to_string())
}

fn enrollment_row(enrollment: &Enrollment) -> String {
    csv::to_line(&[
        enrollment.enrollment_id().to_string(),
        enrollment.student_id().to_string(),
        enrollment.course_code().to_string(),
        enrollment
            .enrollment_date()
            .format(DATETIME_FORMAT)
            .to_string(),
        enrollment.grade().map(|g| g.to_string()).unwrap_or_default(),
        enrollment
            .marks()
            .map(|m| format!("{m:.2}"))
            .unwrap_or_default(),
    ])
}

fn parse_enrollment(fields: &[String]) -> Result<Enrollment, String> {
    if fields.len() != 6 {
        return Err(format!(
            "expected 6 enrollment fields, got {}",
            fields.len()
        ));
    }
    let enrollment_date = NaiveDateTime::parse_from_str(&fields[3], DATETIME_FORMAT)
        .map_err(|e| format!("bad enrollment timestamp '{}': {e}", fields[3]))?;

    // Grade and marks are written together or not at all.
    let graded = match (fields[4].as_str(), fields[5].as_str()) {
        ("", "") => None,
        ("", _) | (_, "") => return Err("grade and marks must appear together".to_string()),
        (grade, marks) => {
            let grade = grade.parse::<Grade>()?;
            let marks = marks
                .parse::<f64>()
                .map_err(|e| format!("bad marks '{marks}': {e}"))?;
            Some((grade, marks))
        }
    };

    Ok(Enrollment::from_parts(
        fields[0].clone(),
        fields[1].clone(),
        fields[2].clone(),
        enrollment_date,
        graded,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> Dataset {
        let mut dataset = Dataset {
            students: StudentStore::new(),
            courses: CourseStore::new(),
            engine: EnrollmentEngine::new(24),
        };
        dataset
            .students
            .add(Student::new(
                "S001".to_string(),
                "2024CS001".to_string(),
                "Doe, Jane".to_string(),
                "jane@uni.edu".to_string(),
            ))
            .unwrap();
        dataset
            .courses
            .add(
                CourseSpec::new()
                    .code("CS101")
                    .title("Data Structures, Algorithms")
                    .credits(4)
                    .instructor("Ada Lovelace")
                    .department("Computer Science")
                    .semester(Semester::Fall)
                    .build()
                    .unwrap(),
            )
            .unwrap();

        let course = dataset.courses.find("CS101").unwrap().clone();
        let mut student = dataset.students.find("S001").unwrap().clone();
        dataset
            .engine
            .enroll(&mut student, &course, &dataset.courses)
            .unwrap();
        dataset.students.update(student).unwrap();
        dataset
            .engine
            .record_grade("S001", "CS101", Grade::A, 85.0)
            .unwrap();
        dataset
    }

    #[test]
    fn round_trips_through_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        sample_dataset().save(dir.path()).unwrap();

        let loaded = Dataset::load(dir.path(), 24).unwrap();
        assert_eq!(loaded.students.len(), 1);
        assert_eq!(loaded.courses.len(), 1);
        assert_eq!(loaded.engine.all().len(), 1);

        // Commas inside names survive the codec.
        let student = loaded.students.find("S001").unwrap();
        assert_eq!(student.full_name(), "Doe, Jane");
        assert_eq!(student.enrolled_courses(), ["CS101".to_string()]);

        let course = loaded.courses.find("CS101").unwrap();
        assert_eq!(course.title(), "Data Structures, Algorithms");
        assert_eq!(course.semester(), Some(Semester::Fall));

        let enrollment = &loaded.engine.all()[0];
        assert_eq!(enrollment.grade(), Some(Grade::A));
        assert_eq!(enrollment.marks(), Some(85.0));
    }

    #[test]
    fn missing_files_load_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Dataset::load(dir.path(), 24).unwrap();
        assert!(loaded.students.is_empty());
        assert!(loaded.courses.is_empty());
        assert!(loaded.engine.all().is_empty());
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(STUDENTS_FILE),
            "ID,RegNo,FullName,Email,Status,EnrollmentDate\n\
             S001,R1,Jane,jane@uni.edu,ACTIVE,2024-01-15\n\
             S002,R2,Broken,broken@uni.edu,WHAT,2024-01-15\n\
             S003,R3,Short\n",
        )
        .unwrap();

        let loaded = Dataset::load(dir.path(), 24).unwrap();
        assert_eq!(loaded.students.len(), 1);
        assert!(loaded.students.find("S001").is_some());
    }

    #[test]
    fn import_counts_only_accepted_rows() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("incoming.csv");
        fs::write(
            &file,
            "Code,Title,Credits,Instructor,Department,Semester\n\
             CS101,Intro,3,,,FALL\n\
             CS101,Duplicate,3,,,\n\
             lowercase1,Bad Code,3,,,\n",
        )
        .unwrap();

        let mut dataset = Dataset {
            students: StudentStore::new(),
            courses: CourseStore::new(),
            engine: EnrollmentEngine::new(24),
        };
        let imported = dataset.import_courses(&file).unwrap();
        assert_eq!(imported, 1);
        assert_eq!(dataset.courses.len(), 1);
    }

    #[test]
    fn graded_fields_must_pair() {
        let fields: Vec<String> = ["E1", "S001", "CS101", "2024-01-15T10:00:00.000", "A", ""]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert!(parse_enrollment(&fields).is_err());
    }
}
