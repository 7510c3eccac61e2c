//! Aggregate reports over students, courses, and enrollments.

use crate::core::engine::EnrollmentEngine;
use crate::core::store::{CourseStore, StudentStore};

/// One row of the top-students ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedStudent {
    /// Student id.
    pub student_id: String,
    /// Full name at generation time.
    pub full_name: String,
    /// Credit-weighted GPA.
    pub gpa: f64,
}

/// One bucket of the GPA distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpaBucket {
    /// Human-readable bucket label.
    pub label: &'static str,
    /// Students whose GPA falls in the bucket.
    pub count: usize,
}

/// Enrollment head count for one course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCount {
    /// Course code.
    pub course_code: String,
    /// Course title at generation time.
    pub title: String,
    /// Number of enrollments on record.
    pub enrollments: usize,
}

/// Course and credit totals for one department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentSummary {
    /// Department name.
    pub department: String,
    /// Number of catalog courses in the department.
    pub courses: usize,
    /// Sum of credits across the department's courses.
    pub total_credits: u32,
}

/// Students ranked by GPA descending, limited to `limit` rows.
///
/// Students with a zero GPA (nothing graded) are excluded. Equal GPAs
/// keep the store's name order, so the ranking is deterministic.
#[must_use]
pub fn top_students_by_gpa(
    students: &StudentStore,
    engine: &EnrollmentEngine,
    catalog: &CourseStore,
    limit: usize,
) -> Vec<RankedStudent> {
    let mut ranked: Vec<RankedStudent> = students
        .all()
        .iter()
        .map(|s| RankedStudent {
            student_id: s.id().to_string(),
            full_name: s.full_name().to_string(),
            gpa: engine.gpa(s.id(), catalog),
        })
        .filter(|r| r.gpa > 0.0)
        .collect();
    ranked.sort_by(|a, b| b.gpa.partial_cmp(&a.gpa).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(limit);
    ranked
}

/// Distribution of student GPAs over five fixed buckets.
///
/// Every bucket is always present, zero counts included. Students with
/// a zero GPA (nothing graded) are left out of the distribution.
#[must_use]
pub fn gpa_distribution(
    students: &StudentStore,
    engine: &EnrollmentEngine,
    catalog: &CourseStore,
) -> Vec<GpaBucket> {
    let mut counts = [0usize; 5];
    for student in students.all() {
        let gpa = engine.gpa(student.id(), catalog);
        if gpa <= 0.0 {
            continue;
        }
        let bucket = if gpa >= 9.0 {
            0
        } else if gpa >= 8.0 {
            1
        } else if gpa >= 7.0 {
            2
        } else if gpa >= 6.0 {
            3
        } else {
            4
        };
        counts[bucket] += 1;
    }

    const LABELS: [&str; 5] = [
        "9.0 - 10.0 (Outstanding)",
        "8.0 - 8.9 (Excellent)",
        "7.0 - 7.9 (Good)",
        "6.0 - 6.9 (Average)",
        "Below 6.0",
    ];
    LABELS
        .iter()
        .zip(counts)
        .map(|(label, count)| GpaBucket { label, count })
        .collect()
}

/// Enrollment head count per catalog course, sorted by code. Courses with
/// no enrollments are included with a zero count.
#[must_use]
pub fn course_enrollment_counts(
    catalog: &CourseStore,
    engine: &EnrollmentEngine,
) -> Vec<CourseCount> {
    catalog
        .all()
        .iter()
        .map(|c| CourseCount {
            course_code: c.code().to_string(),
            title: c.title().to_string(),
            enrollments: engine.course_enrollments(c.code()).len(),
        })
        .collect()
}

/// Course and credit totals per department, sorted by department name.
/// Courses without a department are not counted.
#[must_use]
pub fn department_summary(catalog: &CourseStore) -> Vec<DepartmentSummary> {
    let mut totals: std::collections::HashMap<String, (usize, u32)> =
        std::collections::HashMap::new();
    for course in catalog.all() {
        if let Some(department) = course.department() {
            let entry = totals.entry(department.to_string()).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += course.credits();
        }
    }

    let mut summaries: Vec<DepartmentSummary> = totals
        .into_iter()
        .map(|(department, (courses, total_credits))| DepartmentSummary {
            department,
            courses,
            total_credits,
        })
        .collect();
    summaries.sort_by(|a, b| a.department.cmp(&b.department));
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{CourseSpec, Grade, Student};

    fn fixture() -> (StudentStore, CourseStore, EnrollmentEngine) {
        let mut catalog = CourseStore::new();
        for (code, credits, dept) in [
            ("CS101", 3, "Computer Science"),
            ("CS201", 4, "Computer Science"),
            ("MATH101", 4, "Mathematics"),
        ] {
            catalog
                .add(
                    CourseSpec::new()
                        .code(code)
                        .title(format!("{code} title"))
                        .credits(credits)
                        .department(dept)
                        .build()
                        .expect("valid spec"),
                )
                .expect("unique code");
        }

        let mut students = StudentStore::new();
        let mut engine = EnrollmentEngine::default();
        for (id, name, course, grade, marks) in [
            ("S001", "Alice", "CS101", Grade::S, 95.0),
            ("S002", "Bob", "CS101", Grade::B, 74.0),
        ] {
            let mut student = Student::new(
                id.to_string(),
                format!("R{id}"),
                name.to_string(),
                format!("{id}@uni.edu"),
            );
            let c = catalog.find(course).unwrap().clone();
            engine.enroll(&mut student, &c, &catalog).unwrap();
            engine.record_grade(id, course, grade, marks).unwrap();
            students.add(student).unwrap();
        }

        // Carol enrolls but is never graded.
        let mut carol = Student::new(
            "S003".to_string(),
            "RS003".to_string(),
            "Carol".to_string(),
            "S003@uni.edu".to_string(),
        );
        let c = catalog.find("MATH101").unwrap().clone();
        engine.enroll(&mut carol, &c, &catalog).unwrap();
        students.add(carol).unwrap();

        (students, catalog, engine)
    }

    #[test]
    fn top_students_excludes_zero_gpa_and_honors_limit() {
        let (students, catalog, engine) = fixture();

        let ranked = top_students_by_gpa(&students, &engine, &catalog, 10);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].full_name, "Alice");
        assert!((ranked[0].gpa - 10.0).abs() < f64::EPSILON);
        assert_eq!(ranked[1].full_name, "Bob");

        let top_one = top_students_by_gpa(&students, &engine, &catalog, 1);
        assert_eq!(top_one.len(), 1);
        assert_eq!(top_one[0].student_id, "S001");
    }

    #[test]
    fn distribution_always_has_five_buckets() {
        let (students, catalog, engine) = fixture();

        let buckets = gpa_distribution(&students, &engine, &catalog);
        assert_eq!(buckets.len(), 5);
        assert_eq!(buckets[0].count, 1); // Alice at 10.0
        assert_eq!(buckets[1].count, 1); // Bob at 8.0

        let empty = gpa_distribution(&StudentStore::new(), &engine, &catalog);
        assert_eq!(empty.len(), 5);
        assert!(empty.iter().all(|b| b.count == 0));
    }

    #[test]
    fn distribution_leaves_out_ungraded_students() {
        let (students, catalog, engine) = fixture();

        // Carol is enrolled but has nothing graded, so she appears in no
        // bucket at all rather than in the lowest one.
        let buckets = gpa_distribution(&students, &engine, &catalog);
        let total: usize = buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, 2);
        assert_eq!(buckets[4].count, 0);
    }

    #[test]
    fn course_counts_include_empty_courses_sorted_by_code() {
        let (_, catalog, engine) = fixture();

        let counts = course_enrollment_counts(&catalog, &engine);
        let rows: Vec<(&str, usize)> = counts
            .iter()
            .map(|c| (c.course_code.as_str(), c.enrollments))
            .collect();
        assert_eq!(rows, [("CS101", 2), ("CS201", 0), ("MATH101", 1)]);
    }

    #[test]
    fn department_summary_is_name_sorted() {
        let (_, catalog, _) = fixture();

        let summary = department_summary(&catalog);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].department, "Computer Science");
        assert_eq!(summary[0].courses, 2);
        assert_eq!(summary[0].total_credits, 7);
        assert_eq!(summary[1].department, "Mathematics");
        assert_eq!(summary[1].courses, 1);
        assert_eq!(summary[1].total_credits, 4);
    }
}
