//! Report command handlers

use crate::args::ReportSubcommand;
use campus_records::core::reports;
use campus_records::io::Dataset;

/// Dispatch report subcommands.
pub fn run(subcommand: ReportSubcommand, dataset: &Dataset) {
    match subcommand {
        ReportSubcommand::Top { limit } => handle_top(dataset, limit),
        ReportSubcommand::Gpa => handle_gpa(dataset),
        ReportSubcommand::Courses => handle_courses(dataset),
        ReportSubcommand::Departments => handle_departments(dataset),
    }
}

fn handle_top(dataset: &Dataset, limit: usize) {
    let ranked =
        reports::top_students_by_gpa(&dataset.students, &dataset.engine, &dataset.courses, limit);
    if ranked.is_empty() {
        println!("No graded students yet");
        return;
    }

    println!("=== Top Students by GPA ===");
    for (rank, row) in ranked.iter().enumerate() {
        println!(
            "{:>2}. {:<30} {:.2}  ({})",
            rank + 1,
            row.full_name,
            row.gpa,
            row.student_id
        );
    }
}

fn handle_gpa(dataset: &Dataset) {
    let buckets = reports::gpa_distribution(&dataset.students, &dataset.engine, &dataset.courses);

    println!("=== GPA Distribution ===");
    for bucket in buckets {
        println!("{:<26} {}", bucket.label, bucket.count);
    }
}

fn handle_courses(dataset: &Dataset) {
    let counts = reports::course_enrollment_counts(&dataset.courses, &dataset.engine);
    if counts.is_empty() {
        println!("No courses in the catalog");
        return;
    }

    println!("=== Enrollments per Course ===");
    for row in counts {
        println!(
            "{:<10} {:<30} {}",
            row.course_code, row.title, row.enrollments
        );
    }
}

fn handle_departments(dataset: &Dataset) {
    let summary = reports::department_summary(&dataset.courses);
    if summary.is_empty() {
        println!("No departments on record");
        return;
    }

    println!("=== Courses per Department ===");
    println!("{:<30} {:>7} {:>8}", "Department", "Courses", "Credits");
    for row in summary {
        println!(
            "{:<30} {:>7} {:>8}",
            row.department, row.courses, row.total_credits
        );
    }
}
