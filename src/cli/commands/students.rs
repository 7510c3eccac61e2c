//! Student command handlers

use crate::args::StudentSubcommand;
use campus_records::core::models::{Person, Student, StudentStatus};
use campus_records::io::Dataset;

/// Dispatch student subcommands. Returns `true` when the dataset changed.
pub fn run(subcommand: StudentSubcommand, dataset: &mut Dataset) -> bool {
    match subcommand {
        StudentSubcommand::Add {
            id,
            reg_no,
            name,
            email,
        } => handle_add(dataset, id, reg_no, name, email),
        StudentSubcommand::List { active } => {
            handle_list(dataset, active);
            false
        }
        StudentSubcommand::Search { pattern } => {
            handle_search(dataset, &pattern);
            false
        }
        StudentSubcommand::Profile { id } => {
            handle_profile(dataset, &id);
            false
        }
        StudentSubcommand::SetStatus { id, status } => handle_set_status(dataset, &id, &status),
    }
}

fn handle_add(dataset: &mut Dataset, id: String, reg_no: String, name: String, email: String) -> bool {
    let student = Student::new(id, reg_no, name, email);
    match dataset.students.add(student) {
        Ok(()) => {
            println!("✓ Student added");
            true
        }
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

fn handle_list(dataset: &Dataset, active_only: bool) {
    let students = if active_only {
        dataset.students.active()
    } else {
        dataset.students.all()
    };
    if students.is_empty() {
        println!("No students found");
        return;
    }
    for student in &students {
        println!("{student}");
    }
    println!("\nTotal: {}", students.len());
}

fn handle_search(dataset: &Dataset, pattern: &str) {
    let hits = dataset.students.search_by_name(pattern);
    if hits.is_empty() {
        println!("No students matching '{pattern}'");
        return;
    }
    for student in &hits {
        println!("{student}");
    }
}

fn handle_profile(dataset: &Dataset, id: &str) {
    let Some(student) = dataset.students.find(id) else {
        eprintln!("✗ Student with ID {id} not found");
        std::process::exit(1);
    };

    let person = Person::Student(student);
    println!("{person}");
    print!("{}", person.detailed_profile());

    let enrollments = dataset.engine.student_enrollments(id);
    println!("\nEnrollments: {}", enrollments.len());
    for enrollment in enrollments {
        println!("  {enrollment}");
    }
    println!(
        "GPA: {:.2}",
        dataset.engine.gpa(id, &dataset.courses)
    );
}

fn handle_set_status(dataset: &mut Dataset, id: &str, status: &str) -> bool {
    let status = match status.parse::<StudentStatus>() {
        Ok(status) => status,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    match dataset.students.find_mut(id) {
        Some(student) => {
            student.set_status(status);
            println!("✓ Status of {id} set to {status}");
            true
        }
        None => {
            eprintln!("✗ Student with ID {id} not found");
            std::process::exit(1);
        }
    }
}
