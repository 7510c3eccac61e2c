//! Course command handlers

use crate::args::CourseSubcommand;
use campus_records::core::models::{Course, CourseSpec, Semester};
use campus_records::io::Dataset;

/// Dispatch course subcommands. Returns `true` when the dataset changed.
pub fn run(subcommand: CourseSubcommand, dataset: &mut Dataset) -> bool {
    match subcommand {
        CourseSubcommand::Add {
            code,
            title,
            credits,
            instructor,
            department,
            semester,
        } => handle_add(dataset, code, title, credits, instructor, department, semester),
        CourseSubcommand::List => {
            handle_list(dataset);
            false
        }
        CourseSubcommand::Search {
            department,
            instructor,
            semester,
        } => {
            handle_search(dataset, department, instructor, semester);
            false
        }
    }
}

fn handle_add(
    dataset: &mut Dataset,
    code: String,
    title: String,
    credits: u32,
    instructor: Option<String>,
    department: Option<String>,
    semester: Option<String>,
) -> bool {
    let mut spec = CourseSpec::new().code(code).title(title).credits(credits);
    if let Some(instructor) = instructor {
        spec = spec.instructor(instructor);
    }
    if let Some(department) = department {
        spec = spec.department(department);
    }
    if let Some(semester) = semester {
        match semester.parse::<Semester>() {
            Ok(semester) => spec = spec.semester(semester),
            Err(e) => {
                eprintln!("✗ {e}");
                std::process::exit(1);
            }
        }
    }

    let course = match spec.build() {
        Ok(course) => course,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    match dataset.courses.add(course) {
        Ok(()) => {
            println!("✓ Course added");
            true
        }
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

fn handle_list(dataset: &Dataset) {
    let courses = dataset.courses.all();
    if courses.is_empty() {
        println!("No courses in the catalog");
        return;
    }
    for course in &courses {
        println!("{course}");
    }
    println!("\nTotal: {}", courses.len());
}

fn handle_search(
    dataset: &Dataset,
    department: Option<String>,
    instructor: Option<String>,
    semester: Option<String>,
) {
    let hits: Vec<Course> = if let Some(department) = department {
        dataset.courses.search_by_department(&department)
    } else if let Some(instructor) = instructor {
        dataset.courses.search_by_instructor(&instructor)
    } else if let Some(semester) = semester {
        match semester.parse::<Semester>() {
            Ok(semester) => dataset.courses.search_by_semester(semester),
            Err(e) => {
                eprintln!("✗ {e}");
                std::process::exit(1);
            }
        }
    } else {
        eprintln!("✗ Provide one of --department, --instructor, or --semester");
        std::process::exit(1);
    };

    if hits.is_empty() {
        println!("No courses found");
        return;
    }
    for course in &hits {
        println!("{course}");
    }
}
