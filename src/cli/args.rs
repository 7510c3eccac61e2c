//! CLI argument definitions for `campusrec`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use campus_records::config::ConfigOverrides;
use campus_records::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// lowercase strings for config storage and to `logger::Level` for runtime
/// use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `data_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum StudentSubcommand {
    /// Register a new student.
    Add {
        /// Unique student id
        #[arg(value_name = "ID")]
        id: String,
        /// Unique registration number
        #[arg(value_name = "REG_NO")]
        reg_no: String,
        /// Full name
        #[arg(value_name = "NAME")]
        name: String,
        /// Email address
        #[arg(value_name = "EMAIL")]
        email: String,
    },
    /// List students sorted by name.
    List {
        /// Only show active students
        #[arg(long)]
        active: bool,
    },
    /// Search students by name substring (case-insensitive).
    Search {
        /// Name fragment to search for
        #[arg(value_name = "PATTERN")]
        pattern: String,
    },
    /// Show a student's detailed profile and enrollment summary.
    Profile {
        /// Student id
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Change a student's status.
    SetStatus {
        /// Student id
        #[arg(value_name = "ID")]
        id: String,
        /// New status (active, inactive, suspended, graduated)
        #[arg(value_name = "STATUS")]
        status: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum CourseSubcommand {
    /// Add a course to the catalog.
    Add {
        /// Course code, e.g. CS101
        #[arg(value_name = "CODE")]
        code: String,
        /// Course title
        #[arg(value_name = "TITLE")]
        title: String,
        /// Credit hours
        #[arg(value_name = "CREDITS")]
        credits: u32,
        /// Instructor's full name
        #[arg(long, value_name = "NAME")]
        instructor: Option<String>,
        /// Owning department
        #[arg(long, value_name = "DEPT")]
        department: Option<String>,
        /// Semester (spring, summer, fall, winter)
        #[arg(long, value_name = "SEMESTER")]
        semester: Option<String>,
    },
    /// List catalog courses sorted by code.
    List,
    /// Search courses by department, instructor, or semester.
    Search {
        /// Filter by department (case-insensitive equality)
        #[arg(long, value_name = "DEPT")]
        department: Option<String>,
        /// Filter by instructor name fragment
        #[arg(long, value_name = "NAME")]
        instructor: Option<String>,
        /// Filter by semester
        #[arg(long, value_name = "SEMESTER")]
        semester: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ReportSubcommand {
    /// Top students ranked by GPA.
    Top {
        /// Number of students to show
        #[arg(long, value_name = "N", default_value_t = 10)]
        limit: usize,
    },
    /// GPA distribution across all students.
    Gpa,
    /// Enrollment head count per course.
    Courses,
    /// Course counts per department.
    Departments,
}

#[derive(Debug, Subcommand)]
pub enum ImportSubcommand {
    /// Import students from a CSV file.
    Students {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Import courses from a CSV file.
    Courses {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub enum BackupSubcommand {
    /// Copy the dataset into a new timestamped backup directory.
    Create,
    /// List existing backups, newest first.
    List,
    /// Show the recursive contents and total size of the backup directory.
    Size,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Manage student records.
    Student {
        #[command(subcommand)]
        subcommand: StudentSubcommand,
    },
    /// Manage the course catalog.
    Course {
        #[command(subcommand)]
        subcommand: CourseSubcommand,
    },
    /// Enroll a student in a course.
    Enroll {
        /// Student id
        #[arg(value_name = "STUDENT_ID")]
        student_id: String,
        /// Course code
        #[arg(value_name = "COURSE_CODE")]
        course_code: String,
    },
    /// Remove a student's enrollment in a course.
    Unenroll {
        /// Student id
        #[arg(value_name = "STUDENT_ID")]
        student_id: String,
        /// Course code
        #[arg(value_name = "COURSE_CODE")]
        course_code: String,
    },
    /// Record marks for an enrollment; the letter grade is derived.
    Grade {
        /// Student id
        #[arg(value_name = "STUDENT_ID")]
        student_id: String,
        /// Course code
        #[arg(value_name = "COURSE_CODE")]
        course_code: String,
        /// Marks in the range 0-100
        #[arg(value_name = "MARKS")]
        marks: f64,
    },
    /// Print a student's transcript.
    Transcript {
        /// Student id
        #[arg(value_name = "STUDENT_ID")]
        student_id: String,
    },
    /// Generate aggregate reports.
    Report {
        #[command(subcommand)]
        subcommand: ReportSubcommand,
    },
    /// Import records from external CSV files.
    Import {
        #[command(subcommand)]
        subcommand: ImportSubcommand,
    },
    /// Export the dataset as CSV files to the export directory.
    Export,
    /// Manage dataset backups.
    Backup {
        #[command(subcommand)]
        subcommand: BackupSubcommand,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "campusrec",
    about = "Campus enrollment and academic records command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config dataset directory
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override config export directory
    #[arg(long = "export-dir", value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Override config backup directory
    #[arg(long = "backup-dir", value_name = "DIR")]
    pub backup_dir: Option<PathBuf>,

    /// Override the configured credit ceiling
    #[arg(long = "max-credits", value_name = "CREDITS")]
    pub max_credits: Option<u32>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be
    /// applied to the loaded configuration for this run only, where `None`
    /// means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_dir: self
                .data_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            export_dir: self
                .export_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            backup_dir: self
                .backup_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            max_credits: self.max_credits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            data_dir: None,
            export_dir: None,
            backup_dir: None,
            max_credits: None,
            command: Command::Config { subcommand: None },
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli().to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.data_dir.is_none());
        assert!(overrides.export_dir.is_none());
        assert!(overrides.backup_dir.is_none());
        assert!(overrides.max_credits.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare_cli();
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        cli.config_verbose = Some(true);
        cli.data_dir = Some(PathBuf::from("/data"));
        cli.export_dir = Some(PathBuf::from("/exports"));
        cli.backup_dir = Some(PathBuf::from("/backups"));
        cli.max_credits = Some(18);

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.data_dir, Some("/data".to_string()));
        assert_eq!(overrides.export_dir, Some("/exports".to_string()));
        assert_eq!(overrides.backup_dir, Some("/backups".to_string()));
        assert_eq!(overrides.max_credits, Some(18));
    }
}
