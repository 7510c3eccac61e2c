//! Command-line interface entry point for `campusrec`

mod args;
mod commands;

use args::{Cli, Command};
use campus_records::config::Config;
use campus_records::info;
use campus_records::io::Dataset;
use campus_records::logger::{
    enable_debug, enable_verbose, init_file_logging, set_level, Level,
};
use clap::Parser;
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // Determine effective runtime log level: CLI flag overrides config; otherwise use config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| parse_level(&config.logging.level))
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    // Verbose: enable if CLI flag OR config has verbose=true
    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // Initialize file logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    // Config management never touches the dataset
    if let Command::Config { subcommand } = args.command {
        commands::config::run(subcommand, &mut config, &defaults);
        return;
    }

    let data_dir = PathBuf::from(&config.paths.data_dir);
    let mut dataset = match Dataset::load(&data_dir, config.rules.max_credits_per_semester) {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("✗ Failed to load dataset from {}: {e}", data_dir.display());
            std::process::exit(1);
        }
    };

    let mutated = match args.command {
        Command::Config { .. } => unreachable!("handled above"),
        Command::Student { subcommand } => commands::students::run(subcommand, &mut dataset),
        Command::Course { subcommand } => commands::courses::run(subcommand, &mut dataset),
        Command::Enroll {
            student_id,
            course_code,
        } => commands::enroll::enroll(&mut dataset, &student_id, &course_code),
        Command::Unenroll {
            student_id,
            course_code,
        } => commands::enroll::unenroll(&mut dataset, &student_id, &course_code),
        Command::Grade {
            student_id,
            course_code,
            marks,
        } => commands::enroll::grade(&mut dataset, &student_id, &course_code, marks),
        Command::Transcript { student_id } => {
            commands::enroll::transcript(&dataset, &student_id);
            false
        }
        Command::Report { subcommand } => {
            commands::reports::run(subcommand, &dataset);
            false
        }
        Command::Import { subcommand } => commands::data::import(subcommand, &mut dataset),
        Command::Export => {
            commands::data::export(&dataset, &config);
            false
        }
        Command::Backup { subcommand } => {
            commands::data::backup(subcommand, &config);
            false
        }
    };

    if mutated {
        if let Err(e) = dataset.save(&data_dir) {
            eprintln!("✗ Failed to save dataset to {}: {e}", data_dir.display());
            std::process::exit(1);
        }
    }
}

fn parse_level(val: &str) -> Option<Level> {
    match val.to_ascii_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        _ => None,
    }
}
