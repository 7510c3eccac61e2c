//! Import, export, and backup command handlers

use std::path::PathBuf;

use crate::args::{BackupSubcommand, ImportSubcommand};
use campus_records::config::Config;
use campus_records::io::{backup, Dataset};

/// Dispatch import subcommands. Returns `true` when the dataset changed.
pub fn import(subcommand: ImportSubcommand, dataset: &mut Dataset) -> bool {
    let result = match subcommand {
        ImportSubcommand::Students { file } => dataset
            .import_students(&file)
            .map(|n| format!("✓ Imported {n} students")),
        ImportSubcommand::Courses { file } => dataset
            .import_courses(&file)
            .map(|n| format!("✓ Imported {n} courses")),
    };

    match result {
        Ok(message) => {
            println!("{message}");
            true
        }
        Err(e) => {
            eprintln!("✗ Import failed: {e}");
            std::process::exit(1);
        }
    }
}

/// Export the dataset to the configured export directory.
pub fn export(dataset: &Dataset, config: &Config) {
    let export_dir = PathBuf::from(&config.paths.export_dir);
    match dataset.export(&export_dir) {
        Ok(()) => println!("✓ Exported dataset to {}", export_dir.display()),
        Err(e) => {
            eprintln!("✗ Export failed: {e}");
            std::process::exit(1);
        }
    }
}

/// Dispatch backup subcommands.
pub fn backup(subcommand: BackupSubcommand, config: &Config) {
    let data_dir = PathBuf::from(&config.paths.data_dir);
    let backup_root = PathBuf::from(&config.paths.backup_dir);

    match subcommand {
        BackupSubcommand::Create => match backup::create(&data_dir, &backup_root) {
            Ok(path) => println!("✓ Backup created at {}", path.display()),
            Err(e) => {
                eprintln!("✗ Backup failed: {e}");
                std::process::exit(1);
            }
        },
        BackupSubcommand::List => match backup::list(&backup_root) {
            Ok(names) if names.is_empty() => println!("No backups found"),
            Ok(names) => {
                println!("=== Backups ===");
                for name in names {
                    println!("{name}");
                }
            }
            Err(e) => {
                eprintln!("✗ Failed to list backups: {e}");
                std::process::exit(1);
            }
        },
        BackupSubcommand::Size => {
            if !backup_root.exists() {
                println!("No backups found");
                return;
            }
            match backup::tree(&backup_root) {
                Ok(entries) => {
                    for entry in entries {
                        let marker = if entry.is_dir { "/" } else { "" };
                        println!("{}{}{marker}", "  ".repeat(entry.depth), entry.name);
                    }
                }
                Err(e) => {
                    eprintln!("✗ Failed to walk backup directory: {e}");
                    std::process::exit(1);
                }
            }
            match backup::total_size(&backup_root) {
                Ok(size) => println!("\nTotal size: {}", backup::human_size(size)),
                Err(e) => {
                    eprintln!("✗ Failed to compute backup size: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}
