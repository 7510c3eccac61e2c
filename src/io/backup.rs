//! Timestamped dataset backups with recursive size reporting.

use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::info;

/// One entry of a recursive backup listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupEntry {
    /// Nesting depth relative to the listed root (root entries are 0).
    pub depth: usize,
    /// File or directory name.
    pub name: String,
    /// Whether the entry is a directory.
    pub is_dir: bool,
}

/// Copy the dataset directory into a new `backup_<yyyymmdd_hhmmss>`
/// directory under `backup_root`.
///
/// # Returns
///
/// The path of the created backup directory.
///
/// # Errors
///
/// Returns an error when the source cannot be read or the backup cannot
/// be written.
pub fn create(data_dir: &Path, backup_root: &Path) -> Result<PathBuf, Box<dyn Error>> {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let target = backup_root.join(format!("backup_{stamp}"));
    fs::create_dir_all(&target)?;
    copy_recursively(data_dir, &target)?;

    info!("Created backup at {}", target.display());
    Ok(target)
}

/// Names of the backups under `backup_root`, newest first.
///
/// # Errors
///
/// Returns an error when the directory cannot be read; a missing root
/// lists as empty.
pub fn list(backup_root: &Path) -> io::Result<Vec<String>> {
    if !backup_root.exists() {
        return Ok(Vec::new());
    }
    let mut names: Vec<String> = fs::read_dir(backup_root)?
        .filter_map(Result::ok)
        .filter(|e| e.path().is_dir())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .filter(|n| n.starts_with("backup_"))
        .collect();
    names.sort_by(|a, b| b.cmp(a));
    Ok(names)
}

/// Recursive listing of a directory with nesting depths, for indented
/// display. Entries at each level are name-sorted with directories
/// listed before their contents.
///
/// # Errors
///
/// Returns an error when a directory cannot be read.
pub fn tree(dir: &Path) -> io::Result<Vec<BackupEntry>> {
    let mut entries = Vec::new();
    walk(dir, 0, &mut entries)?;
    Ok(entries)
}

fn walk(dir: &Path, depth: usize, out: &mut Vec<BackupEntry>) -> io::Result<()> {
    let mut children: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|e| e.path())
        .collect();
    children.sort();

    for child in children {
        let name = child
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let is_dir = child.is_dir();
        out.push(BackupEntry {
            depth,
            name,
            is_dir,
        });
        if is_dir {
            walk(&child, depth + 1, out)?;
        }
    }
    Ok(())
}

/// Total size in bytes of a directory, computed recursively.
///
/// # Errors
///
/// Returns an error when a directory or file metadata cannot be read.
pub fn total_size(dir: &Path) -> io::Result<u64> {
    let mut total = 0;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            total += total_size(&path)?;
        } else {
            total += path.metadata()?.len();
        }
    }
    Ok(total)
}

/// Format a byte count for display (`512 B`, `2.0 KB`, `1.5 MB`, ...).
#[must_use]
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    #[allow(clippy::cast_precision_loss)]
    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.1} {}", UNITS[unit])
}

fn copy_recursively(from: &Path, to: &Path) -> io::Result<()> {
    if !from.exists() {
        return Ok(());
    }
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let source = entry.path();
        let target = to.join(entry.file_name());
        if source.is_dir() {
            fs::create_dir_all(&target)?;
            copy_recursively(&source, &target)?;
        } else {
            fs::copy(&source, &target)?;
        }
    }
    Ok(())
}
