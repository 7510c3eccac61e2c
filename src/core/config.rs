//! Configuration module for `campusrec`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding the CSV dataset files
    #[serde(default)]
    pub data_dir: String,
    /// Directory for CSV export output
    #[serde(default)]
    pub export_dir: String,
    /// Directory for timestamped backups
    #[serde(default)]
    pub backup_dir: String,
}

/// Academic business rules
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Credit ceiling applied across all of a student's enrollments
    #[serde(default)]
    pub max_credits_per_semester: u32,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Business-rule settings
    #[serde(default)]
    pub rules: RulesConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override dataset directory
    pub data_dir: Option<String>,
    /// Override export directory
    pub export_dir: Option<String>,
    /// Override backup directory
    pub backup_dir: Option<String>,
    /// Override the credit ceiling
    pub max_credits: Option<u32>,
}

impl Config {
    /// Get the `$CAMPUS_RECORDS` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/campusrec`
    /// - macOS: `~/Library/Application Support/campusrec`
    /// - Windows: `%APPDATA%\campusrec`
    #[must_use]
    pub fn get_campusrec_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("campusrec")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Used when loading configuration so that newly added fields are
    /// populated with their default values. Only fields that are empty (or
    /// zero for the credit ceiling) in the current config and non-empty in
    /// defaults are updated.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.data_dir.is_empty() && !defaults.paths.data_dir.is_empty() {
            self.paths.data_dir.clone_from(&defaults.paths.data_dir);
            changed = true;
        }
        if self.paths.export_dir.is_empty() && !defaults.paths.export_dir.is_empty() {
            self.paths.export_dir.clone_from(&defaults.paths.export_dir);
            changed = true;
        }
        if self.paths.backup_dir.is_empty() && !defaults.paths.backup_dir.is_empty() {
            self.paths.backup_dir.clone_from(&defaults.paths.backup_dir);
            changed = true;
        }

        if self.rules.max_credits_per_semester == 0 && defaults.rules.max_credits_per_semester > 0 {
            self.rules.max_credits_per_semester = defaults.rules.max_credits_per_semester;
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// This allows command-line arguments to override configuration file
    /// values without modifying the persistent configuration file. Only
    /// non-`None` values in the overrides struct will replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(data_dir) = &overrides.data_dir {
            self.paths.data_dir.clone_from(data_dir);
        }
        if let Some(export_dir) = &overrides.export_dir {
            self.paths.export_dir.clone_from(export_dir);
        }
        if let Some(backup_dir) = &overrides.backup_dir {
            self.paths.backup_dir.clone_from(backup_dir);
        }

        if let Some(max_credits) = overrides.max_credits {
            self.rules.max_credits_per_semester = max_credits;
        }
    }

    /// Get the user config file path
    ///
    /// Returns the full path to the configuration file:
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds (allows separate debug config)
    ///
    /// The file is located in the directory returned by
    /// [`get_campusrec_dir`](Self::get_campusrec_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_campusrec_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$CAMPUS_RECORDS` variable in a string
    ///
    /// Replaces occurrences of `$CAMPUS_RECORDS` with the actual campusrec
    /// directory path, so configuration values can reference the config
    /// directory dynamically.
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$CAMPUS_RECORDS") {
            let campusrec_dir = Self::get_campusrec_dir();
            value.replace("$CAMPUS_RECORDS", campusrec_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Parses a TOML configuration string and expands any `$CAMPUS_RECORDS`
    /// variables in the path values. Missing fields use their serde
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.data_dir = Self::expand_variables(&config.paths.data_dir);
        config.paths.export_dir = Self::expand_variables(&config.paths.export_dir);
        config.paths.backup_dir = Self::expand_variables(&config.paths.backup_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// Loads the compiled-in default configuration bundled with the binary.
    /// The defaults differ between debug and release builds.
    ///
    /// # Panics
    ///
    /// Panics if the embedded default configuration is invalid TOML. This
    /// should never happen in practice since the defaults are compiled into
    /// the binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// This is the primary way to load configuration:
    /// - If the config file exists: loads from file, merges missing fields
    ///   from defaults, saves the updated config
    /// - If it doesn't exist (first run): creates the config directory if
    ///   needed and saves the defaults to file
    ///
    /// Falls back to defaults if any error occurs during loading.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// Serializes the current configuration to TOML and writes it to the
    /// platform-specific config file, creating the config directory if it
    /// doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized, the directory
    /// cannot be created, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `data_dir`, `export_dir`,
    /// `backup_dir`, `max_credits` (hyphenated variants accepted).
    ///
    /// # Returns
    /// - `Some(String)`: The configuration value as a string
    /// - `None`: If the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "data_dir" | "data-dir" => Some(self.paths.data_dir.clone()),
            "export_dir" | "export-dir" => Some(self.paths.export_dir.clone()),
            "backup_dir" | "backup-dir" => Some(self.paths.backup_dir.clone()),
            "max_credits" | "max-credits" => {
                Some(self.rules.max_credits_per_semester.to_string())
            }
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config; call [`save()`](Config::save) to
    /// persist changes. `verbose` must parse as a boolean and `max_credits`
    /// as a positive integer.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not recognized or the value cannot be
    /// parsed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "data_dir" | "data-dir" => self.paths.data_dir = value.to_string(),
            "export_dir" | "export-dir" => self.paths.export_dir = value.to_string(),
            "backup_dir" | "backup-dir" => self.paths.backup_dir = value.to_string(),
            "max_credits" | "max-credits" => {
                let parsed = value
                    .parse::<u32>()
                    .map_err(|_| format!("Invalid integer value for 'max_credits': '{value}'"))?;
                if parsed == 0 {
                    return Err("'max_credits' must be positive".to_string());
                }
                self.rules.max_credits_per_semester = parsed;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Resets a single value to its default taken from the provided
    /// defaults config. Updates the in-memory config; call
    /// [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "data_dir" | "data-dir" => self.paths.data_dir.clone_from(&defaults.paths.data_dir),
            "export_dir" | "export-dir" => {
                self.paths.export_dir.clone_from(&defaults.paths.export_dir);
            }
            "backup_dir" | "backup-dir" => {
                self.paths.backup_dir.clone_from(&defaults.paths.backup_dir);
            }
            "max_credits" | "max-credits" => {
                self.rules.max_credits_per_semester = defaults.rules.max_credits_per_semester;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file, causing the next
    /// [`load()`](Config::load) call to recreate it from defaults. If the
    /// config file doesn't exist, this succeeds without doing anything.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  data_dir = \"{}\"", self.paths.data_dir)?;
        writeln!(f, "  export_dir = \"{}\"", self.paths.export_dir)?;
        writeln!(f, "  backup_dir = \"{}\"", self.paths.backup_dir)?;

        writeln!(f, "\n[rules]")?;
        writeln!(
            f,
            "  max_credits_per_semester = {}",
            self.rules.max_credits_per_semester
        )?;

        Ok(())
    }
}
