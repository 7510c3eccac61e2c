//! Integration tests for configuration management

use campus_records::config::{Config, ConfigOverrides};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    // Should have non-empty defaults for critical fields
    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.data_dir.is_empty(),
        "Default data_dir should not be empty"
    );
    assert!(
        !config.paths.backup_dir.is_empty(),
        "Default backup_dir should not be empty"
    );
    assert!(
        config.rules.max_credits_per_semester > 0,
        "Default credit ceiling should be positive"
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
data_dir = "./data"
export_dir = "./exports"
backup_dir = "./backups"

[rules]
max_credits_per_semester = 18
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.data_dir, "./data");
    assert_eq!(config.paths.export_dir, "./exports");
    assert_eq!(config.paths.backup_dir, "./backups");
    assert_eq!(config.rules.max_credits_per_semester, 18);
}

#[test]
fn test_config_from_toml_partial() {
    // Test that missing fields within sections use defaults
    let toml_str = r#"
[logging]
level = "error"

[paths]

[rules]
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, ""); // Default empty
    assert!(!config.logging.verbose); // Default false
    assert_eq!(config.paths.data_dir, ""); // Default empty
    assert_eq!(config.rules.max_credits_per_semester, 0); // Default zero
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$CAMPUS_RECORDS/test.log"

[paths]
data_dir = "$CAMPUS_RECORDS/data"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    // Variable should be expanded to actual path
    assert!(config.logging.file.contains("campusrec"));
    assert!(!config.logging.file.contains("$CAMPUS_RECORDS"));
    assert!(config.paths.data_dir.contains("campusrec"));
    assert!(!config.paths.data_dir.contains("$CAMPUS_RECORDS"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    // Test get
    let level = config.get("level");
    assert!(level.is_some());

    // Test set
    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert_eq!(config.get("verbose").unwrap(), "true");
    assert!(config.logging.verbose);

    config
        .set("max_credits", "21")
        .expect("Failed to set max_credits");
    assert_eq!(config.rules.max_credits_per_semester, 21);

    // Test invalid values
    assert!(config.set("max_credits", "lots").is_err());
    assert!(config.set("max_credits", "0").is_err());

    // Test unknown key
    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    // Change a value
    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.logging.level, "debug");

    // Unset should restore default
    config
        .unset("level", &defaults)
        .expect("Failed to unset level");
    assert_eq!(config.logging.level, defaults.logging.level);

    config
        .set("max_credits", "12")
        .expect("Failed to set max_credits");
    config
        .unset("max_credits", &defaults)
        .expect("Failed to unset max_credits");
    assert_eq!(
        config.rules.max_credits_per_semester,
        defaults.rules.max_credits_per_semester
    );
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    // Create and save a config
    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");

    // Manually save to our test location
    if let Some(parent) = config_file.parent() {
        fs::create_dir_all(parent).expect("Failed to create dir");
    }
    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    // Load and verify
    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded_config = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded_config.logging.level, "info");
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        data_dir: Some("./custom_data".to_string()),
        export_dir: Some("./custom_exports".to_string()),
        backup_dir: Some("./custom_backups".to_string()),
        max_credits: Some(30),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.data_dir, "./custom_data");
    assert_eq!(config.paths.export_dir, "./custom_exports");
    assert_eq!(config.paths.backup_dir, "./custom_backups");
    assert_eq!(config.rules.max_credits_per_semester, 30);
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let original_ceiling = config.rules.max_credits_per_semester;

    // Apply partial overrides - only level changes
    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..Default::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.rules.max_credits_per_semester, original_ceiling);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    // Should contain section headers (lowercase)
    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("[rules]"));

    // Should contain field names
    assert!(display_str.contains("level"));
    assert!(display_str.contains("data_dir"));
    assert!(display_str.contains("max_credits_per_semester"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    // Create a minimal config with empty fields
    let toml_str = r#"
[logging]
level = "error"
file = ""
verbose = false

[paths]
data_dir = ""
export_dir = ""
backup_dir = ""

[rules]
max_credits_per_semester = 0
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    // Merge should add missing fields from defaults
    let changed = config.merge_defaults(&defaults);

    assert!(
        changed,
        "merge_defaults should return true when fields are added"
    );
    assert_eq!(
        config.rules.max_credits_per_semester,
        defaults.rules.max_credits_per_semester
    );
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"
verbose = false

[paths]
data_dir = ""
export_dir = ""
backup_dir = ""

[rules]
max_credits_per_semester = 18
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    config.merge_defaults(&defaults);

    // Custom values should be preserved
    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.rules.max_credits_per_semester, 18);
}

#[test]
fn test_get_campusrec_dir() {
    let dir = Config::get_campusrec_dir();

    // Should contain "campusrec" in the path
    assert!(dir.to_string_lossy().contains("campusrec"));

    // Should not be empty or just "."
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    // Should end with config.toml or dconfig.toml
    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
