//! Integration tests for configuration loading and validation
//!
//! Note: Tests that read or modify environment variables take a shared
//! mutex to avoid interference between tests.

use siphon::config::load_config;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that touch environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("SIPHON_LOG_LEVEL");
    std::env::remove_var("SIPHON_INVENTORY_URL");
    std::env::remove_var("SIPHON_RETAIL_URL");
    std::env::remove_var("SIPHON_OUTPUT_DIR");
    std::env::remove_var("SIPHON_HTTP_TIMEOUT_SECONDS");
    std::env::remove_var("TEST_INVENTORY_URL");
    std::env::remove_var("TEST_RETAIL_URL");
}

fn write_temp_config(toml_content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[application]
log_level = "debug"

[sources.inventory]
url = "https://inventory.example.com/api/items"

[sources.retail]
url = "https://retail.example.com/api/sales"

[http]
timeout_seconds = 45
connect_timeout_seconds = 5

[export]
output_dir = "out/processed"

[logging]
console_enabled = false
file_enabled = true
file_path = "/tmp/siphon-logs"
file_rotation = "hourly"
"#;

    let temp_file = write_temp_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    // Verify application config
    assert_eq!(config.application.log_level, "debug");

    // Verify source endpoints
    assert_eq!(
        config.sources.inventory.url,
        "https://inventory.example.com/api/items"
    );
    assert_eq!(
        config.sources.retail.url,
        "https://retail.example.com/api/sales"
    );

    // Verify HTTP config
    assert_eq!(config.http.timeout_seconds, 45);
    assert_eq!(config.http.connect_timeout_seconds, 5);

    // Verify export config
    assert_eq!(config.export.output_dir, "out/processed");

    // Verify logging config
    assert!(!config.logging.console_enabled);
    assert!(config.logging.file_enabled);
    assert_eq!(config.logging.file_path, "/tmp/siphon-logs");
    assert_eq!(config.logging.file_rotation, "hourly");
}

#[test]
fn test_load_minimal_config_with_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[sources.inventory]
url = "http://localhost:8081/api/inventory"

[sources.retail]
url = "http://localhost:8082/api/retail"
"#;

    let temp_file = write_temp_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    // Verify defaults are applied
    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.http.timeout_seconds, 30);
    assert_eq!(config.http.connect_timeout_seconds, 10);
    assert_eq!(config.export.output_dir, "data/processed");
    assert!(config.logging.console_enabled);
    assert!(!config.logging.file_enabled);
    assert_eq!(config.logging.file_rotation, "daily");
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_INVENTORY_URL", "http://inventory.test:9001/api");
    std::env::set_var("TEST_RETAIL_URL", "http://retail.test:9002/api");

    let toml_content = r#"
[sources.inventory]
url = "${TEST_INVENTORY_URL}"

[sources.retail]
url = "${TEST_RETAIL_URL}"
"#;

    let temp_file = write_temp_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.sources.inventory.url, "http://inventory.test:9001/api");
    assert_eq!(config.sources.retail.url, "http://retail.test:9002/api");

    cleanup_env_vars();
}

#[test]
fn test_env_var_substitution_missing_var() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[sources.inventory]
url = "${TEST_INVENTORY_URL}"

[sources.retail]
url = "http://localhost:8082/api/retail"
"#;

    let temp_file = write_temp_config(toml_content);
    let result = load_config(temp_file.path());

    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.contains("Missing required environment variables"));
    assert!(message.contains("TEST_INVENTORY_URL"));
}

#[test]
fn test_env_var_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("SIPHON_LOG_LEVEL", "trace");
    std::env::set_var("SIPHON_OUTPUT_DIR", "override/out");
    std::env::set_var("SIPHON_HTTP_TIMEOUT_SECONDS", "60");

    let toml_content = r#"
[application]
log_level = "info"

[sources.inventory]
url = "http://localhost:8081/api/inventory"

[sources.retail]
url = "http://localhost:8082/api/retail"

[http]
timeout_seconds = 30

[export]
output_dir = "data/processed"
"#;

    let temp_file = write_temp_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    // Verify env var overrides took effect
    assert_eq!(config.application.log_level, "trace");
    assert_eq!(config.export.output_dir, "override/out");
    assert_eq!(config.http.timeout_seconds, 60);

    cleanup_env_vars();
}

#[test]
fn test_env_var_override_beats_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_INVENTORY_URL", "http://from-subst:9001/api");
    std::env::set_var("SIPHON_INVENTORY_URL", "http://from-override:9001/api");

    let toml_content = r#"
[sources.inventory]
url = "${TEST_INVENTORY_URL}"

[sources.retail]
url = "http://localhost:8082/api/retail"
"#;

    let temp_file = write_temp_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    // SIPHON_* overrides are applied after ${VAR} substitution
    assert_eq!(config.sources.inventory.url, "http://from-override:9001/api");

    cleanup_env_vars();
}

#[test]
fn test_invalid_log_level_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[application]
log_level = "invalid_level"

[sources.inventory]
url = "http://localhost:8081/api/inventory"

[sources.retail]
url = "http://localhost:8082/api/retail"
"#;

    let temp_file = write_temp_config(toml_content);
    let result = load_config(temp_file.path());

    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Configuration validation failed"));
}

#[test]
fn test_missing_source_fails_to_parse() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[sources.inventory]
url = "http://localhost:8081/api/inventory"
"#;

    let temp_file = write_temp_config(toml_content);
    let result = load_config(temp_file.path());

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Failed to parse TOML"));
}

#[test]
fn test_missing_config_file() {
    let result = load_config("does-not-exist.toml");

    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Configuration file not found"));
}
