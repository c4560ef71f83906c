//! CLI argument validation functions
//!
//! This module provides custom validation functions for CLI arguments
//! that go beyond what clap can validate automatically.

use std::fs;
use std::path::PathBuf;

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!("Cannot read configuration file '{}': {}", path_str, e)),
    }
}

/// Validate a domain name argument (non-empty, no whitespace)
pub fn validate_domain(domain: &str) -> Result<String, String> {
    let domain = domain.trim();
    if domain.is_empty() {
        return Err("Domain cannot be empty".to_string());
    }
    if domain.chars().any(char::is_whitespace) {
        return Err(format!("Domain cannot contain whitespace: '{}'", domain));
    }
    Ok(domain.to_string())
}

/// Validate a logical secret key (non-empty, no whitespace or `/`)
///
/// The key is substituted into a resource path, so a `/` would change which
/// secret is addressed.
pub fn validate_logical_key(key: &str) -> Result<String, String> {
    if key.is_empty() {
        return Err("Secret key cannot be empty".to_string());
    }
    if key.chars().any(|c| c.is_whitespace() || c == '/') {
        return Err(format!(
            "Secret key cannot contain whitespace or '/': '{}'",
            key
        ));
    }
    Ok(key.to_string())
}
