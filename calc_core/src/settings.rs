//! # Calculator Settings
//!
//! Runtime configuration, serialized as JSON. Every field has a default, so
//! a settings file only needs the values it changes:
//!
//! ```json
//! { "log_file": "/var/tmp/equations.txt" }
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::settings::CalculatorSettings;
//!
//! let settings = CalculatorSettings::default();
//! assert_eq!(settings.log_file.to_str(), Some("equations.txt"));
//! assert_eq!(settings.prompt, "> ");
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Log file used when nothing else is configured
pub const DEFAULT_LOG_FILE: &str = "equations.txt";

/// Prompt printed before every line of console input
pub const DEFAULT_PROMPT: &str = "> ";

/// Global calculator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// File every computed equation is appended to
    pub log_file: PathBuf,

    /// Input prompt
    pub prompt: String,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        CalculatorSettings {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

impl CalculatorSettings {
    /// Replace the log file path
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }
}

/// Load settings from a JSON file.
///
/// # Returns
///
/// * `Ok(CalculatorSettings)` - Parsed settings, defaults filled in
/// * `Err(CalcError::FileNotFound)` - No such file
/// * `Err(CalcError::SerializationError)` - Invalid JSON
pub fn load_settings(path: &Path) -> CalcResult<CalculatorSettings> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::from_io("read settings", path.display().to_string(), &e))?;

    serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;

    fn temp_settings_path(name: &str) -> PathBuf {
        temp_dir().join(format!("calc_settings_test_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_partial_settings_use_defaults() {
        let settings: CalculatorSettings = serde_json::from_str(r#"{"log_file": "other.txt"}"#).unwrap();
        assert_eq!(settings.log_file, PathBuf::from("other.txt"));
        assert_eq!(settings.prompt, DEFAULT_PROMPT);
    }

    #[test]
    fn test_with_log_file() {
        let settings = CalculatorSettings::default().with_log_file("x.log");
        assert_eq!(settings.log_file, PathBuf::from("x.log"));
    }

    #[test]
    fn test_load_settings() {
        let path = temp_settings_path("load");
        fs::write(&path, r#"{"prompt": ">> "}"#).unwrap();

        let settings = load_settings(&path).unwrap();
        assert_eq!(settings.prompt, ">> ");
        assert_eq!(settings.log_file, PathBuf::from(DEFAULT_LOG_FILE));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_settings_errors() {
        let missing = temp_settings_path("missing");
        assert_eq!(load_settings(&missing).unwrap_err().error_code(), "FILE_NOT_FOUND");

        let path = temp_settings_path("invalid");
        fs::write(&path, "not json").unwrap();
        assert_eq!(load_settings(&path).unwrap_err().error_code(), "SERIALIZATION_ERROR");
        let _ = fs::remove_file(&path);
    }
}
