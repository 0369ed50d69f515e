//! Process-wide `[filter]` settings: the skip characters and the mask
//! character used by `replace`.
//!
//! The embedded `default_settings.toml` applies unless a custom file is
//! installed with `init_custom_file` before the first `settings()` call.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Read `path` and install it as the custom settings.
pub fn init_custom_file(path: &Path) -> Result<(), SettingsError> {
    init_custom(fs::read_to_string(path)?)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub filter: FilterSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilterSettings {
    /// Characters ignored while matching, one per char.
    #[serde(default)]
    pub skip: String,
    /// Mask character; exactly one char once validated.
    pub replacement: String,
}

impl FilterSettings {
    pub fn replacement_char(&self) -> char {
        self.replacement.chars().next().unwrap_or('*')
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.filter.replacement.chars().count() != 1 {
        return Err(SettingsError::InvalidValue {
            field: "filter.replacement".to_string(),
            reason: "must be exactly one character".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.filter.skip, "- ");
        assert_eq!(s.filter.replacement_char(), '*');
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[filter]
skip = "-._ "
replacement = "■"
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.filter.skip.chars().count(), 4);
        assert_eq!(s.filter.replacement_char(), '■');
    }

    #[test]
    fn skip_defaults_to_empty() {
        let toml = "[filter]\nreplacement = \"#\"\n";
        let s = parse_settings_toml(toml).unwrap();
        assert!(s.filter.skip.is_empty());
    }

    #[test]
    fn error_multi_char_replacement() {
        let toml = "[filter]\nreplacement = \"**\"\n";
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(
            matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "filter.replacement")
        );
    }

    #[test]
    fn error_empty_replacement() {
        let toml = "[filter]\nreplacement = \"\"\n";
        assert!(matches!(
            parse_settings_toml(toml).unwrap_err(),
            SettingsError::InvalidValue { .. }
        ));
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("[filter\nskip = 1").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn default_toml_accessor() {
        assert!(default_toml().contains("[filter]"));
    }
}
