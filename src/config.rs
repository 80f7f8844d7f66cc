use std::path::{Path, PathBuf};

use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;
use crate::game::COLS;
use crate::ui::Theme;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub console: ConsoleConfig,
    pub tui: TuiConfig,
    pub logging: LoggingConfig,
}

/// Console front end settings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub player_one_marker: char,
    pub player_two_marker: char,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            player_one_marker: 'X',
            player_two_marker: 'O',
        }
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Name of a built-in theme
    pub theme: String,
    /// Column the pending piece starts over (0-based)
    pub start_column: usize,
}

impl Default for TuiConfig {
    fn default() -> Self {
        TuiConfig {
            theme: "classic".to_string(),
            start_column: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// Log file. The terminal UI only logs when this is set.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            file: Some(PathBuf::from("connect_four.log")),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let markers = [
            ("console.player_one_marker", self.console.player_one_marker),
            ("console.player_two_marker", self.console.player_two_marker),
        ];
        for (name, marker) in markers {
            if marker.is_whitespace() || marker == '|' || marker == '-' {
                return Err(ConfigError::Validation(format!(
                    "{name} must be visible and not a board border"
                )));
            }
        }
        if self.console.player_one_marker == self.console.player_two_marker {
            return Err(ConfigError::Validation(
                "console markers must differ between players".into(),
            ));
        }

        if self.tui.start_column >= COLS {
            return Err(ConfigError::Validation(format!(
                "tui.start_column must be < {COLS}"
            )));
        }
        if Theme::by_name(&self.tui.theme).is_none() {
            return Err(ConfigError::Validation(format!(
                "tui.theme '{}' is unknown (expected one of: {})",
                self.tui.theme,
                Theme::NAMES.join(", ")
            )));
        }

        if EnvFilter::try_new(&self.logging.level).is_err() {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not a valid filter",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[tui]
theme = "ocean"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.tui.theme, "ocean");
        // Other fields should be defaults
        assert_eq!(config.tui.start_column, 3);
        assert_eq!(config.console.player_one_marker, 'X');
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_validation_rejects_same_markers() {
        let mut config = AppConfig::default();
        config.console.player_two_marker = 'X';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_border_marker() {
        let mut config = AppConfig::default();
        config.console.player_one_marker = '|';
        assert!(config.validate().is_err());
        config.console.player_one_marker = ' ';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_start_column_off_board() {
        let mut config = AppConfig::default();
        config.tui.start_column = COLS;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_unknown_theme() {
        let mut config = AppConfig::default();
        config.tui.theme = "neon".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("neon"));
    }

    #[test]
    fn test_validation_rejects_bad_log_level() {
        let mut config = AppConfig::default();
        config.logging.level = "connect_four=loud".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[console]
player_one_marker = "R"
player_two_marker = "Y"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.console.player_one_marker, 'R');
        assert_eq!(config.console.player_two_marker, 'Y');
        // Others are defaults
        assert_eq!(config.tui, TuiConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[tui]\nstart_column = 12\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}
