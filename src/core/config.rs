//! Configuration module for the `hlaqh` CLI

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

/// Placeholder expanded to the config directory in path values
const DIR_VARIABLE: &str = "$HLAQH";

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
    /// Directory for progress CSV exports
    #[serde(default)]
    pub exports_dir: String,
    /// Directory for rendered reports
    #[serde(default)]
    pub reports_dir: String,
}

/// Report configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Default report format (markdown, html, json)
    #[serde(default)]
    pub format: String,
    /// Title printed at the top of every report
    #[serde(default)]
    pub title: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Report settings
    #[serde(default)]
    pub report: ReportConfig,
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
    /// Override CSV export directory
    pub exports_dir: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
}

/// Copy `default` into `field` when `field` is empty and `default` is not
fn fill_if_empty(field: &mut String, default: &str) -> bool {
    if field.is_empty() && !default.is_empty() {
        default.clone_into(field);
        true
    } else {
        false
    }
}

impl Config {
    /// Get the `$HLAQH` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/hlaqh`
    /// - macOS: `~/Library/Application Support/hlaqh`
    /// - Windows: `%APPDATA%\hlaqh`
    #[must_use]
    pub fn get_hlaqh_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hlaqh")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and non-empty in `defaults` are
    /// updated, so upgrading picks up new settings without touching the
    /// user's choices.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        changed |= fill_if_empty(&mut self.logging.level, &defaults.logging.level);
        changed |= fill_if_empty(&mut self.logging.file, &defaults.logging.file);

        changed |= fill_if_empty(&mut self.paths.exports_dir, &defaults.paths.exports_dir);
        changed |= fill_if_empty(&mut self.paths.reports_dir, &defaults.paths.reports_dir);

        changed |= fill_if_empty(&mut self.report.format, &defaults.report.format);
        changed |= fill_if_empty(&mut self.report.title, &defaults.report.title);

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for this run only; the config file is not modified.
    /// Only non-`None` values replace config values.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let mut config = Config::load();
    /// let overrides = ConfigOverrides {
    ///     level: Some("debug".to_string()),
    ///     ..Default::default()
    /// };
    /// config.apply_overrides(&overrides);
    /// ```
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

        if let Some(exports_dir) = &overrides.exports_dir {
            self.paths.exports_dir.clone_from(exports_dir);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// inside [`get_hlaqh_dir`](Self::get_hlaqh_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_hlaqh_dir().join(CONFIG_FILE_NAME)
    }

    /// Replace `$HLAQH` with the config directory path
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let hlaqh_dir = Self::get_hlaqh_dir();
            value.replace(DIR_VARIABLE, hlaqh_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Expands `$HLAQH` in path values. Missing fields use their serde
    /// defaults (empty strings or `false`).
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.exports_dir = Self::expand_variables(&config.paths.exports_dir);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// Debug builds use `DefaultCLIConfigDebug.toml`, release builds use
    /// `DefaultCLIConfigRelease.toml`.
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled in and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: load it, merge missing fields from
    ///   defaults and save it back when anything changed
    /// - On first run: create the config directory and write the defaults
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
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
    /// # Errors
    /// Returns an error if the config directory cannot be created or the
    /// file cannot be written
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
    /// Supported keys: `level`, `file`, `verbose`, `exports_dir`,
    /// `reports_dir`, `format`, `title` (dashed spellings accepted for
    /// the directory keys).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "exports_dir" | "exports-dir" => Some(self.paths.exports_dir.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            "format" => Some(self.report.format.clone()),
            "title" => Some(self.report.title.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to
    /// persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be
    /// parsed (`verbose` takes `true`/`false`, `format` takes a report
    /// format name)
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "exports_dir" | "exports-dir" => self.paths.exports_dir = value.to_string(),
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            "format" => {
                let format: crate::core::report::ReportFormat = value.parse()?;
                self.report.format = format.to_string();
            }
            "title" => self.report.title = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset a single configuration value to its default
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to
    /// persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "exports_dir" | "exports-dir" => self
                .paths
                .exports_dir
                .clone_from(&defaults.paths.exports_dir),
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "format" => self.report.format.clone_from(&defaults.report.format),
            "title" => self.report.title.clone_from(&defaults.report.title),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds when there is no file.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
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
        writeln!(f, "  exports_dir = \"{}\"", self.paths.exports_dir)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[report]")?;
        writeln!(f, "  format = \"{}\"", self.report.format)?;
        writeln!(f, "  title = \"{}\"", self.report.title)?;

        Ok(())
    }
}
