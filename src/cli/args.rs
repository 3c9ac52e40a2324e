//! CLI argument definitions for `hlaqh`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use hlaqh_progress::config::ConfigOverrides;
use hlaqh_progress::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to
/// `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Level::from(*self).fmt(f)
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `exports_dir`, `format`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum SurahSubcommand {
    /// List all surahs in memorization order.
    List,
    /// Show details for one surah.
    Show {
        /// Canonical id, Arabic name or English name
        #[arg(value_name = "ID|NAME")]
        surah: String,
    },
    /// Print the curriculum position of a surah (0 if unknown).
    Position {
        /// Canonical surah id
        #[arg(value_name = "ID")]
        id: u32,
    },
    /// Print the surah id at a curriculum position (0 if out of range).
    At {
        /// Curriculum position, 1-114
        #[arg(value_name = "POS")]
        position: u32,
    },
    /// Print the pages covered by the first AYAH ayahs of a surah.
    Pages {
        /// Canonical surah id
        #[arg(value_name = "ID")]
        id: u32,
        /// Last ayah memorized
        #[arg(value_name = "AYAH")]
        ayah: u32,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Compute memorization progress for a single position.
    Progress {
        /// Surah of the last memorized ayah (canonical id or name)
        #[arg(short, long, value_name = "ID|NAME")]
        surah: String,

        /// Last memorized ayah within the surah
        #[arg(short, long, value_name = "N")]
        ayah: u32,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Measure progress toward a target position.
    Goal {
        /// Surah of the last memorized ayah (omit when not started)
        #[arg(short, long, value_name = "ID|NAME", requires = "ayah")]
        surah: Option<String>,

        /// Last memorized ayah within the surah
        #[arg(short, long, value_name = "N", requires = "surah")]
        ayah: Option<u32>,

        /// Target surah (canonical id or name)
        #[arg(long, value_name = "ID|NAME")]
        target_surah: String,

        /// Target ayah within the target surah
        #[arg(long, value_name = "N")]
        target_ayah: u32,
    },
    /// Look up surahs and the memorization curriculum.
    Surah {
        #[command(subcommand)]
        subcommand: SurahSubcommand,
    },
    /// Compute progress for one or more class rosters.
    ///
    /// Writes a progress CSV per roster and optionally a report.
    Roster {
        /// Paths to roster CSV files (supports multiple)
        #[arg(value_name = "FILES", num_args = 1..)]
        input_files: Vec<PathBuf>,

        /// Output file paths (optional; defaults to config `exports_dir` when omitted)
        ///
        /// When provided, must match the number of input files 1:1.
        #[arg(short, long, value_name = "FILES", num_args = 1..)]
        output: Vec<PathBuf>,

        /// Also generate a report in the specified format (markdown, html, json)
        #[arg(long, value_name = "FORMAT")]
        report: Option<String>,

        /// Skip CSV export (only generate report when --report is used)
        #[arg(long)]
        no_csv: bool,
    },
    /// Generate a class progress report from a roster CSV file.
    Report {
        /// Path to roster CSV file
        #[arg(value_name = "FILE")]
        input_file: PathBuf,

        /// Output file path (optional; defaults to config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md), html, or json (defaults to config `format`)
        #[arg(short, long, value_name = "FORMAT")]
        format: Option<String>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "hlaqh",
    about = "Quran memorization progress tracker",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config CSV export directory
    #[arg(long = "config-exports-dir", value_name = "DIR")]
    pub config_exports_dir: Option<PathBuf>,

    /// Override config CSV export directory (short form)
    #[arg(long = "exports-dir", value_name = "DIR")]
    pub exports_dir: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: Option<&PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--exports-dir`) take precedence over the
    /// long form (e.g., `--config-exports-dir`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: path_string(self.config_log_file.as_ref()),
            verbose: self.config_verbose,
            exports_dir: path_string(self.exports_dir.as_ref())
                .or_else(|| path_string(self.config_exports_dir.as_ref())),
            reports_dir: path_string(self.reports_dir.as_ref())
                .or_else(|| path_string(self.config_reports_dir.as_ref())),
        }
    }
}
