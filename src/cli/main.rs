//! Command-line interface entry point for `hlaqh`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use hlaqh_progress::config::Config;
use hlaqh_progress::info;
use hlaqh_progress::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag wins over config logging.level; fall back to warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path =
        (!config.logging.file.is_empty()).then(|| PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Progress { surah, ayah, json } => {
            commands::progress::run(&surah, ayah, json, verbose);
        }
        Command::Goal {
            surah,
            ayah,
            target_surah,
            target_ayah,
        } => {
            commands::goal::run(surah.as_deref(), ayah, &target_surah, target_ayah);
        }
        Command::Surah { subcommand } => {
            commands::surah::run(subcommand);
        }
        Command::Roster {
            input_files,
            output,
            report,
            no_csv,
        } => {
            if !no_csv {
                commands::roster::run(&input_files, &output, &config, verbose);
            }

            if let Some(format) = report {
                let reports_dir = PathBuf::from(&config.paths.reports_dir);
                for input_file in &input_files {
                    match commands::report::generate_into_dir(
                        input_file,
                        &reports_dir,
                        &format,
                        &config,
                    ) {
                        Ok(report_path) => {
                            println!("✓ Report generated: {}", report_path.display());
                        }
                        Err(e) => eprintln!("{e}"),
                    }
                }
            }
        }
        Command::Report {
            input_file,
            output,
            format,
        } => {
            commands::report::run(&input_file, output.as_deref(), format.as_deref(), &config);
        }
    }
}
