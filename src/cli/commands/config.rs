//! Config command handler

use crate::args::ConfigSubcommand;
use hlaqh_progress::config::Config;
use hlaqh_progress::{error, info};
use std::io::{self, Write};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

/// Handle the config get subcommand
pub fn handle_config_get(config: &Config, key: Option<String>) {
    if let Some(k) = key {
        match config.get(&k) {
            Some(value) => println!("{value}"),
            None => eprintln!("✗ Unknown config key: '{k}'"),
        }
    } else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
    }
}

/// Handle the config set subcommand
pub fn handle_config_set(config: &mut Config, key: &str, value: &str) {
    if let Err(e) = config.set(key, value) {
        fail(&e);
    }
    save_or_exit(config);

    info!("Config updated: {key} = {value}");
    println!("✓ Set {key} = {value}");
}

/// Handle the config unset subcommand
pub fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) {
    if let Err(e) = config.unset(key, defaults) {
        fail(&e);
    }
    save_or_exit(config);

    info!("Config key reset: {key}");
    println!("✓ Reset {key} to default");
}

/// Handle the config reset subcommand
pub fn handle_config_reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!("Reset hlaqh configuration to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if response.trim().eq_ignore_ascii_case("y") || response.trim().eq_ignore_ascii_case("yes") {
        if let Err(e) = Config::reset() {
            fail(&format!("Failed to remove config file: {e}"));
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}

/// Report a config mutation failure and exit non-zero
fn fail(message: &str) -> ! {
    error!("{message}");
    eprintln!("✗ {message}");
    std::process::exit(1);
}

fn save_or_exit(config: &Config) {
    if let Err(e) = config.save() {
        fail(&format!("Failed to save config: {e}"));
    }
}
