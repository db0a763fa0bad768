//! CLI entry point for wm-keybind-helper
//!
//! Validates the keybinding comments of a window manager config source,
//! or lists them for an interactive menu.

use anyhow::Context;
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use wm_keybind_helper::config::{expand_path, ConfigFile, HelperConfig, DEFAULT_CONFIG_PATH};
use wm_keybind_helper::report::{failure_line, render, Mode, FAILURE_EXIT_CODE};

#[derive(Parser)]
#[command(name = "wm-keybind-helper")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// What to do
    #[arg(short, long, value_enum, default_value_t = Mode::Validation)]
    mode: Mode,

    /// Path to the window manager config source
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

fn main() {
    wm_keybind_helper::logging::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "✗".red().bold(), failure_line(&e));
        std::process::exit(FAILURE_EXIT_CODE);
    }
}

/// Load the keybinding table and print the report for the selected mode
fn run(cli: &Cli) -> anyhow::Result<()> {
    let path = expand_path(&cli.config)?;
    let file = ConfigFile::new(path)?;
    let settings = HelperConfig::default();

    let table = file
        .load_table(&settings)
        .with_context(|| format!("Invalid keybindings in {}", file.path().display()))?;

    for line in render(cli.mode, &table, &settings, &file.file_name()) {
        match cli.mode {
            Mode::Validation => println!("{}", line.green()),
            Mode::Key => println!("{}", line),
        }
    }

    Ok(())
}
