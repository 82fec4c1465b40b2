use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use equipment_patterns::logging;
use equipment_patterns::showcase::{self, Demo};
use equipment_patterns::ShowcaseConfig;

/// Runs the equipment inventory pattern examples
#[derive(Parser, Debug)]
#[command(name = "showcase")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Which pattern to run
    #[arg(value_enum, default_value_t = Demo::All)]
    demo: Demo,

    /// TOML file overriding the sample equipment
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match ShowcaseConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{} {err}", "error:".red().bold());
                return ExitCode::FAILURE;
            }
        },
        None => ShowcaseConfig::default(),
    };

    if args.no_color || !config.color {
        colored::control::set_override(false);
    }

    let log_level = if args.debug { "debug" } else { config.log_level.as_str() };
    logging::init(log_level);

    match showcase::run(args.demo, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
