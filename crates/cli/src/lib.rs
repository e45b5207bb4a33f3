pub mod commands;
pub mod logging;

use clap::{Parser, Subcommand};
use recommender_core::config::{AppConfig, ConfigOverrides, LoadOptions, LoggingConfig};
use std::process::ExitCode;

use crate::commands::recommend::RecommendArgs;

#[derive(Debug, Parser)]
#[command(
    name = "recommender",
    about = "Product recommender CLI",
    long_about = "Rank a product catalog against selected preferences and features, inspect catalog options, and check configuration readiness.",
    after_help = "Examples:\n  recommender recommend --preference \"Automação de marketing\"\n  recommender recommend --feature \"Gestão de leads e oportunidades\" --type SingleProduct\n  recommender options\n  recommender doctor --json"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Log level for stderr diagnostics (overrides config)"
    )]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Score the catalog against a selection and print the recommendations")]
    Recommend(RecommendArgs),
    #[command(about = "List the preferences and features offered by the catalog")]
    Options {
        #[arg(long, value_name = "PATH", help = "JSON catalog file (defaults to config, then demo)")]
        catalog: Option<std::path::PathBuf>,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Validate config and catalog readiness")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    logging::init(&logging_config(cli.log_level.clone()));

    let result = match cli.command {
        Command::Recommend(args) => commands::recommend::run(args),
        Command::Options { catalog } => commands::options::run(catalog),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Doctor { json } => commands::doctor::run(json),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

/// Logging settings from config, with the command-line level on top. Falls
/// back to defaults when the config does not load; the command reports that.
fn logging_config(log_level: Option<String>) -> LoggingConfig {
    let options = LoadOptions {
        overrides: ConfigOverrides { log_level: log_level.clone(), ..ConfigOverrides::default() },
        ..LoadOptions::default()
    };

    AppConfig::load(options).map(|config| config.logging).unwrap_or_else(|_| {
        let mut logging = AppConfig::default().logging;
        if let Some(level) = log_level {
            logging.level = level;
        }
        logging
    })
}
