pub mod commands;
pub mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use ongkir_core::config::{AppConfig, ConfigOverrides, LoadOptions};

#[derive(Debug, Parser)]
#[command(
    name = "ongkir",
    about = "Delivery price estimator (fuzzy Sugeno inference)",
    long_about = "Estimate a delivery-service price from distance, temperature, and item count, \
                  inspect the rule base, and review effective configuration.",
    after_help = "Examples:\n  ongkir estimate --distance 2 --temperature 20 --items 1\n  ongkir estimate -d 7.5 -t 26 -n 2 --explain\n  ongkir rules --json\n  ongkir config"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to a TOML config file (default: ongkir.toml)")]
    config: Option<PathBuf>,
    #[arg(long, global = true, help = "Override the configured log level")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Estimate the delivery price and tier for one set of inputs")]
    Estimate(EstimateArgs),
    #[command(about = "Print the 27-rule price table")]
    Rules {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

#[derive(Clone, Debug, Args)]
pub struct EstimateArgs {
    #[arg(short = 'd', long, allow_negative_numbers = true, help = "Distance in kilometres (0-20)")]
    pub distance: f64,
    #[arg(
        short = 't',
        long,
        allow_negative_numbers = true,
        help = "Temperature in degrees Celsius (0-40)"
    )]
    pub temperature: f64,
    #[arg(short = 'n', long, allow_negative_numbers = true, help = "Item count (0-3)")]
    pub items: f64,
    #[arg(long, help = "Emit machine-readable JSON output")]
    pub json: bool,
    #[arg(long, help = "List the rules that fired and their strengths")]
    pub explain: bool,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let options = LoadOptions {
        config_path: cli.config.clone(),
        require_file: cli.config.is_some(),
        overrides: ConfigOverrides {
            log_level: cli.log_level.clone(),
            ..ConfigOverrides::default()
        },
    };

    let result = match cli.command {
        Command::Config => commands::CommandResult::text(commands::config::run(&options)),
        Command::Estimate(args) => {
            with_config(options, "estimate", |config| commands::estimate::run(config, &args))
        }
        Command::Rules { json } => with_config(options, "rules", |_| commands::rules::run(json)),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

fn with_config(
    options: LoadOptions,
    command: &str,
    execute: impl FnOnce(&AppConfig) -> commands::CommandResult,
) -> commands::CommandResult {
    let config = match AppConfig::load(options) {
        Ok(config) => config,
        Err(error) => {
            return commands::CommandResult::failure(
                command,
                "config_validation",
                format!("configuration issue: {error}"),
                2,
            );
        }
    };

    if let Err(error) = logging::init_logging(&config) {
        eprintln!("logging disabled: {error:#}");
    }

    execute(&config)
}
