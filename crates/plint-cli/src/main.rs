//! plint CLI
//!
//! Command-line interface for linting printer definition files

mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use plint_core::ConfigLoader;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plint")]
#[command(about = "Lint hierarchical printer definition files")]
#[command(version = plint_core::VERSION)]
#[command(
    long_about = "plint finds issues in printer definition files (*.def.json), such as\n\
overrides that restate the value a definition would inherit anyway.\n\
\n\
Examples:\n  \
plint lint                        # Lint definition files under the current directory\n  \
plint lint --fix printers/        # Lint and apply safe fixes\n  \
plint lint --format json file.def.json\n  \
plint rules                       # List built-in rules"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(
        short,
        long,
        global = true,
        help = "Path to configuration file (.plintrc.json/.plintrc.toml)"
    )]
    config: Option<PathBuf>,

    /// Verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint definition files for redundant or inconsistent overrides
    #[command(alias = "check")]
    Lint {
        /// Files or directories to lint
        #[arg(help = "Files or directories to process (default: current directory)")]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Apply safe fixes to the files
        #[arg(long)]
        fix: bool,
    },

    /// List built-in rules
    Rules {
        /// Show rule descriptions
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Output format for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored output
    Human,
    /// Machine-readable JSON
    Json,
    /// GitHub Actions workflow annotations
    Github,
}

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    match cli.command {
        Commands::Lint { paths, format, fix } => {
            let config = ConfigLoader::load_or_default(cli.config.as_deref());
            commands::lint(&paths, &config, format, fix)
        }
        Commands::Rules { verbose } => {
            commands::rules(verbose);
            Ok(0)
        }
    }
}

fn init_tracing(verbosity: u8) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let default_filter = match verbosity {
        0 => "plint=warn",
        1 => "plint=info",
        _ => "plint=debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
