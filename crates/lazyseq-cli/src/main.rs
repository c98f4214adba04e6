//! lazyseq command-line interface.
//!
//! Builds one of the bundled lazy sequences and prints a bounded slice of it.
//!
//! # Quick Start
//!
//! ```bash
//! # The first fifteen fizzbuzz entries
//! lazyseq fizzbuzz
//!
//! # Five naturals starting at the millionth
//! lazyseq naturals --offset 1000000 --count 5
//!
//! # Show the effective configuration
//! lazyseq config
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use commands::sequence::{self, Window};
use lazyseq::Seq;
use lazyseq_config::{ConfigLoader, LazyseqConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// lazyseq - lazy, possibly-infinite sequences.
#[derive(Parser)]
#[command(name = "lazyseq")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Directory searched for lazyseq.toml and lazyseq.local.toml.
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Read configuration from this file only.
    #[arg(long, global = true, value_name = "FILE", conflicts_with = "config_dir")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Slice selection shared by every sequence command.
#[derive(Args, Debug, Clone, Copy)]
struct WindowArgs {
    /// Elements to skip (defaults to display.offset).
    #[arg(short, long, allow_negative_numbers = true)]
    offset: Option<i64>,

    /// Elements to print (defaults to display.count).
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    count: Option<i64>,
}

impl From<WindowArgs> for Window {
    fn from(args: WindowArgs) -> Self {
        Window {
            offset: args.offset,
            count: args.count,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// The natural numbers 0, 1, 2, ...
    Naturals {
        #[command(flatten)]
        window: WindowArgs,
    },

    /// Odd numbers with their running sums.
    Odds {
        /// Number of odd numbers to print.
        #[arg(short = 'n', long, default_value = "5", allow_negative_numbers = true)]
        count: i64,
    },

    /// fizz, buzz and fizzbuzz in place of multiples of 3, 5 and 15.
    Fizzbuzz {
        #[command(flatten)]
        window: WindowArgs,
    },

    /// Repeat the given values forever.
    Cycle {
        /// Values to repeat, in order.
        #[arg(required = true)]
        values: Vec<String>,

        #[command(flatten)]
        window: WindowArgs,
    },

    /// Integers in [START, END), or from START onwards.
    Range {
        #[arg(allow_negative_numbers = true)]
        start: i64,

        #[arg(allow_negative_numbers = true)]
        end: Option<i64>,

        #[command(flatten)]
        window: WindowArgs,
    },

    /// Print the effective configuration.
    Config {
        /// Output format (toml, text).
        #[arg(short, long, default_value = "toml")]
        format: String,
    },
}

fn load_config(cli: &Cli) -> Result<LazyseqConfig> {
    if let Some(path) = &cli.config {
        debug!(path = %path.display(), "loading single config file");
        return LazyseqConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()));
    }

    let mut loader = ConfigLoader::new();
    if let Some(dir) = &cli.config_dir {
        loader = loader.with_project_dir(dir);
    }
    loader.load()
}

fn main() -> Result<()> {
    // Initialize logging; RUST_LOG wins, warn otherwise
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // Needs no configuration, so a broken config file cannot hide it
    if matches!(cli.command, Commands::Version) {
        commands::version::run();
        return Ok(());
    }
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Version => Ok(()),
        Commands::Naturals { window } => {
            sequence::print_slice(&Seq::range_from(0), window.into(), &config)
        }
        Commands::Odds { count } => {
            let window = Window {
                offset: Some(0),
                count: Some(count),
            };
            sequence::print_slice(&sequence::odds()?, window, &config)
        }
        Commands::Fizzbuzz { window } => {
            sequence::print_slice(&sequence::fizzbuzz()?, window.into(), &config)
        }
        Commands::Cycle { values, window } => {
            let seq = Seq::cycle_of(values)?;
            sequence::print_slice(&seq, window.into(), &config)
        }
        Commands::Range { start, end, window } => {
            sequence::print_slice(&sequence::range(start, end), window.into(), &config)
        }
        Commands::Config { format } => commands::config::show(&config, &format),
    }
}
