use std::{io, path::PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use tip_cli::{app, config, logging};
use tip_core::{CalculatorVariant, Locale};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Tip calculator.
///
/// Computes a tip from a bill amount, a tip percent and an optional
/// round-up, and prints it formatted for the chosen locale.
#[derive(Debug, Parser)]
#[command(name = "tip-time", version, about)]
struct Cli {
    /// TOML configuration file. Defaults to `tip-time.toml` if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Number-formatting locale (en-US, de-DE, fr-FR, de-CH, posix).
    #[arg(long, global = true)]
    locale: Option<Locale>,

    /// Form layout: `full` (editable tip percent, round-up) or `simple`.
    #[arg(long, global = true)]
    variant: Option<CalculatorVariant>,

    /// Log filter, e.g. `debug` or `tip_core=trace`. Overrides RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate one tip and print it.
    Calc {
        /// Bill amount. Invalid text counts as 0.
        #[arg(long, allow_hyphen_values = true, default_value = "")]
        amount: String,

        /// Tip percent. Invalid text counts as 0; ignored by the simple variant.
        #[arg(long, allow_hyphen_values = true, default_value = "")]
        tip: String,

        /// Round the tip up to the next whole unit.
        #[arg(long)]
        round_up: bool,
    },

    /// Open an interactive form on stdin/stdout (the default).
    Form,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();

    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let file_config = config::load(cli.config.as_deref())?;
    let overrides = config::Overrides {
        variant: cli.variant,
        locale: cli.locale,
    };
    let calculator_config = file_config
        .resolve(&overrides)
        .context("invalid calculator configuration")?;
    debug!(?calculator_config, "configuration resolved");

    let mut stdout = io::stdout().lock();
    match cli.command.unwrap_or(Command::Form) {
        Command::Calc {
            amount,
            tip,
            round_up,
        } => {
            app::run_calc(calculator_config, &amount, &tip, round_up, &mut stdout)?;
        }
        Command::Form => {
            app::run_form(calculator_config, io::stdin().lock(), &mut stdout)?;
        }
    }

    logging::disable_file_logging();
    Ok(())
}
