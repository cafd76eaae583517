//! Front-end entry points: one-shot calculation and the interactive form.
//!
//! Both take their reader/writer as parameters so they can be driven from
//! tests with in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tip_core::session::TIP_AMOUNT_LABEL;
use tip_core::{CalculatorConfig, TipForm, TipResult};
use tracing::{debug, info};

use crate::commands::{FormCommand, HELP};

const PROMPT: &str = "> ";

/// Calculates a single tip from raw field text and prints it.
///
/// The text goes through the same validation as the interactive form, so
/// `"abc"` for the amount prints a zero tip rather than failing.
pub fn run_calc<W: Write>(
    config: CalculatorConfig,
    amount: &str,
    tip_percent: &str,
    round_up: bool,
    out: &mut W,
) -> Result<TipResult> {
    let mut form = TipForm::new(config);
    form.set_amount(amount);
    if !tip_percent.is_empty() {
        form.set_tip_percent(tip_percent);
    }
    if round_up {
        form.set_round_up(true);
    }

    let result = form.result();
    debug!(amount, tip_percent, round_up, tip = %result.tip, "calc");

    writeln!(out, "{TIP_AMOUNT_LABEL}: {}", result.display).context("failed to write output")?;
    Ok(result)
}

/// Runs an interactive form until `quit` or end of input.
///
/// The form is redrawn after every edit. Returns the form as it stood when
/// the session ended.
pub fn run_form<R: BufRead, W: Write>(
    config: CalculatorConfig,
    input: R,
    out: &mut W,
) -> Result<TipForm> {
    let mut form = TipForm::new(config);
    info!(
        tip_percent_field = form.has_tip_percent_field(),
        round_up_switch = form.has_round_up_switch(),
        "form opened"
    );

    render(&form, out)?;
    prompt(out)?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;

        let command = match line.parse::<FormCommand>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{e} (type 'help' for commands)")?;
                prompt(out)?;
                continue;
            }
        };

        if command.is_edit() {
            match command.apply(&mut form) {
                Some(notice) => writeln!(out, "{notice}")?,
                None => render(&form, out)?,
            }
        } else {
            match command {
                FormCommand::Quit => break,
                FormCommand::Help => writeln!(out, "{HELP}")?,
                _ => render(&form, out)?,
            }
        }
        prompt(out)?;
    }

    writeln!(out)?;
    info!("form closed");
    Ok(form)
}

fn render<W: Write>(
    form: &TipForm,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{form}")?;
    writeln!(out)?;
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush().context("failed to flush output")
}
