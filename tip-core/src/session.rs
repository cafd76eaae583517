//! Form session state.
//!
//! A [`TipForm`] owns the text of each field exactly as typed plus the
//! round-up switch. The tip is recomputed from that state every time it is
//! read; nothing is cached and nothing outlives the form.

use std::fmt;

use tracing::debug;

use crate::calculations::{TipCalculator, TipResult};
use crate::models::{CalculatorConfig, DEFAULT_ROUND_UP};

pub const TITLE: &str = "Calculate Tip";
pub const BILL_AMOUNT_LABEL: &str = "Bill Amount";
pub const TIP_PERCENT_LABEL: &str = "How was the service?";
pub const ROUND_UP_LABEL: &str = "Round up tip?";
pub const TIP_AMOUNT_LABEL: &str = "Tip Amount";

/// One open tip form.
#[derive(Debug, Clone, Default)]
pub struct TipForm {
    calculator: TipCalculator,
    amount_input: String,
    tip_percent_input: String,
    round_up: bool,
}

impl TipForm {
    /// Opens an empty form.
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            calculator: TipCalculator::new(config),
            amount_input: String::new(),
            tip_percent_input: String::new(),
            round_up: DEFAULT_ROUND_UP,
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        self.calculator.config()
    }

    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    pub fn tip_percent_input(&self) -> &str {
        &self.tip_percent_input
    }

    pub fn round_up(&self) -> bool {
        self.round_up
    }

    /// Whether the tip percent field is shown.
    pub fn has_tip_percent_field(&self) -> bool {
        self.config().tip_percent_editable()
    }

    /// Whether the round-up switch is shown.
    pub fn has_round_up_switch(&self) -> bool {
        self.config().round_up_enabled
    }

    pub fn set_amount(
        &mut self,
        text: impl Into<String>,
    ) {
        self.amount_input = text.into();
    }

    /// Replaces the tip percent text. Ignored when the field is not shown.
    pub fn set_tip_percent(
        &mut self,
        text: impl Into<String>,
    ) {
        if !self.has_tip_percent_field() {
            debug!("tip percent is fixed, ignoring edit");
            return;
        }
        self.tip_percent_input = text.into();
    }

    /// Sets the round-up switch. Ignored when the switch is not shown.
    pub fn set_round_up(
        &mut self,
        round_up: bool,
    ) {
        if !self.has_round_up_switch() {
            debug!("round-up is disabled, ignoring toggle");
            return;
        }
        self.round_up = round_up;
    }

    pub fn toggle_round_up(&mut self) {
        self.set_round_up(!self.round_up);
    }

    /// Resets every field to its opening state.
    pub fn clear(&mut self) {
        self.amount_input.clear();
        self.tip_percent_input.clear();
        self.round_up = DEFAULT_ROUND_UP;
    }

    /// Recomputes the tip from the current field text.
    pub fn result(&self) -> TipResult {
        self.calculator
            .calculate_text(&self.amount_input, &self.tip_percent_input, self.round_up)
    }

    /// Display string of the current tip.
    pub fn tip(&self) -> String {
        self.result().display
    }
}

impl fmt::Display for TipForm {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f)?;
        writeln!(f, "{BILL_AMOUNT_LABEL}: {}", self.amount_input)?;
        if self.has_tip_percent_field() {
            writeln!(f, "{TIP_PERCENT_LABEL} {}", self.tip_percent_input)?;
        }
        if self.has_round_up_switch() {
            let state = if self.round_up { "on" } else { "off" };
            writeln!(f, "{ROUND_UP_LABEL} {state}")?;
        }
        writeln!(f)?;
        write!(f, "{TIP_AMOUNT_LABEL}: {}", self.tip())
    }
}
