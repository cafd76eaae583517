//! Tip amount calculation.
//!
//! ```text
//! tip = (tip_percent / 100) × amount
//! tip = ceil(tip)                      when round-up is on
//! ```
//!
//! The result is formatted with a [`NumberFormat`] for display. Inputs are
//! never range-checked: a negative or enormous bill yields a mathematically
//! consistent tip.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tip_core::{CalculatorConfig, TipCalculator, TipInput};
//!
//! let calculator = TipCalculator::new(CalculatorConfig::full());
//! let result = calculator.calculate(&TipInput {
//!     amount: dec!(50.00),
//!     tip_percent: dec!(18),
//!     round_up: false,
//! });
//!
//! assert_eq!(result.tip, dec!(9));
//! assert_eq!(result.display, "9");
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::calculations::common::{round_up_whole, saturating_mul};
use crate::format::NumberFormat;
use crate::input::parse_decimal_or_default;
use crate::models::{CalculatorConfig, TipPercentSource, USER_ENTRY_FALLBACK};

/// Validated numeric inputs for a tip calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipInput {
    /// Bill total before tip.
    pub amount: Decimal,

    /// Tip as a percentage of the bill (`18` means 18%).
    pub tip_percent: Decimal,

    /// Whether to raise the tip to the next whole unit.
    pub round_up: bool,
}

impl TipInput {
    /// Builds an input from raw form text.
    ///
    /// Blank or invalid numeric text becomes [`USER_ENTRY_FALLBACK`].
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use rust_decimal_macros::dec;
    /// use tip_core::TipInput;
    ///
    /// let input = TipInput::from_text("abc", "18", true);
    /// assert_eq!(input.amount, Decimal::ZERO);
    /// assert_eq!(input.tip_percent, dec!(18));
    /// ```
    pub fn from_text(
        amount: &str,
        tip_percent: &str,
        round_up: bool,
    ) -> Self {
        Self {
            amount: parse_decimal_or_default(amount, USER_ENTRY_FALLBACK),
            tip_percent: parse_decimal_or_default(tip_percent, USER_ENTRY_FALLBACK),
            round_up,
        }
    }
}

/// Outcome of a tip calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipResult {
    /// Tip amount after optional round-up, before display rounding.
    pub tip: Decimal,

    /// Tip percent actually applied, after configuration overrides.
    pub tip_percent: Decimal,

    /// `true` when round-up changed the tip.
    pub rounded_up: bool,

    /// Tip formatted for display.
    pub display: String,
}

/// Calculates the raw tip amount.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::tip_amount;
///
/// assert_eq!(tip_amount(dec!(33.33), dec!(15), false), dec!(4.9995));
/// assert_eq!(tip_amount(dec!(33.33), dec!(15), true), dec!(5));
/// ```
pub fn tip_amount(
    amount: Decimal,
    tip_percent: Decimal,
    round_up: bool,
) -> Decimal {
    let rate = tip_percent / Decimal::ONE_HUNDRED;
    let tip = saturating_mul(rate, amount);
    if round_up { round_up_whole(tip) } else { tip }
}

/// Calculates the tip and formats it for display.
///
/// Never fails for numeric input.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use tip_core::{DEFAULT_ROUND_UP, DEFAULT_TIP_PERCENT, NumberFormat, compute_tip};
///
/// let format = NumberFormat::default();
///
/// assert_eq!(compute_tip(dec!(50), dec!(18), false, &format), "9");
/// assert_eq!(compute_tip(dec!(33.33), DEFAULT_TIP_PERCENT, DEFAULT_ROUND_UP, &format), "5");
/// assert_eq!(compute_tip(Decimal::ZERO, DEFAULT_TIP_PERCENT, DEFAULT_ROUND_UP, &format), "0");
/// ```
pub fn compute_tip(
    amount: Decimal,
    tip_percent: Decimal,
    round_up: bool,
    format: &NumberFormat,
) -> String {
    format.format(tip_amount(amount, tip_percent, round_up))
}

/// Tip calculator bound to a [`CalculatorConfig`].
///
/// The configuration decides where the tip percent comes from and whether
/// round-up is honoured; [`TipCalculator::calculate`] applies both before
/// delegating to [`tip_amount`].
#[derive(Debug, Clone, Default)]
pub struct TipCalculator {
    config: CalculatorConfig,
}

impl TipCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Tip percent to apply given what the user entered.
    pub fn effective_tip_percent(
        &self,
        entered: Decimal,
    ) -> Decimal {
        match self.config.tip_percent_source {
            TipPercentSource::UserEntered => entered,
            TipPercentSource::Fixed(percent) => percent,
        }
    }

    /// Whether to round up given what the user asked for.
    pub fn effective_round_up(
        &self,
        requested: bool,
    ) -> bool {
        self.config.round_up_enabled && requested
    }

    /// Calculates the tip for already-validated input.
    pub fn calculate(
        &self,
        input: &TipInput,
    ) -> TipResult {
        let tip_percent = self.effective_tip_percent(input.tip_percent);
        let round_up = self.effective_round_up(input.round_up);

        let exact = tip_amount(input.amount, tip_percent, false);
        let tip = if round_up { round_up_whole(exact) } else { exact };
        let display = self.config.format.format(tip);

        trace!(amount = %input.amount, %tip_percent, round_up, %tip, "calculated tip");

        TipResult {
            tip,
            tip_percent,
            rounded_up: tip != exact,
            display,
        }
    }

    /// Validates raw form text and calculates the tip.
    pub fn calculate_text(
        &self,
        amount: &str,
        tip_percent: &str,
        round_up: bool,
    ) -> TipResult {
        self.calculate(&TipInput::from_text(amount, tip_percent, round_up))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::format::Locale;
    use crate::models::{DEFAULT_ROUND_UP, DEFAULT_TIP_PERCENT};

    fn full() -> TipCalculator {
        TipCalculator::new(CalculatorConfig::full())
    }

    fn simple() -> TipCalculator {
        TipCalculator::new(CalculatorConfig::simple())
    }

    fn input(
        amount: Decimal,
        tip_percent: Decimal,
        round_up: bool,
    ) -> TipInput {
        TipInput {
            amount,
            tip_percent,
            round_up,
        }
    }

    // =========================================================================
    // tip_amount tests
    // =========================================================================

    #[test]
    fn tip_amount_is_percent_of_amount() {
        assert_eq!(tip_amount(dec!(50), dec!(18), false), dec!(9));
        assert_eq!(tip_amount(dec!(80), dec!(12.5), false), dec!(10));
    }

    #[test]
    fn tip_amount_round_up_uses_ceiling() {
        assert_eq!(tip_amount(dec!(33.33), dec!(15), true), dec!(5));
        assert_eq!(tip_amount(dec!(10.10), dec!(10), true), dec!(2));
    }

    #[test]
    fn tip_amount_accepts_negative_inputs() {
        assert_eq!(tip_amount(dec!(-50), dec!(18), false), dec!(-9));
        assert_eq!(tip_amount(dec!(-33.33), dec!(15), true), dec!(-4));
    }

    #[test]
    fn tip_amount_saturates_instead_of_overflowing() {
        assert_eq!(tip_amount(Decimal::MAX, dec!(200), false), Decimal::MAX);
        assert_eq!(tip_amount(Decimal::MIN, dec!(200), true), Decimal::MIN);
    }

    // =========================================================================
    // compute_tip scenarios
    // =========================================================================

    #[test]
    fn compute_tip_scenario_integral_tip() {
        let format = NumberFormat::default();

        assert_eq!(compute_tip(dec!(50.0), dec!(18.0), false, &format), "9");
    }

    #[test]
    fn compute_tip_scenario_round_up_of_integral_tip() {
        let format = NumberFormat::default();

        assert_eq!(compute_tip(dec!(50.0), dec!(18.0), true, &format), "9");
    }

    #[test]
    fn compute_tip_scenario_display_rounding() {
        let format = NumberFormat::default();

        assert_eq!(
            compute_tip(dec!(33.33), DEFAULT_TIP_PERCENT, false, &format),
            "5"
        );
    }

    #[test]
    fn compute_tip_scenario_blank_amount() {
        let format = NumberFormat::default();

        assert_eq!(
            compute_tip(Decimal::ZERO, DEFAULT_TIP_PERCENT, DEFAULT_ROUND_UP, &format),
            "0"
        );
    }

    #[test]
    fn compute_tip_is_idempotent() {
        let format = NumberFormat::new(Locale::DeDe);
        let first = compute_tip(dec!(1234.56), dec!(17.5), false, &format);
        let second = compute_tip(dec!(1234.56), dec!(17.5), false, &format);

        assert_eq!(first, second);
        assert_eq!(first, "216,048");
    }

    // =========================================================================
    // TipCalculator tests
    // =========================================================================

    #[test]
    fn calculate_full_uses_entered_percent() {
        let result = full().calculate(&input(dec!(50), dec!(18), false));

        assert_eq!(
            result,
            TipResult {
                tip: dec!(9),
                tip_percent: dec!(18),
                rounded_up: false,
                display: "9".to_string(),
            }
        );
    }

    #[test]
    fn calculate_full_reports_when_round_up_changed_tip() {
        let result = full().calculate(&input(dec!(33.33), dec!(15), true));

        assert_eq!(result.tip, dec!(5));
        assert!(result.rounded_up);
    }

    #[test]
    fn calculate_full_round_up_of_integral_tip_is_noop() {
        let result = full().calculate(&input(dec!(50), dec!(18), true));

        assert_eq!(result.tip, dec!(9));
        assert!(!result.rounded_up);
    }

    #[test]
    fn calculate_simple_ignores_entered_percent() {
        let result = simple().calculate(&input(dec!(100), dec!(30), false));

        assert_eq!(result.tip_percent, dec!(15));
        assert_eq!(result.display, "15");
    }

    #[test]
    fn calculate_simple_never_rounds_up() {
        let result = simple().calculate(&input(dec!(33.33), dec!(0), true));

        assert_eq!(result.tip, dec!(4.9995));
        assert!(!result.rounded_up);
        assert_eq!(result.display, "5");
    }

    #[test]
    fn calculate_text_treats_garbage_amount_as_zero() {
        let result = full().calculate_text("abc", "18", false);

        assert_eq!(result.tip, Decimal::ZERO);
        assert_eq!(result.display, "0");
    }

    #[test]
    fn calculate_text_treats_blank_percent_as_zero() {
        let result = full().calculate_text("50", "", false);

        assert_eq!(result.tip_percent, Decimal::ZERO);
        assert_eq!(result.display, "0");
    }

    #[test]
    fn calculate_text_accepts_partial_entry() {
        let result = full().calculate_text("100.", "1", false);

        assert_eq!(result.display, "1");
    }

    #[test]
    fn calculate_respects_configured_format() {
        let calculator = TipCalculator::new(
            CalculatorConfig::full().with_format(NumberFormat {
                min_fraction_digits: 2,
                max_fraction_digits: 2,
                ..NumberFormat::new(Locale::FrFr)
            }),
        );

        let result = calculator.calculate(&input(dec!(12345.60), dec!(20), false));

        assert_eq!(result.display, "2\u{202F}469,12");
    }
}
