use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::Locale;
use crate::models::ConfigError;

/// Largest fraction precision a [`Decimal`] can carry.
pub const FRACTION_DIGITS_LIMIT: u32 = 28;

/// Number-formatting policy: locale separators plus fraction precision.
///
/// The default mirrors a stock number formatter: at most three fraction
/// digits, no forced trailing zeros, thousands grouping on, `en-US`
/// separators. The last kept digit is rounded half-even.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::{Locale, NumberFormat};
///
/// let format = NumberFormat::default();
/// assert_eq!(format.format(dec!(1234.5)), "1,234.5");
/// assert_eq!(format.format(dec!(4.9995)), "5");
///
/// let german = NumberFormat::new(Locale::DeDe);
/// assert_eq!(german.format(dec!(1234.5)), "1.234,5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    pub locale: Locale,

    /// Fraction digits always printed, padding with zeros.
    pub min_fraction_digits: u32,

    /// Fraction digits kept after rounding.
    pub max_fraction_digits: u32,

    /// Whether integer digits are grouped in threes.
    pub grouping: bool,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            min_fraction_digits: 0,
            max_fraction_digits: 3,
            grouping: true,
        }
    }
}

impl NumberFormat {
    /// Default precision with the given locale's separators.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            ..Default::default()
        }
    }

    /// Checks that the fraction precision is representable and consistent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `max_fraction_digits` exceeds
    /// [`FRACTION_DIGITS_LIMIT`] or `min_fraction_digits` exceeds
    /// `max_fraction_digits`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_fraction_digits > FRACTION_DIGITS_LIMIT {
            return Err(ConfigError::FractionDigitsTooLarge(
                self.max_fraction_digits,
            ));
        }
        if self.min_fraction_digits > self.max_fraction_digits {
            return Err(ConfigError::FractionDigitsInverted {
                min: self.min_fraction_digits,
                max: self.max_fraction_digits,
            });
        }
        Ok(())
    }

    /// Formats `value` for display.
    ///
    /// Out-of-range precision settings are clamped rather than rejected;
    /// call [`NumberFormat::validate`] up front to surface them.
    pub fn format(
        &self,
        value: Decimal,
    ) -> String {
        let max = self.max_fraction_digits.min(FRACTION_DIGITS_LIMIT);
        let min = self.min_fraction_digits.min(max) as usize;

        let rounded = value.round_dp_with_strategy(max, RoundingStrategy::MidpointNearestEven);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let digits = rounded.abs().normalize().to_string();
        let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + min + 1);
        if negative {
            out.push('-');
        }
        self.push_integer(&mut out, integer);

        if !fraction.is_empty() || min > 0 {
            out.push(self.locale.decimal_separator());
            out.push_str(fraction);
            for _ in fraction.len()..min {
                out.push('0');
            }
        }
        out
    }

    fn push_integer(
        &self,
        out: &mut String,
        integer: &str,
    ) {
        let separator = if self.grouping {
            self.locale.grouping_separator()
        } else {
            None
        };
        let Some(separator) = separator else {
            out.push_str(integer);
            return;
        };

        let len = integer.len();
        for (i, digit) in integer.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(separator);
            }
            out.push(digit);
        }
    }
}
