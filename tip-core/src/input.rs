//! Best-effort numeric parsing for live form fields.
//!
//! Text typed into a form is frequently incomplete (`"1."`, `"-"`) or just
//! wrong (`"abc"`). [`parse_decimal_or_default`] never fails: anything that
//! is not a complete decimal literal is replaced by the caller's default so
//! the tip can be recomputed on every keystroke.
//!
//! ## Accepted syntax
//!
//! | Form            | Example        |
//! |-----------------|----------------|
//! | integer         | `42`, `-7`     |
//! | fraction        | `3.14`, `.5`   |
//! | trailing dot    | `1.`           |
//! | exponent        | `1e3`, `2.5E-2`|
//!
//! Surrounding whitespace is ignored. Grouping separators (`1,234`),
//! `NaN`, `Infinity` and values outside the [`Decimal`] range are rejected.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, trace};

/// Integer digits in [`Decimal::MAX`].
const MAX_INTEGER_DIGITS: i64 = 29;

/// Leading fractional zeros at which a value rounds to zero.
const MAX_FRACTION_DIGITS: i64 = 28;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseDecimalError {
    /// Input was empty or whitespace only.
    #[error("empty input")]
    Empty,

    /// Input is not a decimal literal.
    #[error("invalid decimal '{0}'")]
    InvalidSyntax(String),

    /// Input is a decimal literal whose magnitude does not fit in a [`Decimal`].
    #[error("decimal '{0}' is out of range")]
    OutOfRange(String),
}

/// The pieces of a syntactically valid literal, borrowed from the input.
#[derive(Debug)]
struct Literal<'a> {
    negative: bool,
    integer: &'a str,
    fraction: &'a str,
    exponent: i64,
}

impl Literal<'_> {
    fn split(s: &str) -> Option<Literal<'_>> {
        let (negative, rest) = match s.as_bytes().first()? {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };

        let (mantissa, exponent) = match rest.find(['e', 'E']) {
            Some(pos) => (&rest[..pos], parse_exponent(&rest[pos + 1..])?),
            None => (rest, 0),
        };

        let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if integer.is_empty() && fraction.is_empty() {
            return None;
        }
        if !is_digits(integer) || !is_digits(fraction) {
            return None;
        }

        Some(Literal {
            negative,
            integer,
            fraction,
            exponent,
        })
    }

    /// Shifts the decimal point by the exponent in text, then parses once.
    ///
    /// Digits past the 28th fractional place are rounded by [`Decimal`]'s own
    /// parser. Returns `None` when the integer part does not fit.
    fn to_decimal(&self) -> Option<Decimal> {
        let digits = format!("{}{}", self.integer, self.fraction);
        let significant = digits.trim_start_matches('0');
        let leading_zeros = (digits.len() - significant.len()) as i64;
        let significant = significant.trim_end_matches('0');
        if significant.is_empty() {
            return Some(Decimal::ZERO);
        }

        // Position of the decimal point relative to the first significant digit.
        let point = (self.integer.len() as i64)
            .saturating_add(self.exponent)
            .saturating_sub(leading_zeros);
        if point > MAX_INTEGER_DIGITS {
            return None;
        }
        if point <= -MAX_FRACTION_DIGITS {
            return Some(Decimal::ZERO);
        }

        let len = significant.len() as i64;
        let sign = if self.negative { "-" } else { "" };
        let text = if point <= 0 {
            let zeros = "0".repeat(point.unsigned_abs() as usize);
            format!("{sign}0.{zeros}{significant}")
        } else if point >= len {
            let zeros = "0".repeat((point - len) as usize);
            format!("{sign}{significant}{zeros}")
        } else {
            let (whole, frac) = significant.split_at(point as usize);
            format!("{sign}{whole}.{frac}")
        };
        Decimal::from_str(&text).ok()
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

/// Parses the text after `e`/`E`. Exponents too large for `i64` saturate,
/// which later turns into an out-of-range value or zero.
fn parse_exponent(s: &str) -> Option<i64> {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if digits.is_empty() || !is_digits(digits) {
        return None;
    }
    Some(s.parse::<i64>().unwrap_or(if s.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    }))
}

/// Parses a string into a [`Decimal`].
///
/// # Errors
///
/// Returns [`ParseDecimalError`] when the trimmed input is empty, is not a
/// decimal literal, or does not fit in a [`Decimal`].
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::{ParseDecimalError, parse_decimal};
///
/// assert_eq!(parse_decimal("33.33"), Ok(dec!(33.33)));
/// assert_eq!(parse_decimal("2.5e1"), Ok(dec!(25)));
/// assert_eq!(parse_decimal(""), Err(ParseDecimalError::Empty));
/// ```
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseDecimalError::Empty);
    }

    let literal =
        Literal::split(trimmed).ok_or_else(|| ParseDecimalError::InvalidSyntax(s.to_string()))?;
    literal
        .to_decimal()
        .ok_or_else(|| ParseDecimalError::OutOfRange(s.to_string()))
}

/// Parses a string into a [`Decimal`], substituting `default` on failure.
///
/// Never fails. Empty, partial and non-numeric input all yield `default`.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use tip_core::parse_decimal_or_default;
///
/// assert_eq!(parse_decimal_or_default("50", Decimal::ZERO), dec!(50));
/// assert_eq!(parse_decimal_or_default("abc", Decimal::ZERO), Decimal::ZERO);
/// assert_eq!(parse_decimal_or_default("", dec!(15)), dec!(15));
/// ```
pub fn parse_decimal_or_default(
    s: &str,
    default: Decimal,
) -> Decimal {
    match parse_decimal(s) {
        Ok(value) => value,
        Err(ParseDecimalError::Empty) => {
            trace!(%default, "empty input, using default");
            default
        }
        Err(e) => {
            debug!(input = %s, %default, "{e}, using default");
            default
        }
    }
}
