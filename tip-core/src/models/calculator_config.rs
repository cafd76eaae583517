use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::format::NumberFormat;

/// Tip percent used when the form does not let the user choose one.
pub const DEFAULT_TIP_PERCENT: Decimal = Decimal::from_parts(15, 0, 0, false, 0);

/// Round-up state of a freshly opened form.
pub const DEFAULT_ROUND_UP: bool = false;

/// Value substituted for blank or invalid numeric entry.
pub const USER_ENTRY_FALLBACK: Decimal = Decimal::ZERO;

/// Where the tip percent comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipPercentSource {
    /// Typed by the user; blank or invalid text counts as
    /// [`USER_ENTRY_FALLBACK`].
    #[default]
    UserEntered,

    /// Fixed by configuration; any user text is ignored.
    Fixed(Decimal),
}

/// The two shipped form layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculatorVariant {
    /// Editable tip percent and a round-up toggle.
    #[default]
    Full,

    /// Bill amount only; tip fixed at [`DEFAULT_TIP_PERCENT`], never rounded.
    Simple,
}

impl CalculatorVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Simple => "simple",
        }
    }
}

impl FromStr for CalculatorVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "simple" => Ok(Self::Simple),
            _ => Err(ConfigError::UnknownVariant(s.to_string())),
        }
    }
}

impl fmt::Display for CalculatorVariant {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for a [`TipCalculator`](crate::TipCalculator).
///
/// Both form layouts are expressed through the same two switches rather
/// than separate code paths.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::{CalculatorConfig, TipPercentSource};
///
/// let config = CalculatorConfig::simple();
/// assert_eq!(config.tip_percent_source, TipPercentSource::Fixed(dec!(15)));
/// assert!(!config.round_up_enabled);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub tip_percent_source: TipPercentSource,

    /// Whether the round-up toggle is offered. When `false` the tip is
    /// never rounded, whatever the caller asks for.
    pub round_up_enabled: bool,

    pub format: NumberFormat,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::full()
    }
}

impl CalculatorConfig {
    /// User-entered tip percent with the round-up toggle.
    pub fn full() -> Self {
        Self {
            tip_percent_source: TipPercentSource::UserEntered,
            round_up_enabled: true,
            format: NumberFormat::default(),
        }
    }

    /// Fixed tip percent of [`DEFAULT_TIP_PERCENT`], no round-up.
    pub fn simple() -> Self {
        Self {
            tip_percent_source: TipPercentSource::Fixed(DEFAULT_TIP_PERCENT),
            round_up_enabled: false,
            format: NumberFormat::default(),
        }
    }

    /// Builds the preset for `variant`.
    pub fn for_variant(variant: CalculatorVariant) -> Self {
        match variant {
            CalculatorVariant::Full => Self::full(),
            CalculatorVariant::Simple => Self::simple(),
        }
    }

    /// Replaces the number format.
    pub fn with_format(
        mut self,
        format: NumberFormat,
    ) -> Self {
        self.format = format;
        self
    }

    /// Whether the user is offered a tip percent field.
    pub fn tip_percent_editable(&self) -> bool {
        matches!(self.tip_percent_source, TipPercentSource::UserEntered)
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the number format is inconsistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.format.validate()
    }
}
