use thiserror::Error;

/// Errors raised when a calculator configuration is internally inconsistent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// More fraction digits requested than a decimal can carry.
    #[error("max_fraction_digits must be at most 28, got {0}")]
    FractionDigitsTooLarge(u32),

    #[error("min_fraction_digits ({min}) must not exceed max_fraction_digits ({max})")]
    FractionDigitsInverted { min: u32, max: u32 },

    #[error("unknown calculator variant '{0}' (expected 'full' or 'simple')")]
    UnknownVariant(String),
}
