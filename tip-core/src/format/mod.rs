//! Locale-aware number formatting for tip display.
//!
//! The formatting policy is pinned rather than read from the host so that
//! the same inputs render identically on every machine.

pub mod locale;
pub mod number_format;

pub use locale::{Locale, LocaleError};
pub use number_format::NumberFormat;
