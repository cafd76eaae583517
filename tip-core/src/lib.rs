pub mod calculations;
pub mod format;
pub mod input;
pub mod models;
pub mod session;

pub use calculations::{TipCalculator, TipInput, TipResult, compute_tip};
pub use format::{Locale, LocaleError, NumberFormat};
pub use input::{ParseDecimalError, parse_decimal, parse_decimal_or_default};
pub use models::*;
pub use session::TipForm;
