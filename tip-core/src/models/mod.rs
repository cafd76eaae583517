mod calculator_config;
mod config_error;

pub use calculator_config::{
    CalculatorConfig, CalculatorVariant, DEFAULT_ROUND_UP, DEFAULT_TIP_PERCENT,
    TipPercentSource, USER_ENTRY_FALLBACK,
};
pub use config_error::ConfigError;
