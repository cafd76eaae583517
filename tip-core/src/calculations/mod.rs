//! Tip calculation.
//!
//! [`compute_tip`] is the bare contract: numbers in, display string out.
//! [`TipCalculator`] layers a [`CalculatorConfig`](crate::CalculatorConfig)
//! on top so one component serves both form layouts.

pub mod common;
pub mod tip;

pub use tip::{TipCalculator, TipInput, TipResult, compute_tip, tip_amount};
