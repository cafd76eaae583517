//! Drives the interactive form through in-memory input and checks what the
//! user would see.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use tip_cli::app;
use tip_core::{CalculatorConfig, Locale, NumberFormat};

/// Runs a session over `script` and returns the final form plus all output.
fn run(
    config: CalculatorConfig,
    script: &str,
) -> (tip_core::TipForm, String) {
    let mut out = Vec::new();
    let form = app::run_form(config, script.as_bytes(), &mut out).expect("session should run");
    (form, String::from_utf8(out).expect("output is utf-8"))
}

/// The last "Tip Amount" line rendered.
fn last_tip(output: &str) -> &str {
    output
        .lines()
        .filter_map(|line| line.strip_prefix("Tip Amount: "))
        .last()
        .expect("at least one render")
}

#[test]
fn opening_form_renders_blank_state() {
    let (_, output) = run(CalculatorConfig::full(), "");

    assert!(output.starts_with("Calculate Tip\n"));
    assert!(output.contains("Bill Amount: \n"));
    assert!(output.contains("How was the service? \n"));
    assert!(output.contains("Round up tip? off\n"));
    assert_eq!(last_tip(&output), "0");
}

#[test]
fn each_edit_rerenders_with_new_tip() {
    let (form, output) = run(
        CalculatorConfig::full(),
        "amount 50\ntip 18\nround on\n",
    );

    let tips: Vec<&str> = output
        .lines()
        .filter_map(|line| line.strip_prefix("Tip Amount: "))
        .collect();
    assert_eq!(tips, vec!["0", "0", "9", "9"]);
    assert_eq!(form.result().tip, dec!(9));
}

#[test]
fn round_up_changes_fractional_tip() {
    let (_, output) = run(
        CalculatorConfig::full(),
        "amount 10.10\ntip 10\n",
    );
    assert_eq!(last_tip(&output), "1.01");

    let (form, output) = run(
        CalculatorConfig::full(),
        "amount 10.10\ntip 10\nround toggle\n",
    );
    assert_eq!(last_tip(&output), "2");
    assert!(form.result().rounded_up);
    assert_eq!(form.result().tip, dec!(2));
}

#[test]
fn invalid_amount_computes_as_zero_without_error() {
    let (form, output) = run(CalculatorConfig::full(), "tip 20\namount abc\n");

    assert_eq!(last_tip(&output), "0");
    assert_eq!(form.amount_input(), "abc");
    assert!(!output.to_lowercase().contains("error"));
}

#[test]
fn unknown_command_leaves_state_untouched() {
    let (form, output) = run(CalculatorConfig::full(), "amount 10\nfrobnicate\n");

    assert!(output.contains("unknown command 'frobnicate' (type 'help' for commands)"));
    assert_eq!(form.amount_input(), "10");
}

#[test]
fn help_lists_commands() {
    let (_, output) = run(CalculatorConfig::full(), "help\n");

    assert!(output.contains("round on|off|toggle"));
}

#[test]
fn clear_resets_to_zero_tip() {
    let (form, output) = run(
        CalculatorConfig::full(),
        "amount 100\ntip 20\nclear\n",
    );

    assert_eq!(last_tip(&output), "0");
    assert_eq!(form.amount_input(), "");
    assert_eq!(form.tip_percent_input(), "");
}

#[test]
fn simple_form_hides_and_refuses_optional_fields() {
    let (form, output) = run(
        CalculatorConfig::simple(),
        "amount 80\ntip 50\nround on\n",
    );

    assert!(!output.contains("How was the service?"));
    assert!(!output.contains("Round up tip?"));
    assert!(output.contains("Tip percent is fixed at 15%."));
    assert!(output.contains("Round-up is not available in this form."));
    assert_eq!(last_tip(&output), "12");
    assert!(!form.round_up());
}

#[test]
fn locale_controls_rendered_tip() {
    let config = CalculatorConfig::full().with_format(NumberFormat::new(Locale::DeDe));

    let (_, output) = run(config, "amount 12345.6\ntip 10\n");

    assert_eq!(last_tip(&output), "1.234,56");
}

#[test]
fn end_of_input_closes_form() {
    let (form, output) = run(CalculatorConfig::full(), "amount 42");

    assert_eq!(form.amount_input(), "42");
    assert!(output.ends_with("> \n"));
}
