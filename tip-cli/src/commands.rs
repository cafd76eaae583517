//! Line commands understood by the interactive form.
//!
//! | Command                  | Aliases          | Effect                          |
//! |--------------------------|------------------|---------------------------------|
//! | `amount <text>`          | `a`, `bill`      | Replace the bill amount text    |
//! | `tip <text>`             | `t`, `percent`   | Replace the tip percent text    |
//! | `round on\|off\|toggle`  | `r`              | Set or flip the round-up switch |
//! | `clear`                  |                  | Reset every field               |
//! | `show`                   |                  | Redraw the form                 |
//! | `help`                   | `?`              | List commands                   |
//! | `quit`                   | `q`, `exit`      | Close the form                  |
//!
//! Field text is taken verbatim after the command word, so `amount` on its
//! own blanks the field just like deleting its contents would.

use std::str::FromStr;

use thiserror::Error;
use tip_core::TipForm;

pub const HELP: &str = "\
Commands:
  amount <text>          set the bill amount
  tip <text>             set the tip percent
  round on|off|toggle    set the round-up switch
  clear                  reset the form
  show                   redraw the form
  help                   show this list
  quit                   close the form";

/// Errors produced when a line is not a recognised command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("'round' needs one of: on, off, toggle")]
    MissingSwitch,

    #[error("'{0}' is not one of: on, off, toggle")]
    InvalidSwitch(String),
}

/// Desired state of the round-up switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    On,
    Off,
    Toggle,
}

impl FromStr for Switch {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::MissingSwitch),
            "on" | "yes" | "true" => Ok(Self::On),
            "off" | "no" | "false" => Ok(Self::Off),
            "toggle" => Ok(Self::Toggle),
            _ => Err(CommandError::InvalidSwitch(s.to_string())),
        }
    }
}

/// One parsed line of form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Amount(String),
    TipPercent(String),
    RoundUp(Switch),
    Clear,
    Show,
    Help,
    Quit,
}

impl FormCommand {
    /// Whether the command changes the form.
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Self::Amount(_) | Self::TipPercent(_) | Self::RoundUp(_) | Self::Clear
        )
    }

    /// Applies an edit to `form`.
    ///
    /// Returns a notice when the form does not offer the edited field.
    pub fn apply(
        self,
        form: &mut TipForm,
    ) -> Option<String> {
        match self {
            Self::Amount(text) => form.set_amount(text),
            Self::TipPercent(text) => {
                if !form.has_tip_percent_field() {
                    let percent = form.result().tip_percent;
                    return Some(format!("Tip percent is fixed at {percent}%."));
                }
                form.set_tip_percent(text);
            }
            Self::RoundUp(switch) => {
                if !form.has_round_up_switch() {
                    return Some("Round-up is not available in this form.".to_string());
                }
                match switch {
                    Switch::On => form.set_round_up(true),
                    Switch::Off => form.set_round_up(false),
                    Switch::Toggle => form.toggle_round_up(),
                }
            }
            Self::Clear => form.clear(),
            Self::Show | Self::Help | Self::Quit => {}
        }
        None
    }
}

impl FromStr for FormCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line
            .split_once(char::is_whitespace)
            .map(|(verb, rest)| (verb, rest.trim()))
            .unwrap_or((line, ""));

        match verb.to_ascii_lowercase().as_str() {
            "amount" | "a" | "bill" => Ok(Self::Amount(rest.to_string())),
            "tip" | "t" | "percent" => Ok(Self::TipPercent(rest.to_string())),
            "round" | "r" => rest.parse().map(Self::RoundUp),
            "clear" => Ok(Self::Clear),
            "show" | "" => Ok(Self::Show),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(verb.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tip_core::CalculatorConfig;

    use super::*;

    // =========================================================================
    // parsing
    // =========================================================================

    #[test]
    fn parse_field_commands_keep_text_verbatim() {
        assert_eq!(
            "amount 12.50".parse::<FormCommand>(),
            Ok(FormCommand::Amount("12.50".to_string()))
        );
        assert_eq!("a abc".parse::<FormCommand>(), Ok(FormCommand::Amount("abc".to_string())));
        assert_eq!(
            "tip  18 ".parse::<FormCommand>(),
            Ok(FormCommand::TipPercent("18".to_string()))
        );
    }

    #[test]
    fn parse_bare_field_command_blanks_field() {
        assert_eq!("amount".parse::<FormCommand>(), Ok(FormCommand::Amount(String::new())));
    }

    #[test]
    fn parse_round_switches() {
        assert_eq!("round on".parse::<FormCommand>(), Ok(FormCommand::RoundUp(Switch::On)));
        assert_eq!("r OFF".parse::<FormCommand>(), Ok(FormCommand::RoundUp(Switch::Off)));
        assert_eq!("round toggle".parse::<FormCommand>(), Ok(FormCommand::RoundUp(Switch::Toggle)));
    }

    #[test]
    fn parse_round_requires_valid_switch() {
        assert_eq!("round".parse::<FormCommand>(), Err(CommandError::MissingSwitch));
        assert_eq!(
            "round maybe".parse::<FormCommand>(),
            Err(CommandError::InvalidSwitch("maybe".to_string()))
        );
    }

    #[test]
    fn parse_session_commands() {
        assert_eq!("clear".parse::<FormCommand>(), Ok(FormCommand::Clear));
        assert_eq!("".parse::<FormCommand>(), Ok(FormCommand::Show));
        assert_eq!("?".parse::<FormCommand>(), Ok(FormCommand::Help));
        assert_eq!("EXIT".parse::<FormCommand>(), Ok(FormCommand::Quit));
    }

    #[test]
    fn parse_unknown_command() {
        assert_eq!(
            "tipp 5".parse::<FormCommand>(),
            Err(CommandError::Unknown("tipp".to_string()))
        );
    }

    // =========================================================================
    // apply
    // =========================================================================

    #[test]
    fn apply_edits_full_form() {
        let mut form = TipForm::new(CalculatorConfig::full());

        assert_eq!(FormCommand::Amount("33.33".to_string()).apply(&mut form), None);
        assert_eq!(FormCommand::TipPercent("15".to_string()).apply(&mut form), None);
        assert_eq!(FormCommand::RoundUp(Switch::Toggle).apply(&mut form), None);

        assert!(form.round_up());
        assert_eq!(form.tip(), "5");
    }

    #[test]
    fn apply_reports_unavailable_fields() {
        let mut form = TipForm::new(CalculatorConfig::simple());

        assert_eq!(
            FormCommand::TipPercent("30".to_string()).apply(&mut form),
            Some("Tip percent is fixed at 15%.".to_string())
        );
        assert_eq!(
            FormCommand::RoundUp(Switch::On).apply(&mut form),
            Some("Round-up is not available in this form.".to_string())
        );
        assert!(!form.round_up());
    }

    #[test]
    fn is_edit_distinguishes_mutations() {
        assert!(FormCommand::Clear.is_edit());
        assert!(FormCommand::Amount(String::new()).is_edit());
        assert!(!FormCommand::Show.is_edit());
        assert!(!FormCommand::Quit.is_edit());
    }
}
