use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a locale tag is not one of the supported locales.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocaleError {
    #[error("unknown locale '{0}' (expected one of: en-US, de-DE, fr-FR, de-CH, posix)")]
    UnknownLocale(String),
}

/// Supported number-formatting locales.
///
/// Each locale pins its grouping and decimal separators. The separators are
/// the ones used for plain numbers, not currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    #[default]
    EnUs,
    DeDe,
    FrFr,
    DeCh,
    Posix,
}

impl Locale {
    pub fn all() -> &'static [Locale] {
        &[
            Locale::EnUs,
            Locale::DeDe,
            Locale::FrFr,
            Locale::DeCh,
            Locale::Posix,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::DeDe => "de-DE",
            Self::FrFr => "fr-FR",
            Self::DeCh => "de-CH",
            Self::Posix => "posix",
        }
    }

    /// Separator inserted between groups of three integer digits.
    ///
    /// `None` for locales that never group.
    pub fn grouping_separator(&self) -> Option<char> {
        match self {
            Self::EnUs => Some(','),
            Self::DeDe => Some('.'),
            // Narrow no-break space.
            Self::FrFr => Some('\u{202F}'),
            Self::DeCh => Some('\u{2019}'),
            Self::Posix => None,
        }
    }

    pub fn decimal_separator(&self) -> char {
        match self {
            Self::EnUs | Self::DeCh | Self::Posix => '.',
            Self::DeDe | Self::FrFr => ',',
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    /// Accepts `en-US` and `en_US` spellings, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-").to_ascii_lowercase();
        match normalized.as_str() {
            "en-us" | "en" => Ok(Self::EnUs),
            "de-de" | "de" => Ok(Self::DeDe),
            "fr-fr" | "fr" => Ok(Self::FrFr),
            "de-ch" => Ok(Self::DeCh),
            "posix" | "c" => Ok(Self::Posix),
            _ => Err(LocaleError::UnknownLocale(s.to_string())),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.as_str().to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
