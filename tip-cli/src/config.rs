//! Configuration file loading.
//!
//! ## File format
//!
//! TOML. Every key is optional; missing keys fall back to the built-in
//! defaults. Command-line flags win over the file.
//!
//! | Key                          | Type    | Default   | Notes                              |
//! |------------------------------|---------|-----------|------------------------------------|
//! | `variant`                    | string  | `full`    | `full` or `simple`                 |
//! | `fixed_tip_percent`          | decimal | `15`      | Only used by the `simple` variant  |
//! | `locale`                     | string  | `en-US`   | `en-US`, `de-DE`, `fr-FR`, `de-CH`, `posix` |
//! | `format.min_fraction_digits` | integer | `0`       |                                    |
//! | `format.max_fraction_digits` | integer | `3`       | At most 28                         |
//! | `format.grouping`            | bool    | `true`    |                                    |
//!
//! ```toml
//! variant = "simple"
//! fixed_tip_percent = "20"
//! locale = "de-DE"
//!
//! [format]
//! min_fraction_digits = 2
//! max_fraction_digits = 2
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tip_core::{
    CalculatorConfig, CalculatorVariant, ConfigError, Locale, NumberFormat, TipPercentSource,
};
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "tip-time.toml";

/// Errors that can occur while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub variant: Option<CalculatorVariant>,
    pub fixed_tip_percent: Option<Decimal>,
    pub locale: Option<Locale>,
    pub format: FormatSection,
}

/// The `[format]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatSection {
    pub min_fraction_digits: Option<u32>,
    pub max_fraction_digits: Option<u32>,
    pub grouping: Option<bool>,
}

/// Values given on the command line, which take precedence over the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub variant: Option<CalculatorVariant>,
    pub locale: Option<Locale>,
}

impl FileConfig {
    /// Parses configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Merges this file with `overrides` and the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the resulting number format is inconsistent.
    pub fn resolve(
        &self,
        overrides: &Overrides,
    ) -> Result<CalculatorConfig, ConfigError> {
        let variant = overrides.variant.or(self.variant).unwrap_or_default();
        let mut config = CalculatorConfig::for_variant(variant);

        if let (TipPercentSource::Fixed(_), Some(percent)) =
            (config.tip_percent_source, self.fixed_tip_percent)
        {
            config.tip_percent_source = TipPercentSource::Fixed(percent);
        }

        let defaults = NumberFormat::default();
        config.format = NumberFormat {
            locale: overrides.locale.or(self.locale).unwrap_or_default(),
            min_fraction_digits: self
                .format
                .min_fraction_digits
                .unwrap_or(defaults.min_fraction_digits),
            max_fraction_digits: self
                .format
                .max_fraction_digits
                .unwrap_or(defaults.max_fraction_digits),
            grouping: self.format.grouping.unwrap_or(defaults.grouping),
        };

        config.validate()?;
        Ok(config)
    }
}

/// Reads and parses a configuration file.
pub fn load_file(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    FileConfig::from_toml(&text).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the configuration in effect.
///
/// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] in the
/// working directory is used if present, otherwise the defaults.
pub fn load(explicit: Option<&Path>) -> Result<FileConfig, ConfigLoadError> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "loading config");
        return load_file(path);
    }

    let fallback = Path::new(DEFAULT_CONFIG_FILE);
    if fallback.is_file() {
        debug!(path = %fallback.display(), "loading config");
        load_file(fallback)
    } else {
        debug!("no config file, using defaults");
        Ok(FileConfig::default())
    }
}
