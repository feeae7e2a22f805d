use log::debug;
use serde::Deserialize;

use crate::error::ConfigError;

/// The raw user-supplied option, in one of three shapes: a bare byte limit,
/// an on/off toggle, or a full config record. Deserializes from the JSON
/// shapes `number | boolean | {"maxSize": n, "throwError": bool}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SizeCheckOption {
    Limit(u64),
    Toggle(bool),
    Config {
        #[serde(rename = "maxSize")]
        max_size: u64,
        #[serde(rename = "throwError")]
        throw_error: Option<bool>,
    },
}

/// Resolved active configuration. Whenever the check is active, `max_size`
/// is a concrete threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeCheckConfig {
    pub max_size: u64,
    pub throw_error: bool,
}

/// Outcome of normalizing a raw option: an active configuration, or the
/// no-op sentinel produced by the boolean-false shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalized {
    Active(SizeCheckConfig),
    Disabled,
}

impl SizeCheckOption {
    /// Parse a raw JSON value into an option. Any shape other than a
    /// number, a boolean or a config record with a numeric `maxSize` is
    /// rejected.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value).map_err(|_| ConfigError::InvalidOption)
    }

    pub fn normalize(self) -> Result<Normalized, ConfigError> {
        match self {
            SizeCheckOption::Limit(max_size) => {
                debug!("Bare limit option: {} bytes, throw on violation", max_size);
                Ok(Normalized::Active(SizeCheckConfig { max_size, throw_error: true }))
            }
            SizeCheckOption::Toggle(false) => {
                debug!("Size check disabled by option");
                Ok(Normalized::Disabled)
            }
            // `true` enables the check but leaves no threshold to enforce
            SizeCheckOption::Toggle(true) => Err(ConfigError::MissingMaxSize),
            SizeCheckOption::Config { max_size, throw_error } => {
                let throw_error = throw_error.unwrap_or(true);
                debug!("Config record option: {} bytes, throw_error={}", max_size, throw_error);
                Ok(Normalized::Active(SizeCheckConfig { max_size, throw_error }))
            }
        }
    }
}
