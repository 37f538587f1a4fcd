//! Tool configuration parsed from environment variables.

use matcher::DisplayUnit;
use matcher::session::SessionOptions;

pub const DEFAULT_ELEVATION_DECIMALS: usize = 0;

/// Upper bound on shown fraction digits; more is noise at model precision.
pub const MAX_ELEVATION_DECIMALS: usize = 6;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("MATCHTOOL_DISPLAY_UNIT: {0}")]
    DisplayUnit(String),
    #[error("MATCHTOOL_ELEVATION_DECIMALS: expected 0..={max}, got '{raw}'")]
    Decimals { raw: String, max: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolConfig {
    pub display_unit: DisplayUnit,
    pub elevation_decimals: usize,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self { display_unit: DisplayUnit::default(), elevation_decimals: DEFAULT_ELEVATION_DECIMALS }
    }
}

impl ToolConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `MATCHTOOL_DISPLAY_UNIT`: `mm` (default) or `ft`
    /// - `MATCHTOOL_ELEVATION_DECIMALS`: default 0
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ToolConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let display_unit = match lookup("MATCHTOOL_DISPLAY_UNIT") {
            Some(raw) => raw.parse::<DisplayUnit>().map_err(ConfigError::DisplayUnit)?,
            None => DisplayUnit::default(),
        };
        let elevation_decimals = match lookup("MATCHTOOL_ELEVATION_DECIMALS") {
            Some(raw) => parse_decimals(&raw)?,
            None => DEFAULT_ELEVATION_DECIMALS,
        };
        Ok(Self { display_unit, elevation_decimals })
    }

    #[must_use]
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions { display_unit: self.display_unit, elevation_decimals: self.elevation_decimals }
    }
}

fn parse_decimals(raw: &str) -> Result<usize, ConfigError> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|d| *d <= MAX_ELEVATION_DECIMALS)
        .ok_or_else(|| ConfigError::Decimals { raw: raw.to_string(), max: MAX_ELEVATION_DECIMALS })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
