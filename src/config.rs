//! Clock configuration.

use std::time::Duration;

use crate::error::ClockError;
use crate::style::StyleConfig;

/// Default redraw cadence; the second needle moves once per second.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(1000);

/// Options recognized by a [`Clock`](crate::clock::Clock).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClockConfig {
    /// Draw the analog face; when false, draw the digital readout.
    pub show_analog: bool,
    /// Time between redraws.
    #[cfg_attr(feature = "serde", serde(rename = "refresh_interval_ms", with = "millis"))]
    pub refresh_interval: Duration,
    /// Visual style.
    pub style: StyleConfig,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            show_analog: true,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            style: StyleConfig::default(),
        }
    }
}

impl ClockConfig {
    /// Check that the configuration can drive a redraw loop.
    pub fn validate(&self) -> Result<(), ClockError> {
        if self.refresh_interval.is_zero() {
            return Err(ClockError::invalid("refresh interval must be greater than zero"));
        }
        Ok(())
    }

    /// Parse a configuration from TOML. Missing keys take their defaults.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(source: &str) -> Result<Self, ClockError> {
        let config: Self =
            toml::from_str(source).map_err(|err| ClockError::Config(err.to_string()))?;
        config.validate()?;
        log::debug!(
            "loaded clock config: show_analog={}, refresh={:?}",
            config.show_analog,
            config.refresh_interval
        );
        Ok(config)
    }
}

#[cfg(feature = "serde")]
mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(
        value: &Duration,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
