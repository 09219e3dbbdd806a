//! Digital presentation of a reading.

use std::fmt;

use crate::reading::ClockReading;

/// Display scale of the AM/PM suffix relative to the main text.
pub const SUFFIX_SCALE: f32 = 0.3;

/// Format a reading as `HH:MM:SS` followed by `AM` or `PM`.
pub fn format_digital_reading(reading: &ClockReading) -> String {
    DigitalReading::from(*reading).to_string()
}

/// A formatted reading split into its main text and meridiem suffix.
///
/// Hosts draw the suffix smaller than the main text, at [`SUFFIX_SCALE`] by
/// default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitalReading {
    /// Zero-padded `HH:MM:SS`.
    pub main: String,
    /// `AM` or `PM`.
    pub suffix: &'static str,
}

impl From<ClockReading> for DigitalReading {
    fn from(reading: ClockReading) -> Self {
        Self {
            main: format!(
                "{:02}:{:02}:{:02}",
                reading.hour(),
                reading.minute(),
                reading.second()
            ),
            suffix: reading.meridiem().suffix(),
        }
    }
}

impl fmt::Display for DigitalReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.main, self.suffix)
    }
}
