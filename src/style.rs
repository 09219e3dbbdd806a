//! Clock face styling.

use crate::digital::SUFFIX_SCALE;
use crate::face::SegmentRole;
use crate::geom::FaceSpec;
use crate::render::{Color, LineStyle, TextStyle};

/// Alpha applied to minor rim ticks (140 of 255).
pub const MINOR_TICK_ALPHA: f32 = 140.0 / 255.0;

/// Visual style for a clock face.
///
/// Stroke widths and text sizes are fractions of the face width so the face
/// scales with its bounds. Center dot diameters are absolute.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StyleConfig {
    /// Background fill behind the face.
    pub background: Color,
    /// Rim tick color.
    pub degrees: Color,
    /// Roman numeral color.
    pub hours_values: Color,
    /// Hour needle color.
    pub hours_needle: Color,
    /// Minute needle color.
    pub minutes_needle: Color,
    /// Second needle color.
    pub seconds_needle: Color,
    /// Inner center dot color.
    pub center_inner: Color,
    /// Outer center dot color.
    pub center_outer: Color,
    /// Digital readout color.
    pub numbers: Color,
    /// Alpha multiplier for minor ticks.
    pub minor_tick_alpha: f32,
    /// Tick stroke width as a fraction of face width.
    pub tick_width: f32,
    /// Hour needle stroke width as a fraction of face width.
    pub hour_needle_width: f32,
    /// Minute needle stroke width as a fraction of face width.
    pub minute_needle_width: f32,
    /// Second needle stroke width as a fraction of face width.
    pub second_needle_width: f32,
    /// Hour label font size as a fraction of face width.
    pub label_size: f32,
    /// Digital readout font size as a fraction of face width.
    pub digital_size: f32,
    /// Scale of the AM/PM suffix relative to the digital readout.
    pub suffix_scale: f32,
    /// Outer center dot diameter.
    pub center_outer_diameter: f32,
    /// Inner center dot diameter.
    pub center_inner_diameter: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            degrees: Color::WHITE,
            hours_values: Color::WHITE,
            hours_needle: Color::WHITE,
            minutes_needle: Color::WHITE,
            seconds_needle: Color::LIGHT_GRAY,
            center_inner: Color::LIGHT_GRAY,
            center_outer: Color::WHITE,
            numbers: Color::WHITE,
            minor_tick_alpha: MINOR_TICK_ALPHA,
            tick_width: 0.010,
            hour_needle_width: 0.02,
            minute_needle_width: 0.010,
            second_needle_width: 0.005,
            label_size: 0.09,
            digital_size: 0.2,
            suffix_scale: SUFFIX_SCALE,
            center_outer_diameter: 60.0,
            center_inner_diameter: 30.0,
        }
    }
}

impl StyleConfig {
    /// Create the default style: white on black with a light gray second
    /// needle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stroke style for a segment on the given face.
    pub fn line_style(&self, role: SegmentRole, face: &FaceSpec) -> LineStyle {
        let (color, width) = match role {
            SegmentRole::TickMajor => (self.degrees, self.tick_width),
            SegmentRole::TickMinor => (
                self.degrees.with_alpha(self.degrees.a * self.minor_tick_alpha),
                self.tick_width,
            ),
            SegmentRole::HourNeedle => (self.hours_needle, self.hour_needle_width),
            SegmentRole::MinuteNeedle => (self.minutes_needle, self.minute_needle_width),
            SegmentRole::SecondNeedle => (self.seconds_needle, self.second_needle_width),
        };
        LineStyle {
            color,
            width: width * face.width() as f32,
        }
    }

    /// Text style for hour labels on the given face.
    pub fn label_style(&self, face: &FaceSpec) -> TextStyle {
        TextStyle {
            color: self.hours_values,
            size: self.label_size * face.width() as f32,
        }
    }

    /// Text style for the digital readout on the given face.
    pub fn digital_style(&self, face: &FaceSpec) -> TextStyle {
        TextStyle {
            color: self.numbers,
            size: self.digital_size * face.width() as f32,
        }
    }
}
