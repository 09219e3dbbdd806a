//! Clock face geometry.
//!
//! Pure functions mapping a [`FaceSpec`] (and optionally a [`ClockReading`])
//! to tick marks, hour labels and needles. Nothing here draws; render
//! backends turn the output into draw calls.

use crate::error::ClockError;
use crate::geom::{FaceSpec, Point, clock_to_trig};
use crate::reading::ClockReading;

const FULL_ANGLE: u32 = 360;
const TICK_STEP: u32 = 6;
const RIGHT_ANGLE: u32 = 90;
const MAJOR_STEP: u32 = 15;

const TICK_OUTER_INSET: f64 = 0.01;
const TICK_INNER_INSET: f64 = 0.05;
const LABEL_DISTANCE: f64 = 0.75;

const HOUR_NEEDLE_LENGTH: f64 = 0.4;
const MINUTE_NEEDLE_LENGTH: f64 = 0.6;
const SECOND_NEEDLE_LENGTH: f64 = 0.85;

const HOUR_GLYPHS: [&str; 12] = ["Ⅻ", "Ⅰ", "Ⅱ", "Ⅲ", "Ⅳ", "Ⅴ", "Ⅵ", "Ⅶ", "Ⅷ", "Ⅸ", "Ⅹ", "Ⅺ"];

/// What a segment depicts, so hosts can style it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentRole {
    /// Emphasized rim tick.
    TickMajor,
    /// Regular rim tick, drawn translucent.
    TickMinor,
    /// Hour needle.
    HourNeedle,
    /// Minute needle.
    MinuteNeedle,
    /// Second needle.
    SecondNeedle,
}

impl SegmentRole {
    /// Whether the role is one of the rim ticks.
    pub fn is_tick(self) -> bool {
        matches!(self, Self::TickMajor | Self::TickMinor)
    }
}

/// A directed line segment with a semantic role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Segment start.
    pub start: Point,
    /// Segment end.
    pub end: Point,
    /// What the segment depicts.
    pub role: SegmentRole,
}

impl Segment {
    /// Create a new segment.
    pub fn new(start: Point, end: Point, role: SegmentRole) -> Self {
        Self { start, end, role }
    }
}

/// Label kinds placed on the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelRole {
    /// Roman numeral at an hour position.
    Hour,
}

/// A text label positioned on the face.
///
/// `anchor` is horizontally centered on the target and vertically sits on
/// the text baseline, so drawing the text centered at `anchor` puts the
/// glyph's vertical middle on `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    /// Glyph to draw.
    pub text: &'static str,
    /// Baseline-corrected, horizontally centered anchor.
    pub anchor: Point,
    /// Target point before baseline correction.
    pub center: Point,
    /// Hour position, `0..=11` with 0 at twelve o'clock.
    pub position: u8,
    /// Label kind.
    pub role: LabelRole,
}

/// Vertical font metrics measured from the baseline.
///
/// Both values are positive distances.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FontMetrics {
    /// Distance from the baseline to the top of the line box.
    pub ascent: f64,
    /// Distance from the baseline to the bottom of the line box.
    pub descent: f64,
}

impl FontMetrics {
    /// Create font metrics.
    pub const fn new(ascent: f64, descent: f64) -> Self {
        Self { ascent, descent }
    }

    /// Offset from the vertical middle of the line box down to the baseline.
    pub fn baseline_offset(&self) -> f64 {
        (self.ascent - self.descent) / 2.0
    }
}

/// Source of font metrics for a text size.
pub trait TextMeasurer {
    /// Metrics of the label font at `size`.
    fn metrics(&self, size: f64) -> FontMetrics;
}

/// Metrics proportional to the font size, for hosts without a text system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProportionalMetrics {
    /// Ascent as a fraction of the font size.
    pub ascent: f64,
    /// Descent as a fraction of the font size.
    pub descent: f64,
}

impl Default for ProportionalMetrics {
    fn default() -> Self {
        Self {
            ascent: 0.8,
            descent: 0.2,
        }
    }
}

impl TextMeasurer for ProportionalMetrics {
    fn metrics(&self, size: f64) -> FontMetrics {
        FontMetrics::new(self.ascent * size, self.descent * size)
    }
}

/// The three needles for one reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Needles {
    /// Hour needle.
    pub hour: Segment,
    /// Minute needle.
    pub minute: Segment,
    /// Second needle.
    pub second: Segment,
}

impl Needles {
    /// Needles in drawing order: hour, minute, second.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        [&self.hour, &self.minute, &self.second].into_iter()
    }
}

/// Compute the 60 rim ticks, one every 6 degrees.
///
/// Angles are trigonometric (0 east, counter-clockwise) in ascending order.
/// Each segment runs from the outer radius inward. A tick is major when its
/// angle is a multiple of 90 or 15 degrees.
pub fn compute_tick_marks(face: &FaceSpec) -> Result<Vec<Segment>, ClockError> {
    face.validate()?;
    let width = face.width();
    let outer = face.radius - width * TICK_OUTER_INSET;
    let inner = face.radius - width * TICK_INNER_INSET;

    let ticks = (0..FULL_ANGLE)
        .step_by(TICK_STEP as usize)
        .map(|angle| {
            let role = if angle % RIGHT_ANGLE != 0 && angle % MAJOR_STEP != 0 {
                SegmentRole::TickMinor
            } else {
                SegmentRole::TickMajor
            };
            let degrees = f64::from(angle);
            Segment::new(
                face.project(degrees, outer),
                face.project(degrees, inner),
                role,
            )
        })
        .collect();
    Ok(ticks)
}

/// Compute the twelve Roman numeral hour labels.
///
/// Labels sit at three quarters of the radius, starting with "Ⅻ" at the top
/// and proceeding clockwise.
pub fn compute_hour_labels(
    face: &FaceSpec,
    metrics: FontMetrics,
) -> Result<Vec<LabelPlacement>, ClockError> {
    face.validate()?;
    let distance = face.radius * LABEL_DISTANCE;
    let baseline_offset = metrics.baseline_offset();

    let labels = HOUR_GLYPHS
        .iter()
        .copied()
        .enumerate()
        .map(|(position, text)| {
            let center = face.project(clock_to_trig(position as f64 * 30.0), distance);
            LabelPlacement {
                text,
                anchor: Point::new(center.x, center.y + baseline_offset),
                center,
                position: position as u8,
                role: LabelRole::Hour,
            }
        })
        .collect();
    Ok(labels)
}

/// Compute hour, minute and second needles for a reading.
///
/// The hour needle advances half a degree per minute and the minute needle a
/// tenth of a degree per second, so both sweep continuously.
pub fn compute_needles(reading: &ClockReading, face: &FaceSpec) -> Result<Needles, ClockError> {
    face.validate()?;
    let hour = f64::from(reading.hour());
    let minute = f64::from(reading.minute());
    let second = f64::from(reading.second());

    let hour_angle = 360.0 / 12.0 * hour + 0.5 * minute;
    let minute_angle = 360.0 / 60.0 * minute + 0.1 * second;
    let second_angle = 360.0 / 60.0 * second;

    let needle = |clock_degrees: f64, length: f64, role: SegmentRole| {
        let end = face.project(clock_to_trig(clock_degrees), face.radius * length);
        Segment::new(face.center, end, role)
    };

    Ok(Needles {
        hour: needle(hour_angle, HOUR_NEEDLE_LENGTH, SegmentRole::HourNeedle),
        minute: needle(minute_angle, MINUTE_NEEDLE_LENGTH, SegmentRole::MinuteNeedle),
        second: needle(second_angle, SECOND_NEEDLE_LENGTH, SegmentRole::SecondNeedle),
    })
}
