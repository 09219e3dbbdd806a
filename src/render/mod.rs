//! Render commands and the renderer seam.
//!
//! These types are backend-agnostic. [`build_analog_face`] and
//! [`build_digital_face`] turn clock geometry into a [`RenderList`], which
//! any [`Renderer`] (such as the GPUI backend) can replay.

use crate::digital::DigitalReading;
use crate::error::ClockError;
use crate::face::{Segment, TextMeasurer, compute_hour_labels, compute_needles, compute_tick_marks};
use crate::geom::{FaceSpec, Point};
use crate::reading::ClockReading;
use crate::style::StyleConfig;

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque light gray (0xCC).
    pub const LIGHT_GRAY: Self = Self::new(0.8, 0.8, 0.8, 1.0);
}

/// Line stroke styling.
///
/// The width is expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            width: 1.0,
        }
    }
}

/// Text styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            size: 12.0,
        }
    }
}

/// A run of text drawn at a multiple of the command's font size.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// Run content.
    pub text: String,
    /// Size multiplier relative to [`TextStyle::size`].
    pub scale: f32,
}

impl TextRun {
    /// Create a run at full scale.
    pub fn new(text: impl Into<String>) -> Self {
        Self::scaled(text, 1.0)
    }

    /// Create a run at the given scale.
    pub fn scaled(text: impl Into<String>, scale: f32) -> Self {
        Self {
            text: text.into(),
            scale,
        }
    }
}

/// How a text command's anchor relates to the drawn text.
///
/// Text is always horizontally centered on the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// The anchor is on the baseline.
    Baseline,
    /// The anchor is the vertical middle of the line box.
    Middle,
}

/// A single drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Draw a line segment.
    Line {
        /// Segment to draw.
        segment: Segment,
        /// Stroke styling.
        style: LineStyle,
    },
    /// Draw one line of text made of runs sharing a baseline.
    Text {
        /// Anchor point.
        anchor: Point,
        /// Runs drawn left to right.
        runs: Vec<TextRun>,
        /// Base styling.
        style: TextStyle,
        /// Anchor interpretation.
        align: TextAnchor,
    },
    /// Draw a filled round dot.
    Dot {
        /// Dot center.
        center: Point,
        /// Dot diameter in pixels.
        diameter: f32,
        /// Fill color.
        color: Color,
    },
}

/// Drawing surface capability implemented per backend.
pub trait Renderer {
    /// Draw a straight line with round caps.
    fn draw_line(&mut self, start: Point, end: Point, style: &LineStyle);

    /// Draw a line of text centered horizontally on `anchor`.
    fn draw_text(&mut self, anchor: Point, runs: &[TextRun], style: &TextStyle, align: TextAnchor);

    /// Draw a filled circle.
    fn draw_dot(&mut self, center: Point, diameter: f32, color: Color);
}

/// Aggregated render commands for one frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the list has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Feed every command to a renderer, in order.
    pub fn replay<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        for command in &self.commands {
            match command {
                RenderCommand::Line { segment, style } => {
                    renderer.draw_line(segment.start, segment.end, style);
                }
                RenderCommand::Text {
                    anchor,
                    runs,
                    style,
                    align,
                } => {
                    renderer.draw_text(*anchor, runs, style, *align);
                }
                RenderCommand::Dot {
                    center,
                    diameter,
                    color,
                } => {
                    renderer.draw_dot(*center, *diameter, *color);
                }
            }
        }
    }

    fn push_segment(&mut self, segment: Segment, style: &StyleConfig, face: &FaceSpec) {
        self.push(RenderCommand::Line {
            segment,
            style: style.line_style(segment.role, face),
        });
    }
}

/// Build the analog face: ticks, hour labels, needles, then the center dot.
pub fn build_analog_face(
    reading: &ClockReading,
    face: &FaceSpec,
    style: &StyleConfig,
    measurer: &dyn TextMeasurer,
) -> Result<RenderList, ClockError> {
    let ticks = compute_tick_marks(face)?;
    let label_style = style.label_style(face);
    let labels = compute_hour_labels(face, measurer.metrics(f64::from(label_style.size)))?;
    let needles = compute_needles(reading, face)?;

    let mut render = RenderList::new();
    for tick in ticks {
        render.push_segment(tick, style, face);
    }
    for label in labels {
        render.push(RenderCommand::Text {
            anchor: label.anchor,
            runs: vec![TextRun::new(label.text)],
            style: label_style,
            align: TextAnchor::Baseline,
        });
    }
    for needle in needles.iter() {
        render.push_segment(*needle, style, face);
    }
    render.push(RenderCommand::Dot {
        center: face.center,
        diameter: style.center_outer_diameter,
        color: style.center_outer,
    });
    render.push(RenderCommand::Dot {
        center: face.center,
        diameter: style.center_inner_diameter,
        color: style.center_inner,
    });
    Ok(render)
}

/// Build the digital face: the formatted reading centered on the face with a
/// smaller meridiem suffix.
pub fn build_digital_face(
    reading: &ClockReading,
    face: &FaceSpec,
    style: &StyleConfig,
) -> Result<RenderList, ClockError> {
    face.validate()?;
    let digital = DigitalReading::from(*reading);
    let mut render = RenderList::new();
    render.push(RenderCommand::Text {
        anchor: face.center,
        runs: vec![
            TextRun::new(digital.main),
            TextRun::scaled(digital.suffix, style.suffix_scale),
        ],
        style: style.digital_style(face),
        align: TextAnchor::Middle,
    });
    Ok(render)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::{ProportionalMetrics, SegmentRole};
    use crate::reading::Meridiem;

    #[derive(Default)]
    struct Recorder {
        lines: Vec<(Point, Point, LineStyle)>,
        texts: Vec<String>,
        dots: Vec<f32>,
    }

    impl Renderer for Recorder {
        fn draw_line(&mut self, start: Point, end: Point, style: &LineStyle) {
            self.lines.push((start, end, *style));
        }

        fn draw_text(
            &mut self,
            _anchor: Point,
            runs: &[TextRun],
            _style: &TextStyle,
            _align: TextAnchor,
        ) {
            self.texts
                .push(runs.iter().map(|run| run.text.as_str()).collect());
        }

        fn draw_dot(&mut self, _center: Point, diameter: f32, _color: Color) {
            self.dots.push(diameter);
        }
    }

    fn face() -> FaceSpec {
        FaceSpec::new(Point::new(120.0, 120.0), 120.0)
    }

    fn reading() -> ClockReading {
        ClockReading::new(10, 8, 37, Meridiem::Pm).expect("valid reading")
    }

    #[test]
    fn analog_face_orders_commands() {
        let style = StyleConfig::default();
        let metrics = ProportionalMetrics::default();
        let render =
            build_analog_face(&reading(), &face(), &style, &metrics).expect("analog face");
        assert_eq!(render.len(), 60 + 12 + 3 + 2);

        let commands = render.commands();
        assert!(matches!(
            commands[0],
            RenderCommand::Line { segment, .. } if segment.role.is_tick()
        ));
        assert!(matches!(
            &commands[60],
            RenderCommand::Text { runs, align: TextAnchor::Baseline, .. } if runs[0].text == "Ⅻ"
        ));
        assert!(matches!(
            commands[72],
            RenderCommand::Line { segment, .. } if segment.role == SegmentRole::HourNeedle
        ));
        assert!(matches!(
            commands[74],
            RenderCommand::Line { segment, .. } if segment.role == SegmentRole::SecondNeedle
        ));
        assert!(matches!(
            commands[76],
            RenderCommand::Dot { diameter, .. } if diameter == style.center_inner_diameter
        ));
    }

    #[test]
    fn replay_visits_every_command() {
        let render = build_analog_face(
            &reading(),
            &face(),
            &StyleConfig::default(),
            &ProportionalMetrics::default(),
        )
        .expect("analog face");
        let mut recorder = Recorder::default();
        render.replay(&mut recorder);
        assert_eq!(recorder.lines.len(), 63);
        assert_eq!(recorder.texts.len(), 12);
        assert_eq!(recorder.texts[3], "Ⅲ");
        assert_eq!(recorder.dots, vec![60.0, 30.0]);
    }

    #[test]
    fn digital_face_has_scaled_suffix() {
        let style = StyleConfig::default();
        let render = build_digital_face(&reading(), &face(), &style).expect("digital face");
        assert_eq!(render.len(), 1);
        let RenderCommand::Text {
            anchor,
            runs,
            align,
            ..
        } = &render.commands()[0]
        else {
            panic!("expected text command");
        };
        assert_eq!(*anchor, face().center);
        assert_eq!(*align, TextAnchor::Middle);
        assert_eq!(runs[0], TextRun::new("10:08:37"));
        assert_eq!(runs[1], TextRun::scaled("PM", 0.3));
    }

    #[test]
    fn builders_reject_degenerate_faces() {
        let bad = FaceSpec::new(Point::new(0.0, 0.0), -5.0);
        let style = StyleConfig::default();
        assert!(build_digital_face(&reading(), &bad, &style).is_err());
        assert!(
            build_analog_face(&reading(), &bad, &style, &ProportionalMetrics::default()).is_err()
        );
    }
}
