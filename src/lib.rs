//! gpui_clockface computes analog and digital clock faces as drawable
//! geometry and renders them through a pluggable [`Renderer`].
//! Enable the `gpui` feature for a ready-made GPUI view.

#![forbid(unsafe_code)]

pub mod clock;
pub mod config;
pub mod digital;
pub mod error;
pub mod face;
pub mod geom;
#[cfg(feature = "gpui")]
pub mod gpui_backend;
pub mod reading;
pub mod render;
pub mod style;

pub use clock::{Clock, ClockBuilder, ClockMode};
pub use config::{ClockConfig, DEFAULT_REFRESH_INTERVAL};
pub use digital::{DigitalReading, SUFFIX_SCALE, format_digital_reading};
pub use error::ClockError;
pub use face::{
    FontMetrics, LabelPlacement, LabelRole, Needles, ProportionalMetrics, Segment, SegmentRole,
    TextMeasurer, compute_hour_labels, compute_needles, compute_tick_marks,
};
pub use geom::{FaceSpec, Point};
#[cfg(feature = "gpui")]
pub use gpui_backend::{ClockHandle, GpuiClockView, GpuiRenderer, GpuiTextMeasurer};
pub use reading::{ClockReading, Meridiem};
pub use render::{
    Color, LineStyle, RenderCommand, RenderList, Renderer, TextAnchor, TextRun, TextStyle,
    build_analog_face, build_digital_face,
};
pub use style::{MINOR_TICK_ALPHA, StyleConfig};
