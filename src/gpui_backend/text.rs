use gpui::Window;

use crate::face::{FontMetrics, TextMeasurer};
use crate::render::Color;

use super::paint::shape;

// A representative glyph; all numerals share the line metrics.
const PROBE: &str = "Ⅻ";

/// Measures label font metrics with the GPUI text system.
pub struct GpuiTextMeasurer<'a> {
    window: &'a Window,
}

impl<'a> GpuiTextMeasurer<'a> {
    /// Measure with the given window's text system.
    pub fn new(window: &'a Window) -> Self {
        Self { window }
    }
}

impl TextMeasurer for GpuiTextMeasurer<'_> {
    fn metrics(&self, size: f64) -> FontMetrics {
        let shaped = shape(self.window, PROBE, size as f32, Color::WHITE);
        FontMetrics::new(
            f64::from(f32::from(shaped.ascent)),
            f64::from(f32::from(shaped.descent)),
        )
    }
}
