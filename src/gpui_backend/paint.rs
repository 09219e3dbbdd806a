use gpui::{
    App, BorderStyle, Bounds, Corners, Edges, PathBuilder, ShapedLine, TextRun as GpuiTextRun,
    Window, font, point, px, quad,
};

use crate::geom::Point;
use crate::render::{Color, LineStyle, Renderer, TextAnchor, TextRun, TextStyle};

const FONT_FAMILY: &str = ".SystemUIFont";

/// [`Renderer`] that paints into a GPUI window during the paint phase.
pub struct GpuiRenderer<'a> {
    window: &'a mut Window,
    cx: &'a mut App,
}

impl<'a> GpuiRenderer<'a> {
    /// Wrap a window for painting.
    pub fn new(window: &'a mut Window, cx: &'a mut App) -> Self {
        Self { window, cx }
    }
}

impl Renderer for GpuiRenderer<'_> {
    fn draw_line(&mut self, start: Point, end: Point, style: &LineStyle) {
        let width = style.width.max(0.5);
        let mut builder = PathBuilder::stroke(px(width));
        builder.move_to(to_point(start));
        builder.line_to(to_point(end));
        if let Ok(path) = builder.build() {
            self.window.paint_path(path, to_rgba(style.color));
        }
        // Round caps.
        let cap = width * 0.5;
        for end_point in [start, end] {
            paint_disc(self.window, end_point, cap, style.color);
        }
    }

    fn draw_text(&mut self, anchor: Point, runs: &[TextRun], style: &TextStyle, align: TextAnchor) {
        let window: &Window = &*self.window;
        let shaped: Vec<ShapedLine> = runs
            .iter()
            .filter(|run| !run.text.is_empty())
            .map(|run| shape(window, &run.text, style.size * run.scale, style.color))
            .collect();
        let Some(primary) = shaped.first() else {
            return;
        };

        let ascent = f32::from(primary.ascent);
        let descent = f32::from(primary.descent);
        let baseline = match align {
            TextAnchor::Baseline => anchor.y as f32,
            TextAnchor::Middle => anchor.y as f32 + (ascent - descent) / 2.0,
        };
        let total_width: f32 = shaped.iter().map(|line| f32::from(line.width)).sum();

        let mut x = anchor.x as f32 - total_width / 2.0;
        for line in &shaped {
            let line_ascent = f32::from(line.ascent);
            let line_height = line.ascent + line.descent;
            let origin = point(px(x), px(baseline - line_ascent));
            let _ = line.paint(origin, line_height, self.window, self.cx);
            x += f32::from(line.width);
        }
    }

    fn draw_dot(&mut self, center: Point, diameter: f32, color: Color) {
        paint_disc(self.window, center, diameter * 0.5, color);
    }
}

pub(crate) fn shape(window: &Window, text: &str, size: f32, color: Color) -> ShapedLine {
    let run = GpuiTextRun {
        len: text.len(),
        font: font(FONT_FAMILY),
        color: to_hsla(color),
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    window
        .text_system()
        .shape_line(text.to_string().into(), px(size), &[run], None)
}

fn paint_disc(window: &mut Window, center: Point, radius: f32, color: Color) {
    if radius <= 0.0 {
        return;
    }
    let (x, y) = (center.x as f32, center.y as f32);
    let bounds = Bounds::from_corners(
        point(px(x - radius), px(y - radius)),
        point(px(x + radius), px(y + radius)),
    );
    window.paint_quad(quad(
        bounds,
        Corners::all(px(radius)),
        to_rgba(color),
        Edges::all(px(0.0)),
        to_rgba(color),
        BorderStyle::default(),
    ));
}

fn to_point(value: Point) -> gpui::Point<gpui::Pixels> {
    point(px(value.x as f32), px(value.y as f32))
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}
