mod color;

pub use color::Color;

use crate::drawable::{Drawable, PaintStyle, Surface};
use std::fmt::Write;

/// Bézier control-point distance for a quarter circle of radius 1.
const KAPPA: f64 = 0.552284749831;

/// Accumulates the content-stream operators of one page.
///
/// The chaining methods write operators as they are called. Fill and stroke
/// colors are state: a changed color is emitted before the next path starts,
/// so a color set in the middle of a path applies to the following one.
#[derive(Clone, Debug)]
pub struct GraphicsContext {
    operations: String,
    fill_color: Color,
    stroke_color: Color,
    line_width: f64,
    /// Colors currently in effect in the content stream, as (fill, stroke).
    applied: (Color, Color),
    /// `applied` at each unmatched `q`.
    saved: Vec<(Color, Color)>,
    in_path: bool,
}

impl Default for GraphicsContext {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsContext {
    pub fn new() -> Self {
        Self {
            operations: String::new(),
            fill_color: Color::black(),
            stroke_color: Color::black(),
            line_width: 1.0,
            applied: (Color::black(), Color::black()),
            saved: Vec::new(),
            in_path: false,
        }
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.begin_path();
        let _ = writeln!(self.operations, "{x:.2} {y:.2} m");
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.begin_path();
        let _ = writeln!(self.operations, "{x:.2} {y:.2} l");
        self
    }

    pub fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> &mut Self {
        self.begin_path();
        let _ = writeln!(
            self.operations,
            "{x1:.2} {y1:.2} {x2:.2} {y2:.2} {x3:.2} {y3:.2} c"
        );
        self
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.begin_path();
        let _ = writeln!(self.operations, "{x:.2} {y:.2} {width:.2} {height:.2} re");
        self
    }

    /// Adds a closed circle subpath built from four cubic Béziers.
    pub fn circle(&mut self, cx: f64, cy: f64, radius: f64) -> &mut Self {
        let r = radius;
        let k = KAPPA * r;

        self.move_to(cx + r, cy);
        self.curve_to(cx + r, cy + k, cx + k, cy + r, cx, cy + r);
        self.curve_to(cx - k, cy + r, cx - r, cy + k, cx - r, cy);
        self.curve_to(cx - r, cy - k, cx - k, cy - r, cx, cy - r);
        self.curve_to(cx + k, cy - r, cx + r, cy - k, cx + r, cy);
        self.close_path()
    }

    pub fn close_path(&mut self) -> &mut Self {
        self.operations.push_str("h\n");
        self
    }

    pub fn stroke(&mut self) -> &mut Self {
        self.end_path("S\n")
    }

    pub fn fill(&mut self) -> &mut Self {
        self.end_path("f\n")
    }

    pub fn fill_stroke(&mut self) -> &mut Self {
        self.end_path("B\n")
    }

    /// Paints the current path according to `style`.
    pub fn paint(&mut self, style: PaintStyle) -> &mut Self {
        match style {
            PaintStyle::Stroke => self.stroke(),
            PaintStyle::Fill => self.fill(),
            PaintStyle::FillStroke => self.fill_stroke(),
        }
    }

    pub fn set_stroke_color(&mut self, color: Color) -> &mut Self {
        self.stroke_color = color;
        self
    }

    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        self.fill_color = color;
        self
    }

    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        self.line_width = width;
        let _ = writeln!(self.operations, "{width:.2} w");
        self
    }

    pub fn save_state(&mut self) -> &mut Self {
        self.saved.push(self.applied);
        self.operations.push_str("q\n");
        self
    }

    pub fn restore_state(&mut self) -> &mut Self {
        if let Some(applied) = self.saved.pop() {
            self.applied = applied;
        }
        self.operations.push_str("Q\n");
        self
    }

    pub fn translate(&mut self, tx: f64, ty: f64) -> &mut Self {
        let _ = writeln!(self.operations, "1 0 0 1 {tx:.2} {ty:.2} cm");
        self
    }

    /// Color operators are not allowed inside a path object, so pending
    /// color changes are written before its first construction operator.
    fn begin_path(&mut self) {
        if self.in_path {
            return;
        }
        let (fill, stroke) = self.applied;
        if self.fill_color != fill {
            self.operations.push_str(&self.fill_color.fill_operator());
            self.operations.push('\n');
        }
        if self.stroke_color != stroke {
            self.operations.push_str(&self.stroke_color.stroke_operator());
            self.operations.push('\n');
        }
        self.applied = (self.fill_color, self.stroke_color);
        self.in_path = true;
    }

    fn end_path(&mut self, operator: &str) -> &mut Self {
        self.operations.push_str(operator);
        self.in_path = false;
        self
    }

    pub(crate) fn generate_operations(&self) -> Vec<u8> {
        self.operations.as_bytes().to_vec()
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// The operators written so far.
    pub fn operations(&self) -> &str {
        &self.operations
    }

    /// Drops the written operators. The next path re-emits any color that
    /// differs from the PDF default.
    pub fn clear(&mut self) {
        self.operations.clear();
        self.applied = (Color::black(), Color::black());
        self.saved.clear();
        self.in_path = false;
    }
}

impl Surface for GraphicsContext {
    fn as_drawable(&mut self) -> Option<&mut dyn Drawable> {
        Some(self)
    }
}

impl Drawable for GraphicsContext {
    fn move_to(&mut self, x: f64, y: f64) {
        GraphicsContext::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        GraphicsContext::line_to(self, x, y);
    }

    fn close_path(&mut self) {
        GraphicsContext::close_path(self);
    }

    fn draw_path(&mut self, style: PaintStyle) {
        self.paint(style);
    }

    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, style: PaintStyle) {
        self.rect(x, y, width, height).paint(style);
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        GraphicsContext::move_to(self, x1, y1)
            .line_to(x2, y2)
            .stroke();
    }

    fn draw_circle(&mut self, x: f64, y: f64, radius: f64, style: PaintStyle) {
        self.circle(x, y, radius).paint(style);
    }

    fn set_fill_rgb(&mut self, r: i32, g: i32, b: i32) {
        self.set_fill_color(Color::from_rgb8(r, g, b));
    }

    fn set_draw_rgb(&mut self, r: i32, g: i32, b: i32) {
        self.set_stroke_color(Color::from_rgb8(r, g, b));
    }
}
