//! Recording test doubles for the drawing interfaces.

#![allow(dead_code)]

use pdfdraw::{DocumentHandle, Drawable, PaintStyle, Provider, Surface};

/// One forwarded primitive, with its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    ClosePath,
    DrawPath(PaintStyle),
    Rect(f64, f64, f64, f64, PaintStyle),
    Line(f64, f64, f64, f64),
    Circle(f64, f64, f64, PaintStyle),
    FillRgb(i32, i32, i32),
    DrawRgb(i32, i32, i32),
}

/// A drawing surface that records every call it receives.
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
}

impl Drawable for Recorder {
    fn move_to(&mut self, x: f64, y: f64) {
        self.calls.push(Call::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.calls.push(Call::LineTo(x, y));
    }

    fn close_path(&mut self) {
        self.calls.push(Call::ClosePath);
    }

    fn draw_path(&mut self, style: PaintStyle) {
        self.calls.push(Call::DrawPath(style));
    }

    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, style: PaintStyle) {
        self.calls.push(Call::Rect(x, y, width, height, style));
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.calls.push(Call::Line(x1, y1, x2, y2));
    }

    fn draw_circle(&mut self, x: f64, y: f64, radius: f64, style: PaintStyle) {
        self.calls.push(Call::Circle(x, y, radius, style));
    }

    fn set_fill_rgb(&mut self, r: i32, g: i32, b: i32) {
        self.calls.push(Call::FillRgb(r, g, b));
    }

    fn set_draw_rgb(&mut self, r: i32, g: i32, b: i32) {
        self.calls.push(Call::DrawRgb(r, g, b));
    }
}

impl Surface for Recorder {
    fn as_drawable(&mut self) -> Option<&mut dyn Drawable> {
        Some(self)
    }
}

/// A surface with no vector drawing support, such as a raster canvas.
#[derive(Debug, Default)]
pub struct RasterCanvas {
    pub pixels: Vec<u8>,
}

impl Surface for RasterCanvas {}

/// Reports whichever surface it was built with.
pub enum FakeProvider {
    Recording(Recorder),
    Raster(RasterCanvas),
    Empty,
}

impl FakeProvider {
    pub fn recording() -> Self {
        FakeProvider::Recording(Recorder::default())
    }

    pub fn calls(&self) -> &[Call] {
        match self {
            FakeProvider::Recording(recorder) => &recorder.calls,
            _ => &[],
        }
    }
}

impl Provider for FakeProvider {
    fn surface(&mut self) -> Option<&mut dyn Surface> {
        match self {
            FakeProvider::Recording(recorder) => Some(recorder),
            FakeProvider::Raster(canvas) => Some(canvas),
            FakeProvider::Empty => None,
        }
    }
}

/// A document builder that may or may not have a provider yet.
pub struct FakeBuilder {
    pub provider: Option<FakeProvider>,
}

impl DocumentHandle for FakeBuilder {
    fn provider(&mut self) -> Option<&mut dyn Provider> {
        self.provider
            .as_mut()
            .map(|provider| provider as &mut dyn Provider)
    }
}
