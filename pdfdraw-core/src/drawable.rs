//! Interfaces between document builders and their vector drawing surface.
//!
//! A [`DocumentHandle`] reports a [`Provider`], a provider reports a
//! [`Surface`], and a surface may or may not be [`Drawable`]. The accessor
//! functions in [`crate::accessor`] walk that chain and perform the
//! capability query.

use std::fmt;

/// How a closed shape or path is painted.
///
/// Corresponds to the style tokens `"D"` (border only), `"F"` (fill only)
/// and `"DF"` / `"FD"` (both).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaintStyle {
    /// Stroke the outline with the draw color (`"D"`)
    #[default]
    Stroke,
    /// Fill the interior with the fill color (`"F"`)
    Fill,
    /// Fill, then stroke (`"DF"` or `"FD"`)
    FillStroke,
}

impl PaintStyle {
    /// Parses a style token.
    ///
    /// Matching is case-insensitive. An empty or unrecognised token falls back
    /// to [`PaintStyle::Stroke`], so a typo draws an outline instead of
    /// nothing.
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        if token.eq_ignore_ascii_case("F") {
            PaintStyle::Fill
        } else if token.eq_ignore_ascii_case("DF") || token.eq_ignore_ascii_case("FD") {
            PaintStyle::FillStroke
        } else {
            PaintStyle::Stroke
        }
    }

    /// The canonical token for this style.
    pub fn token(&self) -> &'static str {
        match self {
            PaintStyle::Stroke => "D",
            PaintStyle::Fill => "F",
            PaintStyle::FillStroke => "DF",
        }
    }

    /// The PDF path-painting operator for this style.
    pub fn operator(&self) -> &'static str {
        match self {
            PaintStyle::Stroke => "S",
            PaintStyle::Fill => "f",
            PaintStyle::FillStroke => "B",
        }
    }

    pub fn fills(&self) -> bool {
        matches!(self, PaintStyle::Fill | PaintStyle::FillStroke)
    }

    pub fn strokes(&self) -> bool {
        matches!(self, PaintStyle::Stroke | PaintStyle::FillStroke)
    }
}

impl From<&str> for PaintStyle {
    fn from(token: &str) -> Self {
        PaintStyle::from_token(token)
    }
}

impl From<&String> for PaintStyle {
    fn from(token: &String) -> Self {
        PaintStyle::from_token(token)
    }
}

impl fmt::Display for PaintStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// The primitive vector-drawing operations the helpers depend on.
///
/// Coordinates are PDF user-space points. Color channels are forwarded as
/// given; implementations decide how to treat values outside `0..=255`.
pub trait Drawable {
    /// Begins a new subpath at `(x, y)`.
    fn move_to(&mut self, x: f64, y: f64);

    /// Appends a straight segment to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);

    /// Closes the current subpath back to its starting point.
    fn close_path(&mut self);

    /// Paints the current path.
    fn draw_path(&mut self, style: PaintStyle);

    fn draw_rect(&mut self, x: f64, y: f64, width: f64, height: f64, style: PaintStyle);

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64);

    fn draw_circle(&mut self, x: f64, y: f64, radius: f64, style: PaintStyle);

    /// Sets the color used by subsequent fills.
    fn set_fill_rgb(&mut self, r: i32, g: i32, b: i32);

    /// Sets the color used by subsequent strokes.
    fn set_draw_rgb(&mut self, r: i32, g: i32, b: i32);
}

/// Whatever a [`Provider`] exposes as its drawing target.
///
/// Surfaces that support vector drawing override [`Surface::as_drawable`];
/// every other surface keeps the default and is rejected by the accessors.
pub trait Surface {
    fn as_drawable(&mut self) -> Option<&mut dyn Drawable> {
        None
    }
}

/// Reports the surface a document is being drawn onto.
pub trait Provider {
    fn surface(&mut self) -> Option<&mut dyn Surface>;
}

/// A document under construction that can report its provider.
pub trait DocumentHandle {
    fn provider(&mut self) -> Option<&mut dyn Provider>;
}
