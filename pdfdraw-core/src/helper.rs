//! Convenience drawing on top of a [`Drawable`] surface.

use crate::accessor::{extract_drawable, extract_drawable_from_handle};
use crate::drawable::{DocumentHandle, Drawable, PaintStyle, Provider};
use crate::geometry::Point;

/// Forwards common shape and color calls to a borrowed drawing surface.
///
/// A helper may be detached (holding no surface). Every method on a detached
/// helper returns without doing anything, so code that draws optional
/// decorations does not need to branch on whether a surface was found.
///
/// # Example
///
/// ```rust
/// use pdfdraw::{Document, DrawingHelper, Page};
///
/// let mut doc = Document::new();
/// doc.add_page(Page::a4());
///
/// if let Some(mut helper) = DrawingHelper::from_handle(Some(&mut doc)) {
///     helper.set_fill_color(255, 0, 0);
///     helper.draw_rect(10.0, 10.0, 50.0, 20.0, "F");
///     helper.draw_polygon(&[[100.0, 100.0], [150.0, 100.0], [125.0, 140.0]], "DF");
/// }
/// ```
pub struct DrawingHelper<'a> {
    drawable: Option<&'a mut dyn Drawable>,
}

impl<'a> DrawingHelper<'a> {
    /// Wraps a surface directly. `None` produces a detached helper.
    pub fn new(drawable: Option<&'a mut dyn Drawable>) -> Self {
        Self { drawable }
    }

    /// Builds a helper around the surface reported by `provider`.
    ///
    /// Returns `None` when no drawing-capable surface can be extracted.
    pub fn from_provider(provider: Option<&'a mut dyn Provider>) -> Option<Self> {
        extract_drawable(provider).map(|drawable| Self::new(Some(drawable)))
    }

    /// Builds a helper around the surface behind a document handle.
    ///
    /// Returns `None` when no drawing-capable surface can be extracted.
    pub fn from_handle(handle: Option<&'a mut dyn DocumentHandle>) -> Option<Self> {
        extract_drawable_from_handle(handle).map(|drawable| Self::new(Some(drawable)))
    }

    /// Whether the helper holds a surface.
    pub fn is_attached(&self) -> bool {
        self.drawable.is_some()
    }

    /// Draws a rectangle with its lower-left corner at `(x, y)`.
    pub fn draw_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        style: impl Into<PaintStyle>,
    ) {
        let Some(drawable) = self.drawable.as_deref_mut() else {
            return;
        };
        drawable.draw_rect(x, y, width, height, style.into());
    }

    pub fn set_fill_color(&mut self, r: i32, g: i32, b: i32) {
        let Some(drawable) = self.drawable.as_deref_mut() else {
            return;
        };
        drawable.set_fill_rgb(r, g, b);
    }

    pub fn set_draw_color(&mut self, r: i32, g: i32, b: i32) {
        let Some(drawable) = self.drawable.as_deref_mut() else {
            return;
        };
        drawable.set_draw_rgb(r, g, b);
    }

    pub fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let Some(drawable) = self.drawable.as_deref_mut() else {
            return;
        };
        drawable.draw_line(x1, y1, x2, y2);
    }

    pub fn draw_circle(&mut self, x: f64, y: f64, radius: f64, style: impl Into<PaintStyle>) {
        let Some(drawable) = self.drawable.as_deref_mut() else {
            return;
        };
        drawable.draw_circle(x, y, radius, style.into());
    }

    /// Draws a closed polygon through `points`.
    ///
    /// Fewer than three points is not a polygon and draws nothing. Points may
    /// be [`Point`]s, `[x, y]` arrays or `(x, y)` tuples.
    pub fn draw_polygon<P>(&mut self, points: &[P], style: impl Into<PaintStyle>)
    where
        P: Copy + Into<Point>,
    {
        let Some(drawable) = self.drawable.as_deref_mut() else {
            return;
        };
        let [first, rest @ ..] = points else {
            return;
        };
        if rest.len() < 2 {
            return;
        }

        let start: Point = (*first).into();
        drawable.move_to(start.x, start.y);
        for point in rest {
            let point: Point = (*point).into();
            drawable.line_to(point.x, point.y);
        }
        drawable.close_path();
        drawable.draw_path(style.into());
    }

    /// The wrapped surface, for operations the helper does not cover.
    pub fn underlying(&mut self) -> Option<&mut (dyn Drawable + 'a)> {
        self.drawable.as_deref_mut()
    }

    /// Gives back the wrapped surface for the rest of its borrow.
    pub fn into_underlying(self) -> Option<&'a mut dyn Drawable> {
        self.drawable
    }
}

impl Default for DrawingHelper<'_> {
    fn default() -> Self {
        Self::new(None)
    }
}
