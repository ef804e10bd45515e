use crate::drawable::{Provider, Surface};
use crate::graphics::GraphicsContext;

/// A single page in a PDF document.
///
/// Pages have a size (width and height in points) and a graphics context
/// that collects the page's vector content. A page is a [`Provider`]: its
/// graphics context is the surface the drawing helpers reach.
///
/// # Example
///
/// ```rust
/// use pdfdraw::{Color, Page};
///
/// let mut page = Page::a4();
///
/// page.graphics()
///     .set_fill_color(Color::red())
///     .rect(100.0, 100.0, 200.0, 150.0)
///     .fill();
/// ```
#[derive(Clone, Debug)]
pub struct Page {
    width: f64,
    height: f64,
    graphics_context: GraphicsContext,
}

impl Page {
    /// Creates a new page with the specified width and height in points.
    ///
    /// Points are 1/72 of an inch.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            graphics_context: GraphicsContext::new(),
        }
    }

    /// Creates a new A4 page (595 x 842 points).
    pub fn a4() -> Self {
        Self::new(595.0, 842.0)
    }

    /// Creates a new US Letter page (612 x 792 points).
    pub fn letter() -> Self {
        Self::new(612.0, 792.0)
    }

    /// Returns a mutable reference to the graphics context for drawing shapes.
    pub fn graphics(&mut self) -> &mut GraphicsContext {
        &mut self.graphics_context
    }

    pub fn graphics_context(&self) -> &GraphicsContext {
        &self.graphics_context
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub(crate) fn generate_content(&self) -> Vec<u8> {
        self.graphics_context.generate_operations()
    }
}

impl Provider for Page {
    fn surface(&mut self) -> Option<&mut dyn Surface> {
        Some(&mut self.graphics_context)
    }
}
