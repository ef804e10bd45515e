//! # pdfdraw
//!
//! Drawing helpers that reach through a PDF document builder to its vector
//! graphics surface.
//!
//! A document builder ([`DocumentHandle`]) reports a [`Provider`], which
//! reports the [`Surface`] its content is drawn onto. When that surface
//! supports the [`Drawable`] primitives, the [`accessor`] functions hand it
//! back and a [`DrawingHelper`] can forward rectangles, lines, circles,
//! polygons and colors to it.
//!
//! The crate ships a small built-in backend ([`Document`], [`Page`],
//! [`GraphicsContext`]) that writes PDF 1.7 files, and the traits can be
//! implemented for any other drawing library or test double.
//!
//! ## Quick Start
//!
//! ```rust
//! use pdfdraw::{Document, DrawingHelper, Page, Result};
//!
//! # fn main() -> Result<()> {
//! let mut doc = Document::new();
//! doc.set_title("Shapes");
//! doc.add_page(Page::a4());
//!
//! if let Some(mut helper) = DrawingHelper::from_handle(Some(&mut doc)) {
//!     helper.set_fill_color(0, 128, 255);
//!     helper.draw_rect(50.0, 700.0, 200.0, 80.0, "F");
//!
//!     helper.set_draw_color(200, 0, 0);
//!     helper.draw_line(50.0, 650.0, 250.0, 650.0);
//!     helper.draw_circle(300.0, 400.0, 50.0, "DF");
//! }
//!
//! let bytes = doc.to_bytes()?;
//! assert!(bytes.starts_with(b"%PDF-1.7"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`drawable`] - the drawing, surface, provider and handle interfaces
//! - [`accessor`] - extracting a drawable surface from a provider or handle
//! - [`helper`] - the [`DrawingHelper`] convenience wrapper
//! - [`graphics`] - content-stream graphics context and colors
//! - [`document`], [`page`], [`writer`] - the built-in PDF backend

pub mod accessor;
pub mod document;
pub mod drawable;
pub mod error;
pub mod geometry;
pub mod graphics;
pub mod helper;
pub mod objects;
pub mod page;
pub mod writer;

pub use accessor::{extract_drawable, extract_drawable_from_handle};
pub use document::{Document, DocumentMetadata};
pub use drawable::{DocumentHandle, Drawable, PaintStyle, Provider, Surface};
pub use error::{PdfError, Result};
pub use geometry::Point;
pub use graphics::{Color, GraphicsContext};
pub use helper::DrawingHelper;
pub use page::Page;

/// Current version of pdfdraw
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
