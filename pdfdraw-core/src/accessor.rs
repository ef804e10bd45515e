//! Reaching through a document builder to its drawing surface.
//!
//! Both functions are pure lookups: they never create, replace or close the
//! surface they find. A `None` result covers every failure (no handle, no
//! provider, no surface, or a surface without vector drawing support).
//!
//! ```rust
//! use pdfdraw::accessor::extract_drawable;
//! use pdfdraw::{Page, PaintStyle};
//!
//! let mut page = Page::a4();
//! if let Some(drawable) = extract_drawable(Some(&mut page)) {
//!     drawable.set_fill_rgb(255, 0, 0);
//!     drawable.draw_rect(10.0, 10.0, 50.0, 20.0, PaintStyle::Fill);
//! }
//! ```

use crate::drawable::{DocumentHandle, Drawable, Provider};
use tracing::trace;

/// Extracts the drawing-capable surface reported by `provider`.
pub fn extract_drawable<'a>(
    provider: Option<&'a mut dyn Provider>,
) -> Option<&'a mut dyn Drawable> {
    let Some(provider) = provider else {
        trace!("no provider supplied");
        return None;
    };

    let Some(surface) = provider.surface() else {
        trace!("provider reported no surface");
        return None;
    };

    let drawable = surface.as_drawable();
    if drawable.is_none() {
        trace!("surface does not support vector drawing");
    }
    drawable
}

/// Extracts the drawing-capable surface behind a document handle.
///
/// Equivalent to asking the handle for its provider and passing that to
/// [`extract_drawable`].
pub fn extract_drawable_from_handle<'a>(
    handle: Option<&'a mut dyn DocumentHandle>,
) -> Option<&'a mut dyn Drawable> {
    let Some(handle) = handle else {
        trace!("no document handle supplied");
        return None;
    };

    extract_drawable(handle.provider())
}
