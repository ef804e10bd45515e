/// Represents a color in PDF documents.
///
/// Supports RGB, Grayscale, and CMYK color spaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// RGB color (red, green, blue) with values from 0.0 to 1.0
    Rgb(f64, f64, f64),
    /// Grayscale color with value from 0.0 (black) to 1.0 (white)
    Gray(f64),
    /// CMYK color (cyan, magenta, yellow, key/black) with values from 0.0 to 1.0
    Cmyk(f64, f64, f64, f64),
}

impl Color {
    /// Creates an RGB color with values clamped to 0.0-1.0.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color::Rgb(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    /// Creates an RGB color from 8-bit channels.
    ///
    /// Channels outside 0-255 are clamped before scaling.
    pub fn from_rgb8(r: i32, g: i32, b: i32) -> Self {
        let scale = |c: i32| f64::from(c.clamp(0, 255)) / 255.0;
        Color::Rgb(scale(r), scale(g), scale(b))
    }

    /// Creates a grayscale color with value clamped to 0.0-1.0.
    pub fn gray(value: f64) -> Self {
        Color::Gray(value.clamp(0.0, 1.0))
    }

    /// Creates a CMYK color with values clamped to 0.0-1.0.
    pub fn cmyk(c: f64, m: f64, y: f64, k: f64) -> Self {
        Color::Cmyk(
            c.clamp(0.0, 1.0),
            m.clamp(0.0, 1.0),
            y.clamp(0.0, 1.0),
            k.clamp(0.0, 1.0),
        )
    }

    pub fn black() -> Self {
        Color::Gray(0.0)
    }

    pub fn white() -> Self {
        Color::Gray(1.0)
    }

    pub fn red() -> Self {
        Color::Rgb(1.0, 0.0, 0.0)
    }

    pub fn green() -> Self {
        Color::Rgb(0.0, 1.0, 0.0)
    }

    pub fn blue() -> Self {
        Color::Rgb(0.0, 0.0, 1.0)
    }

    /// Content-stream operator setting this color for fills, e.g. `0.000 g`.
    pub(crate) fn fill_operator(&self) -> String {
        match *self {
            Color::Rgb(r, g, b) => format!("{r:.3} {g:.3} {b:.3} rg"),
            Color::Gray(g) => format!("{g:.3} g"),
            Color::Cmyk(c, m, y, k) => format!("{c:.3} {m:.3} {y:.3} {k:.3} k"),
        }
    }

    /// Content-stream operator setting this color for strokes, e.g. `0.000 G`.
    pub(crate) fn stroke_operator(&self) -> String {
        match *self {
            Color::Rgb(r, g, b) => format!("{r:.3} {g:.3} {b:.3} RG"),
            Color::Gray(g) => format!("{g:.3} G"),
            Color::Cmyk(c, m, y, k) => format!("{c:.3} {m:.3} {y:.3} {k:.3} K"),
        }
    }
}
