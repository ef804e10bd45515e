//! JSON scene files for the `render` subcommand.

use anyhow::{bail, Context, Result};
use pdfdraw::{Document, DrawingHelper, Page};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

const A4_WIDTH: f64 = 595.0;
const A4_HEIGHT: f64 = 842.0;

#[derive(Debug, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    pub pages: Vec<PageSpec>,
}

#[derive(Debug, Deserialize)]
pub struct PageSpec {
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    FillColor {
        r: i32,
        g: i32,
        b: i32,
    },
    DrawColor {
        r: i32,
        g: i32,
        b: i32,
    },
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        #[serde(default = "default_style")]
        style: String,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        #[serde(default = "default_style")]
        style: String,
    },
    Polygon {
        points: Vec<[f64; 2]>,
        #[serde(default = "default_style")]
        style: String,
    },
}

fn default_width() -> f64 {
    A4_WIDTH
}

fn default_height() -> f64 {
    A4_HEIGHT
}

fn default_style() -> String {
    "D".to_string()
}

impl Scene {
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid scene file {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let scene: Scene = serde_json::from_str(json).context("Failed to parse scene JSON")?;
        if scene.pages.is_empty() {
            bail!("Scene has no pages");
        }
        Ok(scene)
    }

    /// Builds a document with one page per page spec, drawing each page's
    /// shapes through the document's drawing helper.
    pub fn render(&self) -> Document {
        let mut doc = Document::new();
        if let Some(title) = &self.title {
            doc.set_title(title);
        }
        if let Some(author) = &self.author {
            doc.set_author(author);
        }

        for (index, spec) in self.pages.iter().enumerate() {
            doc.add_page(Page::new(spec.width, spec.height));
            debug!(page = index + 1, shapes = spec.shapes.len(), "drawing page");

            let mut helper = DrawingHelper::from_handle(Some(&mut doc)).unwrap_or_default();
            for shape in &spec.shapes {
                shape.draw(&mut helper);
            }
        }

        doc
    }
}

impl Shape {
    pub fn draw(&self, helper: &mut DrawingHelper<'_>) {
        match self {
            Shape::FillColor { r, g, b } => helper.set_fill_color(*r, *g, *b),
            Shape::DrawColor { r, g, b } => helper.set_draw_color(*r, *g, *b),
            Shape::Rect { x, y, w, h, style } => helper.draw_rect(*x, *y, *w, *h, style),
            Shape::Line { x1, y1, x2, y2 } => helper.draw_line(*x1, *y1, *x2, *y2),
            Shape::Circle {
                x,
                y,
                radius,
                style,
            } => helper.draw_circle(*x, *y, *radius, style),
            Shape::Polygon { points, style } => helper.draw_polygon(points.as_slice(), style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"{
        "title": "Sample",
        "pages": [
            {
                "shapes": [
                    { "kind": "fill_color", "r": 255, "g": 0, "b": 0 },
                    { "kind": "rect", "x": 10, "y": 10, "w": 50, "h": 20, "style": "F" },
                    { "kind": "polygon", "points": [[0, 0], [10, 0], [5, 8]] }
                ]
            },
            { "width": 200, "height": 100 }
        ]
    }"#;

    #[test]
    fn test_parse_sample_scene() {
        let scene = Scene::from_json(SAMPLE).unwrap();
        assert_eq!(scene.title.as_deref(), Some("Sample"));
        assert!(scene.author.is_none());
        assert_eq!(scene.pages.len(), 2);

        let first = &scene.pages[0];
        assert_eq!((first.width, first.height), (A4_WIDTH, A4_HEIGHT));
        assert_eq!(
            first.shapes[1],
            Shape::Rect {
                x: 10.0,
                y: 10.0,
                w: 50.0,
                h: 20.0,
                style: "F".to_string(),
            }
        );
        assert_eq!(
            first.shapes[2],
            Shape::Polygon {
                points: vec![[0.0, 0.0], [10.0, 0.0], [5.0, 8.0]],
                style: "D".to_string(),
            }
        );

        let second = &scene.pages[1];
        assert_eq!((second.width, second.height), (200.0, 100.0));
        assert!(second.shapes.is_empty());
    }

    #[test]
    fn test_empty_scene_is_rejected() {
        let err = Scene::from_json(r#"{ "pages": [] }"#).unwrap_err();
        assert!(err.to_string().contains("no pages"));
    }

    #[test]
    fn test_unknown_shape_is_rejected() {
        let json = r#"{ "pages": [ { "shapes": [ { "kind": "spiral" } ] } ] }"#;
        assert!(Scene::from_json(json).is_err());
    }

    #[test]
    fn test_render_draws_on_each_page() {
        let scene = Scene::from_json(SAMPLE).unwrap();
        let doc = scene.render();

        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.metadata().title.as_deref(), Some("Sample"));

        let ops = doc.pages()[0].graphics_context().operations();
        assert!(ops.contains("1.000 0.000 0.000 rg\n10.00 10.00 50.00 20.00 re\nf\n"));
        assert!(ops.contains("5.00 8.00 l\nh\n"));
        assert!(doc.pages()[1].graphics_context().operations().is_empty());
    }

    #[test]
    fn test_degenerate_polygon_is_skipped() {
        let json = r#"{ "pages": [ { "shapes": [
            { "kind": "polygon", "points": [[0, 0], [10, 10]], "style": "F" }
        ] } ] }"#;
        let doc = Scene::from_json(json).unwrap().render();
        assert!(doc.pages()[0].graphics_context().operations().is_empty());
    }
}
