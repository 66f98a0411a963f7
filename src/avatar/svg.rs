//! Minimal vector document builder used by the avatar renderer.
//!
//! Shapes are collected into a [`Document`] first and serialised in one pass,
//! which keeps geometry testable without parsing markup.

use std::fmt::{self, Write};

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        rx: f64,
        fill: String,
        opacity: Option<f64>,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: Option<String>,
        stroke: Option<Stroke>,
        opacity: Option<f64>,
    },
    /// Children drawn through the circular clip path `id`.
    ClipGroup {
        id: String,
        cx: f64,
        cy: f64,
        r: f64,
        children: Vec<Shape>,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub size: f64,
    pub label: String,
    pub shapes: Vec<Shape>,
}

impl Document {
    pub fn new(size: f64, label: String) -> Self {
        Self {
            size,
            label,
            shapes: Vec::new(),
        }
    }

    pub fn push(&mut self, shape: Shape) -> &mut Self {
        self.shapes.push(shape);
        self
    }

    /// Every shape in drawing order, clip groups flattened.
    pub fn iter_shapes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().flat_map(|shape| {
            let children: &[Shape] = match shape {
                Shape::ClipGroup { children, .. } => children,
                _ => &[],
            };
            std::iter::once(shape).chain(children.iter())
        })
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}" role="img" aria-label="{label}">"#,
            size = self.size,
            label = escape(&self.label),
        )?;
        for shape in &self.shapes {
            write_shape(f, shape)?;
        }
        f.write_str("</svg>")
    }
}

fn write_shape<W: Write>(out: &mut W, shape: &Shape) -> fmt::Result {
    match shape {
        Shape::Rect {
            x,
            y,
            width,
            height,
            rx,
            fill,
            opacity,
        } => {
            write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}""#,
                x, y, width, height, rx, fill
            )?;
            write_opacity(out, *opacity)?;
            out.write_str("/>")
        }
        Shape::Circle {
            cx,
            cy,
            r,
            fill,
            stroke,
            opacity,
        } => {
            write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}""#,
                cx,
                cy,
                r,
                fill.as_deref().unwrap_or("none")
            )?;
            if let Some(stroke) = stroke {
                write!(
                    out,
                    r#" stroke="{}" stroke-width="{}""#,
                    stroke.color, stroke.width
                )?;
            }
            write_opacity(out, *opacity)?;
            out.write_str("/>")
        }
        Shape::ClipGroup {
            id,
            cx,
            cy,
            r,
            children,
        } => {
            write!(
                out,
                r#"<clipPath id="{id}"><circle cx="{}" cy="{}" r="{}"/></clipPath><g clip-path="url(#{id})">"#,
                cx,
                cy,
                r,
                id = id
            )?;
            for child in children {
                write_shape(out, child)?;
            }
            out.write_str("</g>")
        }
    }
}

fn write_opacity<W: Write>(out: &mut W, opacity: Option<f64>) -> fmt::Result {
    match opacity {
        Some(opacity) => write!(out, r#" opacity="{}""#, opacity),
        None => Ok(()),
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_rect_and_circle() {
        let mut doc = Document::new(40.0, "label".to_owned());
        doc.push(Shape::Rect {
            x: 0.0,
            y: 0.0,
            width: 40.0,
            height: 40.0,
            rx: 20.0,
            fill: "#ffffff".to_owned(),
            opacity: None,
        })
        .push(Shape::Circle {
            cx: 20.0,
            cy: 20.0,
            r: 19.5,
            fill: None,
            stroke: Some(Stroke {
                color: "#000000".to_owned(),
                width: 1.0,
            }),
            opacity: Some(0.2),
        });

        assert_eq!(
            doc.to_string(),
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="40" viewBox="0 0 40 40" role="img" aria-label="label">"#,
                r##"<rect x="0" y="0" width="40" height="40" rx="20" fill="#ffffff"/>"##,
                r##"<circle cx="20" cy="20" r="19.5" fill="none" stroke="#000000" stroke-width="1" opacity="0.2"/>"##,
                "</svg>"
            )
        );
    }

    #[test]
    fn clip_group_wraps_children() {
        let mut doc = Document::new(10.0, "x".to_owned());
        doc.push(Shape::ClipGroup {
            id: "clip-1".to_owned(),
            cx: 5.0,
            cy: 5.0,
            r: 5.0,
            children: vec![Shape::Rect {
                x: 1.0,
                y: 1.0,
                width: 2.0,
                height: 2.0,
                rx: 0.5,
                fill: "red".to_owned(),
                opacity: Some(0.85),
            }],
        });
        let svg = doc.to_string();

        assert!(svg.contains(r#"<clipPath id="clip-1"><circle cx="5" cy="5" r="5"/></clipPath>"#));
        assert!(svg.contains(r#"<g clip-path="url(#clip-1)"><rect x="1" y="1" width="2" height="2" rx="0.5" fill="red" opacity="0.85"/></g>"#));
        assert_eq!(doc.iter_shapes().count(), 2);
    }

    #[test]
    fn escapes_label() {
        let doc = Document::new(1.0, r#"<Tom & "Jerry">"#.to_owned());
        assert!(doc
            .to_string()
            .contains(r#"aria-label="&lt;Tom &amp; &quot;Jerry&quot;&gt;""#));
    }
}
