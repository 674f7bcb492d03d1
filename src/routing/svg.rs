use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::{foundation::core::Viewport, routing::router::PathSink};

/// Stroke styling for exported overlay paths.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    pub stroke: String,
    pub stroke_width: f64,
    pub opacity: f64,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            stroke: "#b0b0b0".to_string(),
            stroke_width: 1.5,
            opacity: 0.9,
        }
    }
}

/// Path sink that owns a set of `<path>` elements and serializes them as an SVG document.
#[derive(Clone, Debug, Default)]
pub struct SvgOverlay {
    paths: BTreeMap<String, String>,
    style: OverlayStyle,
}

impl SvgOverlay {
    /// Create an overlay with empty `<path>` elements for every id.
    pub fn new<I, S>(ids: I, style: OverlayStyle) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: ids.into_iter().map(|id| (id.into(), String::new())).collect(),
            style,
        }
    }

    pub fn path(&self, id: &str) -> Option<&str> {
        self.paths.get(id).map(String::as_str)
    }

    /// Serialize the overlay sized to `viewport`.
    pub fn to_document(&self, viewport: Viewport) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = viewport.width,
            h = viewport.height,
        );
        for (id, d) in &self.paths {
            let _ = writeln!(
                out,
                r#"  <path id="{}" d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-opacity="{}"/>"#,
                escape_attr(id),
                escape_attr(d),
                escape_attr(&self.style.stroke),
                self.style.stroke_width,
                self.style.opacity,
            );
        }
        out.push_str("</svg>\n");
        out
    }
}

impl PathSink for SvgOverlay {
    fn has_element(&self, id: &str) -> bool {
        self.paths.contains_key(id)
    }

    fn write(&mut self, id: &str, path_d: &str) {
        if let Some(d) = self.paths.get_mut(id) {
            path_d.clone_into(d);
        }
    }
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/routing/svg.rs"]
mod tests;
