use std::collections::HashMap;

use crate::{
    foundation::core::{Anchor, Viewport},
    foundation::error::{BackdropError, BackdropResult},
};

/// Looks up on-page elements by identifier.
///
/// Implementations answer from the live layout on every call; routing never caches anchors across
/// recomputes.
pub trait AnchorProvider {
    fn resolve(&self, id: &str, viewport: Viewport) -> Option<Anchor>;
}

impl<A: AnchorProvider + ?Sized> AnchorProvider for &A {
    fn resolve(&self, id: &str, viewport: Viewport) -> Option<Anchor> {
        (**self).resolve(id, viewport)
    }
}

/// Map-backed provider with fixed rectangles.
#[derive(Clone, Debug, Default)]
pub struct StaticAnchors {
    anchors: HashMap<String, Anchor>,
}

impl StaticAnchors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: impl Into<String>, anchor: Anchor) -> Self {
        self.insert(id, anchor);
        self
    }

    pub fn insert(&mut self, id: impl Into<String>, anchor: Anchor) {
        self.anchors.insert(id.into(), anchor);
    }

    pub fn remove(&mut self, id: &str) -> Option<Anchor> {
        self.anchors.remove(id)
    }
}

impl AnchorProvider for StaticAnchors {
    fn resolve(&self, id: &str, _viewport: Viewport) -> Option<Anchor> {
        self.anchors.get(id).copied()
    }
}

/// Placement of the corner badge and the centered target, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutGeometry {
    pub badge_width: f64,
    pub badge_height: f64,
    /// Distance from the viewport's left edge to the badge's left edge.
    pub badge_inset_left: f64,
    /// Distance from the viewport's bottom edge to the badge's bottom edge.
    pub badge_inset_bottom: f64,
    pub target_width: f64,
    pub target_height: f64,
}

impl Default for LayoutGeometry {
    fn default() -> Self {
        Self {
            badge_width: 100.0,
            badge_height: 100.0,
            badge_inset_left: 40.0,
            badge_inset_bottom: 40.0,
            target_width: 160.0,
            target_height: 160.0,
        }
    }
}

impl LayoutGeometry {
    pub fn validate(&self) -> BackdropResult<()> {
        for (name, v) in [
            ("badge_width", self.badge_width),
            ("badge_height", self.badge_height),
            ("badge_inset_left", self.badge_inset_left),
            ("badge_inset_bottom", self.badge_inset_bottom),
            ("target_width", self.target_width),
            ("target_height", self.target_height),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(BackdropError::validation(format!(
                    "layout {name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }

    pub fn badge(&self, viewport: Viewport) -> Anchor {
        Anchor {
            x: self.badge_inset_left,
            y: f64::from(viewport.height) - self.badge_inset_bottom - self.badge_height,
            width: self.badge_width,
            height: self.badge_height,
        }
    }

    pub fn target(&self, viewport: Viewport) -> Anchor {
        Anchor::centered(viewport.center(), self.target_width, self.target_height)
    }
}

/// Provider that derives both anchors from the viewport, for hosts without a live layout.
#[derive(Clone, Debug)]
pub struct ViewportLayout {
    badge_id: String,
    target_id: String,
    geometry: LayoutGeometry,
}

impl ViewportLayout {
    pub fn new(
        badge_id: impl Into<String>,
        target_id: impl Into<String>,
        geometry: LayoutGeometry,
    ) -> Self {
        Self {
            badge_id: badge_id.into(),
            target_id: target_id.into(),
            geometry,
        }
    }
}

impl AnchorProvider for ViewportLayout {
    fn resolve(&self, id: &str, viewport: Viewport) -> Option<Anchor> {
        if id == self.badge_id {
            Some(self.geometry.badge(viewport))
        } else if id == self.target_id {
            Some(self.geometry.target(viewport))
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/routing/anchor.rs"]
mod tests;
