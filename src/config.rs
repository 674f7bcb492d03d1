use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::error::{BackdropError, BackdropResult},
    motion::functions::MotionParams,
    render::camera::CameraParams,
    routing::anchor::{LayoutGeometry, ViewportLayout},
    routing::router::{PathRouter, RouteTuning},
    routing::svg::OverlayStyle,
    scene::build::SceneLayout,
};

/// Complete backdrop configuration. Every field has a default, so `{}` is a valid document.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    /// Seed for the one-shot scatter of sphere base positions.
    pub seed: u64,
    pub scene: SceneLayout,
    pub motion: MotionParams,
    pub camera: CameraParams,
    pub overlay: OverlayConfig,
}

/// Connector-path overlay settings.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Whether overlay paths are in use at all.
    pub enabled: bool,
    pub badge_id: String,
    pub target_id: String,
    /// Element ids of paths A (above), B (through) and C (below).
    pub path_ids: [String; 3],
    /// Recompute paths on every viewport resize.
    pub recompute_on_resize: bool,
    /// Delay of the post-load recompute that lets layout settle.
    pub settle_delay_ms: f64,
    pub tuning: RouteTuning,
    pub layout: LayoutGeometry,
    pub style: OverlayStyle,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            badge_id: "badge".to_string(),
            target_id: "hub".to_string(),
            path_ids: [
                "connector-a".to_string(),
                "connector-b".to_string(),
                "connector-c".to_string(),
            ],
            recompute_on_resize: true,
            settle_delay_ms: 100.0,
            tuning: RouteTuning::default(),
            layout: LayoutGeometry::default(),
            style: OverlayStyle::default(),
        }
    }
}

impl OverlayConfig {
    pub fn validate(&self) -> BackdropResult<()> {
        for (name, id) in [("badge_id", &self.badge_id), ("target_id", &self.target_id)] {
            if id.trim().is_empty() {
                return Err(BackdropError::validation(format!(
                    "overlay {name} must be non-empty"
                )));
            }
        }
        if self.badge_id == self.target_id {
            return Err(BackdropError::validation(
                "overlay badge_id and target_id must differ",
            ));
        }
        if self.path_ids.iter().any(|id| id.trim().is_empty()) {
            return Err(BackdropError::validation(
                "overlay path_ids must be non-empty",
            ));
        }
        let [a, b, c] = &self.path_ids;
        if a == b || b == c || a == c {
            return Err(BackdropError::validation(
                "overlay path_ids must be distinct",
            ));
        }
        if !self.settle_delay_ms.is_finite() || self.settle_delay_ms < 0.0 {
            return Err(BackdropError::validation(
                "overlay settle_delay_ms must be finite and >= 0",
            ));
        }
        self.tuning.validate()?;
        self.layout.validate()
    }

    pub fn router(&self) -> PathRouter {
        PathRouter::new(
            self.badge_id.clone(),
            self.target_id.clone(),
            self.path_ids.clone(),
            self.tuning,
        )
    }

    /// Anchor provider deriving the badge and target from the viewport.
    pub fn viewport_layout(&self) -> ViewportLayout {
        ViewportLayout::new(self.badge_id.clone(), self.target_id.clone(), self.layout)
    }
}

impl BackdropConfig {
    pub fn from_reader<R: std::io::Read>(r: R) -> BackdropResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| BackdropError::serde(format!("parse backdrop config JSON: {e}")))
    }

    pub fn from_json_str(s: &str) -> BackdropResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    pub fn from_path(path: impl AsRef<Path>) -> BackdropResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BackdropError::validation(format!("open backdrop config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> BackdropResult<()> {
        self.scene.validate()?;
        self.motion.validate()?;
        self.camera.validate()?;
        self.overlay.validate()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
