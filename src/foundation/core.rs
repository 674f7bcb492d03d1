use crate::foundation::error::{BackdropError, BackdropResult};

pub use glam::{DMat4, DVec3};
pub use kurbo::{BezPath, Point, Rect};

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, or `None` when either side is zero.
    pub fn aspect(self) -> Option<f64> {
        if self.is_degenerate() {
            return None;
        }
        Some(f64::from(self.width) / f64::from(self.height))
    }

    pub fn is_degenerate(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) * 0.5, f64::from(self.height) * 0.5)
    }
}

/// Screen-space rectangle used as a routing endpoint (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Anchor {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> BackdropResult<Self> {
        for (name, v) in [("x", x), ("y", y), ("width", width), ("height", height)] {
            if !v.is_finite() {
                return Err(BackdropError::validation(format!(
                    "anchor {name} must be finite"
                )));
            }
        }
        if width < 0.0 || height < 0.0 {
            return Err(BackdropError::validation(
                "anchor width/height must be >= 0",
            ));
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Anchor of the given size centered on `center`.
    pub fn centered(center: Point, width: f64, height: f64) -> Self {
        Self {
            x: center.x - width * 0.5,
            y: center.y - height * 0.5,
            width,
            height,
        }
    }

    pub fn top(self) -> f64 {
        self.y
    }

    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    pub fn left(self) -> f64 {
        self.x
    }

    pub fn right(self) -> f64 {
        self.x + self.width
    }

    pub fn center(self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    pub fn to_rect(self) -> Rect {
        Rect::new(self.left(), self.top(), self.right(), self.bottom())
    }
}

impl From<Rect> for Anchor {
    fn from(r: Rect) -> Self {
        let r = r.abs();
        Self {
            x: r.x0,
            y: r.y0,
            width: r.width(),
            height: r.height(),
        }
    }
}

/// Position plus Euler rotation (radians, XYZ) of one scene entity.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform3 {
    pub position: DVec3,
    pub rotation: DVec3,
}

impl Transform3 {
    pub fn at(position: DVec3) -> Self {
        Self {
            position,
            rotation: DVec3::ZERO,
        }
    }

    pub fn to_matrix(self) -> DMat4 {
        let rot = glam::DQuat::from_euler(
            glam::EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        DMat4::from_rotation_translation(rot, self.position)
    }
}

impl Default for Transform3 {
    fn default() -> Self {
        Self::at(DVec3::ZERO)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
