use crate::{
    foundation::core::{DMat4, DVec3, Viewport},
    foundation::error::{BackdropError, BackdropResult},
};

/// Perspective camera parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CameraParams {
    pub fov_y_deg: f64,
    pub near: f64,
    pub far: f64,
    pub position: DVec3,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            fov_y_deg: 75.0,
            near: 0.1,
            far: 1000.0,
            position: DVec3::new(0.0, 0.0, 6.0),
        }
    }
}

impl CameraParams {
    pub fn validate(&self) -> BackdropResult<()> {
        if !self.fov_y_deg.is_finite() || self.fov_y_deg <= 0.0 || self.fov_y_deg >= 180.0 {
            return Err(BackdropError::validation(
                "camera fov_y_deg must be in (0, 180)",
            ));
        }
        if !self.near.is_finite() || self.near <= 0.0 {
            return Err(BackdropError::validation("camera near must be > 0"));
        }
        if !self.far.is_finite() || self.far <= self.near {
            return Err(BackdropError::validation("camera far must be > near"));
        }
        if !self.position.is_finite() {
            return Err(BackdropError::validation("camera position must be finite"));
        }
        Ok(())
    }
}

/// Camera with the aspect ratio tracked from the viewport.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Camera {
    pub params: CameraParams,
    aspect: f64,
}

impl Camera {
    pub fn new(params: CameraParams, viewport: Viewport) -> Self {
        Self {
            params,
            aspect: viewport.aspect().unwrap_or(1.0),
        }
    }

    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    /// Update the aspect from `viewport`. Degenerate sizes are rejected and leave the aspect as is.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        match viewport.aspect() {
            Some(aspect) => {
                self.aspect = aspect;
                true
            }
            None => false,
        }
    }

    pub fn projection(&self) -> DMat4 {
        DMat4::perspective_rh(
            self.params.fov_y_deg.to_radians(),
            self.aspect,
            self.params.near,
            self.params.far,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/camera.rs"]
mod tests;
