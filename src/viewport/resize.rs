use crate::{
    foundation::core::Viewport, render::backend::RenderBackend, render::camera::Camera,
};

/// Result of one resize reaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeOutcome {
    pub viewport: Viewport,
    /// `false` when the viewport was degenerate and the previous aspect was kept.
    pub aspect_updated: bool,
    /// Whether overlay paths should be recomputed for this viewport.
    pub recompute_paths: bool,
}

/// Reacts to viewport size changes. Owns the surface dimensions.
#[derive(Clone, Copy, Debug)]
pub struct ViewportResizeHandler {
    recompute_paths: bool,
    surface: Option<Viewport>,
}

impl ViewportResizeHandler {
    /// `recompute_paths` links resizes to overlay path recomputation.
    pub fn new(recompute_paths: bool) -> Self {
        Self {
            recompute_paths,
            surface: None,
        }
    }

    pub fn surface(&self) -> Option<Viewport> {
        self.surface
    }

    pub fn recomputes_paths(&self) -> bool {
        self.recompute_paths
    }

    /// Update the camera aspect, then the render surface size.
    pub fn handle(
        &mut self,
        viewport: Viewport,
        camera: &mut Camera,
        backend: &mut impl RenderBackend,
    ) -> ResizeOutcome {
        let aspect_updated = camera.set_viewport(viewport);
        if !aspect_updated {
            tracing::debug!(
                width = viewport.width,
                height = viewport.height,
                "degenerate viewport, keeping previous aspect"
            );
        }
        backend.set_size(viewport);
        self.surface = Some(viewport);

        ResizeOutcome {
            viewport,
            aspect_updated,
            recompute_paths: self.recompute_paths,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewport/resize.rs"]
mod tests;
