use crate::{
    foundation::core::Viewport,
    foundation::error::BackdropResult,
    render::camera::Camera,
    scene::state::{SceneSnapshot, SceneState},
};

/// Render collaborator contract.
///
/// `set_size` is only called by the resize handler; `render` is only called by the frame
/// scheduler, once per tick, after every entity has been updated.
pub trait RenderBackend {
    /// Resize the render surface to the given pixel dimensions.
    fn set_size(&mut self, viewport: Viewport);
    /// Submit the scene for drawing.
    fn render(&mut self, scene: &SceneState, camera: &Camera) -> BackdropResult<()>;
}

/// Backend that keeps the last submission in memory, for tests and headless runs.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    size: Option<Viewport>,
    resizes: u64,
    submissions: u64,
    last_scene: Option<SceneSnapshot>,
    last_aspect: Option<f64>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> Option<Viewport> {
        self.size
    }

    pub fn resizes(&self) -> u64 {
        self.resizes
    }

    pub fn submissions(&self) -> u64 {
        self.submissions
    }

    pub fn last_scene(&self) -> Option<&SceneSnapshot> {
        self.last_scene.as_ref()
    }

    pub fn last_aspect(&self) -> Option<f64> {
        self.last_aspect
    }
}

impl RenderBackend for RecordingBackend {
    fn set_size(&mut self, viewport: Viewport) {
        self.size = Some(viewport);
        self.resizes += 1;
    }

    fn render(&mut self, scene: &SceneState, camera: &Camera) -> BackdropResult<()> {
        self.submissions += 1;
        self.last_scene = Some(scene.snapshot());
        self.last_aspect = Some(camera.aspect());
        Ok(())
    }
}

impl<B: RenderBackend + ?Sized> RenderBackend for &mut B {
    fn set_size(&mut self, viewport: Viewport) {
        (**self).set_size(viewport);
    }

    fn render(&mut self, scene: &SceneState, camera: &Camera) -> BackdropResult<()> {
        (**self).render(scene, camera)
    }
}
