use crate::{
    foundation::error::BackdropResult,
    motion::functions::MotionParams,
    render::backend::RenderBackend,
    render::camera::Camera,
    scene::state::SceneState,
    schedule::clock::FrameClock,
    schedule::refresh::{DisplayRefresh, FrameRequest},
};

/// Drives one update-then-render cycle per display refresh.
///
/// The scheduler exclusively owns the [`SceneState`]. It only re-subscribes to the refresh source
/// while running, so `stop` is deterministic: at most the in-flight tick completes and no further
/// callback is requested.
#[derive(Debug)]
pub struct FrameScheduler {
    scene: SceneState,
    motion: MotionParams,
    clock: FrameClock,
    running: bool,
    pending: Option<FrameRequest>,
    ticks: u64,
    last_time_secs: Option<f64>,
}

impl FrameScheduler {
    pub fn new(scene: SceneState, motion: MotionParams, clock: FrameClock) -> Self {
        Self {
            scene,
            motion,
            clock,
            running: false,
            pending: None,
            ticks: 0,
            last_time_secs: None,
        }
    }

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    pub fn motion(&self) -> &MotionParams {
        &self.motion
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn pending(&self) -> Option<FrameRequest> {
        self.pending
    }

    /// Clock seconds used by the most recent tick.
    pub fn last_time_secs(&self) -> Option<f64> {
        self.last_time_secs
    }

    /// Subscribe to the next refresh. No-op when already running.
    pub fn start(&mut self, refresh: &mut impl DisplayRefresh) {
        if self.running {
            return;
        }
        self.running = true;
        self.pending = Some(refresh.request_frame());
        tracing::debug!(ticks = self.ticks, "frame scheduler started");
    }

    /// Release the refresh subscription. Safe to call repeatedly.
    pub fn stop(&mut self, refresh: &mut impl DisplayRefresh) {
        self.running = false;
        if let Some(req) = self.pending.take() {
            refresh.cancel_frame(req);
        }
        tracing::debug!(ticks = self.ticks, "frame scheduler stopped");
    }

    /// Handle one refresh callback. Returns `false` without touching the scene when stopped.
    ///
    /// A render failure stops the scheduler before the error is returned, so `start` resumes it.
    pub fn on_frame(
        &mut self,
        timestamp_ms: f64,
        refresh: &mut impl DisplayRefresh,
        backend: &mut impl RenderBackend,
        camera: &Camera,
    ) -> BackdropResult<bool> {
        if !self.running {
            return Ok(false);
        }
        self.pending = None;

        let t = self.clock.elapsed_secs(timestamp_ms);
        if let Err(err) = self.tick(t, backend, camera) {
            self.running = false;
            tracing::warn!(
                ticks = self.ticks,
                error = %err,
                "render failed, frame scheduler stopped"
            );
            return Err(err);
        }

        if self.running {
            self.pending = Some(refresh.request_frame());
        }
        Ok(true)
    }

    /// Apply motion to every entity at clock time `t`, then submit the scene.
    pub fn tick(
        &mut self,
        t: f64,
        backend: &mut impl RenderBackend,
        camera: &Camera,
    ) -> BackdropResult<()> {
        for entity in self.scene.entities_mut() {
            self.motion.apply(entity, t);
        }
        self.ticks += 1;
        self.last_time_secs = Some(t);
        tracing::trace!(tick = self.ticks, t, "tick");
        backend.render(&self.scene, camera)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/scheduler.rs"]
mod tests;
