use crate::{
    config::BackdropConfig,
    foundation::core::Viewport,
    foundation::error::BackdropResult,
    render::backend::RenderBackend,
    render::camera::Camera,
    routing::anchor::AnchorProvider,
    routing::router::{PathRouter, PathSink, RouteOutcome},
    scene::state::{SceneSnapshot, SceneState},
    schedule::clock::FrameClock,
    schedule::refresh::DisplayRefresh,
    schedule::scheduler::FrameScheduler,
    viewport::resize::{ResizeOutcome, ViewportResizeHandler},
};

/// What asked for a path recompute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTrigger {
    /// Host markup is ready.
    Ready,
    /// Deferred pass after load, once layout has settled.
    Settled,
    /// Viewport size changed.
    Resize,
}

/// Result of [`Backdrop::on_resize`].
#[derive(Clone, Debug, PartialEq)]
pub struct ResizeReport {
    pub resize: ResizeOutcome,
    /// `None` when no recompute ran (overlay disabled or resize linkage off).
    pub route: Option<RouteOutcome>,
}

/// Serializable state of a running backdrop.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BackdropSnapshot {
    pub viewport: Viewport,
    pub ticks: u64,
    pub time_secs: Option<f64>,
    pub camera_aspect: f64,
    pub scene: SceneSnapshot,
}

/// Host-facing session: owns the scheduler, camera, resize handler and path router, and the
/// collaborators they drive.
///
/// All entry points run to completion on the caller's thread.
pub struct Backdrop<B, R, A, S> {
    scheduler: FrameScheduler,
    camera: Camera,
    resize: ViewportResizeHandler,
    router: Option<PathRouter>,
    settle_delay_ms: f64,
    deferred_at_ms: Option<f64>,
    viewport: Viewport,

    backend: B,
    refresh: R,
    anchors: A,
    sink: S,
}

impl<B, R, A, S> Backdrop<B, R, A, S>
where
    B: RenderBackend,
    R: DisplayRefresh,
    A: AnchorProvider,
    S: PathSink,
{
    /// Build the scene from `config` and size everything to `viewport`.
    pub fn new(
        config: &BackdropConfig,
        viewport: Viewport,
        backend: B,
        refresh: R,
        anchors: A,
        sink: S,
    ) -> BackdropResult<Self> {
        config.validate()?;
        let scene = config.scene.build(config.seed)?;
        Ok(Self::with_scene(
            config, scene, viewport, backend, refresh, anchors, sink,
        ))
    }

    /// Use a pre-built scene instead of the configured layout.
    pub fn with_scene(
        config: &BackdropConfig,
        scene: SceneState,
        viewport: Viewport,
        mut backend: B,
        refresh: R,
        anchors: A,
        sink: S,
    ) -> Self {
        let mut camera = Camera::new(config.camera, viewport);
        let mut resize = ViewportResizeHandler::new(
            config.overlay.enabled && config.overlay.recompute_on_resize,
        );
        resize.handle(viewport, &mut camera, &mut backend);

        let router = config.overlay.enabled.then(|| config.overlay.router());
        Self {
            scheduler: FrameScheduler::new(scene, config.motion, FrameClock::default()),
            camera,
            resize,
            router,
            settle_delay_ms: config.overlay.settle_delay_ms,
            deferred_at_ms: None,
            viewport,
            backend,
            refresh,
            anchors,
            sink,
        }
    }

    pub fn start(&mut self) {
        self.scheduler.start(&mut self.refresh);
    }

    /// Teardown: release the refresh subscription.
    pub fn stop(&mut self) {
        self.scheduler.stop(&mut self.refresh);
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Display-refresh callback. Also runs a due deferred path recompute.
    pub fn on_frame(&mut self, timestamp_ms: f64) -> BackdropResult<bool> {
        self.poll_deferred(timestamp_ms);
        self.scheduler
            .on_frame(timestamp_ms, &mut self.refresh, &mut self.backend, &self.camera)
    }

    /// Markup is ready: route immediately.
    pub fn on_ready(&mut self) -> Option<RouteOutcome> {
        self.recompute_paths(RouteTrigger::Ready)
    }

    /// Page finished loading at `now_ms`: schedule the settled recompute.
    pub fn on_load(&mut self, now_ms: f64) {
        if self.router.is_some() {
            self.deferred_at_ms = Some(now_ms + self.settle_delay_ms);
        }
    }

    /// Run the settled recompute if its deadline has passed.
    pub fn poll_deferred(&mut self, now_ms: f64) -> Option<RouteOutcome> {
        match self.deferred_at_ms {
            Some(at) if now_ms >= at => self.flush_deferred(),
            _ => None,
        }
    }

    /// Run the settled recompute now, if one is pending.
    pub fn flush_deferred(&mut self) -> Option<RouteOutcome> {
        self.deferred_at_ms.take()?;
        self.recompute_paths(RouteTrigger::Settled)
    }

    pub fn deferred_pending(&self) -> bool {
        self.deferred_at_ms.is_some()
    }

    #[tracing::instrument(skip(self))]
    pub fn on_resize(&mut self, viewport: Viewport) -> ResizeReport {
        self.viewport = viewport;
        let resize = self
            .resize
            .handle(viewport, &mut self.camera, &mut self.backend);
        let route = if resize.recompute_paths {
            self.recompute_paths(RouteTrigger::Resize)
        } else {
            None
        };
        ResizeReport { resize, route }
    }

    /// Recompute overlay paths for the current viewport. `None` when the overlay is disabled.
    #[tracing::instrument(skip(self))]
    pub fn recompute_paths(&mut self, trigger: RouteTrigger) -> Option<RouteOutcome> {
        let router = self.router.as_ref()?;
        Some(router.recompute(self.viewport, &self.anchors, &mut self.sink))
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn refresh(&self) -> &R {
        &self.refresh
    }

    pub fn refresh_mut(&mut self) -> &mut R {
        &mut self.refresh
    }

    pub fn anchors_mut(&mut self) -> &mut A {
        &mut self.anchors
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn snapshot(&self) -> BackdropSnapshot {
        BackdropSnapshot {
            viewport: self.viewport,
            ticks: self.scheduler.ticks(),
            time_secs: self.scheduler.last_time_secs(),
            camera_aspect: self.camera.aspect(),
            scene: self.scheduler.scene().snapshot(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/backdrop.rs"]
mod tests;
