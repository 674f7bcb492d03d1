//! backdrop animates a decorative page background and keeps connector paths in sync with layout.
//!
//! # Pipeline overview
//!
//! 1. **Tick**: each display refresh, [`FrameScheduler`] applies [`MotionParams`] to every entity of
//!    the [`SceneState`] and submits the scene to a [`RenderBackend`].
//! 2. **Resize**: [`ViewportResizeHandler`] updates the [`Camera`] aspect and the surface size.
//! 3. **Route**: [`PathRouter`] resolves the badge and target anchors through an
//!    [`AnchorProvider`] and writes three quadratic [`BezierPath`]s into a [`PathSink`].
//!
//! [`Backdrop`] wires these together for a host. Everything runs on the caller's thread; every
//! entry point completes before returning.
#![forbid(unsafe_code)]

mod config;
mod foundation;
mod motion;
mod render;
mod routing;
mod scene;
mod schedule;
mod session;
mod viewport;

pub use config::{BackdropConfig, OverlayConfig};
pub use foundation::core::{Anchor, BezPath, DMat4, DVec3, Point, Rect, Transform3, Viewport};
pub use foundation::error::{BackdropError, BackdropResult};
pub use foundation::rng::Rng64;
pub use motion::functions::MotionParams;
pub use render::backend::{RecordingBackend, RenderBackend};
pub use render::camera::{Camera, CameraParams};
pub use routing::anchor::{AnchorProvider, LayoutGeometry, StaticAnchors, ViewportLayout};
pub use routing::path::{BezierPath, QuadSegment};
pub use routing::router::{
    PathRouter, PathSink, RecordingSink, RouteOutcome, RouteTuning, SkipReason, route,
};
pub use routing::svg::{OverlayStyle, SvgOverlay};
pub use scene::build::SceneLayout;
pub use scene::entity::{Entity, EntityId, EntityKind, LineState};
pub use scene::state::{EntitySnapshot, SceneSnapshot, SceneState};
pub use schedule::clock::FrameClock;
pub use schedule::refresh::{DisplayRefresh, FrameRequest, ManualRefresh};
pub use schedule::scheduler::FrameScheduler;
pub use session::backdrop::{Backdrop, BackdropSnapshot, ResizeReport, RouteTrigger};
pub use viewport::resize::{ResizeOutcome, ViewportResizeHandler};
