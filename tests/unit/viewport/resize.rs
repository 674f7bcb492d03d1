use super::*;
use crate::{render::backend::RecordingBackend, render::camera::CameraParams};

#[test]
fn resize_updates_aspect_then_surface() {
    let mut handler = ViewportResizeHandler::new(true);
    let mut camera = Camera::new(CameraParams::default(), Viewport::new(1280, 720));
    let mut backend = RecordingBackend::new();

    let out = handler.handle(Viewport::new(800, 600), &mut camera, &mut backend);
    assert!(out.aspect_updated);
    assert!(out.recompute_paths);
    assert_eq!(camera.aspect(), 800.0 / 600.0);
    assert_eq!(backend.size(), Some(Viewport::new(800, 600)));
    assert_eq!(handler.surface(), Some(Viewport::new(800, 600)));
}

#[test]
fn zero_width_does_not_panic_and_keeps_aspect() {
    let mut handler = ViewportResizeHandler::new(false);
    let mut camera = Camera::new(CameraParams::default(), Viewport::new(800, 600));
    let mut backend = RecordingBackend::new();

    let out = handler.handle(Viewport::new(0, 600), &mut camera, &mut backend);
    assert!(!out.aspect_updated);
    assert!(!out.recompute_paths);
    assert_eq!(camera.aspect(), 800.0 / 600.0);
    assert_eq!(backend.size(), Some(Viewport::new(0, 600)));
}

#[test]
fn repeated_resize_is_idempotent() {
    let mut handler = ViewportResizeHandler::new(true);
    let mut camera = Camera::new(CameraParams::default(), Viewport::new(1, 1));
    let mut backend = RecordingBackend::new();

    let a = handler.handle(Viewport::new(1024, 768), &mut camera, &mut backend);
    let cam_a = camera;
    let b = handler.handle(Viewport::new(1024, 768), &mut camera, &mut backend);
    assert_eq!(a, b);
    assert_eq!(cam_a, camera);
    assert_eq!(backend.resizes(), 2);
}
