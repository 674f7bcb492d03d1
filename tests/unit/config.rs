use super::*;

#[test]
fn empty_document_yields_defaults() {
    let cfg = BackdropConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, BackdropConfig::default());
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.scene.sphere_count, 8);
    assert_eq!(cfg.camera.fov_y_deg, 75.0);
    assert!(cfg.overlay.recompute_on_resize);
}

#[test]
fn partial_sections_merge_with_defaults() {
    let cfg = BackdropConfig::from_json_str(
        r#"{ "seed": 9, "motion": { "spin_step": 0.02 }, "overlay": { "recompute_on_resize": false } }"#,
    )
    .unwrap();
    assert_eq!(cfg.seed, 9);
    assert_eq!(cfg.motion.spin_step, 0.02);
    assert_eq!(cfg.motion.drift_amplitude, 0.002);
    assert!(!cfg.overlay.recompute_on_resize);
    assert_eq!(cfg.overlay.badge_id, "badge");
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = BackdropConfig::from_json_str("{ nope").unwrap_err();
    assert!(matches!(err, BackdropError::Serde(_)));
}

#[test]
fn duplicate_path_ids_fail_validation() {
    let mut cfg = BackdropConfig::default();
    cfg.overlay.path_ids[2] = cfg.overlay.path_ids[0].clone();
    assert!(cfg.validate().is_err());
}

#[test]
fn missing_file_is_reported() {
    let err = BackdropConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}
