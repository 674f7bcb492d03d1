use super::*;

#[test]
fn duplicate_ids_are_rejected() {
    let a = Entity::sphere(EntityId(1), 0.3, DVec3::ZERO, 0.0);
    let b = Entity::sphere(EntityId(1), 0.3, DVec3::ONE, 1.0);
    assert!(SceneState::new(vec![a, b]).is_err());
}

#[test]
fn snapshot_preserves_render_order() {
    let scene = SceneState::new(vec![
        Entity::solid(EntityId(9), DVec3::ONE, DVec3::ZERO),
        Entity::sphere(EntityId(2), 0.3, DVec3::new(1.0, 0.0, 0.0), 2.0),
    ])
    .unwrap();
    let snap = scene.snapshot();
    let ids: Vec<_> = snap.entities.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![EntityId(9), EntityId(2)]);
    assert_eq!(snap.entities[1].phase, 2.0);
    assert_eq!(scene.get(EntityId(2)).unwrap().base_position().x, 1.0);
}

#[test]
fn line_base_position_is_midpoint() {
    let e = Entity::line(
        EntityId(0),
        DVec3::new(-6.0, 1.0, 0.8),
        DVec3::new(6.0, 1.0, 0.8),
        0.0,
    );
    assert_eq!(e.base_position(), DVec3::new(0.0, 1.0, 0.8));
    assert_eq!(e.line_state().unwrap().vertex_depth, [0.8, 0.8]);
}
