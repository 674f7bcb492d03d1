use super::*;
use crate::scene::entity::EntityId;

const EPS: f64 = 1e-12;

#[test]
fn sphere_moves_by_position_delta_each_tick() {
    let p = MotionParams::default();
    let mut e = Entity::sphere(EntityId(0), 0.3, DVec3::new(1.0, 2.0, 3.0), 4.0);
    let mut expected = e.transform().position;
    for t in [0.0, 0.016, 0.033, 1.5, 1000.25] {
        let before = e.transform().position;
        p.apply(&mut e, t);
        let step = e.transform().position - before;
        let d = p.position_delta(t, 4.0);
        assert!((step - d).length() < EPS);
        expected += d;
    }
    assert!((e.transform().position - expected).length() < EPS);
    assert_eq!(e.transform().position.z, 3.0);
}

#[test]
fn position_delta_has_fixed_magnitude() {
    let p = MotionParams::default();
    for (t, phase) in [(0.0, 0.0), (2.0, 3.0), (123.4, 7.0)] {
        let d = p.position_delta(t, phase);
        assert!((d.length() - p.drift_amplitude).abs() < EPS);
        assert_eq!(d.z, 0.0);
    }
}

#[test]
fn solid_spins_by_constant_step() {
    let p = MotionParams::default();
    let mut e = Entity::solid(EntityId(0), DVec3::ONE, DVec3::ZERO);
    for n in 1..=50 {
        p.apply(&mut e, n as f64 * 7.3);
        let r = e.transform().rotation;
        assert!((r.x - n as f64 * 0.01).abs() < 1e-9);
        assert!((r.y - n as f64 * 0.01).abs() < 1e-9);
        assert_eq!(r.z, 0.0);
    }
    assert_eq!(e.transform().position, DVec3::ZERO);
}

#[test]
fn rotation_wraps_into_one_turn() {
    let p = MotionParams {
        spin_step: 1.0,
        ..MotionParams::default()
    };
    let mut e = Entity::solid(EntityId(0), DVec3::ONE, DVec3::ZERO);
    for _ in 0..100 {
        p.apply(&mut e, 0.0);
        let r = e.transform().rotation;
        assert!((0.0..TAU).contains(&r.x));
    }
    let expected = 100.0f64.rem_euclid(TAU);
    assert!((e.transform().rotation.x - expected).abs() < 1e-9);
}

#[test]
fn line_values_are_absolute() {
    let p = MotionParams::default();
    let mut e = Entity::line(
        EntityId(0),
        DVec3::new(-6.0, 0.0, 0.8),
        DVec3::new(6.0, 0.0, 0.8),
        2.0,
    );
    p.apply(&mut e, 5.0);
    let first = *e.line_state().unwrap();
    p.apply(&mut e, 9.0);
    p.apply(&mut e, 5.0);
    let again = *e.line_state().unwrap();
    assert_eq!(first, again);

    assert!((first.shimmer - (0.9 + 0.1 * (5.0f64 + 2.0).sin())).abs() < EPS);
    assert!((first.vertex_depth[0] - (0.8 + 0.3 * (5.0f64 + 2.0).sin())).abs() < EPS);
    assert!((first.vertex_depth[1] - (0.8 + 0.3 * (5.0f64 + 2.0 + 3.0).sin())).abs() < EPS);
    assert_eq!(e.transform().position, e.base_position());
}

#[test]
fn shimmer_stays_within_band() {
    let p = MotionParams::default();
    for i in 0..200 {
        let v = p.shimmer_intensity(i as f64 * 0.37, (i % 10) as f64);
        assert!(v >= 0.8 - EPS && v <= 1.0 + EPS);
    }
}

#[test]
fn non_finite_params_are_rejected() {
    let p = MotionParams {
        drift_rate: f64::INFINITY,
        ..MotionParams::default()
    };
    assert!(p.validate().is_err());
    assert!(MotionParams::default().validate().is_ok());
}
