use super::*;
use crate::routing::anchor::{LayoutGeometry, StaticAnchors, ViewportLayout};

fn ids() -> [String; 3] {
    ["path-a".to_string(), "path-b".to_string(), "path-c".to_string()]
}

fn router() -> PathRouter {
    PathRouter::new("badge", "hub", ids(), RouteTuning::default())
}

fn layout() -> ViewportLayout {
    ViewportLayout::new("badge", "hub", LayoutGeometry::default())
}

#[test]
fn scenario_paths_leave_badge_above_and_below() {
    let vp = Viewport::new(1280, 720);
    let badge = Anchor::new(40.0, 720.0 - 40.0 - 100.0, 100.0, 100.0).unwrap();
    let target = Anchor::centered(Point::new(640.0, 360.0), 160.0, 160.0);
    let [a, b, c] = route(vp, badge, target, &RouteTuning::default());

    assert!(a.first_ctrl().unwrap().y < badge.top());
    assert!(c.first_ctrl().unwrap().y > badge.bottom());

    assert_eq!(a.start, Point::new(90.0, 580.0));
    assert_eq!(b.start, Point::new(140.0, 630.0));
    assert_eq!(c.start, Point::new(90.0, 680.0));
    assert_eq!(b.first_ctrl().unwrap().y, b.start.y);
}

#[test]
fn paths_stay_separated_above_through_below() {
    for (w, h) in [(1280, 720), (800, 600), (1920, 1080), (390, 844)] {
        let vp = Viewport::new(w, h);
        let geo = LayoutGeometry::default();
        let [a, b, c] = route(vp, geo.badge(vp), geo.target(vp), &RouteTuning::default());
        let cy = vp.center().y;

        assert!(a.end().y < cy);
        assert!(b.end().y > cy);
        assert!(c.end().y > b.end().y);
        for p in [&a, &b, &c] {
            assert_eq!(p.end().x, f64::from(w));
            assert_eq!(p.segments.len(), 2);
        }
        let apex = a.first_ctrl().unwrap().y;
        assert!(apex < geo.target(vp).top());
    }
}

#[test]
fn small_targets_keep_lower_path_below_middle_path() {
    let vp = Viewport::new(1280, 720);
    let badge = LayoutGeometry::default().badge(vp);
    let tuning = RouteTuning::default();
    for size in [0.0, 1.0, 20.0, 47.0, 48.0, 80.0, 400.0] {
        let target = Anchor::centered(vp.center(), size, size);
        let [a, b, c] = route(vp, badge, target, &tuning);
        let (above, under, rise) = (a.end().y, b.end().y, c.end().y);
        assert!(above < under, "size {size}: {above} !< {under}");
        assert!(under < rise, "size {size}: {under} !< {rise}");
        assert!(rise >= target.bottom() + tuning.approach);
    }
}

#[test]
fn point_target_places_lower_path_under_middle_path() {
    let vp = Viewport::new(1280, 720);
    let badge = LayoutGeometry::default().badge(vp);
    let target = Anchor::centered(vp.center(), 0.0, 0.0);
    let [a, b, c] = route(vp, badge, target, &RouteTuning::default());
    assert_eq!(a.end(), Point::new(1280.0, 348.0));
    assert_eq!(b.end(), Point::new(1280.0, 400.0));
    assert_eq!(c.end(), Point::new(1280.0, 416.0));
}

#[test]
fn route_is_deterministic() {
    let vp = Viewport::new(1280, 720);
    let geo = LayoutGeometry::default();
    let first = route(vp, geo.badge(vp), geo.target(vp), &RouteTuning::default());
    let second = route(vp, geo.badge(vp), geo.target(vp), &RouteTuning::default());
    assert_eq!(first, second);
    let s1: Vec<String> = first.iter().map(BezierPath::to_svg).collect();
    let s2: Vec<String> = second.iter().map(BezierPath::to_svg).collect();
    assert_eq!(s1, s2);
}

#[test]
fn recompute_writes_all_three_paths() {
    let mut sink = RecordingSink::with_elements(ids());
    let out = router().recompute(Viewport::new(1280, 720), &layout(), &mut sink);
    assert!(out.is_written());
    assert_eq!(sink.writes(), 3);
    for id in ids() {
        let d = sink.get(&id).unwrap();
        assert!(d.starts_with('M'));
        assert!(d.contains('Q'));
        assert!(kurbo::BezPath::from_svg(d).is_ok());
    }
}

#[test]
fn missing_target_anchor_writes_nothing() {
    let anchors = StaticAnchors::new().with("badge", Anchor::new(40.0, 580.0, 100.0, 100.0).unwrap());
    let mut sink = RecordingSink::with_elements(ids());
    let out = router().recompute(Viewport::new(1280, 720), &anchors, &mut sink);
    assert_eq!(
        out,
        RouteOutcome::Skipped(SkipReason::MissingAnchor("hub".to_string()))
    );
    assert_eq!(sink.writes(), 0);
}

#[test]
fn missing_element_keeps_previous_paths() {
    let mut sink = RecordingSink::with_elements(ids());
    let r = router();
    assert!(r.recompute(Viewport::new(1280, 720), &layout(), &mut sink).is_written());
    let before = sink.get("path-a").unwrap().to_string();

    sink.remove_element("path-c");
    let out = r.recompute(Viewport::new(640, 480), &layout(), &mut sink);
    assert_eq!(
        out,
        RouteOutcome::Skipped(SkipReason::MissingElement("path-c".to_string()))
    );
    assert_eq!(sink.writes(), 3);
    assert_eq!(sink.get("path-a"), Some(before.as_str()));
}

#[test]
fn tuning_rejects_non_positive_offsets() {
    assert!(RouteTuning::default().validate().is_ok());
    let bad = RouteTuning {
        lift: 0.0,
        ..RouteTuning::default()
    };
    assert!(bad.validate().is_err());
}
