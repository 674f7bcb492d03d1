use super::*;

#[test]
fn svg_description_parses_back() {
    let p = BezierPath::new(Point::new(0.0, 10.0))
        .quad_to(Point::new(5.0, 0.0), Point::new(10.0, 10.0))
        .quad_to(Point::new(15.0, 20.0), Point::new(20.0, 10.0));
    assert_eq!(p.first_ctrl(), Some(Point::new(5.0, 0.0)));
    assert_eq!(p.end(), Point::new(20.0, 10.0));

    let parsed = BezPath::from_svg(&p.to_svg()).unwrap();
    assert_eq!(parsed, p.to_bez_path());
}

#[test]
fn empty_path_ends_at_start() {
    let p = BezierPath::new(Point::new(3.0, 4.0));
    assert_eq!(p.end(), Point::new(3.0, 4.0));
    assert!(p.first_ctrl().is_none());
}
