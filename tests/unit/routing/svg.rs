use super::*;

#[test]
fn document_lists_every_path_element() {
    let mut overlay = SvgOverlay::new(["b", "a"], OverlayStyle::default());
    overlay.write("a", "M0,0 Q1,1 2,2");
    overlay.write("missing", "M9,9");

    let doc = overlay.to_document(Viewport::new(320, 200));
    assert!(doc.starts_with("<svg"));
    assert!(doc.contains(r#"viewBox="0 0 320 200""#));
    assert!(doc.contains(r#"<path id="a" d="M0,0 Q1,1 2,2""#));
    assert!(doc.contains(r#"<path id="b" d="""#));
    assert!(!doc.contains("M9,9"));
    assert!(doc.find(r#"id="a""#).unwrap() < doc.find(r#"id="b""#).unwrap());
}

#[test]
fn attributes_are_escaped() {
    let overlay = SvgOverlay::new([r#"x"y"#], OverlayStyle::default());
    let doc = overlay.to_document(Viewport::new(1, 1));
    assert!(doc.contains("x&quot;y"));
}
