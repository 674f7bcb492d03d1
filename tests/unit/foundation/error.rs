use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BackdropError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BackdropError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        BackdropError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BackdropError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
