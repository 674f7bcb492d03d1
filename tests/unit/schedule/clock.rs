use super::*;

#[test]
fn origin_is_first_timestamp() {
    let mut c = FrameClock::new(2.0);
    assert_eq!(c.origin_ms(), None);
    assert_eq!(c.elapsed_secs(12_000.0), 2.0);
    assert_eq!(c.origin_ms(), Some(12_000.0));
    assert_eq!(c.elapsed_secs(13_500.0), 3.5);
}
