use super::*;

#[test]
fn rng_is_deterministic() {
    let mut a = Rng64::new(123);
    let mut b = Rng64::new(123);
    for _ in 0..10 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn centered_values_stay_in_range() {
    let mut rng = Rng64::new(7);
    for _ in 0..1000 {
        let v = rng.next_centered(4.0);
        assert!((-4.0..4.0).contains(&v));
    }
}
