use truesize::sphere::mercator_scale;

#[test]
fn mercator_scale_known_values() {
    assert!((mercator_scale(0.0, 60.0) - 2.0).abs() < 1e-12);
    assert!((mercator_scale(60.0, 0.0) - 0.5).abs() < 1e-12);
    assert_eq!(mercator_scale(45.0, 45.0), 1.0);
    assert_eq!(mercator_scale(-30.0, 30.0), 1.0);
}

#[test]
fn mercator_scale_is_reciprocal_under_swap() {
    for (a, b) in [(10.0, 70.0), (-45.0, 20.0), (72.0, 0.0)] {
        let product = mercator_scale(a, b) * mercator_scale(b, a);
        assert!((product - 1.0).abs() < 1e-12, "{a} -> {b}: {product}");
    }
}

#[test]
fn mercator_scale_grows_without_bound_near_poles() {
    let near_pole = mercator_scale(0.0, 89.999);
    assert!(near_pole > 50_000.0, "scale = {near_pole}");
    // At the pole the cosine is only approximately zero; the result is huge, not an error.
    let at_pole = mercator_scale(0.0, 90.0);
    assert!(at_pole > 1e15 || at_pole.is_infinite());
}
