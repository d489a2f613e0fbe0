use approx::assert_abs_diff_eq;
use chart_tooltip::ChartError;
use chart_tooltip::core::LinearScale;

#[test]
fn scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(10.0, 110.0).expect("valid scale");
    let range = (40.0, 840.0);

    let original = 42.5;
    let px = scale.domain_to_range(original, range).expect("to range");
    let recovered = scale.range_to_domain(px, range).expect("from range");

    assert_abs_diff_eq!(px, 300.0, epsilon = 1e-9);
    assert_abs_diff_eq!(recovered, original, epsilon = 1e-9);
}

#[test]
fn inverted_range_maps_top_to_bottom() {
    let scale = LinearScale::new(0.0, 100.0).expect("valid scale");
    assert_eq!(scale.domain(), (0.0, 100.0));

    let px = scale.domain_to_range(25.0, (400.0, 0.0)).expect("to range");
    assert_abs_diff_eq!(px, 300.0, epsilon = 1e-9);
}

#[test]
fn degenerate_domain_and_range_are_rejected() {
    assert!(matches!(
        LinearScale::new(5.0, 5.0),
        Err(ChartError::InvalidData(_))
    ));
    assert!(LinearScale::new(f64::NAN, 1.0).is_err());

    let scale = LinearScale::new(0.0, 1.0).expect("valid scale");
    assert!(scale.domain_to_range(0.5, (10.0, 10.0)).is_err());
    assert!(scale.domain_to_range(f64::INFINITY, (0.0, 10.0)).is_err());
    assert!(scale.range_to_domain(f64::NAN, (0.0, 10.0)).is_err());
}
