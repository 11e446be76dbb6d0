use super::*;

#[test]
fn range_ends_map_to_first_and_last_bucket() {
    for n in [1usize, 2, 20, 64] {
        assert_eq!(classify(0.3, n, 0.3, 4.0).unwrap(), 0);
        assert_eq!(classify(4.3, n, 0.3, 4.0).unwrap(), n - 1);
    }
}

#[test]
fn out_of_range_values_clamp() {
    let c = VelocityClassifier::default();
    assert_eq!(c.classify(-100.0, 20).unwrap(), 0);
    assert_eq!(c.classify(0.0, 20).unwrap(), 0);
    assert_eq!(c.classify(1e9, 20).unwrap(), 19);
    assert_eq!(c.classify(f64::INFINITY, 20).unwrap(), 19);
    assert_eq!(c.classify(f64::NEG_INFINITY, 20).unwrap(), 0);
    assert_eq!(c.classify(f64::NAN, 20).unwrap(), 0);
}

#[test]
fn reference_velocities_bucket_as_expected() {
    let c = VelocityClassifier::default();
    let idx: Vec<usize> = [0.3, 2.3, 4.3]
        .into_iter()
        .map(|v| c.classify(v, 20).unwrap())
        .collect();
    assert_eq!(idx, vec![0, 10, 19]);
}

#[test]
fn interior_buckets_floor() {
    // 0.2 per bucket with the defaults and 20 buckets.
    let c = VelocityClassifier::default();
    assert_eq!(c.classify(0.49, 20).unwrap(), 0);
    assert_eq!(c.classify(0.51, 20).unwrap(), 1);
    assert_eq!(c.classify(4.29, 20).unwrap(), 19);
    assert_eq!(c.classify(4.09, 20).unwrap(), 18);
}

#[test]
fn zero_range_is_invalid_config() {
    let err = classify(1.0, 20, 0.3, 0.0).unwrap_err();
    assert!(matches!(err, SnapError::InvalidConfig(_)));
}

#[test]
fn bad_params_are_invalid_config() {
    for (min_v, range) in [(0.3, -1.0), (0.3, f64::NAN), (f64::INFINITY, 4.0)] {
        let err = VelocityClassifier::new(min_v, range).unwrap_err();
        assert!(matches!(err, SnapError::InvalidConfig(_)));
    }
    let err = VelocityClassifier::default().classify(1.0, 0).unwrap_err();
    assert!(matches!(err, SnapError::InvalidConfig(_)));
}
