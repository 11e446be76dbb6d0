use super::*;

#[test]
fn decodes_and_flattens_in_order() {
    let json = br#"{
        "positions": [{"x": 1, "y": 2}, {"x": 3, "y": 4}],
        "velocity_magnitudes": [0.5, 1.2]
    }"#;
    let frame = decode_frame(json, FrameId(3)).unwrap();
    assert_eq!(frame.frame_id, FrameId(3));
    assert_eq!(frame.positions_flat(), &[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(frame.velocities(), &[0.5, 1.2]);
    assert_eq!(frame.particle_count(), 2);
    assert_eq!(frame.position(1), Some(Point::new(3.0, 4.0)));
    assert_eq!(frame.position(2), None);
    assert_eq!(frame.velocity(0), Some(0.5));
}

#[test]
fn particles_iterates_pairs() {
    let json = br#"{"positions": [{"x": -1.5, "y": 0.25}, {"x": 9, "y": -9}],
                    "velocity_magnitudes": [3, 4]}"#;
    let frame = decode_frame(json, FrameId(0)).unwrap();
    let got: Vec<_> = frame.particles().collect();
    assert_eq!(
        got,
        vec![(Point::new(-1.5, 0.25), 3.0), (Point::new(9.0, -9.0), 4.0)]
    );
}

#[test]
fn mismatched_lengths_fail() {
    let json = br#"{"positions": [{"x": 1, "y": 2}], "velocity_magnitudes": [0.5, 1.2]}"#;
    let err = decode_frame(json, FrameId(0)).unwrap_err();
    assert!(matches!(err, SnapError::Decode(_)), "{err:?}");
}

#[test]
fn missing_or_non_numeric_fields_fail() {
    let cases: [&[u8]; 6] = [
        br#"{"positions": []}"#,
        br#"{"velocity_magnitudes": []}"#,
        br#"{"positions": [{"x": 1}], "velocity_magnitudes": [1]}"#,
        br#"{"positions": [{"x": "1", "y": 2}], "velocity_magnitudes": [1]}"#,
        br#"{"positions": [{"x": 1, "y": 2}], "velocity_magnitudes": [null]}"#,
        br#"[1, 2, 3]"#,
    ];
    for json in cases {
        let err = decode_frame(json, FrameId(0)).unwrap_err();
        assert!(
            matches!(err, SnapError::Decode(_)),
            "{}: {err:?}",
            String::from_utf8_lossy(json)
        );
    }
}

#[test]
fn empty_frame_is_accepted() {
    let json = br#"{"positions": [], "velocity_magnitudes": []}"#;
    let frame = decode_frame(json, FrameId(1)).unwrap();
    assert!(frame.is_empty());
    assert_eq!(frame.particles().count(), 0);
}

#[test]
fn extra_fields_are_ignored() {
    let json = br#"{"positions": [{"x": 1, "y": 2, "z": 7}], "velocity_magnitudes": [1],
                    "time": 0.016}"#;
    assert!(decode_frame(json, FrameId(0)).is_ok());
}

#[test]
fn frame_new_checks_flat_length() {
    let err = Frame::new(FrameId(0), vec![1.0, 2.0, 3.0], vec![1.0]).unwrap_err();
    assert!(matches!(err, SnapError::Decode(_)));
}

#[test]
fn from_path_reports_bad_names_before_io() {
    let err = Frame::from_path("does/not/exist/frame.json").unwrap_err();
    assert!(matches!(err, SnapError::InvalidInput(_)));

    let err = Frame::from_path("does/not/exist/00001.json").unwrap_err();
    assert!(matches!(err, SnapError::Other(_)));
}
