use super::*;

#[test]
fn endpoints_match_colormap_ends() {
    for n in [2usize, 3, 7, 20, 256] {
        let p = Palette::build(n).unwrap();
        assert_eq!(p.len(), n);
        assert_eq!(p.get(0), Some(turbo(0.0)));
        assert_eq!(p.get(n - 1), Some(turbo(1.0)));
        assert_eq!(p.get(n), None);
    }
}

#[test]
fn single_entry_palette_is_low_end() {
    let p = Palette::build(1).unwrap();
    assert_eq!(p.as_slice(), &[turbo(0.0)]);
}

#[test]
fn zero_size_is_invalid_config() {
    let err = Palette::build(0).unwrap_err();
    assert!(matches!(err, SnapError::InvalidConfig(_)));
}

#[test]
fn entries_are_evenly_spaced_samples() {
    let p = Palette::build(5).unwrap();
    let expected: Vec<Rgb> = [0.0, 0.25, 0.5, 0.75, 1.0].into_iter().map(turbo).collect();
    assert_eq!(p.iter().collect::<Vec<_>>(), expected);
}

#[test]
fn build_is_deterministic_and_default_matches() {
    assert_eq!(Palette::build(20).unwrap(), Palette::build(20).unwrap());
    assert_eq!(Palette::default(), Palette::build(DEFAULT_PALETTE_SIZE).unwrap());
}
