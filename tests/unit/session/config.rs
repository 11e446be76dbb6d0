use super::*;

#[test]
fn new_uses_reference_defaults() {
    let cfg = RenderConfig::new(19.2, 10.8, 0.05, "out");
    assert_eq!(cfg.palette_size, 20);
    assert_eq!(cfg.min_velocity, 0.3);
    assert_eq!(cfg.velocity_range, 4.0);
    cfg.validate().unwrap();
}

#[test]
fn classifier_follows_config() {
    let cfg = RenderConfig {
        min_velocity: -1.0,
        velocity_range: 2.5,
        ..RenderConfig::new(4.0, 3.0, 0.1, "out")
    };
    let c = cfg.classifier().unwrap();
    assert_eq!(c.min_velocity(), -1.0);
    assert_eq!(c.velocity_range(), 2.5);
}

#[test]
fn json_fills_optional_fields() {
    let cfg: RenderConfig = serde_json::from_str(
        r#"{"world_width": 4, "world_height": 3, "particle_radius": 0.1, "output_dir": "frames"}"#,
    )
    .unwrap();
    assert_eq!(cfg, RenderConfig::new(4.0, 3.0, 0.1, "frames"));
}

#[test]
fn validate_rejects_bad_values() {
    let base = RenderConfig::new(4.0, 3.0, 0.1, "out");
    let cases = [
        RenderConfig {
            world_width: 0.0,
            ..base.clone()
        },
        RenderConfig {
            world_height: f64::NAN,
            ..base.clone()
        },
        RenderConfig {
            particle_radius: -0.1,
            ..base.clone()
        },
        RenderConfig {
            palette_size: 0,
            ..base.clone()
        },
        RenderConfig {
            velocity_range: 0.0,
            ..base.clone()
        },
    ];
    for cfg in cases {
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, SnapError::InvalidConfig(_)), "{cfg:?}");
    }
}
