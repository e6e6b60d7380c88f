use super::*;

#[test]
fn scroll_hero_config_is_valid() {
    let config = PlayerConfig::scroll_hero();
    config.validate().unwrap();
    assert_eq!(config.frame_count, 192);
    assert_eq!(
        config.address.uri_for(0),
        "hero-sequence/frame_000_delay-0.04s.png"
    );
    assert_eq!(config.surface.width, 1920);
    assert_eq!(config.surface.height, 1080);

    let rig = config.rig().unwrap();
    let names: Vec<&str> = rig.curves().iter().map(|c| c.name()).collect();
    assert_eq!(
        names,
        vec![
            "canvas_scale",
            "canvas_y",
            "text_y",
            "text_scale",
            "text_opacity"
        ]
    );
}

#[test]
fn config_round_trips_through_json() {
    let config = PlayerConfig::scroll_hero();
    let json = serde_json::to_string(&config).unwrap();
    let back = PlayerConfig::from_json_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn from_json_str_accepts_minimal_config() {
    let json = r#"{
        "frame_count": 4,
        "address": { "base": "seq", "suffix": "f.png" },
        "surface": { "width": 8, "height": 8 }
    }"#;
    let config = PlayerConfig::from_json_str(json).unwrap();
    assert_eq!(config.address.pad_width, 3);
    assert!(config.curves.is_empty());
}

#[test]
fn from_json_str_rejects_malformed_json() {
    let err = PlayerConfig::from_json_str("{").unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn validate_rejects_bad_fields() {
    let mut config = PlayerConfig::scroll_hero();
    config.frame_count = 0;
    assert!(config.validate().is_err());

    let mut config = PlayerConfig::scroll_hero();
    config.surface.width = 0;
    assert!(config.validate().is_err());

    let mut config = PlayerConfig::scroll_hero();
    config.address.base.clear();
    assert!(config.validate().is_err());

    let mut config = PlayerConfig::scroll_hero();
    config.curves[0].points.truncate(1);
    assert!(config.validate().is_err());
}
