#![cfg(feature = "serde")]

use chancellor::ControllerConfig;

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config: ControllerConfig = serde_json::from_str("{}").expect("deserialize");
    assert_eq!(config, ControllerConfig::default());
    assert!(config.update_chancellor);
}

#[test]
fn controller_config_json_roundtrip() {
    let config = ControllerConfig {
        update_chancellor: false,
    };
    let json = serde_json::to_string(&config).expect("serialize");
    let roundtrip: ControllerConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(roundtrip, config);
}
