use figi_types::{ContentType, FigiConfig};

#[test]
fn config_roundtrip() {
    let cfg = FigiConfig {
        endpoint: "http://127.0.0.1:8080/v1/mapping".to_string(),
        api_key: Some("secret".to_string()),
        timeout: std::time::Duration::from_millis(2500),
        content_type: ContentType::LegacyTextJson,
        user_agent: "figi-test".to_string(),
    };

    let json = serde_json::to_string(&cfg).expect("serialize config");
    let de: FigiConfig = serde_json::from_str(&json).expect("deserialize config");

    assert_eq!(de, cfg);
    assert_eq!(de.timeout.as_millis(), 2500);
    assert_eq!(de.content_type.as_str(), "text/json");
}

#[test]
fn default_config_targets_public_endpoint() {
    let cfg = FigiConfig::default();
    assert_eq!(cfg.endpoint, "https://api.openfigi.com/v1/mapping");
    assert_eq!(cfg.content_type.as_str(), "application/json");
    assert!(cfg.api_key.is_none());
}
