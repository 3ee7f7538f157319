use seva_domain::config::{ApiConfig, ClientConfig, DevApiConfig, LoggingConfig, ServerConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let api = ApiConfig::default();
    assert_eq!(api.base_url, "http://127.0.0.1:4590/api");
    assert_eq!(api.timeout_seconds, 15);

    let server = ServerConfig::default();
    assert_eq!(server.port, 4590);
    assert!(server.address.is_loopback());
    assert_eq!(server.latency_ms, 0);

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.directory.is_none());
    assert!(!logging.json);
}

#[test]
fn client_config_deserializes_partial_input() {
    let raw = json!({
        "api": { "base_url": "https://trust.example.org/api" },
        "storage": { "data_dir": "/tmp/seva" }
    });

    let cfg: ClientConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.api.base_url, "https://trust.example.org/api");
    assert_eq!(cfg.api.timeout_seconds, 15);
    assert_eq!(cfg.storage.data_dir, std::path::PathBuf::from("/tmp/seva"));
    assert_eq!(cfg.logging.level, "info");
}

#[test]
fn client_config_clones_share_until_mutated() {
    let original = ClientConfig::default();
    let mut copy = original.clone();
    copy.api.timeout_seconds = 3;

    assert_eq!(original.api.timeout_seconds, 15);
    assert_eq!(copy.api.timeout_seconds, 3);
}

#[test]
fn dev_api_config_deserializes() {
    let raw = json!({
        "server": { "address": "0.0.0.0", "port": 8080, "latency_ms": 250 },
        "logging": { "level": "debug", "json": true }
    });

    let cfg: DevApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.server.latency_ms, 250);
    assert!(cfg.logging.json);
}
