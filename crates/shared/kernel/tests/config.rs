use seva_domain::config::{ClientConfig, DevApiConfig};
use seva_kernel::config::{load_config, load_config_with_vars};
use std::fs;

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg: ClientConfig =
        load_config_with_vars(Some(dir.path().join("absent")), std::iter::empty()).unwrap();

    assert_eq!(cfg.api.base_url, "http://127.0.0.1:4590/api");
    assert_eq!(cfg.api.timeout_seconds, 15);
}

#[test]
fn file_values_are_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dev-api.toml");
    fs::write(&path, "[server]\nport = 8088\nlatency_ms = 40\n\n[logging]\nlevel = \"debug\"\n")
        .unwrap();

    let cfg: DevApiConfig = load_config(Some(&path)).unwrap();
    assert_eq!(cfg.server.port, 8088);
    assert_eq!(cfg.server.latency_ms, 40);
    assert_eq!(cfg.logging.level, "debug");
}

#[test]
fn environment_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seva.toml");
    fs::write(&path, "[api]\nbase_url = \"http://file.example/api\"\ntimeout_seconds = 5\n").unwrap();

    let vars = [("SEVA__API__TIMEOUT_SECONDS".to_owned(), "30".to_owned())];
    let cfg: ClientConfig = load_config_with_vars(Some(&path), vars).unwrap();

    assert_eq!(cfg.api.base_url, "http://file.example/api");
    assert_eq!(cfg.api.timeout_seconds, 30);
}

#[test]
fn malformed_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[server\nport = ").unwrap();

    assert!(load_config::<DevApiConfig>(Some(&path)).is_err());
}
