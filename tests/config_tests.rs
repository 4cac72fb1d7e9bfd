//! Configuration tests
//!
//! Loading from TOML files and environment overrides.

use quicklink::config::{StaticConfig, get_config, update_config};
use quicklink::errors::QuicklinkError;
use quicklink::services::LinkEngine;
use tempfile::TempDir;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = StaticConfig::load_from(dir.path().join("absent.toml")).unwrap();

    assert_eq!(config.engine.token_length, 8);
    assert_eq!(config.reaper.interval_secs, 60);
}

#[test]
fn test_load_from_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quicklink.toml");
    std::fs::write(
        &path,
        r#"
[engine]
token_length = 12
base_url = "https://sho.rt/"

[reaper]
enabled = false
"#,
    )
    .unwrap();

    let config = StaticConfig::load_from(&path).unwrap();
    assert_eq!(config.engine.token_length, 12);
    assert_eq!(config.engine.base_url, "https://sho.rt/");
    // 未写的字段使用默认值
    assert_eq!(config.engine.max_token_attempts, 5);
    assert!(!config.reaper.enabled);
}

#[test]
fn test_invalid_values_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quicklink.toml");
    std::fs::write(&path, "[engine]\nmax_token_attempts = 0\n").unwrap();

    let err = StaticConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, QuicklinkError::Config(_)));
}

#[test]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("quicklink.toml");
    std::fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();

    // SAFETY: 本文件中只有这个测试读写 QL__LOGGING__* 环境变量
    unsafe {
        std::env::set_var("QL__LOGGING__LEVEL", "debug");
    }
    let config = StaticConfig::load_from(&path);
    unsafe {
        std::env::remove_var("QL__LOGGING__LEVEL");
    }

    assert_eq!(config.unwrap().logging.level, "debug");
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("quicklink.toml");

    let mut config = StaticConfig::default();
    config.engine.token_length = 16;
    config.save_to_file(&path).unwrap();

    let reloaded = StaticConfig::load_from(&path).unwrap();
    assert_eq!(reloaded.engine.token_length, 16);
}

#[test]
fn test_global_config_feeds_engine() {
    let mut config = StaticConfig::default();
    config.engine.token_length = 11;
    update_config(config).unwrap();

    assert_eq!(get_config().engine.token_length, 11);

    let engine = LinkEngine::in_memory();
    let link = engine.create("https://example.com", 1, 60.0, None).unwrap();
    assert_eq!(link.short_token.len(), 11);
}

#[test]
fn test_update_config_rejects_invalid() {
    let mut config = StaticConfig::default();
    config.engine.token_length = 0;

    let err = update_config(config).unwrap_err();
    assert!(matches!(err, QuicklinkError::Config(_)));
    // 当前配置保持不变
    assert_ne!(get_config().engine.token_length, 0);
}
