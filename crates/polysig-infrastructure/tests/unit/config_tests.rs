//! Configuration loading tests using temporary TOML files

use std::io::Write;
use std::time::Duration;

use polysig_application::dispatch::AmbiguityPolicy;
use polysig_infrastructure::config::{
    AppConfig, ConfigBuilder, ConfigLoader, DispatchConfig, SingletonConfig,
};
use polysig_infrastructure::constants::DEFAULT_SLOW_INIT_WARN_MS;
use tempfile::{NamedTempFile, TempDir};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.dispatch.ambiguity, AmbiguityPolicy::FirstMatch);
    assert_eq!(config.singleton.slow_init_warn_ms, DEFAULT_SLOW_INIT_WARN_MS);
}

#[test]
fn test_load_from_file_overrides_defaults() {
    let file = write_config(
        r#"
[logging]
level = "debug"
json_format = true

[dispatch]
ambiguity = "reject"

[singleton]
slow_init_warn_ms = 250
"#,
    );

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap();
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json_format);
    assert_eq!(config.dispatch.ambiguity, AmbiguityPolicy::Reject);
    assert_eq!(config.singleton.slow_init_warn_ms, 250);
}

#[test]
fn test_partial_file_keeps_remaining_defaults() {
    let file = write_config("[dispatch]\nambiguity = \"reject\"\n");

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap();
    assert_eq!(config.dispatch.ambiguity, AmbiguityPolicy::Reject);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.singleton.slow_init_warn_ms, DEFAULT_SLOW_INIT_WARN_MS);
}

#[test]
fn test_missing_explicit_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .load()
        .unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_invalid_log_level_rejected() {
    let file = write_config("[logging]\nlevel = \"chatty\"\n");
    let result = ConfigLoader::new().with_config_path(file.path()).load();
    assert!(result.is_err());
}

#[test]
fn test_unknown_ambiguity_policy_rejected() {
    let file = write_config("[dispatch]\nambiguity = \"random\"\n");
    let result = ConfigLoader::new().with_config_path(file.path()).load();
    assert!(result.is_err());
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("polysig.toml");
    let config = ConfigBuilder::new()
        .with_dispatch(DispatchConfig {
            ambiguity: AmbiguityPolicy::Reject,
        })
        .with_singleton(SingletonConfig {
            slow_init_warn_ms: 0,
        })
        .build();

    let loader = ConfigLoader::new().with_config_path(&path);
    loader.save_to_file(&config, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("ambiguity = \"reject\""));
    assert_eq!(loader.load().unwrap(), config);
}

#[test]
fn test_section_options() {
    let disabled = SingletonConfig {
        slow_init_warn_ms: 0,
    };
    assert_eq!(disabled.to_options().slow_init_threshold, None);

    let enabled = SingletonConfig {
        slow_init_warn_ms: 5,
    };
    assert_eq!(
        enabled.to_options().slow_init_threshold,
        Some(Duration::from_millis(5))
    );

    let dispatch = DispatchConfig {
        ambiguity: AmbiguityPolicy::Reject,
    };
    assert_eq!(dispatch.to_options().ambiguity, AmbiguityPolicy::Reject);
}
