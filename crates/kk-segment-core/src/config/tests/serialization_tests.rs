//! Serialization and file loading tests for configuration.

use std::io::Write;

use crate::config::Config;

#[test]
fn test_config_serialization_round_trip() {
    let config = Config::default_config().with_seed(7);

    let toml_str = toml::to_string(&config).expect("Config must serialize to TOML");
    let deserialized: Config =
        toml::from_str(&toml_str).expect("Config must deserialize from TOML");

    assert_eq!(deserialized, config);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let config: Config = toml::from_str(
        r#"
        [clustering]
        k = 4

        [pipeline]
        parallel_views = true
        "#,
    )
    .expect("Partial config must parse");

    assert_eq!(config.clustering.k, 4);
    assert_eq!(config.clustering.n_init, 10);
    assert!(config.pipeline.parallel_views);
    assert_eq!(config.recommendation.top_fixed, 2);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "[clustering]\nseed = 99\n\n[recommendation]\nseparator = \" | \"\n"
    )
    .expect("write config");

    let config = Config::from_file(file.path()).expect("Config must load from file");
    assert_eq!(config.clustering.seed, Some(99));
    assert_eq!(config.recommendation.separator, " | ");
}

#[test]
fn test_from_file_missing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = Config::from_file(&dir.path().join("absent.toml"));

    let err_msg = result.unwrap_err().to_string();
    assert!(err_msg.contains("Failed to read config file"));
}

#[test]
fn test_from_file_rejects_invalid_values() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[clustering]\nk = 0\n").expect("write config");

    let err_msg = Config::from_file(file.path()).unwrap_err().to_string();
    assert!(err_msg.contains("clustering"), "got: {}", err_msg);
}

#[test]
fn test_from_file_rejects_malformed_toml() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[clustering\nk = ").expect("write config");

    let err_msg = Config::from_file(file.path()).unwrap_err().to_string();
    assert!(err_msg.contains("Failed to parse config file"));
}
