//! Tests for configuration validation.

use crate::config::Config;
use crate::error::SegmentError;

#[test]
fn test_validation_passes() {
    let config = Config::default_config();
    assert!(config.validate().is_ok());
}

#[test]
fn test_validation_fails_zero_k() {
    let mut config = Config::default_config();
    config.clustering.k = 0;

    let result = config.validate();
    assert!(matches!(result, Err(SegmentError::ConfigError(_))));
    let err_msg = result.unwrap_err().to_string();
    assert!(err_msg.contains("[clustering]"), "got: {}", err_msg);
}

#[test]
fn test_validation_fails_bad_threshold() {
    let mut config = Config::default_config();
    config.clustering.convergence_threshold = f64::NAN;
    assert!(config.validate().is_err());

    config.clustering.convergence_threshold = -1.0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validation_fails_zero_restarts_or_iterations() {
    let mut config = Config::default_config();
    config.clustering.n_init = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default_config();
    config.clustering.max_iterations = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validation_fails_recommendation_bounds() {
    let mut config = Config::default_config();
    config.recommendation.max_selected = 0;
    config.recommendation.top_fixed = 0;
    let err_msg = config.validate().unwrap_err().to_string();
    assert!(err_msg.contains("[recommendation]"), "got: {}", err_msg);

    let mut config = Config::default_config();
    config.recommendation.top_fixed = 5;
    assert!(config.validate().is_err());
}

#[test]
fn test_validation_fails_logging() {
    let mut config = Config::default_config();
    config.logging.format = "xml".into();
    let err_msg = config.validate().unwrap_err().to_string();
    assert!(err_msg.contains("logging.format"));

    let mut config = Config::default_config();
    config.logging.level = "  ".into();
    assert!(config.validate().is_err());
}
