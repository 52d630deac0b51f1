//! Config loading through the process environment and the filesystem

use std::io::Write;

use serial_test::serial;
use tempfile::NamedTempFile;
use ucx_shim::config::{Feature, CONFIG_PATH_ENV};
use ucx_shim::{ConfigError, Features, ShimConfig};

const OVERRIDE_VARS: &[&str] = &[
    "UCX_SHIM_FEATURES",
    "UCX_SHIM_MT_WORKERS_SHARED",
    "UCX_SHIM_ESTIMATED_NUM_EPS",
    "UCX_SHIM_ENV_PREFIX",
];

fn clear_env() {
    std::env::remove_var(CONFIG_PATH_ENV);
    for var in OVERRIDE_VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_defaults_without_file() {
    clear_env();
    std::env::set_var(CONFIG_PATH_ENV, "/nonexistent/ucx-shim.yaml");

    let config = ShimConfig::load().unwrap();
    assert_eq!(config.context.features, vec![Feature::Tag]);

    clear_env();
}

#[test]
#[serial]
fn test_load_file_then_env() {
    clear_env();

    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "context:\n  features: [tag]\n  estimated_num_eps: 4\nucx:\n  overrides:\n    TLS: tcp"
    )
    .unwrap();

    std::env::set_var(CONFIG_PATH_ENV, file.path());
    std::env::set_var("UCX_SHIM_FEATURES", "stream,am");

    let config = ShimConfig::load().unwrap();
    // Environment wins over the file, untouched keys keep the file's values
    assert_eq!(config.context.feature_flags(), Features::STREAM | Features::AM);
    assert_eq!(config.context.estimated_num_eps, Some(4));
    assert_eq!(config.ucx.overrides["TLS"], "tcp");

    clear_env();
}

#[test]
#[serial]
fn test_load_rejects_bad_env() {
    clear_env();
    std::env::set_var(CONFIG_PATH_ENV, "/nonexistent/ucx-shim.yaml");
    std::env::set_var("UCX_SHIM_MT_WORKERS_SHARED", "sometimes");

    let err = ShimConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));

    clear_env();
}

#[test]
fn test_from_file_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "context: [not, a, map]").unwrap();

    let err = ShimConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_from_file_rejects_empty_features() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "context:\n  features: []").unwrap();

    let err = ShimConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "context.features"));
}
