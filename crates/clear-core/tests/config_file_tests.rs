use clear_core::config::ClearConfig;
use clear_core::diff::EqualityMode;
use clear_core::errors::ClearError;
use clear_core::logging_facility::Profile;
use std::io::Write;

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ClearConfig::load(&dir.path().join("clear.toml")).unwrap();
    assert_eq!(config, ClearConfig::default());
}

#[test]
fn test_file_values_are_loaded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "equality = \"structural\"").unwrap();
    writeln!(file, "log_profile = \"production\"").unwrap();

    let config = ClearConfig::load(file.path()).unwrap();
    assert_eq!(config.equality, EqualityMode::Structural);
    assert_eq!(config.log_profile, Profile::Production);
}

#[test]
fn test_bad_equality_value_is_a_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "equality = \"deep\"").unwrap();

    let err = ClearConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ClearError::Config { .. }));
}
