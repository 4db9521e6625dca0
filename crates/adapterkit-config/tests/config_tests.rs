// SPDX-FileCopyrightText: 2026 Adapterkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the adapterkit configuration system.

use adapterkit_config::diagnostic::ConfigError;
use adapterkit_config::{
    load_and_validate, load_and_validate_path, load_and_validate_str, load_config_from_str,
};

#[test]
fn valid_toml_deserializes_into_config() {
    let toml = r#"
[discovery]
manifest_path = "app/Cargo.toml"
exclusion_token = "mock"

[log]
level = "debug"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.discovery.manifest_path, "app/Cargo.toml");
    assert_eq!(config.discovery.exclusion_token, "mock");
    assert_eq!(config.log.level, "debug");
    assert_eq!(config.discovery.settings().exclusion_token, "mock");
}

#[test]
fn empty_toml_uses_defaults() {
    let config = load_and_validate_str("").expect("defaults should be valid");
    assert_eq!(config.discovery.manifest_path, "package.json");
    assert_eq!(config.discovery.exclusion_token, "jest");
    assert_eq!(config.log.level, "info");
}

#[test]
fn unknown_field_produces_suggestion() {
    let toml = r#"
[discovery]
exclusion_tokn = "mock"
"#;

    let errors = load_and_validate_str(toml).unwrap_err();
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key, suggestion, ..
        } => {
            assert_eq!(key, "exclusion_tokn");
            assert_eq!(suggestion.as_deref(), Some("exclusion_token"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

#[test]
fn unknown_section_is_rejected() {
    let errors = load_and_validate_str("[loader]\nkind = \"static\"\n").unwrap_err();
    assert!(matches!(errors[0], ConfigError::UnknownKey { .. }));
}

#[test]
fn wrong_type_is_reported_with_path() {
    let errors = load_and_validate_str("[discovery]\nmanifest_path = 3\n").unwrap_err();
    match &errors[0] {
        ConfigError::InvalidType { key, .. } => assert_eq!(key, "discovery.manifest_path"),
        other => panic!("expected InvalidType, got {other:?}"),
    }
}

#[test]
fn validation_errors_surface() {
    let errors = load_and_validate_str("[log]\nlevel = \"loud\"\n").unwrap_err();
    assert!(matches!(errors[0], ConfigError::Validation { .. }));
}

#[test]
fn env_overrides_file_values() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "adapterkit.toml",
            r#"
[discovery]
manifest_path = "from-file.json"
exclusion_token = "mock"
"#,
        )?;
        jail.set_env("ADAPTERKIT_DISCOVERY_MANIFEST_PATH", "from-env/Cargo.toml");
        jail.set_env("ADAPTERKIT_LOG_LEVEL", "warn");

        let config = load_and_validate().expect("config should load");
        assert_eq!(config.discovery.manifest_path, "from-env/Cargo.toml");
        assert_eq!(config.discovery.exclusion_token, "mock");
        assert_eq!(config.log.level, "warn");
        Ok(())
    });
}

#[test]
fn env_alone_sets_exclusion_token() {
    figment::Jail::expect_with(|jail| {
        jail.set_env("ADAPTERKIT_DISCOVERY_EXCLUSION_TOKEN", "mock");

        let config = load_and_validate().expect("env-only config should load");
        assert_eq!(config.discovery.exclusion_token, "mock");
        assert_eq!(config.discovery.settings().exclusion_token, "mock");
        assert_eq!(config.discovery.manifest_path, "package.json");
        Ok(())
    });
}

#[test]
fn explicit_path_is_loaded() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "[discovery]\nexclusion_token = \"\"\n")?;

        let config = load_and_validate_path(std::path::Path::new("custom.toml"))
            .expect("config should load");
        assert_eq!(config.discovery.exclusion_token, "");
        Ok(())
    });
}
