// SPDX-FileCopyrightText: 2026 Adapterkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./adapterkit.toml` > `~/.config/adapterkit/adapterkit.toml`
//! > `/etc/adapterkit/adapterkit.toml`, with environment variable overrides via
//! the `ADAPTERKIT_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::AdapterkitConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/adapterkit/adapterkit.toml` (system-wide)
/// 3. `~/.config/adapterkit/adapterkit.toml` (user XDG config)
/// 4. `./adapterkit.toml` (local directory)
/// 5. `ADAPTERKIT_*` environment variables
pub fn load_config() -> Result<AdapterkitConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<AdapterkitConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AdapterkitConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<AdapterkitConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(AdapterkitConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading (exposed for diagnostic use).
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(AdapterkitConfig::default()))
        .merge(Toml::file("/etc/adapterkit/adapterkit.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("adapterkit/adapterkit.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("adapterkit.toml"))
        .merge(env_provider())
}

/// Environment provider mapping `ADAPTERKIT_SECTION_KEY` to `section.key`.
///
/// Uses `Env::map()` rather than `Env::split("_")` because keys contain
/// underscores: `ADAPTERKIT_DISCOVERY_MANIFEST_PATH` must become
/// `discovery.manifest_path`, not `discovery.manifest.path`.
fn env_provider() -> Env {
    Env::prefixed("ADAPTERKIT_").map(|key| {
        key.as_str()
            .to_lowercase()
            .replacen("discovery_", "discovery.", 1)
            .replacen("log_", "log.", 1)
            .into()
    })
}
