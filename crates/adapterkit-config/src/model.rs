// SPDX-FileCopyrightText: 2026 Adapterkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for adapterkit.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use adapterkit_core::DiscoverySettings;
use serde::{Deserialize, Serialize};

/// Top-level adapterkit configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterkitConfig {
    /// Dependency discovery settings.
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// Where dependencies are read from and which packages are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DiscoveryConfig {
    /// Path of the manifest declaring the project's dependencies
    /// (`package.json` or `Cargo.toml`).
    #[serde(default = "default_manifest_path")]
    pub manifest_path: String,

    /// Packages containing this token are never gathered. Empty disables exclusion.
    #[serde(default = "default_exclusion_token")]
    pub exclusion_token: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            manifest_path: default_manifest_path(),
            exclusion_token: default_exclusion_token(),
        }
    }
}

impl DiscoveryConfig {
    /// Resolver settings derived from this section.
    pub fn settings(&self) -> DiscoverySettings {
        DiscoverySettings {
            exclusion_token: self.exclusion_token.clone(),
        }
    }
}

fn default_manifest_path() -> String {
    "package.json".to_string()
}

fn default_exclusion_token() -> String {
    DiscoverySettings::default().exclusion_token
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
