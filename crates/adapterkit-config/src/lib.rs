// SPDX-FileCopyrightText: 2026 Adapterkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for adapterkit.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, environment variable
//! overrides, and miette diagnostics with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use adapterkit_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("manifest: {}", config.discovery.manifest_path);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{AdapterkitConfig, DiscoveryConfig, LogConfig};

/// Load configuration from the XDG hierarchy and validate it.
pub fn load_and_validate() -> Result<AdapterkitConfig, Vec<ConfigError>> {
    validated(loader::load_config())
}

/// Load configuration from a specific TOML file (plus env overrides) and validate it.
pub fn load_and_validate_path(path: &Path) -> Result<AdapterkitConfig, Vec<ConfigError>> {
    validated(loader::load_config_from_path(path))
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<AdapterkitConfig, Vec<ConfigError>> {
    validated(loader::load_config_from_str(toml_content))
}

fn validated(
    loaded: Result<AdapterkitConfig, figment::Error>,
) -> Result<AdapterkitConfig, Vec<ConfigError>> {
    match loaded {
        Ok(config) => {
            validation::validate_config(&config)?;
            tracing::debug!(
                manifest = %config.discovery.manifest_path,
                exclusion_token = %config.discovery.exclusion_token,
                "configuration loaded"
            );
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err)),
    }
}
