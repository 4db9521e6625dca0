// SPDX-FileCopyrightText: 2026 Adapterkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `Cargo.toml` dependency reader.

use std::path::{Path, PathBuf};

use adapterkit_core::{DeclaredDependencies, DependencyReader, ManifestError};
use toml::Value;
use tracing::debug;

/// Reads `[dependencies]` and `[dev-dependencies]` from a `Cargo.toml`.
///
/// Table-form dependencies (`foo = { version = "1", ... }`) report their
/// `version` key, or `*` for path and git dependencies without one.
#[derive(Debug, Clone)]
pub struct CargoManifestReader {
    path: PathBuf,
}

impl CargoManifestReader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse manifest content without touching the filesystem.
    pub fn parse(&self, content: &str) -> Result<DeclaredDependencies, ManifestError> {
        let manifest: toml::Table = toml::from_str(content).map_err(|e| ManifestError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        Ok(DeclaredDependencies {
            dependencies: self.section(&manifest, "dependencies")?,
            dev_dependencies: self.section(&manifest, "dev-dependencies")?,
        })
    }

    fn section(&self, manifest: &toml::Table, name: &str) -> Result<Vec<(String, String)>, ManifestError> {
        let Some(section) = manifest.get(name) else {
            return Ok(Vec::new());
        };
        let table = section.as_table().ok_or_else(|| ManifestError::InvalidSection {
            path: self.path.clone(),
            section: name.to_string(),
        })?;

        Ok(table
            .iter()
            .map(|(dependency, spec)| (dependency.clone(), version_of(spec)))
            .collect())
    }
}

fn version_of(spec: &Value) -> String {
    match spec {
        Value::String(version) => version.clone(),
        Value::Table(table) => table
            .get("version")
            .and_then(Value::as_str)
            .unwrap_or("*")
            .to_string(),
        _ => "*".to_string(),
    }
}

impl DependencyReader for CargoManifestReader {
    fn read(&self) -> Result<DeclaredDependencies, ManifestError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| ManifestError::Io {
            path: self.path.clone(),
            source,
        })?;
        let declared = self.parse(&content)?;
        debug!(
            path = %self.path.display(),
            dependencies = declared.dependencies.len(),
            dev_dependencies = declared.dev_dependencies.len(),
            "read Cargo.toml"
        );
        Ok(declared)
    }

    fn manifest_name(&self) -> &str {
        "Cargo.toml"
    }

    fn install_hint(&self) -> &str {
        "cargo fetch"
    }
}
