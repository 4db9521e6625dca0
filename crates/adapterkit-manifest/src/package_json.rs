// SPDX-FileCopyrightText: 2026 Adapterkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `package.json` dependency reader.

use std::path::{Path, PathBuf};

use adapterkit_core::{DeclaredDependencies, DependencyReader, ManifestError};
use serde_json::Value;
use tracing::debug;

/// Reads `dependencies` and `devDependencies` from a `package.json`.
#[derive(Debug, Clone)]
pub struct PackageJsonReader {
    path: PathBuf,
}

impl PackageJsonReader {
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
        let manifest: Value = serde_json::from_str(content).map_err(|e| ManifestError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        Ok(DeclaredDependencies {
            dependencies: self.section(&manifest, "dependencies")?,
            dev_dependencies: self.section(&manifest, "devDependencies")?,
        })
    }

    fn section(&self, manifest: &Value, name: &str) -> Result<Vec<(String, String)>, ManifestError> {
        let Some(section) = manifest.get(name) else {
            return Ok(Vec::new());
        };
        let object = section.as_object().ok_or_else(|| ManifestError::InvalidSection {
            path: self.path.clone(),
            section: name.to_string(),
        })?;

        Ok(object
            .iter()
            .map(|(dependency, version)| {
                let version = match version {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (dependency.clone(), version)
            })
            .collect())
    }
}

impl DependencyReader for PackageJsonReader {
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
            "read package.json"
        );
        Ok(declared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn reader() -> PackageJsonReader {
        PackageJsonReader::new("package.json")
    }

    #[test]
    fn parses_both_sections_in_declaration_order() {
        let declared = reader()
            .parse(
                r#"{
                    "name": "app",
                    "dependencies": { "zeta": "^1.0.0", "alpha": "2.0.0" },
                    "devDependencies": { "./src/__fixtures__/my_domain_other": "1.0.0" }
                }"#,
            )
            .unwrap();

        assert_eq!(
            declared.dependencies,
            vec![
                ("zeta".to_string(), "^1.0.0".to_string()),
                ("alpha".to_string(), "2.0.0".to_string()),
            ]
        );
        assert_eq!(declared.dev_dependencies.len(), 1);
    }

    #[test]
    fn missing_sections_are_empty() {
        let declared = reader().parse(r#"{ "name": "bare" }"#).unwrap();
        assert!(declared.dependencies.is_empty());
        assert!(declared.dev_dependencies.is_empty());
    }

    #[test]
    fn non_object_section_is_rejected() {
        let err = reader().parse(r#"{ "dependencies": ["a"] }"#).unwrap_err();
        assert!(matches!(err, ManifestError::InvalidSection { ref section, .. } if section == "dependencies"));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = reader().parse("{ not json").unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
    }

    #[test]
    fn reads_fresh_from_disk_every_time() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "dependencies": {{ "my_domain_a": "1" }} }}"#).unwrap();
        let reader = PackageJsonReader::new(file.path());
        assert_eq!(reader.read().unwrap().into_set().len(), 1);

        std::fs::write(
            file.path(),
            r#"{ "dependencies": { "my_domain_a": "1" }, "devDependencies": { "my_domain_b": "1" } }"#,
        )
        .unwrap();
        assert_eq!(reader.read().unwrap().into_set().len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let reader = PackageJsonReader::new("/nonexistent/adapterkit/package.json");
        assert!(matches!(reader.read().unwrap_err(), ManifestError::Io { .. }));
    }
}
