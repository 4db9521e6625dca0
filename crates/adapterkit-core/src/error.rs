// SPDX-FileCopyrightText: 2026 Adapterkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for adapter resolution and gathering.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Failure raised by an [`AdapterLoader`](crate::AdapterLoader) when a module
/// identifier cannot be located or evaluated.
///
/// This is the "original kind" of an import failure; [`AdapterError::Import`]
/// keeps it as its source so callers can still match on it.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No module is known under the identifier.
    #[error("Cannot find module '{identifier}'")]
    NotFound { identifier: String },

    /// The module was located but failed while being evaluated.
    #[error("{message}")]
    Evaluation { identifier: String, message: String },

    /// Loader-specific failure.
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync>),
}

/// Failure to read the dependency manifest of a project.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The manifest is not valid JSON/TOML.
    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// A dependency section exists but has the wrong shape.
    #[error("invalid `{section}` section in {}: expected a mapping of names to versions", path.display())]
    InvalidSection { path: PathBuf, section: String },
}

/// The error surfaced by `resolve` and `gather`.
#[derive(Debug, Error, Diagnostic)]
pub enum AdapterError {
    /// No declared dependency matches the requested domain and name.
    #[error(
        "There isn't an installed module that matches the adapter specification for: \"{name}\"{}",
        lookup_scope(.domain.as_deref(), .adapter_type.as_deref())
    )]
    #[diagnostic(
        code(adapterkit::lookup),
        help("{}", format_lookup_help(suggestion.as_deref()))
    )]
    Lookup {
        name: String,
        /// `None` only for one-off lookups that named no domain.
        domain: Option<String>,
        adapter_type: Option<String>,
        /// Closest declared dependency name, if any was reasonably similar.
        suggestion: Option<String>,
    },

    /// A matched package failed to load.
    #[error(
        "Module \"{module}\" is a dependency in {manifest} but there is a problem importing it, try running \"{install_hint}\"\n\n{source}"
    )]
    #[diagnostic(code(adapterkit::import))]
    Import {
        module: String,
        manifest: String,
        install_hint: String,
        source: LoadError,
    },

    /// The package loaded but exposes none of the candidate export names.
    #[error(
        "Module \"{module}\" does not provide an export that matches \"{name}\", trying: [{}, {}, {}, {},]",
        .attempted[0], .attempted[1], .attempted[2], .attempted[3]
    )]
    #[diagnostic(
        code(adapterkit::export_not_found),
        help("export one of the attempted names from \"{module}\"")
    )]
    ExportNotFound {
        module: String,
        name: String,
        attempted: [String; 4],
    },

    /// The dependency manifest could not be read.
    #[error(transparent)]
    #[diagnostic(code(adapterkit::manifest))]
    Manifest(#[from] ManifestError),
}

impl AdapterError {
    pub fn is_lookup(&self) -> bool {
        matches!(self, AdapterError::Lookup { .. })
    }

    pub fn is_import(&self) -> bool {
        matches!(self, AdapterError::Import { .. })
    }

    pub fn is_export_not_found(&self) -> bool {
        matches!(self, AdapterError::ExportNotFound { .. })
    }

    /// The underlying loader failure of an import error.
    pub fn load_error(&self) -> Option<&LoadError> {
        match self {
            AdapterError::Import { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Render the ` under "<domain>" domain of "<type>" type` tail of a lookup message.
fn lookup_scope(domain: Option<&str>, adapter_type: Option<&str>) -> String {
    let mut scope = String::new();
    if let Some(domain) = domain {
        scope.push_str(&format!(" under \"{domain}\" domain"));
    }
    if let Some(adapter_type) = adapter_type {
        scope.push_str(&format!(" of \"{adapter_type}\" type"));
    }
    scope
}

fn format_lookup_help(suggestion: Option<&str>) -> String {
    match suggestion {
        Some(s) => format!("did you mean the dependency `{s}`?"),
        None => "declare a dependency whose name contains both the domain and the adapter name"
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_message_names_everything_requested() {
        let err = AdapterError::Lookup {
            name: "some".into(),
            domain: Some("other_domain".into()),
            adapter_type: Some("engine".into()),
            suggestion: None,
        };
        assert_eq!(
            err.to_string(),
            "There isn't an installed module that matches the adapter specification for: \"some\" under \"other_domain\" domain of \"engine\" type"
        );
    }

    #[test]
    fn lookup_message_omits_missing_scope() {
        let err = AdapterError::Lookup {
            name: "some".into(),
            domain: None,
            adapter_type: None,
            suggestion: None,
        };
        assert_eq!(
            err.to_string(),
            "There isn't an installed module that matches the adapter specification for: \"some\""
        );
    }

    #[test]
    fn lookup_message_keeps_empty_domain() {
        let err = AdapterError::Lookup {
            name: "some".into(),
            domain: Some(String::new()),
            adapter_type: Some("engine".into()),
            suggestion: None,
        };
        assert_eq!(
            err.to_string(),
            "There isn't an installed module that matches the adapter specification for: \"some\" under \"\" domain of \"engine\" type"
        );
    }

    #[test]
    fn import_message_prefixes_the_loader_message() {
        let err = AdapterError::Import {
            module: "./fixtures/other_domain_thing".into(),
            manifest: "package.json".into(),
            install_hint: "npm install".into(),
            source: LoadError::Evaluation {
                identifier: "./fixtures/other_domain_thing".into(),
                message: "Unexpected token".into(),
            },
        };
        assert_eq!(
            err.to_string(),
            "Module \"./fixtures/other_domain_thing\" is a dependency in package.json but there is a problem importing it, try running \"npm install\"\n\nUnexpected token"
        );
        assert!(matches!(
            err.load_error(),
            Some(LoadError::Evaluation { .. })
        ));
    }

    #[test]
    fn export_not_found_lists_all_attempts_with_trailing_comma() {
        let err = AdapterError::ExportNotFound {
            module: "/abs/my_domain_technology".into(),
            name: "technology".into(),
            attempted: [
                "technology_broken".into(),
                "TechnologyBroken".into(),
                "technologyBroken".into(),
                "technology_broken".into(),
            ],
        };
        assert_eq!(
            err.to_string(),
            "Module \"/abs/my_domain_technology\" does not provide an export that matches \"technology\", trying: [technology_broken, TechnologyBroken, technologyBroken, technology_broken,]"
        );
        assert!(err.is_export_not_found());
        assert!(!err.is_import());
        assert!(err.load_error().is_none());
    }

    #[test]
    fn lookup_help_carries_suggestion() {
        let err = AdapterError::Lookup {
            name: "tech".into(),
            domain: Some("my_domain".into()),
            adapter_type: None,
            suggestion: Some("my_domain_technology".into()),
        };
        let help = err.help().map(|h| h.to_string());
        assert_eq!(
            help.as_deref(),
            Some("did you mean the dependency `my_domain_technology`?")
        );
    }
}
