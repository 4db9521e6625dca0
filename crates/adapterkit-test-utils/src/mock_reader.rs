// SPDX-FileCopyrightText: 2026 Adapterkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock dependency reader returning fixed declarations.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use adapterkit_core::{DeclaredDependencies, DependencyReader, ManifestError};

/// A dependency reader with fixed contents.
///
/// Every call to `read` is counted so tests can assert that a call consulted
/// (or skipped) the manifest.
#[derive(Debug, Default)]
pub struct MockDependencyReader {
    declared: DeclaredDependencies,
    fail: bool,
    reads: AtomicUsize,
}

impl MockDependencyReader {
    /// Create a reader with no dependencies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader declaring `names` as development dependencies.
    pub fn with_dev_dependencies<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new().dev_dependencies(names)
    }

    /// Add runtime dependencies, all at version `1.0.0`.
    pub fn dependencies<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declared
            .dependencies
            .extend(names.into_iter().map(|n| (n.into(), "1.0.0".to_string())));
        self
    }

    /// Add development dependencies, all at version `1.0.0`.
    pub fn dev_dependencies<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.declared
            .dev_dependencies
            .extend(names.into_iter().map(|n| (n.into(), "1.0.0".to_string())));
        self
    }

    /// Create a reader whose every read fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Number of times `read` has been called.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl DependencyReader for MockDependencyReader {
    fn read(&self) -> Result<DeclaredDependencies, ManifestError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ManifestError::Parse {
                path: PathBuf::from("package.json"),
                message: "mock manifest failure".to_string(),
            });
        }
        Ok(self.declared.clone())
    }
}
