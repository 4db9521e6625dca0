// SPDX-FileCopyrightText: 2026 Adapterkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dependency manifest readers.
//!
//! Each reader implements [`DependencyReader`] for one manifest format and
//! re-reads its file on every call.

pub mod cargo;
pub mod package_json;

use std::path::Path;

use adapterkit_core::DependencyReader;
use strum::{Display, EnumString};

pub use cargo::CargoManifestReader;
pub use package_json::PackageJsonReader;

/// Supported manifest formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ManifestKind {
    PackageJson,
    Cargo,
}

impl ManifestKind {
    /// Guess the manifest format from a file name. Anything that is not a
    /// `Cargo.toml` is read as `package.json`.
    pub fn detect(path: &Path) -> Self {
        match path.file_name().and_then(|n| n.to_str()) {
            Some("Cargo.toml") => ManifestKind::Cargo,
            _ => ManifestKind::PackageJson,
        }
    }
}

/// Build the reader for `path` in the given format.
pub fn reader_for(kind: ManifestKind, path: &Path) -> Box<dyn DependencyReader> {
    match kind {
        ManifestKind::PackageJson => Box::new(PackageJsonReader::new(path)),
        ManifestKind::Cargo => Box::new(CargoManifestReader::new(path)),
    }
}

/// Build the reader matching the file name of `path`.
pub fn reader_for_path(path: &Path) -> Box<dyn DependencyReader> {
    reader_for(ManifestKind::detect(path), path)
}
