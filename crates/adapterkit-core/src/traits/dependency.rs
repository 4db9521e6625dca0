// SPDX-FileCopyrightText: 2026 Adapterkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Source of a project's declared dependencies.

use crate::error::ManifestError;
use crate::types::DeclaredDependencies;

/// Reads the runtime and development dependencies a project declares.
///
/// `read` is called once per resolve/gather call; implementations must not
/// cache between calls.
pub trait DependencyReader: Send + Sync {
    /// Read the current declarations.
    fn read(&self) -> Result<DeclaredDependencies, ManifestError>;

    /// Manifest file name used in import error messages.
    fn manifest_name(&self) -> &str {
        "package.json"
    }

    /// Command suggested to the user when a declared dependency fails to load.
    fn install_hint(&self) -> &str {
        "npm install"
    }
}
