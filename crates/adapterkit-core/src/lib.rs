// SPDX-FileCopyrightText: 2026 Adapterkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for adapterkit.
//!
//! Holds the shared data model used by resolution and gathering, the two
//! collaborator traits the resolver is built on ([`DependencyReader`] and
//! [`AdapterLoader`]), and the error taxonomy surfaced to callers.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{AdapterError, LoadError, ManifestError};
pub use traits::{AdapterLoader, DependencyReader};
pub use types::{
    AdapterSpec, DeclaredDependencies, DependencySet, DiscoverySettings, GatheredAdapters,
    ModuleExports,
};
