// SPDX-FileCopyrightText: 2026 Adapterkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Convention-based adapter discovery.
//!
//! Given a domain (feature area) and a type (role such as `engine`), the
//! resolver scans a project's declared dependencies for packages whose names
//! contain the domain, loads them through an [`AdapterLoader`], and picks the
//! exports named after the adapter and its type.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use adapterkit_core::{AdapterSpec, ModuleExports};
//! use adapterkit_manifest::PackageJsonReader;
//! use adapterkit_resolver::{AdapterResolver, StaticModuleLoader};
//!
//! # async fn run() -> Result<(), adapterkit_core::AdapterError> {
//! let loader = StaticModuleLoader::new().with_module(
//!     "@acme/token-registry-redis",
//!     ModuleExports::new().with("RedisEngine", "redis"),
//! );
//! let resolver = AdapterResolver::new(
//!     AdapterSpec::new("token-registry", "engine"),
//!     Arc::new(PackageJsonReader::new("package.json")),
//!     Arc::new(loader),
//! );
//!
//! let engine = resolver.resolve("redis").await?;
//! let all = resolver.gather().await?;
//! # Ok(())
//! # }
//! ```

pub mod case;
mod gatherer;
pub mod loader;
pub mod matcher;
pub mod resolver;
pub mod variants;

use std::collections::HashMap;

use adapterkit_core::{
    AdapterError, AdapterLoader, AdapterSpec, DependencyReader, DiscoverySettings,
    GatheredAdapters,
};

pub use case::{split_words, to_camel_case, to_pascal_case, to_snake_case};
pub use loader::{ModuleFactory, StaticModuleLoader};
pub use matcher::{
    domain_candidates, find_named_candidate, matches_domain, matches_name_and_domain,
    qualifies_for_type, reference_key, suggest_candidate, DEFAULT_EXCLUSION_TOKEN,
};
pub use resolver::{locate_module, AdapterResolver};
pub use variants::{export_name_variants, ExportNameVariants};

/// Options for the loose, one-off resolution form.
///
/// Both domain and type may be left out: a missing domain matches every
/// dependency that contains the name, and a missing type makes the export
/// name the adapter name alone.
#[derive(Debug, Clone)]
pub struct ResolveOptions<A> {
    pub domain: Option<String>,
    pub adapter_type: Option<String>,
    pub internal: HashMap<String, A>,
}

impl<A> Default for ResolveOptions<A> {
    fn default() -> Self {
        Self {
            domain: None,
            adapter_type: None,
            internal: HashMap::new(),
        }
    }
}

/// Resolve one adapter without building an [`AdapterResolver`].
pub async fn resolve_adapter<A>(
    name: &str,
    options: &ResolveOptions<A>,
    reader: &dyn DependencyReader,
    loader: &dyn AdapterLoader<A>,
) -> Result<A, AdapterError>
where
    A: Clone + Send + 'static,
{
    resolver::resolve_with(
        options.domain.as_deref(),
        options.adapter_type.as_deref(),
        &options.internal,
        name,
        reader,
        loader,
    )
    .await
}

/// Gather all adapters described by `spec` without building an [`AdapterResolver`].
pub async fn gather_adapters<A>(
    spec: &AdapterSpec<A>,
    settings: &DiscoverySettings,
    reader: &dyn DependencyReader,
    loader: &dyn AdapterLoader<A>,
) -> Result<GatheredAdapters<A>, AdapterError>
where
    A: Clone + Send + 'static,
{
    gatherer::gather_with(spec, &settings.exclusion_token, reader, loader).await
}
