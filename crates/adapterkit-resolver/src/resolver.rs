// SPDX-FileCopyrightText: 2026 Adapterkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Single-adapter resolution and the resolver handle.
//!
//! Resolution order:
//! 1. A built-in (internal) adapter registered under the name wins outright.
//! 2. Otherwise the first declared dependency containing both the domain and
//!    the name is loaded.
//! 3. The loaded module's exports are searched for `name_type` in its literal,
//!    Pascal, camel and snake spellings, in that order.

use std::collections::HashMap;
use std::sync::Arc;

use adapterkit_core::{
    AdapterError, AdapterLoader, AdapterSpec, DependencyReader, DependencySet,
    DiscoverySettings, GatheredAdapters, LoadError,
};
use tracing::{debug, warn};

use crate::gatherer::gather_with;
use crate::matcher::{self, DEFAULT_EXCLUSION_TOKEN};
use crate::variants::export_name_variants;

/// Resolves and gathers adapters of one type within one domain.
///
/// The dependency reader and module loader are injected; nothing is cached
/// between calls, so every `resolve`/`gather` sees the current manifest.
pub struct AdapterResolver<A: Send + 'static> {
    spec: AdapterSpec<A>,
    reader: Arc<dyn DependencyReader>,
    loader: Arc<dyn AdapterLoader<A>>,
    exclusion_token: String,
}

impl<A> AdapterResolver<A>
where
    A: Clone + Send + Sync + 'static,
{
    pub fn new(
        spec: AdapterSpec<A>,
        reader: Arc<dyn DependencyReader>,
        loader: Arc<dyn AdapterLoader<A>>,
    ) -> Self {
        Self {
            spec,
            reader,
            loader,
            exclusion_token: DEFAULT_EXCLUSION_TOKEN.to_string(),
        }
    }

    /// Create a resolver using configured discovery settings.
    pub fn from_settings(
        spec: AdapterSpec<A>,
        reader: Arc<dyn DependencyReader>,
        loader: Arc<dyn AdapterLoader<A>>,
        settings: &DiscoverySettings,
    ) -> Self {
        Self::new(spec, reader, loader).with_exclusion_token(settings.exclusion_token.clone())
    }

    /// Override the token that excludes packages from gathering.
    pub fn with_exclusion_token(mut self, token: impl Into<String>) -> Self {
        self.exclusion_token = token.into();
        self
    }

    pub fn spec(&self) -> &AdapterSpec<A> {
        &self.spec
    }

    pub fn exclusion_token(&self) -> &str {
        &self.exclusion_token
    }

    /// Resolve the adapter registered as `name`.
    pub async fn resolve(&self, name: &str) -> Result<A, AdapterError> {
        resolve_with(
            Some(self.spec.domain.as_str()),
            Some(self.spec.adapter_type.as_str()),
            &self.spec.internal,
            name,
            self.reader.as_ref(),
            self.loader.as_ref(),
        )
        .await
    }

    /// Gather every adapter of the configured type in the domain.
    pub async fn gather(&self) -> Result<GatheredAdapters<A>, AdapterError> {
        gather_with(
            &self.spec,
            &self.exclusion_token,
            self.reader.as_ref(),
            self.loader.as_ref(),
        )
        .await
    }
}

impl<A: Send + 'static> std::fmt::Debug for AdapterResolver<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterResolver")
            .field("domain", &self.spec.domain)
            .field("adapter_type", &self.spec.adapter_type)
            .field("internal", &self.spec.internal.keys().collect::<Vec<_>>())
            .field("exclusion_token", &self.exclusion_token)
            .finish()
    }
}

pub(crate) async fn resolve_with<A>(
    domain: Option<&str>,
    adapter_type: Option<&str>,
    internal: &HashMap<String, A>,
    name: &str,
    reader: &dyn DependencyReader,
    loader: &dyn AdapterLoader<A>,
) -> Result<A, AdapterError>
where
    A: Clone + Send + 'static,
{
    if let Some(adapter) = internal.get(name) {
        debug!(adapter = name, "resolved built-in adapter");
        return Ok(adapter.clone());
    }

    let dependencies = reader.read()?.into_set();

    let module = locate_module(&dependencies, domain, name, adapter_type)?;

    debug!(adapter = name, module, "loading adapter module");
    let mut exports = loader
        .load(module)
        .await
        .map_err(|source| import_error(module, reader, source))?;

    let variants = export_name_variants(name, adapter_type);
    for candidate in variants.in_priority_order() {
        if let Some(adapter) = exports.remove(candidate) {
            debug!(adapter = name, module, export = candidate, "resolved adapter export");
            return Ok(adapter);
        }
    }

    Err(AdapterError::ExportNotFound {
        module: module.to_string(),
        name: name.to_string(),
        attempted: variants.into_array(),
    })
}

/// Pick the package that resolving `name` would load.
///
/// A missing domain matches every dependency containing the name. Fails with
/// [`AdapterError::Lookup`] when no declared dependency contains both the
/// domain and the name.
pub fn locate_module<'a>(
    dependencies: &'a DependencySet,
    domain: Option<&str>,
    name: &str,
    adapter_type: Option<&str>,
) -> Result<&'a str, AdapterError> {
    let scope = domain.unwrap_or_default();
    matcher::find_named_candidate(dependencies, scope, name).ok_or_else(|| {
        debug!(
            adapter = name,
            domain = scope,
            declared = dependencies.len(),
            "no dependency matches adapter name"
        );
        AdapterError::Lookup {
            name: name.to_string(),
            domain: domain.map(str::to_string),
            adapter_type: adapter_type.map(str::to_string),
            suggestion: matcher::suggest_candidate(dependencies, scope, name).map(str::to_string),
        }
    })
}

/// Wrap a loader failure with the reinstall advisory for `module`.
pub(crate) fn import_error(
    module: &str,
    reader: &dyn DependencyReader,
    source: LoadError,
) -> AdapterError {
    warn!(module, error = %source, "failed to load adapter module");
    AdapterError::Import {
        module: module.to_string(),
        manifest: reader.manifest_name().to_string(),
        install_hint: reader.install_hint().to_string(),
        source,
    }
}
