// SPDX-FileCopyrightText: 2026 Adapterkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Loader backed by modules compiled into the binary.
//!
//! `StaticModuleLoader` maps package identifiers to export sets registered at
//! startup, standing in for loading code by a computed name.

use std::collections::HashMap;

use adapterkit_core::{AdapterLoader, LoadError, ModuleExports};
use async_trait::async_trait;
use tracing::debug;

/// Builds a module's exports on every load.
pub type ModuleFactory<A> = Box<dyn Fn() -> Result<ModuleExports<A>, LoadError> + Send + Sync>;

enum ModuleSource<A> {
    Exports(ModuleExports<A>),
    Factory(ModuleFactory<A>),
}

/// Registry of compiled-in modules keyed by package identifier.
pub struct StaticModuleLoader<A> {
    modules: HashMap<String, ModuleSource<A>>,
}

impl<A> StaticModuleLoader<A> {
    /// Create a new empty loader.
    pub fn new() -> Self {
        Self {
            modules: HashMap::new(),
        }
    }

    /// Register fixed exports under `identifier`, replacing any previous entry.
    pub fn register(&mut self, identifier: impl Into<String>, exports: ModuleExports<A>) {
        self.modules
            .insert(identifier.into(), ModuleSource::Exports(exports));
    }

    /// Register a factory run on every load of `identifier`.
    ///
    /// A factory error is returned to the resolver unchanged.
    pub fn register_factory<F>(&mut self, identifier: impl Into<String>, factory: F)
    where
        F: Fn() -> Result<ModuleExports<A>, LoadError> + Send + Sync + 'static,
    {
        self.modules
            .insert(identifier.into(), ModuleSource::Factory(Box::new(factory)));
    }

    /// Builder-style [`register`](Self::register).
    pub fn with_module(mut self, identifier: impl Into<String>, exports: ModuleExports<A>) -> Self {
        self.register(identifier, exports);
        self
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.modules.contains_key(identifier)
    }

    /// Registered identifiers, sorted.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut identifiers: Vec<&str> = self.modules.keys().map(String::as_str).collect();
        identifiers.sort_unstable();
        identifiers
    }

    /// Returns the number of registered modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns true if no modules are registered.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl<A> Default for StaticModuleLoader<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> std::fmt::Debug for StaticModuleLoader<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticModuleLoader")
            .field("modules", &self.identifiers())
            .finish()
    }
}

#[async_trait]
impl<A> AdapterLoader<A> for StaticModuleLoader<A>
where
    A: Clone + Send + Sync + 'static,
{
    async fn load(&self, identifier: &str) -> Result<ModuleExports<A>, LoadError> {
        debug!(identifier, "loading compiled-in module");
        match self.modules.get(identifier) {
            Some(ModuleSource::Exports(exports)) => Ok(exports.clone()),
            Some(ModuleSource::Factory(factory)) => factory(),
            None => Err(LoadError::NotFound {
                identifier: identifier.to_string(),
            }),
        }
    }
}
