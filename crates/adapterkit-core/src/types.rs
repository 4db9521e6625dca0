// SPDX-FileCopyrightText: 2026 Adapterkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data model shared by resolution and gathering.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Result of a gather call, keyed by derived reference name.
pub type GatheredAdapters<A> = HashMap<String, A>;

/// Identifies the adapters a resolver works with.
///
/// The adapter name is supplied per `resolve` call, so one spec serves every
/// name within the domain.
#[derive(Debug, Clone)]
pub struct AdapterSpec<A> {
    /// Feature-area namespace used to filter candidate packages.
    pub domain: String,
    /// Role suffix of the adapters (e.g. "engine").
    pub adapter_type: String,
    /// Built-in adapters checked before any package lookup.
    pub internal: HashMap<String, A>,
}

impl<A> AdapterSpec<A> {
    pub fn new(domain: impl Into<String>, adapter_type: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            adapter_type: adapter_type.into(),
            internal: HashMap::new(),
        }
    }

    /// Add a built-in adapter under `name`.
    pub fn with_internal(mut self, name: impl Into<String>, adapter: A) -> Self {
        self.internal.insert(name.into(), adapter);
        self
    }

    /// Replace all built-in adapters.
    pub fn with_internals(mut self, internal: HashMap<String, A>) -> Self {
        self.internal = internal;
        self
    }
}

/// Tunables applied to every resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoverySettings {
    /// Packages whose name contains this token are never gathered.
    /// An empty token disables exclusion.
    pub exclusion_token: String,
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            exclusion_token: "jest".to_string(),
        }
    }
}

/// Raw dependency declarations as read from a manifest, in declaration order.
///
/// Values are version requirements; resolution ignores them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredDependencies {
    pub dependencies: Vec<(String, String)>,
    pub dev_dependencies: Vec<(String, String)>,
}

impl DeclaredDependencies {
    /// Merge runtime and development names into one ordered set.
    pub fn into_set(self) -> DependencySet {
        DependencySet::from_names(
            self.dependencies
                .into_iter()
                .chain(self.dev_dependencies)
                .map(|(name, _)| name),
        )
    }
}

/// Ordered, de-duplicated dependency names.
///
/// A name declared twice keeps the position of its first declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    names: Vec<String>,
}

impl DependencySet {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for name in names {
            let name = name.into();
            if !set.contains(&name) {
                set.names.push(name);
            }
        }
        set
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Names in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// The named bindings exported by one loaded module, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleExports<A> {
    bindings: Vec<(String, A)>,
}

impl<A> ModuleExports<A> {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Add a binding. Re-inserting an existing name replaces its value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: A) {
        let name = name.into();
        match self.bindings.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.bindings.push((name, value)),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: A) -> Self {
        self.insert(name, value);
        self
    }

    /// Take the value bound to `name` out of the exports.
    pub fn remove(&mut self, name: &str) -> Option<A> {
        let index = self.bindings.iter().position(|(n, _)| n == name)?;
        Some(self.bindings.remove(index).1)
    }

    pub fn get(&self, name: &str) -> Option<&A> {
        self.bindings
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &A)> {
        self.bindings.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<A> Default for ModuleExports<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> IntoIterator for ModuleExports<A> {
    type Item = (String, A);
    type IntoIter = std::vec::IntoIter<(String, A)>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.into_iter()
    }
}

impl<A, S: Into<String>> FromIterator<(S, A)> for ModuleExports<A> {
    fn from_iter<I: IntoIterator<Item = (S, A)>>(iter: I) -> Self {
        let mut exports = Self::new();
        for (name, value) in iter {
            exports.insert(name, value);
        }
        exports
    }
}
