// SPDX-FileCopyrightText: 2026 Adapterkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock module loader for deterministic discovery tests.
//!
//! `MockLoader` serves canned exports, fails on request, and records every
//! identifier it was asked to load, in order.

use std::collections::HashMap;
use std::sync::Arc;

use adapterkit_core::{AdapterLoader, LoadError, ModuleExports};
use async_trait::async_trait;
use tokio::sync::Mutex;

enum MockModule<A> {
    Exports(ModuleExports<A>),
    Broken(String),
}

/// A loader returning pre-configured modules.
///
/// Identifiers that were never configured fail with [`LoadError::NotFound`].
pub struct MockLoader<A> {
    modules: HashMap<String, MockModule<A>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl<A> MockLoader<A> {
    /// Create a new mock loader with no modules.
    pub fn new() -> Self {
        Self {
            modules: HashMap::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Serve `exports` for `identifier`.
    pub fn with_module(mut self, identifier: impl Into<String>, exports: ModuleExports<A>) -> Self {
        self.modules
            .insert(identifier.into(), MockModule::Exports(exports));
        self
    }

    /// Fail loads of `identifier` with an evaluation error carrying `message`.
    pub fn with_broken_module(
        mut self,
        identifier: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.modules
            .insert(identifier.into(), MockModule::Broken(message.into()));
        self
    }

    /// Identifiers requested so far, in request order.
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

impl<A> Default for MockLoader<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<A> AdapterLoader<A> for MockLoader<A>
where
    A: Clone + Send + Sync + 'static,
{
    async fn load(&self, identifier: &str) -> Result<ModuleExports<A>, LoadError> {
        self.calls.lock().await.push(identifier.to_string());
        match self.modules.get(identifier) {
            Some(MockModule::Exports(exports)) => Ok(exports.clone()),
            Some(MockModule::Broken(message)) => Err(LoadError::Evaluation {
                identifier: identifier.to_string(),
                message: message.clone(),
            }),
            None => Err(LoadError::NotFound {
                identifier: identifier.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_calls_in_order() {
        let loader = MockLoader::new()
            .with_module("a", ModuleExports::new().with("AEngine", 1))
            .with_broken_module("b", "boom");

        assert!(loader.load("a").await.is_ok());
        assert!(matches!(
            loader.load("b").await,
            Err(LoadError::Evaluation { .. })
        ));
        assert!(matches!(
            loader.load("c").await,
            Err(LoadError::NotFound { .. })
        ));
        assert_eq!(loader.calls().await, vec!["a", "b", "c"]);
    }
}
