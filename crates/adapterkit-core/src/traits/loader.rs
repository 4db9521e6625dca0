// SPDX-FileCopyrightText: 2026 Adapterkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability to load a module by identifier.

use async_trait::async_trait;

use crate::error::LoadError;
use crate::types::ModuleExports;

/// Loads a module by its package identifier and returns its exports.
///
/// This is the only suspension point in resolution. Timeouts, if any, are the
/// loader's business.
#[async_trait]
pub trait AdapterLoader<A>: Send + Sync
where
    A: Send + 'static,
{
    async fn load(&self, identifier: &str) -> Result<ModuleExports<A>, LoadError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SingleModule;

    #[async_trait]
    impl AdapterLoader<u32> for SingleModule {
        async fn load(&self, identifier: &str) -> Result<ModuleExports<u32>, LoadError> {
            match identifier {
                "my_domain_counter" => Ok(ModuleExports::new().with("CounterEngine", 7)),
                _ => Err(LoadError::NotFound {
                    identifier: identifier.to_string(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn loads_through_trait_object() {
        let loader: Box<dyn AdapterLoader<u32>> = Box::new(SingleModule);

        let exports = loader.load("my_domain_counter").await.unwrap();
        assert_eq!(exports.get("CounterEngine"), Some(&7));

        let err = loader.load("missing").await.unwrap_err();
        assert_eq!(err.to_string(), "Cannot find module 'missing'");
    }
}
