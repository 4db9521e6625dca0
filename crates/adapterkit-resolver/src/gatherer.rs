// SPDX-FileCopyrightText: 2026 Adapterkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bulk collection of every adapter of a type within a domain.
//!
//! Matching packages are loaded one at a time, in declaration order. The first
//! load failure aborts the whole call and discards everything gathered so far.

use adapterkit_core::{AdapterError, AdapterLoader, AdapterSpec, DependencyReader, GatheredAdapters};
use tracing::{debug, info, trace};

use crate::matcher;
use crate::resolver::import_error;

pub(crate) async fn gather_with<A>(
    spec: &AdapterSpec<A>,
    exclusion_token: &str,
    reader: &dyn DependencyReader,
    loader: &dyn AdapterLoader<A>,
) -> Result<GatheredAdapters<A>, AdapterError>
where
    A: Clone + Send + 'static,
{
    // Built-ins go in first so package exports with the same key replace them.
    let mut gathered: GatheredAdapters<A> = spec.internal.clone();

    let dependencies = reader.read()?.into_set();
    let modules = matcher::domain_candidates(&dependencies, &spec.domain, exclusion_token);
    debug!(
        domain = %spec.domain,
        candidates = modules.len(),
        declared = dependencies.len(),
        "gathering adapters"
    );

    for module in modules {
        let exports = loader
            .load(module)
            .await
            .map_err(|source| import_error(module, reader, source))?;

        for (export_name, adapter) in exports {
            if !matcher::qualifies_for_type(&export_name, &spec.adapter_type) {
                trace!(module, export = %export_name, "export does not match adapter type");
                continue;
            }

            let key = matcher::reference_key(&export_name, &spec.adapter_type);
            debug!(module, export = %export_name, key = %key, "gathered adapter");
            gathered.insert(key, adapter);
        }
    }

    info!(
        domain = %spec.domain,
        adapter_type = %spec.adapter_type,
        count = gathered.len(),
        "gathered adapters"
    );
    Ok(gathered)
}
