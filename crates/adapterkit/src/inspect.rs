// SPDX-FileCopyrightText: 2026 Adapterkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only discovery reports printed by the CLI subcommands.

use adapterkit_core::{AdapterError, DependencyReader, DiscoverySettings};
use adapterkit_resolver::{
    domain_candidates, export_name_variants, locate_module, qualifies_for_type, reference_key,
};

/// Packages a gather over `domain` would load, in load order.
pub fn candidates(
    reader: &dyn DependencyReader,
    domain: &str,
    settings: &DiscoverySettings,
) -> Result<Vec<String>, AdapterError> {
    let dependencies = reader.read()?.into_set();
    let modules = domain_candidates(&dependencies, domain, &settings.exclusion_token);
    tracing::debug!(domain, declared = dependencies.len(), matched = modules.len(), "listed candidates");

    if modules.is_empty() {
        return Ok(vec![format!(
            "no dependency in {} belongs to domain \"{domain}\"",
            reader.manifest_name()
        )]);
    }
    Ok(modules.into_iter().map(str::to_string).collect())
}

/// The package resolving `name` would load, followed by the export names tried.
pub fn named_match(
    reader: &dyn DependencyReader,
    domain: &str,
    name: &str,
    adapter_type: Option<&str>,
) -> Result<Vec<String>, AdapterError> {
    let dependencies = reader.read()?.into_set();
    let module = locate_module(&dependencies, Some(domain), name, adapter_type)?;

    let mut lines = vec![module.to_string()];
    lines.extend(
        export_name_variants(name, adapter_type)
            .in_priority_order()
            .iter()
            .map(|variant| format!("  tries {variant}")),
    );
    Ok(lines)
}

/// Export name variants for `name`, one per line, in priority order.
pub fn variants(name: &str, adapter_type: Option<&str>) -> Vec<String> {
    export_name_variants(name, adapter_type)
        .into_array()
        .into_iter()
        .collect()
}

/// For each export: its gather key, or a note that it does not qualify.
pub fn keys(adapter_type: &str, exports: &[String]) -> Vec<String> {
    exports
        .iter()
        .map(|export| {
            if qualifies_for_type(export, adapter_type) {
                format!("{export} -> {}", reference_key(export, adapter_type))
            } else {
                format!("{export} (does not match type {adapter_type})")
            }
        })
        .collect()
}
