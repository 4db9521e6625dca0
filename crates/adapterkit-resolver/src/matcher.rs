// SPDX-FileCopyrightText: 2026 Adapterkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dependency-name and export-name matching rules.
//!
//! All matching is plain substring containment; domain and name are never
//! interpreted as patterns.

use adapterkit_core::DependencySet;

use crate::case::{to_camel_case, to_pascal_case, to_snake_case};

/// Token marking test-scaffolding packages, excluded from gathering.
pub const DEFAULT_EXCLUSION_TOKEN: &str = "jest";

/// Minimum Jaro-Winkler similarity for a lookup suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// True if `candidate` contains `domain` and not the exclusion token.
///
/// An empty `exclusion_token` excludes nothing.
pub fn matches_domain(candidate: &str, domain: &str, exclusion_token: &str) -> bool {
    let excluded = !exclusion_token.is_empty() && candidate.contains(exclusion_token);
    candidate.contains(domain) && !excluded
}

/// True if `candidate` contains both `domain` and `name`, anywhere and in any order.
pub fn matches_name_and_domain(candidate: &str, domain: &str, name: &str) -> bool {
    candidate.contains(domain) && candidate.contains(name)
}

/// First dependency, in enumeration order, that matches `domain` and `name`.
pub fn find_named_candidate<'a>(
    dependencies: &'a DependencySet,
    domain: &str,
    name: &str,
) -> Option<&'a str> {
    dependencies
        .iter()
        .find(|dependency| matches_name_and_domain(dependency, domain, name))
}

/// Every dependency, in enumeration order, that belongs to `domain`.
pub fn domain_candidates<'a>(
    dependencies: &'a DependencySet,
    domain: &str,
    exclusion_token: &str,
) -> Vec<&'a str> {
    dependencies
        .iter()
        .filter(|dependency| matches_domain(dependency, domain, exclusion_token))
        .collect()
}

/// True if `export_name` ends with `_<snake type>`, `<camelType>` or `<PascalType>`.
pub fn qualifies_for_type(export_name: &str, adapter_type: &str) -> bool {
    export_name.ends_with(&format!("_{}", to_snake_case(adapter_type)))
        || export_name.ends_with(&to_camel_case(adapter_type))
        || export_name.ends_with(&to_pascal_case(adapter_type))
}

/// Key under which a gathered export is stored.
///
/// The export name is snake-cased, its trailing `_<type>` is stripped, and the
/// first remaining underscore (only the first) becomes a hyphen:
/// `OtherEngine` -> `other`, `MyOtherEngine` -> `my-other`,
/// `MyOwnOtherEngine` -> `my-own_other`.
pub fn reference_key(export_name: &str, adapter_type: &str) -> String {
    let snake = to_snake_case(export_name);
    let suffix = format!("_{}", to_snake_case(adapter_type));
    let stripped = snake.strip_suffix(&suffix).unwrap_or(&snake);
    stripped.replacen('_', "-", 1)
}

/// Closest dependency label within `domain` for a name that found no match.
///
/// Each in-domain dependency is reduced to its last path segment with the
/// domain removed (`./pkgs/my_domain_technology` -> `technology`) before being
/// compared against `name`. Only similarities of at least 0.8 count, and ties
/// keep the earlier dependency.
pub fn suggest_candidate<'a>(
    dependencies: &'a DependencySet,
    domain: &str,
    name: &str,
) -> Option<&'a str> {
    let mut best: Option<(f64, &'a str)> = None;

    for dependency in dependencies.iter().filter(|d| d.contains(domain)) {
        let segment = dependency.rsplit('/').next().unwrap_or(dependency);
        let label = if domain.is_empty() {
            segment.to_string()
        } else {
            segment.replacen(domain, "", 1)
        };
        let label = label.trim_matches(|c: char| !c.is_alphanumeric());
        if label.is_empty() {
            continue;
        }

        let score = strsim::jaro_winkler(name, label);
        if score < SUGGESTION_THRESHOLD {
            continue;
        }
        if best.is_none_or(|(best_score, _)| score > best_score) {
            best = Some((score, dependency));
        }
    }

    best.map(|(_, dependency)| dependency)
}
