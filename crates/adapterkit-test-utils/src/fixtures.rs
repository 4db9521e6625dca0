// SPDX-FileCopyrightText: 2026 Adapterkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared package layout for discovery tests.
//!
//! Two well-formed `my_domain` packages, one combined `my_domain` package, two
//! packages that fail to load, and one test-scaffolding package that must
//! never be gathered.

use adapterkit_core::ModuleExports;

use crate::{MockDependencyReader, MockLoader};

pub const MY_DOMAIN_TECHNOLOGY: &str = "/workspace/src/__fixtures__/my_domain_technology";
pub const MY_DOMAIN_OTHER: &str = "/workspace/src/__fixtures__/my_domain_other";
pub const MY_DOMAIN_ALL: &str = "/workspace/src/__fixtures__/my_domain_all";
pub const MY_DOMAIN_THING: &str = "./src/__fixtures__/my_domain_thing";
pub const OTHER_DOMAIN_THING: &str = "./src/__fixtures__/other_domain_thing";
pub const JEST_DOMAIN_JEST: &str = "./src/__fixtures__/jest_domain_jest";

/// Message produced by every broken fixture module.
pub const BROKEN_MODULE_MESSAGE: &str = "Unexpected token 'export'";

/// Reader declaring the technology, other, other_domain and jest packages.
pub fn domain_reader() -> MockDependencyReader {
    MockDependencyReader::with_dev_dependencies([
        MY_DOMAIN_TECHNOLOGY,
        MY_DOMAIN_OTHER,
        OTHER_DOMAIN_THING,
        JEST_DOMAIN_JEST,
    ])
}

/// Loader serving every fixture package.
pub fn fixture_loader() -> MockLoader<&'static str> {
    MockLoader::new()
        .with_module(
            MY_DOMAIN_TECHNOLOGY,
            ModuleExports::new()
                .with("TechnologyEngine", "TechnologyEngine")
                .with("technologyOptions", "technologyOptions"),
        )
        .with_module(
            MY_DOMAIN_OTHER,
            ModuleExports::new()
                .with("OtherEngine", "OtherEngine")
                .with("OtherUtility", "OtherUtility"),
        )
        .with_module(
            MY_DOMAIN_ALL,
            ModuleExports::new()
                .with("TechnologyEngine", "TechnologyEngine")
                .with("OtherEngine", "OtherEngine"),
        )
        .with_module(JEST_DOMAIN_JEST, ModuleExports::new().with("JestEngine", "JestEngine"))
        .with_broken_module(MY_DOMAIN_THING, BROKEN_MODULE_MESSAGE)
        .with_broken_module(OTHER_DOMAIN_THING, BROKEN_MODULE_MESSAGE)
}
