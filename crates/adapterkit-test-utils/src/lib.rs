// SPDX-FileCopyrightText: 2026 Adapterkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for adapterkit.
//!
//! Provides substitutes for the two collaborators of the resolver so that
//! discovery can be tested without a manifest on disk or real modules.
//!
//! # Components
//!
//! - [`MockDependencyReader`] - canned dependency declarations with a read counter
//! - [`MockLoader`] - canned module exports, scripted failures, and a load log
//! - [`fixtures`] - the package layout shared by the resolver test suites

pub mod fixtures;
pub mod mock_loader;
pub mod mock_reader;

pub use mock_loader::MockLoader;
pub use mock_reader::MockDependencyReader;
