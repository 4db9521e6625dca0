// SPDX-FileCopyrightText: 2026 Adapterkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator traits the resolver is built on.
//!
//! Both are injected at construction so resolution never touches ambient
//! process state and can be exercised with fakes.

pub mod dependency;
pub mod loader;

pub use dependency::DependencyReader;
pub use loader::AdapterLoader;
