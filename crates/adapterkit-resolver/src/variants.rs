// SPDX-FileCopyrightText: 2026 Adapterkit Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Candidate export names for a single adapter.

use crate::case::{to_camel_case, to_pascal_case, to_snake_case};

/// The four spellings tried when looking for an adapter export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportNameVariants {
    /// `name_type` exactly as composed.
    pub literal: String,
    pub pascal: String,
    pub camel: String,
    pub snake: String,
}

impl ExportNameVariants {
    /// Variants in lookup priority: literal, Pascal, camel, snake.
    ///
    /// The first one present in a module wins, so this order is part of the
    /// resolution contract.
    pub fn in_priority_order(&self) -> [&str; 4] {
        [&self.literal, &self.pascal, &self.camel, &self.snake]
    }

    pub fn into_array(self) -> [String; 4] {
        [self.literal, self.pascal, self.camel, self.snake]
    }
}

/// Build the export name variants for `name`, suffixed with `_type` when a type is given.
pub fn export_name_variants(name: &str, adapter_type: Option<&str>) -> ExportNameVariants {
    let literal = match adapter_type {
        Some(adapter_type) => format!("{name}_{adapter_type}"),
        None => name.to_string(),
    };

    ExportNameVariants {
        pascal: to_pascal_case(&literal),
        camel: to_camel_case(&literal),
        snake: to_snake_case(&literal),
        literal,
    }
}
