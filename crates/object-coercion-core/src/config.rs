//! Configuration for the object coercer.

use serde::{Deserialize, Serialize};

/// Prefix every coercion request carries, e.g. `convert-to-sequence`.
pub const DEFAULT_OPERATION_PREFIX: &str = "convert-to-";

/// Options for the object coercer.
///
/// ## Serialization Format
///
/// Fields are serialized in `kebab-case` (e.g., `operation-prefix`).
/// This naming convention is part of the public API contract for the JSON bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CoercionOptions {
    /// Prefix that marks an operation name as a coercion request. Names
    /// starting with it are either handled or passed through; anything else
    /// is rejected. Must not be empty.
    pub operation_prefix: String,
}

impl Default for CoercionOptions {
    fn default() -> Self {
        Self {
            operation_prefix: DEFAULT_OPERATION_PREFIX.to_string(),
        }
    }
}
