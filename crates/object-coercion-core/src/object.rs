//! Object coercer — the catch-all strategy for attributes typed as "any object".
//!
//! The attribute framework calls every strategy by name (`convert-to-<target>`)
//! without knowing whether the strategy specializes that target. This one only
//! knows sequences and mappings; every other well-formed request passes the
//! value through unchanged.

use serde_json::Value;

use crate::config::CoercionOptions;
use crate::error::CoercionError;
use crate::operation::Operation;
use crate::view::{IntoMapping, IntoSequence};

/// A type-specific coercion strategy, as registered in a dispatch table keyed
/// by the attribute's declared type.
pub trait Coercion: Send + Sync {
    /// Name of the declared type this strategy handles.
    fn primitive(&self) -> &'static str;

    /// Runs the named coercion over `args`.
    fn invoke(&self, operation: &str, args: Vec<Value>) -> Result<Value, CoercionError>;
}

/// Coercion strategy for the unconstrained object type.
#[derive(Debug, Clone, Default)]
pub struct ObjectCoercer {
    options: CoercionOptions,
}

impl ObjectCoercer {
    /// Builds a coercer, rejecting an empty operation prefix.
    pub fn new(options: CoercionOptions) -> Result<Self, CoercionError> {
        if options.operation_prefix.is_empty() {
            return Err(CoercionError::InvalidOptions {
                message: "operation-prefix must not be empty".to_string(),
            });
        }
        Ok(Self { options })
    }

    /// Options this coercer was built with.
    pub fn options(&self) -> &CoercionOptions {
        &self.options
    }

    /// Create a sequence from any value.
    ///
    /// | Got | Result |
    /// |-----|--------|
    /// | array | the same elements, same order |
    /// | `null` | `[]` |
    /// | object | `[key, value]` pairs |
    /// | anything else | `[value]` |
    pub fn to_sequence(value: Value) -> Vec<Value> {
        match value.into_sequence() {
            Ok(items) => {
                tracing::trace!(len = items.len(), "using native sequence view");
                items
            }
            Err(value) => {
                tracing::trace!("wrapping value in single-element sequence");
                vec![value]
            }
        }
    }

    /// Create a mapping from the value if it has a mapping view, otherwise
    /// return it unchanged.
    pub fn to_mapping(value: Value) -> Value {
        match value.into_mapping() {
            Ok(map) => Value::Object(map),
            Err(value) => value,
        }
    }
}

impl Coercion for ObjectCoercer {
    fn primitive(&self) -> &'static str {
        "object"
    }

    fn invoke(&self, operation: &str, mut args: Vec<Value>) -> Result<Value, CoercionError> {
        let parsed = Operation::parse(operation, &self.options.operation_prefix);
        let (Some(op), [_]) = (parsed, args.as_slice()) else {
            tracing::debug!(
                operation = %operation,
                arg_count = args.len(),
                "rejecting coercion request"
            );
            return Err(CoercionError::unsupported(operation, args.len()));
        };
        let value = args.swap_remove(0);

        Ok(match op {
            Operation::Sequence => Value::Array(Self::to_sequence(value)),
            Operation::Mapping => Self::to_mapping(value),
            Operation::Passthrough { target } => {
                tracing::debug!(operation = %operation, target = %target, "passing value through");
                value
            }
        })
    }
}
