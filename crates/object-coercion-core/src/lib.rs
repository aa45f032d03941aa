//! # object-coercion-core
//!
//! Fallback coercion strategy for attributes declared with the unconstrained
//! "any object" type.
//!
//! An attribute framework dispatches coercion by declared type and calls the
//! chosen strategy with an operation named `convert-to-<target>`. The object
//! strategy specializes two targets:
//!
//! | Operation | Behavior |
//! |-----------|----------|
//! | `convert-to-sequence` | native sequence view, `null` → `[]`, otherwise `[value]` |
//! | `convert-to-mapping` | native mapping view, otherwise the value unchanged |
//! | `convert-to-<other>` | the value unchanged |
//!
//! Any other name, or any arity other than one, fails with
//! [`CoercionError::UnsupportedOperation`].
//!
//! ```
//! use object_coercion_core::{Coercion, ObjectCoercer};
//! use serde_json::json;
//!
//! let coercer = ObjectCoercer::default();
//! assert_eq!(coercer.invoke("convert-to-sequence", vec![json!(5)]).unwrap(), json!([5]));
//! assert_eq!(coercer.invoke("convert-to-whatever", vec![json!(5)]).unwrap(), json!(5));
//! assert!(coercer.invoke("convert-to-whatever", vec![json!(5), json!(6)]).is_err());
//! ```

pub mod config;
pub mod error;
pub mod object;
pub mod operation;
pub mod view;

use serde_json::Value;

pub use config::CoercionOptions;
pub use error::{CoercionError, ErrorCode};
pub use object::{Coercion, ObjectCoercer};
pub use operation::Operation;
pub use view::{IntoMapping, IntoSequence};

/// JSON-string bridge over [`Coercion::invoke`] on an [`ObjectCoercer`].
///
/// `args_json` is a JSON array of arguments; any other top-level value is
/// taken as a single argument. `options_json` deserializes into
/// [`CoercionOptions`]. On failure the `Err` string is the structured JSON
/// from [`CoercionError::to_json`].
pub fn invoke_json(
    operation: &str,
    args_json: &str,
    options_json: &str,
) -> Result<String, String> {
    invoke_json_inner(operation, args_json, options_json).map_err(|e| e.to_json().to_string())
}

fn invoke_json_inner(
    operation: &str,
    args_json: &str,
    options_json: &str,
) -> Result<String, CoercionError> {
    let options: CoercionOptions = serde_json::from_str(options_json)?;
    let coercer = ObjectCoercer::new(options)?;

    let args = match serde_json::from_str::<Value>(args_json)? {
        Value::Array(args) => args,
        single => vec![single],
    };

    let result = coercer.invoke(operation, args)?;
    Ok(serde_json::to_string(&result)?)
}
