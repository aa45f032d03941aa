//! Shape capabilities — which values have a native sequence or mapping view.
//!
//! Both traits consume the value and hand it back untouched in `Err` when the
//! capability is missing, so callers can fall back without cloning.

use serde_json::{Map, Value};

/// A value that can be read as an ordered sequence of elements.
pub trait IntoSequence: Sized {
    /// Converts into an ordered sequence, or returns `self` unchanged when
    /// the value has no sequence view.
    fn into_sequence(self) -> Result<Vec<Value>, Self>;
}

/// A value that can be read as a key-to-value mapping.
pub trait IntoMapping: Sized {
    /// Converts into a mapping, or returns `self` unchanged when the value
    /// has no mapping view.
    fn into_mapping(self) -> Result<Map<String, Value>, Self>;
}

impl IntoSequence for Value {
    fn into_sequence(self) -> Result<Vec<Value>, Self> {
        match self {
            Value::Array(items) => Ok(items),
            Value::Null => Ok(Vec::new()),
            // A mapping reads as its `[key, value]` pairs, in insertion order.
            Value::Object(map) => Ok(map
                .into_iter()
                .map(|(key, value)| Value::Array(vec![Value::String(key), value]))
                .collect()),
            other => Err(other),
        }
    }
}

impl IntoMapping for Value {
    fn into_mapping(self) -> Result<Map<String, Value>, Self> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(other),
        }
    }
}
