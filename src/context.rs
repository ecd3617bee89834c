//! Render context normalization.
//!
//! Templates receive a key-value mapping. Callers, however, hold data in
//! different shapes: nothing at all, an explicit mapping, or a plain
//! serializable struct. [`ContextSource`] is the tagged union covering those
//! three cases, and [`ContextSource::into_map`] is the single normalization
//! policy turning any of them into the mapping handed to the engine.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Result, ViewsError};

/// The data supplied to a render call, before normalization.
///
/// # Normalization policy
///
/// 1. [`Empty`](ContextSource::Empty) becomes an empty mapping.
/// 2. [`Map`](ContextSource::Map) is used directly, keys untouched.
/// 3. [`Value`](ContextSource::Value) is projected: an object contributes its
///    fields as template variables, `null` is treated as absent, and any
///    other value is rejected with [`ViewsError::Context`].
///
/// # Example
///
/// ```rust
/// use minijinja_views::ContextSource;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Greeting { name: String }
///
/// let source = ContextSource::serialize(&Greeting { name: "World".into() }).unwrap();
/// let map = source.into_map().unwrap();
/// assert_eq!(map["name"], "World");
/// ```
#[derive(Debug, Clone, Default)]
pub enum ContextSource {
    /// No data; renders with an empty context.
    #[default]
    Empty,
    /// An explicit key-value mapping, used as-is.
    Map(Map<String, Value>),
    /// Arbitrary serialized data, projected into a mapping at drive time.
    Value(Value),
}

impl ContextSource {
    /// Captures a serializable value as context data.
    ///
    /// The value is serialized immediately; the projection into a mapping is
    /// deferred until the render is driven.
    ///
    /// # Errors
    ///
    /// Returns [`ViewsError::Serialization`] if the value fails to serialize.
    pub fn serialize<T: Serialize + ?Sized>(data: &T) -> Result<Self> {
        Ok(ContextSource::Value(serde_json::to_value(data)?))
    }

    /// Normalizes this source into the mapping handed to the template engine.
    ///
    /// # Errors
    ///
    /// Returns [`ViewsError::Context`] if the captured value is neither a
    /// mapping nor `null` (e.g. a bare number or string has no named
    /// properties to project).
    pub fn into_map(self) -> Result<Map<String, Value>> {
        match self {
            ContextSource::Empty => Ok(Map::new()),
            ContextSource::Map(map) => Ok(map),
            ContextSource::Value(Value::Object(map)) => Ok(map),
            ContextSource::Value(Value::Null) => Ok(Map::new()),
            ContextSource::Value(other) => Err(ViewsError::Context(format!(
                "view data must serialize to a key-value mapping, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

impl From<Map<String, Value>> for ContextSource {
    fn from(map: Map<String, Value>) -> Self {
        ContextSource::Map(map)
    }
}

impl From<Option<Map<String, Value>>> for ContextSource {
    fn from(map: Option<Map<String, Value>>) -> Self {
        match map {
            Some(map) => ContextSource::Map(map),
            None => ContextSource::Empty,
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    struct User {
        name: String,
        age: u32,
    }

    #[test]
    fn empty_normalizes_to_empty_map() {
        let map = ContextSource::Empty.into_map().unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn default_is_empty() {
        assert!(matches!(ContextSource::default(), ContextSource::Empty));
    }

    #[test]
    fn map_is_used_directly() {
        let mut map = Map::new();
        map.insert("name".to_string(), json!("World"));

        let normalized = ContextSource::Map(map.clone()).into_map().unwrap();
        assert_eq!(normalized, map);
    }

    #[test]
    fn struct_projects_fields() {
        let source = ContextSource::serialize(&User {
            name: "Alice".into(),
            age: 30,
        })
        .unwrap();

        let map = source.into_map().unwrap();
        assert_eq!(map["name"], "Alice");
        assert_eq!(map["age"], 30);
    }

    #[test]
    fn struct_equivalent_to_map() {
        let from_struct = ContextSource::serialize(&User {
            name: "Alice".into(),
            age: 30,
        })
        .unwrap()
        .into_map()
        .unwrap();

        let mut map = Map::new();
        map.insert("name".to_string(), json!("Alice"));
        map.insert("age".to_string(), json!(30));
        let from_map = ContextSource::Map(map).into_map().unwrap();

        assert_eq!(from_struct, from_map);
    }

    #[test]
    fn null_treated_as_absent() {
        let source = ContextSource::serialize(&()).unwrap();
        let map = source.into_map().unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn scalar_is_rejected() {
        let source = ContextSource::serialize(&42).unwrap();
        let err = source.into_map().unwrap_err();
        assert!(matches!(err, ViewsError::Context(_)));
        assert!(err.to_string().contains("a number"));
    }

    #[test]
    fn array_is_rejected() {
        let source = ContextSource::Value(json!([1, 2, 3]));
        assert!(matches!(
            source.into_map(),
            Err(ViewsError::Context(_))
        ));
    }

    #[test]
    fn from_option_map() {
        let none: ContextSource = None.into();
        assert!(matches!(none, ContextSource::Empty));

        let mut map = Map::new();
        map.insert("k".to_string(), json!(1));
        let some: ContextSource = Some(map).into();
        assert!(matches!(some, ContextSource::Map(_)));
    }
}
