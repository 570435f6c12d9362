use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::error::ServerError;

use super::types::FilterId;

pub const ID_FIELD: &str = "id";
pub const NAME_FIELD: &str = "name";
pub const NO_NAME_MARKER: &str = "(sin nombre)";

/// A product-listing filter as returned by the platform.
///
/// Only `id` and `name` are interpreted. Every other field is carried through
/// untouched, in its original order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filter(Map<String, Value>);

impl Filter {
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn id(&self) -> Option<&Value> {
        self.0.get(ID_FIELD)
    }

    /// The `name` field as text, if present and not empty.
    pub fn name(&self) -> Option<String> {
        match self.0.get(NAME_FIELD)? {
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    /// Label used in transfer logs: the name, or a marker plus the id.
    pub fn display_name(&self, filter_id: &FilterId) -> String {
        self.name().unwrap_or_else(|| fallback_display_name(filter_id))
    }

    /// Body sent to the destination tenant. The id is tenant-local and must
    /// never be sent, so the destination always creates a new filter.
    pub fn payload(&self) -> Filter {
        Filter(
            self.0
                .iter()
                .filter(|(key, _)| key.as_str() != ID_FIELD)
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        )
    }
}

pub fn fallback_display_name(filter_id: &FilterId) -> String {
    format!("{} {}", NO_NAME_MARKER, filter_id)
}

#[async_trait]
pub trait FilterClientInterface: Sync + Send {
    /// Reads one filter from the tenant identified by `account`.
    async fn get_filter(&self, account: &str, filter_id: &FilterId) -> Result<Filter, ServerError>;

    /// Creates the filter on the tenant identified by `account`. The id is
    /// stripped from the payload before sending.
    async fn put_filter(&self, account: &str, filter: &Filter) -> Result<(), ServerError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filter(value: Value) -> Filter {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_display_name_uses_name() {
        let f = filter(json!({"id": "abc", "name": "Color"}));
        assert_eq!(f.display_name(&FilterId::from("abc")), "Color");
    }

    #[test]
    fn test_display_name_fallback() {
        let id = FilterId::from("def");
        assert_eq!(
            filter(json!({"id": "def"})).display_name(&id),
            "(sin nombre) def"
        );
        assert_eq!(
            filter(json!({"id": "def", "name": ""})).display_name(&id),
            "(sin nombre) def"
        );
        assert_eq!(
            filter(json!({"id": "def", "name": null})).display_name(&id),
            "(sin nombre) def"
        );
        assert_eq!(filter(json!({"name": 3})).display_name(&id), "3");
    }

    #[test]
    fn test_payload_strips_id_and_keeps_order() {
        let f = filter(json!({
            "id": 10,
            "name": "Talla",
            "type": "specification",
            "values": [{"value": "S"}, {"value": "M"}],
        }));
        let payload = f.payload();
        assert!(payload.id().is_none());
        let keys: Vec<&str> = payload.fields().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["name", "type", "values"]);
        // the source filter is left as read
        assert_eq!(f.id(), Some(&json!(10)));
    }

    #[test]
    fn test_payload_without_id_is_unchanged() {
        let f = filter(json!({"name": "Marca"}));
        assert_eq!(f.payload(), f);
    }

    #[test]
    fn test_filter_rejects_non_object() {
        assert!(serde_json::from_value::<Filter>(json!(["a"])).is_err());
    }
}
