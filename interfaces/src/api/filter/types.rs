use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Path of the filter resource relative to a tenant base url.
pub const FILTER_PATH: [&str; 3] = ["_v", "filters-plp", "filter"];

#[derive(Debug, thiserror::Error)]
pub enum FilterIdError {
    #[error("invalid filter id {0}: expected a string, number or boolean")]
    NotScalar(Value),
}

/// Tenant-local identifier of a filter as it appears in the uploaded file.
///
/// Any JSON scalar is accepted. It is rendered without quotes, so `"abc"`
/// and `12` become the path segments `abc` and `12`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FilterId(Value);

impl TryFrom<Value> for FilterId {
    type Error = FilterIdError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(_) | Value::Number(_) | Value::Bool(_) => Ok(FilterId(value)),
            other => Err(FilterIdError::NotScalar(other)),
        }
    }
}

impl From<&str> for FilterId {
    fn from(value: &str) -> Self {
        FilterId(Value::String(value.to_string()))
    }
}

impl From<u64> for FilterId {
    fn from(value: u64) -> Self {
        FilterId(Value::from(value))
    }
}

impl<'de> Deserialize<'de> for FilterId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        FilterId::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl Display for FilterId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match &self.0 {
            Value::String(s) => write!(f, "{}", s),
            other => write!(f, "{}", other),
        }
    }
}
