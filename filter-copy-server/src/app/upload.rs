use serde_json::Value;
use vtex_filter_interfaces::api::filter::types::FilterId;

use super::error::FilterCopyError;

pub const FILTERS_FIELD: &str = "filters";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Reads the ids listed under `filters` in an uploaded JSON file.
///
/// A leading UTF-8 byte order mark is skipped. A missing `filters` field, or
/// one holding an empty value (`null`, `false`, `0`, `""`, `[]`, `{}`), is
/// `NoFilters`; anything that is not an object holding a list of scalars is
/// `MalformedInput`.
pub fn parse_filter_ids(content: &[u8]) -> Result<Vec<FilterId>, FilterCopyError> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);
    let value: Value = serde_json::from_slice(content)
        .map_err(|e| FilterCopyError::MalformedInput(e.to_string()))?;
    let Value::Object(mut fields) = value else {
        return Err(FilterCopyError::MalformedInput(
            "El archivo JSON debe ser un objeto con 'filters'.".to_string(),
        ));
    };
    let filters = match fields.remove(FILTERS_FIELD) {
        Some(filters) if !is_empty_value(&filters) => filters,
        _ => return Err(FilterCopyError::NoFilters),
    };
    serde_json::from_value(filters).map_err(|e| {
        FilterCopyError::MalformedInput(format!("'filters' debe ser una lista de IDs: {}", e))
    })
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
