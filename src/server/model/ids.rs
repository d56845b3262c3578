//! Conversion between JSON id-list columns and typed id vectors.

use sea_orm::DbErr;
use serde_json::Value;

/// Parses a stored JSON id array into a typed list.
///
/// A malformed column is a data-integrity bug, surfaced as `DbErr::Custom`
/// rather than silently dropped.
pub fn parse_id_list(value: &Value) -> Result<Vec<i32>, DbErr> {
    serde_json::from_value(value.clone())
        .map_err(|e| DbErr::Custom(format!("Malformed id list column: {}", e)))
}

/// Serializes a typed id list back into its JSON column representation.
pub fn id_list_value(ids: &[i32]) -> Value {
    Value::Array(ids.iter().map(|id| Value::from(*id)).collect())
}

/// The JSON representation of an empty id list, used at record creation.
pub fn empty_id_list() -> Value {
    Value::Array(Vec::new())
}
