use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::asset::{null_as_default, Asset};

/// Declared type of a tenant-defined field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomFieldType {
    Number,
    Boolean,
    Date,
    Select,
    #[default]
    #[serde(other)]
    Text,
}

/// A tenant-defined extra attribute for assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldDefinition {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, alias = "type", deserialize_with = "null_as_default")]
    pub field_type: CustomFieldType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: Vec<String>,
}

/// A definition paired with the value the asset holds for it.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomFieldEntry {
    pub definition: CustomFieldDefinition,
    pub value: Value,
}

/// Typed interpretation of a raw value under its declared field type.
#[derive(Debug, Clone, PartialEq)]
pub enum CustomFieldValue {
    Missing,
    Text(String),
    Flag(bool),
    /// Raw ISO-8601 date string; the UI formats it.
    Date(String),
}

impl CustomFieldValue {
    pub fn interpret(field_type: CustomFieldType, raw: &Value) -> Self {
        match (field_type, raw) {
            (_, Value::Null) => CustomFieldValue::Missing,
            (CustomFieldType::Boolean, Value::Bool(b)) => CustomFieldValue::Flag(*b),
            (CustomFieldType::Boolean, Value::String(s)) => {
                match s.trim().to_lowercase().as_str() {
                    "true" | "yes" | "1" => CustomFieldValue::Flag(true),
                    "false" | "no" | "0" => CustomFieldValue::Flag(false),
                    "" => CustomFieldValue::Missing,
                    _ => CustomFieldValue::Text(s.clone()),
                }
            }
            (CustomFieldType::Boolean, Value::Number(n)) => {
                CustomFieldValue::Flag(n.as_f64().map(|f| f != 0.0).unwrap_or(false))
            }
            (CustomFieldType::Date, Value::String(s)) if !s.trim().is_empty() => {
                CustomFieldValue::Date(s.trim().to_string())
            }
            (_, Value::String(s)) if s.trim().is_empty() => CustomFieldValue::Missing,
            (_, Value::String(s)) => CustomFieldValue::Text(s.clone()),
            (_, Value::Number(n)) => CustomFieldValue::Text(n.to_string()),
            (_, Value::Bool(b)) => CustomFieldValue::Text(b.to_string()),
            (_, other) => CustomFieldValue::Text(other.to_string()),
        }
    }
}

/// Definitions that have a non-null value on the asset, in definition order.
pub fn derive_custom_fields(
    asset: &Asset,
    definitions: &[CustomFieldDefinition],
) -> Vec<CustomFieldEntry> {
    definitions
        .iter()
        .filter_map(|def| {
            asset.custom_field_value(&def.id).map(|v| CustomFieldEntry {
                definition: def.clone(),
                value: v.clone(),
            })
        })
        .collect()
}
