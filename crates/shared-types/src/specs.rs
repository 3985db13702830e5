//! Routing of the free-form specifications blob to per-type display fields.
//!
//! The blob shape depends on the asset type. Phones and computers have a fixed
//! set of meaningful keys; every other type is shown generically.

use serde_json::{Map, Value};

use crate::asset::AssetType;

/// A specification key and the label it is displayed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecField {
    pub key: &'static str,
    pub label: &'static str,
}

const fn field(key: &'static str, label: &'static str) -> SpecField {
    SpecField { key, label }
}

pub const PHONE_SPEC_FIELDS: &[SpecField] = &[
    field("storage", "Storage"),
    field("carrier", "Carrier"),
    field("phoneNumber", "Phone Number"),
    field("imei", "IMEI"),
    field("operatingSystem", "Operating System"),
    field("color", "Color"),
];

pub const COMPUTER_SPEC_FIELDS: &[SpecField] = &[
    field("processor", "Processor"),
    field("ram", "Memory"),
    field("storage", "Storage"),
    field("graphics", "Graphics"),
    field("screenSize", "Display"),
    field("operatingSystem", "Operating System"),
];

pub const PHONE_OVERVIEW_FIELDS: &[SpecField] = &[
    field("storage", "Storage"),
    field("carrier", "Carrier"),
    field("phoneNumber", "Phone Number"),
];

pub const COMPUTER_OVERVIEW_FIELDS: &[SpecField] = &[
    field("processor", "Processor"),
    field("ram", "Memory"),
    field("storage", "Storage"),
];

/// Number of generic entries shown in the compact overview.
pub const GENERIC_OVERVIEW_LIMIT: usize = 3;

/// Which layout a given asset type uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecLayout {
    Phone,
    Computer,
    Generic,
}

impl SpecLayout {
    pub fn for_type(asset_type: AssetType) -> Self {
        match asset_type {
            AssetType::Phone => SpecLayout::Phone,
            AssetType::Laptop | AssetType::Desktop => SpecLayout::Computer,
            AssetType::Tablet | AssetType::Other => SpecLayout::Generic,
        }
    }

    /// Fixed fields for the full specification panel, `None` for generic.
    pub fn detail_fields(&self) -> Option<&'static [SpecField]> {
        match self {
            SpecLayout::Phone => Some(PHONE_SPEC_FIELDS),
            SpecLayout::Computer => Some(COMPUTER_SPEC_FIELDS),
            SpecLayout::Generic => None,
        }
    }

    /// Fixed fields for the compact overview, `None` for generic.
    pub fn overview_fields(&self) -> Option<&'static [SpecField]> {
        match self {
            SpecLayout::Phone => Some(PHONE_OVERVIEW_FIELDS),
            SpecLayout::Computer => Some(COMPUTER_OVERVIEW_FIELDS),
            SpecLayout::Generic => None,
        }
    }
}

/// One label/value line to render. `value` is `None` when the key is missing,
/// and the caller shows the placeholder glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRow {
    pub label: String,
    pub value: Option<String>,
}

/// Parsed specifications blob. Construction never fails: anything that is not
/// a JSON object (or a string holding one) becomes an empty set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Specifications {
    entries: Map<String, Value>,
}

impl Specifications {
    pub fn parse(raw: Option<&Value>) -> Self {
        let entries = match raw {
            Some(Value::Object(map)) => map.clone(),
            Some(Value::String(text)) => match serde_json::from_str::<Value>(text) {
                Ok(Value::Object(map)) => map,
                _ => Map::new(),
            },
            _ => Map::new(),
        };
        Self { entries }
    }

    /// True when there is nothing worth rendering.
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(|v| scalar_text(v).is_none())
    }

    /// Display text for a key; null and blank values count as missing.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).and_then(scalar_text)
    }

    /// Rows for the full specification panel.
    pub fn detail_rows(&self, asset_type: AssetType) -> Vec<SpecRow> {
        match SpecLayout::for_type(asset_type).detail_fields() {
            Some(fields) => self.fixed_rows(fields),
            None => self.generic_rows(usize::MAX),
        }
    }

    /// Rows for the compact overview panel.
    pub fn overview_rows(&self, asset_type: AssetType) -> Vec<SpecRow> {
        match SpecLayout::for_type(asset_type).overview_fields() {
            Some(fields) => self.fixed_rows(fields),
            None => self.generic_rows(GENERIC_OVERVIEW_LIMIT),
        }
    }

    fn fixed_rows(&self, fields: &[SpecField]) -> Vec<SpecRow> {
        fields
            .iter()
            .map(|f| SpecRow {
                label: f.label.to_string(),
                value: self.get(f.key),
            })
            .collect()
    }

    fn generic_rows(&self, limit: usize) -> Vec<SpecRow> {
        let mut keys: Vec<&String> = self.entries.keys().collect();
        keys.sort();
        keys.into_iter()
            .filter_map(|k| {
                self.get(k).map(|value| SpecRow {
                    label: humanize_key(k),
                    value: Some(value),
                })
            })
            .take(limit)
            .collect()
    }
}

/// Render a JSON scalar as text. Objects and arrays are flattened into a
/// comma-separated list of their scalar members.
fn scalar_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(s) => s.trim().to_string(),
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(scalar_text)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// `screenSize` / `screen_size` → "Screen Size".
pub fn humanize_key(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for ch in key.chars() {
        if ch == '_' || ch == '-' || ch == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        current.push(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
