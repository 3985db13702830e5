use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Display tone
// ---------------------------------------------------------------------------

/// Color family used when rendering an enum value as a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    Success,
    Info,
    #[default]
    Neutral,
    Warning,
    Danger,
    Muted,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Info => "info",
            Tone::Neutral => "neutral",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
            Tone::Muted => "muted",
        }
    }
}

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Kind of hardware an asset record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    Laptop,
    Desktop,
    Tablet,
    Phone,
    #[default]
    #[serde(other)]
    Other,
}

impl AssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Laptop => "LAPTOP",
            AssetType::Desktop => "DESKTOP",
            AssetType::Tablet => "TABLET",
            AssetType::Phone => "PHONE",
            AssetType::Other => "OTHER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssetType::Laptop => "Laptop",
            AssetType::Desktop => "Desktop",
            AssetType::Tablet => "Tablet",
            AssetType::Phone => "Phone",
            AssetType::Other => "Other",
        }
    }
}

/// Lifecycle status as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    Available,
    Assigned,
    Spare,
    Maintenance,
    Retired,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Statuses a user may pick in the edit form (excludes `Unknown`).
pub const EDITABLE_STATUSES: &[AssetStatus] = &[
    AssetStatus::Available,
    AssetStatus::Assigned,
    AssetStatus::Spare,
    AssetStatus::Maintenance,
    AssetStatus::Retired,
];

impl AssetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Available => "AVAILABLE",
            AssetStatus::Assigned => "ASSIGNED",
            AssetStatus::Spare => "SPARE",
            AssetStatus::Maintenance => "MAINTENANCE",
            AssetStatus::Retired => "RETIRED",
            AssetStatus::Unknown => "UNKNOWN",
        }
    }

    /// Parse a wire value. Unknown values map to `Unknown`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "AVAILABLE" => AssetStatus::Available,
            "ASSIGNED" => AssetStatus::Assigned,
            "SPARE" => AssetStatus::Spare,
            "MAINTENANCE" => AssetStatus::Maintenance,
            "RETIRED" => AssetStatus::Retired,
            _ => AssetStatus::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssetStatus::Available => "Available",
            AssetStatus::Assigned => "Assigned",
            AssetStatus::Spare => "Spare",
            AssetStatus::Maintenance => "Maintenance",
            AssetStatus::Retired => "Retired",
            AssetStatus::Unknown => "Unknown",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            AssetStatus::Available => Tone::Success,
            AssetStatus::Assigned => Tone::Info,
            AssetStatus::Spare => Tone::Neutral,
            AssetStatus::Maintenance => Tone::Warning,
            AssetStatus::Retired | AssetStatus::Unknown => Tone::Muted,
        }
    }
}

/// Physical condition of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetCondition {
    New,
    Good,
    Fair,
    Poor,
    #[default]
    #[serde(other)]
    Unknown,
}

pub const EDITABLE_CONDITIONS: &[AssetCondition] = &[
    AssetCondition::New,
    AssetCondition::Good,
    AssetCondition::Fair,
    AssetCondition::Poor,
];

impl AssetCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetCondition::New => "NEW",
            AssetCondition::Good => "GOOD",
            AssetCondition::Fair => "FAIR",
            AssetCondition::Poor => "POOR",
            AssetCondition::Unknown => "UNKNOWN",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_uppercase().as_str() {
            "NEW" => AssetCondition::New,
            "GOOD" => AssetCondition::Good,
            "FAIR" => AssetCondition::Fair,
            "POOR" => AssetCondition::Poor,
            _ => AssetCondition::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssetCondition::New => "New",
            AssetCondition::Good => "Good",
            AssetCondition::Fair => "Fair",
            AssetCondition::Poor => "Poor",
            AssetCondition::Unknown => "Unknown",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            AssetCondition::New => Tone::Success,
            AssetCondition::Good => Tone::Info,
            AssetCondition::Fair => Tone::Warning,
            AssetCondition::Poor => Tone::Danger,
            AssetCondition::Unknown => Tone::Muted,
        }
    }
}

/// Category of an attached document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentKind {
    Invoice,
    Receipt,
    Warranty,
    #[default]
    #[serde(other)]
    Other,
}

impl DocumentKind {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Invoice => "Invoice",
            DocumentKind::Receipt => "Receipt",
            DocumentKind::Warranty => "Warranty",
            DocumentKind::Other => "Document",
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Lightweight reference to a vendor or location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// The staff member an asset is assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignee {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Identifier in the staff directory, used for the profile photo.
    #[serde(default)]
    pub directory_id: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
}

/// Metadata for a file attached to an asset (blob fetched separately).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub kind: DocumentKind,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

/// A tracked piece of IT equipment, as returned by `GET /assets/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub asset_tag: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub asset_type: AssetType,
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: AssetStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub condition: AssetCondition,
    /// Free-form blob. Either a JSON object or a string holding one.
    #[serde(default)]
    pub specifications: Option<serde_json::Value>,
    #[serde(default)]
    pub vendor: Option<EntityRef>,
    #[serde(default)]
    pub location: Option<EntityRef>,
    #[serde(default)]
    pub assigned_to: Option<Assignee>,
    #[serde(default)]
    pub assigned_at: Option<String>,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default, deserialize_with = "decimal_string")]
    pub purchase_price: Option<String>,
    #[serde(default)]
    pub order_number: Option<String>,
    #[serde(default)]
    pub warranty_expiry: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub documents: Vec<AssetDocument>,
    #[serde(default)]
    pub custom_fields: Option<BTreeMap<String, serde_json::Value>>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Asset {
    /// The first attached document of kind `INVOICE`, if any.
    pub fn invoice(&self) -> Option<&AssetDocument> {
        self.documents
            .iter()
            .find(|d| d.kind == DocumentKind::Invoice)
    }

    /// "Make Model" when either is known, otherwise the asset tag.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.make.as_deref(), self.model.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if parts.is_empty() {
            self.asset_tag.clone()
        } else {
            parts.join(" ")
        }
    }

    /// Raw custom field value for a definition id. JSON null counts as absent.
    pub fn custom_field_value(&self, definition_id: &str) -> Option<&serde_json::Value> {
        self.custom_fields
            .as_ref()
            .and_then(|m| m.get(definition_id))
            .filter(|v| !v.is_null())
    }

    pub fn warranty_status(&self, today: NaiveDate) -> WarrantyStatus {
        WarrantyStatus::from_expiry(self.warranty_expiry.as_deref(), today)
    }
}

// ---------------------------------------------------------------------------
// Warranty
// ---------------------------------------------------------------------------

/// Days before expiry at which a warranty is flagged as expiring.
pub const WARRANTY_EXPIRING_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarrantyStatus {
    Active,
    ExpiringSoon,
    Expired,
    Unknown,
}

impl WarrantyStatus {
    /// Classify an ISO-8601 date (or datetime) against `today`.
    pub fn from_expiry(expiry: Option<&str>, today: NaiveDate) -> Self {
        let Some(date) = expiry.and_then(parse_iso_date) else {
            return WarrantyStatus::Unknown;
        };
        let days_left = (date - today).num_days();
        if days_left < 0 {
            WarrantyStatus::Expired
        } else if days_left <= WARRANTY_EXPIRING_DAYS {
            WarrantyStatus::ExpiringSoon
        } else {
            WarrantyStatus::Active
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WarrantyStatus::Active => "Active",
            WarrantyStatus::ExpiringSoon => "Expiring soon",
            WarrantyStatus::Expired => "Expired",
            WarrantyStatus::Unknown => "Unknown",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            WarrantyStatus::Active => Tone::Success,
            WarrantyStatus::ExpiringSoon => Tone::Warning,
            WarrantyStatus::Expired => Tone::Danger,
            WarrantyStatus::Unknown => Tone::Muted,
        }
    }
}

/// Parse the date portion of "2026-01-20" or "2026-01-20T21:35:00Z".
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let head = s.trim().get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

// ---------------------------------------------------------------------------
// Update request
// ---------------------------------------------------------------------------

/// Body of `PUT /assets/{id}`. `None` fields are sent as JSON null.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssetRequest {
    pub asset_tag: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub status: AssetStatus,
    pub condition: AssetCondition,
    pub purchase_date: Option<String>,
    pub purchase_price: Option<String>,
    pub warranty_expiry: Option<String>,
    pub notes: Option<String>,
}

impl UpdateAssetRequest {
    /// Seed the request from the current record.
    pub fn from_asset(asset: &Asset) -> Self {
        Self {
            asset_tag: asset.asset_tag.clone(),
            make: asset.make.clone(),
            model: asset.model.clone(),
            serial_number: asset.serial_number.clone(),
            status: asset.status,
            condition: asset.condition,
            purchase_date: asset.purchase_date.clone(),
            purchase_price: asset.purchase_price.clone(),
            warranty_expiry: asset.warranty_expiry.clone(),
            notes: asset.notes.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Serde helpers
// ---------------------------------------------------------------------------

/// Treat an explicit JSON null like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept a decimal written either as a JSON string or a JSON number.
fn decimal_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> serde_json::Value {
        json!({ "id": "a-1", "assetTag": "IT-0001" })
    }

    #[test]
    fn minimal_asset_deserializes_with_defaults() {
        let asset: Asset = serde_json::from_value(minimal()).unwrap();
        assert_eq!(asset.asset_type, AssetType::Other);
        assert_eq!(asset.status, AssetStatus::Unknown);
        assert_eq!(asset.condition, AssetCondition::Unknown);
        assert!(asset.documents.is_empty());
        assert!(asset.purchase_price.is_none());
    }

    #[test]
    fn explicit_nulls_are_tolerated() {
        let asset: Asset = serde_json::from_value(json!({
            "id": "a-2",
            "assetTag": null,
            "type": null,
            "status": null,
            "condition": null,
            "documents": null,
            "purchasePrice": null,
            "assignedTo": null,
            "specifications": null
        }))
        .unwrap();
        assert_eq!(asset.asset_tag, "");
        assert_eq!(asset.asset_type, AssetType::Other);
        assert!(asset.purchase_price.is_none());
    }

    #[test]
    fn unknown_enum_values_fall_back() {
        let asset: Asset = serde_json::from_value(json!({
            "id": "a-3",
            "type": "SMARTWATCH",
            "status": "LOST",
            "condition": "DAMAGED"
        }))
        .unwrap();
        assert_eq!(asset.asset_type, AssetType::Other);
        assert_eq!(asset.status, AssetStatus::Unknown);
        assert_eq!(asset.condition, AssetCondition::Unknown);
    }

    #[test]
    fn purchase_price_accepts_string_or_number() {
        let from_str: Asset =
            serde_json::from_value(json!({ "id": "a", "purchasePrice": "1999.5" })).unwrap();
        assert_eq!(from_str.purchase_price.as_deref(), Some("1999.5"));

        let from_num: Asset =
            serde_json::from_value(json!({ "id": "a", "purchasePrice": 849.99 })).unwrap();
        assert_eq!(from_num.purchase_price.as_deref(), Some("849.99"));
    }

    #[test]
    fn invoice_is_first_invoice_document() {
        let asset: Asset = serde_json::from_value(json!({
            "id": "a",
            "documents": [
                { "id": "d1", "kind": "RECEIPT" },
                { "id": "d2", "kind": "INVOICE", "fileName": "inv-1.pdf" },
                { "id": "d3", "kind": "INVOICE" }
            ]
        }))
        .unwrap();
        assert_eq!(asset.invoice().map(|d| d.id.as_str()), Some("d2"));
    }

    #[test]
    fn display_name_prefers_make_and_model() {
        let mut asset: Asset = serde_json::from_value(minimal()).unwrap();
        assert_eq!(asset.display_name(), "IT-0001");
        asset.make = Some("Apple".into());
        asset.model = Some("MacBook Pro 14".into());
        assert_eq!(asset.display_name(), "Apple MacBook Pro 14");
        asset.make = Some("  ".into());
        assert_eq!(asset.display_name(), "MacBook Pro 14");
    }

    #[test]
    fn custom_field_value_skips_null() {
        let asset: Asset = serde_json::from_value(json!({
            "id": "a",
            "customFields": { "cf-1": "Finance", "cf-2": null }
        }))
        .unwrap();
        assert_eq!(asset.custom_field_value("cf-1"), Some(&json!("Finance")));
        assert!(asset.custom_field_value("cf-2").is_none());
        assert!(asset.custom_field_value("cf-3").is_none());
    }

    #[test]
    fn status_tones_follow_lookup_table() {
        assert_eq!(AssetStatus::Available.tone(), Tone::Success);
        assert_eq!(AssetStatus::Assigned.tone(), Tone::Info);
        assert_eq!(AssetStatus::Maintenance.tone(), Tone::Warning);
        assert_eq!(AssetStatus::Retired.tone(), Tone::Muted);
        assert_eq!(AssetCondition::Poor.tone(), Tone::Danger);
    }

    #[test]
    fn status_from_str_is_case_insensitive() {
        assert_eq!(AssetStatus::from_str_or_default("spare"), AssetStatus::Spare);
        assert_eq!(AssetStatus::from_str_or_default("bogus"), AssetStatus::Unknown);
        assert_eq!(AssetCondition::from_str_or_default(" fair "), AssetCondition::Fair);
    }

    #[test]
    fn warranty_status_classification() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(
            WarrantyStatus::from_expiry(Some("2026-02-28"), today),
            WarrantyStatus::Expired
        );
        assert_eq!(
            WarrantyStatus::from_expiry(Some("2026-03-31T00:00:00Z"), today),
            WarrantyStatus::ExpiringSoon
        );
        assert_eq!(
            WarrantyStatus::from_expiry(Some("2027-03-01"), today),
            WarrantyStatus::Active
        );
        assert_eq!(
            WarrantyStatus::from_expiry(Some("soon"), today),
            WarrantyStatus::Unknown
        );
        assert_eq!(WarrantyStatus::from_expiry(None, today), WarrantyStatus::Unknown);
    }

    #[test]
    fn nested_records_tolerate_missing_or_null_ids() {
        let asset: Asset = serde_json::from_value(json!({
            "id": "a-1",
            "assignedTo": { "displayName": "Dana Scully" },
            "vendor": { "id": null, "name": "CDW" },
            "location": { "name": "HQ" },
            "documents": [{ "id": null, "kind": "INVOICE", "fileName": "inv.pdf" }]
        }))
        .unwrap();
        let assignee = asset.assigned_to.unwrap();
        assert_eq!(assignee.id, "");
        assert_eq!(assignee.display_name.as_deref(), Some("Dana Scully"));
        assert_eq!(asset.vendor.unwrap().name.as_deref(), Some("CDW"));
        assert_eq!(asset.location.unwrap().id, "");
        assert_eq!(asset.documents[0].file_name.as_deref(), Some("inv.pdf"));

        let bare: Asset = serde_json::from_value(json!({ "id": null, "assetTag": "IT-7" })).unwrap();
        assert_eq!(bare.id, "");
    }

    #[test]
    fn update_request_serializes_camel_case() {
        let asset: Asset = serde_json::from_value(json!({
            "id": "a",
            "assetTag": "IT-9",
            "status": "SPARE",
            "serialNumber": "C02XYZ"
        }))
        .unwrap();
        let body = serde_json::to_value(UpdateAssetRequest::from_asset(&asset)).unwrap();
        assert_eq!(body["assetTag"], "IT-9");
        assert_eq!(body["serialNumber"], "C02XYZ");
        assert_eq!(body["status"], "SPARE");
        assert_eq!(body["condition"], "UNKNOWN");
        assert!(body["notes"].is_null());
    }
}
