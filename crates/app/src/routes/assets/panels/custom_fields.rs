use dioxus::prelude::*;
use shared_types::{
    derive_custom_fields, AppError, Asset, CustomFieldDefinition, CustomFieldEntry,
    CustomFieldValue,
};
use shared_ui::{DetailItem, DetailList, EmptyState, SkeletonLines};

use crate::format_helpers::format_date_human;

/// Display text for one custom field value, `None` when it has no value.
pub fn custom_field_text(entry: &CustomFieldEntry) -> Option<String> {
    match CustomFieldValue::interpret(entry.definition.field_type, &entry.value) {
        CustomFieldValue::Missing => None,
        CustomFieldValue::Flag(true) => Some("Yes".to_string()),
        CustomFieldValue::Flag(false) => Some("No".to_string()),
        CustomFieldValue::Date(raw) => Some(format_date_human(&raw)),
        CustomFieldValue::Text(text) => Some(text),
    }
}

#[component]
pub fn CustomFieldsPanel(
    asset: Asset,
    definitions: Resource<Result<Vec<CustomFieldDefinition>, AppError>>,
) -> Element {
    let entries = match &*definitions.read() {
        None => return rsx! { SkeletonLines { count: 3 } },
        Some(Err(e)) => {
            return rsx! {
                EmptyState {
                    title: "Custom fields unavailable",
                    description: e.friendly_message(),
                }
            }
        }
        Some(Ok(defs)) => derive_custom_fields(&asset, defs),
    };

    if entries.is_empty() {
        return rsx! {
            EmptyState { title: "No custom fields set." }
        };
    }

    rsx! {
        DetailList {
            for entry in entries {
                DetailItem {
                    key: "{entry.definition.id}",
                    label: entry.definition.name.clone(),
                    value: custom_field_text(&entry),
                }
            }
        }
    }
}
