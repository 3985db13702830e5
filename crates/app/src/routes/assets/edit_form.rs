use std::collections::HashMap;
use std::str::FromStr;

use client::ApiClient;
use dioxus::prelude::*;
use rust_decimal::Decimal;
use shared_types::{
    parse_iso_date, Asset, AssetCondition, AssetStatus, UpdateAssetRequest, EDITABLE_CONDITIONS,
    EDITABLE_STATUSES,
};
use shared_ui::{
    Button, ButtonVariant, Form, FormActions, FormGrid, FormSelect, Input, Textarea,
};

use crate::view_mode::EditOutcome;

/// Field errors keyed by the API's camelCase field name.
pub type FieldErrors = HashMap<String, String>;

/// Text state of the edit form.
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    pub asset_tag: String,
    pub make: String,
    pub model: String,
    pub serial_number: String,
    pub status: AssetStatus,
    pub condition: AssetCondition,
    pub purchase_date: String,
    pub purchase_price: String,
    pub warranty_expiry: String,
    pub notes: String,
}

fn date_input(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .map(|s| s.chars().take(10).collect())
        .unwrap_or_default()
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl EditDraft {
    pub fn from_asset(asset: &Asset) -> Self {
        let seed = UpdateAssetRequest::from_asset(asset);
        Self {
            asset_tag: seed.asset_tag,
            make: seed.make.unwrap_or_default(),
            model: seed.model.unwrap_or_default(),
            serial_number: seed.serial_number.unwrap_or_default(),
            status: seed.status,
            condition: seed.condition,
            purchase_date: date_input(seed.purchase_date.as_deref()),
            purchase_price: seed.purchase_price.unwrap_or_default(),
            warranty_expiry: date_input(seed.warranty_expiry.as_deref()),
            notes: seed.notes.unwrap_or_default(),
        }
    }

    /// Validate and build the update body. Blank text becomes `None`.
    pub fn to_request(&self) -> Result<UpdateAssetRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        let asset_tag = self.asset_tag.trim().to_string();
        if asset_tag.is_empty() {
            errors.insert("assetTag".into(), "Asset tag is required".into());
        }
        if self.status == AssetStatus::Unknown {
            errors.insert("status".into(), "Choose a status".into());
        }
        if self.condition == AssetCondition::Unknown {
            errors.insert("condition".into(), "Choose a condition".into());
        }

        let purchase_price = match optional(&self.purchase_price) {
            Some(raw) => match Decimal::from_str(raw.trim_start_matches('$').replace(',', "").as_str()) {
                Ok(d) if d.is_sign_negative() => {
                    errors.insert("purchasePrice".into(), "Price cannot be negative".into());
                    None
                }
                Ok(d) => Some(d.normalize().to_string()),
                Err(_) => {
                    errors.insert("purchasePrice".into(), "Enter a number".into());
                    None
                }
            },
            None => None,
        };

        for (field, value) in [
            ("purchaseDate", &self.purchase_date),
            ("warrantyExpiry", &self.warranty_expiry),
        ] {
            if let Some(raw) = optional(value) {
                if parse_iso_date(&raw).is_none() {
                    errors.insert(field.into(), "Use YYYY-MM-DD".into());
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(UpdateAssetRequest {
            asset_tag,
            make: optional(&self.make),
            model: optional(&self.model),
            serial_number: optional(&self.serial_number),
            status: self.status,
            condition: self.condition,
            purchase_date: optional(&self.purchase_date),
            purchase_price,
            warranty_expiry: optional(&self.warranty_expiry),
            notes: optional(&self.notes),
        })
    }
}

/// Inline edit form for an asset. Reports how it closed through `on_done`.
#[component]
pub fn AssetEditForm(asset: Asset, on_done: EventHandler<EditOutcome>) -> Element {
    let api = use_context::<ApiClient>();
    let asset_id = asset.id.clone();
    let current_status = asset.status;
    let current_condition = asset.condition;
    let mut draft = use_signal(|| EditDraft::from_asset(&asset));
    let mut field_errors = use_signal(FieldErrors::new);
    let mut form_error = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let handle_save = move |_: FormEvent| {
        if saving() {
            return;
        }
        let request = match draft.read().to_request() {
            Ok(request) => request,
            Err(errors) => {
                field_errors.set(errors);
                form_error.set(Some("Fix the highlighted fields.".into()));
                return;
            }
        };
        field_errors.set(FieldErrors::new());
        form_error.set(None);

        let api = api.clone();
        let id = asset_id.clone();
        spawn(async move {
            saving.set(true);
            match api.update_asset(&id, &request).await {
                Ok(updated) => {
                    tracing::info!(asset_id = %id, "Asset updated");
                    saving.set(false);
                    on_done.call(EditOutcome::Saved(updated));
                }
                Err(e) => {
                    tracing::error!(asset_id = %id, error = %e, "Asset update failed");
                    field_errors.set(e.field_errors.clone());
                    form_error.set(Some(e.friendly_message()));
                    saving.set(false);
                }
            }
        });
    };

    let error_for = move |field: &str| field_errors.read().get(field).cloned();
    let statuses = with_current(EDITABLE_STATUSES, current_status, AssetStatus::Unknown);
    let conditions = with_current(EDITABLE_CONDITIONS, current_condition, AssetCondition::Unknown);
    let values = draft.read().clone();

    rsx! {
        Form { class: "asset-edit-form", onsubmit: handle_save,
            if let Some(message) = form_error() {
                p { class: "form-error", role: "alert", "{message}" }
            }
            FormGrid {
                Input {
                    label: "Asset Tag *",
                    value: values.asset_tag,
                    error: error_for("assetTag"),
                    on_input: move |e: FormEvent| draft.write().asset_tag = e.value(),
                }
                Input {
                    label: "Serial Number",
                    value: values.serial_number,
                    error: error_for("serialNumber"),
                    on_input: move |e: FormEvent| draft.write().serial_number = e.value(),
                }
                Input {
                    label: "Make",
                    value: values.make,
                    on_input: move |e: FormEvent| draft.write().make = e.value(),
                }
                Input {
                    label: "Model",
                    value: values.model,
                    on_input: move |e: FormEvent| draft.write().model = e.value(),
                }
                FormSelect {
                    label: "Status",
                    value: values.status.as_str(),
                    onchange: move |e: Event<FormData>| {
                        draft.write().status = AssetStatus::from_str_or_default(&e.value())
                    },
                    for status in statuses {
                        option { key: "{status.as_str()}", value: status.as_str(), "{status.label()}" }
                    }
                }
                FormSelect {
                    label: "Condition",
                    value: values.condition.as_str(),
                    onchange: move |e: Event<FormData>| {
                        draft.write().condition = AssetCondition::from_str_or_default(&e.value())
                    },
                    for condition in conditions {
                        option { key: "{condition.as_str()}", value: condition.as_str(), "{condition.label()}" }
                    }
                }
                Input {
                    label: "Purchase Date",
                    input_type: "date",
                    value: values.purchase_date,
                    error: error_for("purchaseDate"),
                    on_input: move |e: FormEvent| draft.write().purchase_date = e.value(),
                }
                Input {
                    label: "Purchase Price",
                    value: values.purchase_price,
                    placeholder: "0.00",
                    error: error_for("purchasePrice"),
                    on_input: move |e: FormEvent| draft.write().purchase_price = e.value(),
                }
                Input {
                    label: "Warranty Expires",
                    input_type: "date",
                    value: values.warranty_expiry,
                    error: error_for("warrantyExpiry"),
                    on_input: move |e: FormEvent| draft.write().warranty_expiry = e.value(),
                }
            }
            Textarea {
                label: "Notes",
                value: values.notes,
                on_input: move |e: FormEvent| draft.write().notes = e.value(),
            }
            FormActions {
                Button {
                    variant: ButtonVariant::Secondary,
                    disabled: saving(),
                    onclick: move |_| on_done.call(EditOutcome::Cancelled),
                    "Cancel"
                }
                Button { button_type: "submit", busy: saving(),
                    if saving() { "Saving..." } else { "Save Changes" }
                }
            }
        }
    }
}

/// Editable options, plus the record's current value when it is not one of
/// them and is not the unknown sentinel.
fn with_current<T: Copy + PartialEq>(editable: &[T], current: T, unknown: T) -> Vec<T> {
    let mut options = editable.to_vec();
    if current != unknown && !options.contains(&current) {
        options.insert(0, current);
    }
    if current == unknown {
        options.insert(0, unknown);
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn asset() -> Asset {
        serde_json::from_value(json!({
            "id": "a-1",
            "assetTag": "IT-0042",
            "type": "LAPTOP",
            "make": "Lenovo",
            "model": "ThinkPad T14",
            "status": "ASSIGNED",
            "condition": "GOOD",
            "purchaseDate": "2024-02-10T00:00:00Z",
            "purchasePrice": "1999.5",
            "notes": null
        }))
        .unwrap()
    }

    #[test]
    fn draft_seeds_from_asset() {
        let draft = EditDraft::from_asset(&asset());
        assert_eq!(draft.asset_tag, "IT-0042");
        assert_eq!(draft.purchase_date, "2024-02-10");
        assert_eq!(draft.purchase_price, "1999.5");
        assert_eq!(draft.notes, "");
    }

    #[test]
    fn unchanged_draft_round_trips_to_request() {
        let request = EditDraft::from_asset(&asset()).to_request().unwrap();
        assert_eq!(request.asset_tag, "IT-0042");
        assert_eq!(request.status, AssetStatus::Assigned);
        assert_eq!(request.purchase_date.as_deref(), Some("2024-02-10"));
        assert_eq!(request.purchase_price.as_deref(), Some("1999.5"));
        assert_eq!(request.serial_number, None);
        assert_eq!(request.notes, None);
    }

    #[test]
    fn blank_tag_and_bad_price_are_rejected() {
        let mut draft = EditDraft::from_asset(&asset());
        draft.asset_tag = "   ".into();
        draft.purchase_price = "twelve".into();
        draft.warranty_expiry = "next year".into();

        let errors = draft.to_request().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains_key("assetTag"));
        assert!(errors.contains_key("purchasePrice"));
        assert!(errors.contains_key("warrantyExpiry"));
    }

    #[test]
    fn price_accepts_currency_formatting() {
        let mut draft = EditDraft::from_asset(&asset());
        draft.purchase_price = "$1,250.00".into();
        let request = draft.to_request().unwrap();
        assert_eq!(request.purchase_price.as_deref(), Some("1250"));
    }

    #[test]
    fn unknown_status_must_be_chosen() {
        let mut draft = EditDraft::from_asset(&asset());
        draft.status = AssetStatus::Unknown;
        assert!(draft.to_request().unwrap_err().contains_key("status"));
    }

    #[test]
    fn options_include_unknown_only_when_current() {
        let options = with_current(EDITABLE_STATUSES, AssetStatus::Spare, AssetStatus::Unknown);
        assert_eq!(options, EDITABLE_STATUSES.to_vec());
        let options = with_current(EDITABLE_STATUSES, AssetStatus::Unknown, AssetStatus::Unknown);
        assert_eq!(options[0], AssetStatus::Unknown);
    }

    #[test]
    fn form_renders_seeded_values() {
        fn app() -> Element {
            use_context_provider(|| ApiClient::from_config(&shared_types::AppConfig::default()));
            rsx! { AssetEditForm { asset: asset(), on_done: move |_| {} } }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains(r#"value="IT-0042""#), "{html}");
        assert!(html.contains("Save Changes"));
    }
}
