use client::ApiClient;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdExternalLink, LdFileText};
use dioxus_free_icons::Icon;
use shared_types::{Asset, AssetDocument};
use shared_ui::{Badge, Button, ButtonVariant, DetailItem, DetailList};

use super::tone_variant;
use crate::components::SourceLogoBadge;
use crate::format_helpers::{format_date_human, format_price, non_blank, today};
use crate::object_url::{alert, create_object_url, open_and_release};

/// Download a document and show it in a new tab. Failures end in an alert.
pub async fn open_document(api: ApiClient, document: AssetDocument) {
    let result = match api.download_document(&document.id).await {
        Ok(blob) => create_object_url(&blob).await,
        Err(e) => Err(e),
    };
    match result {
        Ok(url) => {
            tracing::info!(document_id = %document.id, "Opening document");
            open_and_release(&url);
        }
        Err(e) => {
            tracing::error!(document_id = %document.id, error = %e, "Failed to open document");
            alert(&format!("Unable to open document: {}", e.friendly_message()));
        }
    }
}

fn document_label(document: &AssetDocument) -> String {
    non_blank(document.file_name.as_deref())
        .map(str::to_string)
        .unwrap_or_else(|| document.kind.label().to_string())
}

#[component]
pub fn PurchasePanel(asset: Asset) -> Element {
    let api = use_context::<ApiClient>();
    let mut opening = use_signal(|| None::<String>);
    let warranty = asset.warranty_status(today());
    let invoice = asset.invoice().cloned();
    let vendor = asset.vendor.as_ref().and_then(|v| v.name.clone());
    let external_id = non_blank(asset.external_id.as_deref()).map(str::to_string);

    let open = move |document: AssetDocument| {
        let api = api.clone();
        opening.set(Some(document.id.clone()));
        spawn(async move {
            open_document(api, document).await;
            opening.set(None);
        });
    };

    rsx! {
        div { class: "purchase-panel",
            DetailList {
                DetailItem { label: "Vendor", value: vendor }
                DetailItem { label: "Order Number", value: asset.order_number.clone(), mono: true }
                DetailItem {
                    label: "Purchase Date",
                    value: non_blank(asset.purchase_date.as_deref()).map(format_date_human),
                }
                DetailItem { label: "Purchase Price", value: format_price(asset.purchase_price.as_deref()) }
                DetailItem {
                    label: "Warranty Expires",
                    value: non_blank(asset.warranty_expiry.as_deref()).map(format_date_human),
                }
                DetailItem { label: "Warranty Status",
                    Badge { variant: tone_variant(warranty.tone()), "{warranty.label()}" }
                }
                DetailItem { label: "Source",
                    span { class: "source-row",
                        SourceLogoBadge { source: asset.source.clone() }
                        if let Some(external_id) = external_id {
                            code { class: "muted", "{external_id}" }
                        }
                    }
                }
            }

            if let Some(doc) = invoice {
                Button {
                    variant: ButtonVariant::Outline,
                    busy: opening.read().as_deref() == Some(doc.id.as_str()),
                    onclick: {
                        let mut open = open.clone();
                        let doc = doc.clone();
                        move |_| open(doc.clone())
                    },
                    Icon { icon: LdExternalLink, width: 16, height: 16 }
                    "Open invoice"
                }
            }

            if !asset.documents.is_empty() {
                div { class: "document-list",
                    h4 { class: "section-heading", "Documents" }
                    for (index, doc) in asset.documents.iter().cloned().enumerate() {
                        div { key: "{index}-{doc.id}", class: "document-row",
                            Icon { icon: LdFileText, width: 16, height: 16 }
                            span { class: "document-name", "{document_label(&doc)}" }
                            Badge { variant: shared_ui::BadgeVariant::Muted, "{doc.kind.label()}" }
                            Button {
                                variant: ButtonVariant::Ghost,
                                busy: opening.read().as_deref() == Some(doc.id.as_str()),
                                onclick: {
                                    let mut open = open.clone();
                                    let doc = doc.clone();
                                    move |_| open(doc.clone())
                                },
                                "Open"
                            }
                        }
                    }
                }
            }
        }
    }
}
