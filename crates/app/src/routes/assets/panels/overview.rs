use dioxus::prelude::*;
use shared_types::{Asset, Specifications};
use shared_ui::{Badge, DetailItem, DetailList};

use super::tone_variant;
use crate::components::SourceBadge;
use crate::format_helpers::{format_optional_date, non_blank, today};

/// Status, condition and source badges shown next to the asset title.
#[component]
pub fn AssetHeaderBadges(asset: Asset) -> Element {
    rsx! {
        div { class: "asset-badges",
            Badge { variant: tone_variant(asset.status.tone()), "{asset.status.label()}" }
            Badge { variant: tone_variant(asset.condition.tone()), "{asset.condition.label()}" }
            SourceBadge { source: asset.source.clone() }
        }
    }
}

/// Compact summary: identity, placement, key specifications, warranty.
#[component]
pub fn OverviewPanel(asset: Asset) -> Element {
    let specs = Specifications::parse(asset.specifications.as_ref());
    let key_specs = specs.overview_rows(asset.asset_type);
    let warranty = asset.warranty_status(today());
    let vendor = asset.vendor.as_ref().and_then(|v| v.name.clone());
    let location = asset.location.as_ref().and_then(|l| l.name.clone());
    let assignee = asset
        .assigned_to
        .as_ref()
        .and_then(|a| a.display_name.as_deref())
        .and_then(|n| non_blank(Some(n)))
        .map(str::to_string);

    rsx! {
        div { class: "overview-panel",
            DetailList {
                DetailItem { label: "Asset Tag", value: Some(asset.asset_tag.clone()), mono: true }
                DetailItem { label: "Type", value: Some(asset.asset_type.label().to_string()) }
                DetailItem { label: "Serial Number", value: asset.serial_number.clone(), mono: true }
                DetailItem { label: "Assigned To", value: assignee }
                DetailItem { label: "Location", value: location }
                DetailItem { label: "Vendor", value: vendor }
                for row in key_specs {
                    DetailItem { key: "{row.label}", label: row.label.clone(), value: row.value.clone() }
                }
                DetailItem { label: "Warranty",
                    Badge { variant: tone_variant(warranty.tone()), "{warranty.label()}" }
                    span { class: "muted", " {format_optional_date(asset.warranty_expiry.as_deref())}" }
                }
            }
        }
    }
}
