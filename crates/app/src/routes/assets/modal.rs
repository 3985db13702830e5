use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdPencil, LdX};
use dioxus_free_icons::Icon;
use shared_types::Asset;
use shared_ui::{
    Button, ButtonVariant, CollapsibleSection, DialogBody, DialogContent, DialogHeader,
    DialogRoot, DialogTitle,
};

use super::detail::AssetStateNotice;
use super::edit_form::AssetEditForm;
use super::panels::{
    ActivityPanel, AssetHeaderBadges, AssignmentPanel, CustomFieldsPanel, OverviewPanel,
    PurchasePanel, SpecificationsPanel,
};
use super::{finish_edit, use_activity_query, use_asset_query, use_custom_field_definitions};
use crate::query::QueryCache;
use crate::view_mode::{EditOutcome, ViewMode};

/// Asset details in a dialog.
///
/// Queries only run while `open` is true. When `on_edit` is set the Edit
/// action hands the asset to the parent instead of opening the inline form.
#[component]
pub fn AssetDetailModal(
    open: bool,
    asset_id: String,
    on_close: EventHandler<()>,
    #[props(default)] on_edit: Option<EventHandler<Asset>>,
) -> Element {
    rsx! {
        DialogRoot {
            open,
            on_open_change: move |is_open: bool| {
                if !is_open {
                    on_close.call(());
                }
            },
            DialogContent { class: "dialog-content asset-modal",
                if open {
                    AssetModalBody { key: "{asset_id}", asset_id: asset_id.clone(), on_close, on_edit }
                }
            }
        }
    }
}

#[component]
fn AssetModalBody(
    asset_id: String,
    on_close: EventHandler<()>,
    on_edit: Option<EventHandler<Asset>>,
) -> Element {
    let cache = use_context::<QueryCache>();
    let mut asset_query = use_asset_query(asset_id.clone());
    let activities = use_activity_query(asset_id.clone());
    let definitions = use_custom_field_definitions();
    let mut editing = use_signal(|| false);

    let mode = ViewMode::resolve(asset_query.read().as_ref(), editing());
    let asset: Option<Asset> = asset_query
        .read()
        .as_ref()
        .and_then(|result| result.as_ref().ok())
        .and_then(|found| found.clone());

    let close_button = rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            "aria-label": "Close",
            onclick: move |_| on_close.call(()),
            Icon { icon: LdX, width: 18, height: 18 }
        }
    };

    let Some(asset) = asset else {
        return rsx! {
            DialogHeader {
                DialogTitle { "Asset" }
                {close_button}
            }
            DialogBody {
                AssetStateNotice {
                    mode,
                    asset_id: asset_id.clone(),
                    on_retry: move |_| asset_query.restart(),
                }
            }
        };
    };

    let done_id = asset_id.clone();
    let on_done = move |outcome: EditOutcome| {
        editing.set(false);
        finish_edit(cache, &done_id, &outcome);
    };
    let edit_target = asset.clone();
    let start_edit = move |_: MouseEvent| match &on_edit {
        Some(handler) => handler.call(edit_target.clone()),
        None => editing.set(true),
    };

    rsx! {
        DialogHeader {
            div { class: "asset-title",
                DialogTitle { span { class: "mono", "{asset.asset_tag}" } }
                AssetHeaderBadges { asset: asset.clone() }
            }
            div { class: "dialog-header-actions",
                if mode.can_edit() {
                    Button { variant: ButtonVariant::Outline, onclick: start_edit,
                        Icon { icon: LdPencil, width: 16, height: 16 }
                        "Edit"
                    }
                }
                {close_button}
            }
        }
        DialogBody {
            if mode == ViewMode::Editing {
                AssetEditForm { key: "{asset.id}", asset: asset.clone(), on_done }
            } else {
                p { class: "asset-modal-name", "{asset.display_name()}" }
                OverviewPanel { asset: asset.clone() }
                CollapsibleSection { title: "Assignment", default_open: true, class: "modal-section",
                    AssignmentPanel { asset: asset.clone() }
                }
                CollapsibleSection { title: "Specifications", class: "modal-section",
                    SpecificationsPanel { asset: asset.clone() }
                }
                CollapsibleSection { title: "Purchase & Warranty", class: "modal-section",
                    PurchasePanel { asset: asset.clone() }
                }
                CollapsibleSection { title: "Custom Fields", class: "modal-section",
                    CustomFieldsPanel { asset: asset.clone(), definitions }
                }
                CollapsibleSection { title: "Activity", class: "modal-section",
                    ActivityPanel { activities }
                }
            }
        }
    }
}
