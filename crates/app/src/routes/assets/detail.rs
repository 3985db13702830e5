use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdPencil, LdRefreshCw};
use dioxus_free_icons::Icon;
use shared_types::Asset;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, EmptyState, PageActions, PageHeader, PageSubtitle,
    PageTitle, Skeleton, SkeletonLines, TabContent, TabCount, TabList, TabTrigger, Tabs,
};

use super::edit_form::AssetEditForm;
use super::panels::{
    ActivityPanel, AssetHeaderBadges, AssignmentPanel, CustomFieldsPanel, OverviewPanel,
    PurchasePanel, SpecificationsPanel,
};
use super::{finish_edit, use_activity_query, use_asset_query, use_custom_field_definitions};
use crate::query::QueryCache;
use crate::routes::Route;
use crate::view_mode::{EditOutcome, ViewMode};

#[component]
pub fn AssetDetailPage(id: String) -> Element {
    rsx! {
        div { class: "container",
            AssetDetailView { key: "{id}", asset_id: id.clone() }
        }
    }
}

/// Placeholder for the non-asset view modes. Renders nothing for
/// `Viewing` and `Editing`.
#[component]
pub fn AssetStateNotice(mode: ViewMode, asset_id: String, on_retry: EventHandler<()>) -> Element {
    match mode {
        ViewMode::Loading => rsx! {
            div { class: "asset-loading", "aria-busy": "true",
                Skeleton { class: "skeleton-title" }
                SkeletonLines { count: 5 }
            }
        },
        ViewMode::NotFound => rsx! {
            EmptyState {
                title: "Asset not found",
                description: format!("No asset exists with id {asset_id}."),
            }
        },
        ViewMode::Unavailable(message) => rsx! {
            EmptyState { title: "Unable to load asset", description: message,
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_retry.call(()),
                    Icon { icon: LdRefreshCw, width: 16, height: 16 }
                    "Retry"
                }
            }
        },
        ViewMode::Viewing | ViewMode::Editing => rsx! {},
    }
}

/// Full-page asset view with one tab per panel.
#[component]
pub fn AssetDetailView(asset_id: String) -> Element {
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

    let Some(asset) = asset else {
        return rsx! {
            PageHeader {
                PageTitle { "Asset" }
                PageActions { BackLink {} }
            }
            AssetStateNotice {
                mode,
                asset_id: asset_id.clone(),
                on_retry: move |_| asset_query.restart(),
            }
        };
    };

    let activity_count = activities
        .read()
        .as_ref()
        .and_then(|result| result.as_ref().ok())
        .map(Vec::len);

    let done_id = asset_id.clone();
    let on_done = move |outcome: EditOutcome| {
        editing.set(false);
        finish_edit(cache, &done_id, &outcome);
    };

    rsx! {
        PageHeader {
            div { class: "asset-title",
                PageTitle { "{asset.display_name()}" }
                PageSubtitle { span { class: "mono", "{asset.asset_tag}" } }
                AssetHeaderBadges { asset: asset.clone() }
            }
            PageActions {
                BackLink {}
                if mode.can_edit() {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| editing.set(true),
                        Icon { icon: LdPencil, width: 16, height: 16 }
                        "Edit"
                    }
                }
            }
        }

        if mode == ViewMode::Editing {
            Card {
                CardContent {
                    AssetEditForm { key: "{asset.id}", asset: asset.clone(), on_done }
                }
            }
        } else {
            Tabs { default_value: "overview", horizontal: true,
                TabList {
                    TabTrigger { value: "overview", index: 0usize, "Overview" }
                    TabTrigger { value: "specifications", index: 1usize, "Specifications" }
                    TabTrigger { value: "purchase", index: 2usize, "Purchase & Warranty" }
                    TabTrigger { value: "custom-fields", index: 3usize, "Custom Fields" }
                    TabTrigger { value: "activity", index: 4usize,
                        "Activity"
                        if let Some(count) = activity_count {
                            TabCount { count }
                        }
                    }
                }
                TabContent { value: "overview", index: 0usize,
                    div { class: "overview-grid",
                        Card { CardContent { OverviewPanel { asset: asset.clone() } } }
                        Card { CardContent { AssignmentPanel { asset: asset.clone() } } }
                    }
                }
                TabContent { value: "specifications", index: 1usize,
                    Card { CardContent { SpecificationsPanel { asset: asset.clone() } } }
                }
                TabContent { value: "purchase", index: 2usize,
                    Card { CardContent { PurchasePanel { asset: asset.clone() } } }
                }
                TabContent { value: "custom-fields", index: 3usize,
                    Card { CardContent { CustomFieldsPanel { asset: asset.clone(), definitions } } }
                }
                TabContent { value: "activity", index: 4usize,
                    Card { CardContent { ActivityPanel { activities } } }
                }
            }
        }
    }
}

#[component]
fn BackLink() -> Element {
    rsx! {
        Link { to: Route::Home {},
            Button { variant: ButtonVariant::Secondary,
                Icon { icon: LdArrowLeft, width: 16, height: 16 }
                "Back"
            }
        }
    }
}
