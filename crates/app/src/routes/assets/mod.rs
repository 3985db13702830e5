//! Asset detail surfaces: the tabbed page and the modal.

pub mod detail;
pub mod edit_form;
pub mod modal;
pub mod panels;

pub use detail::{AssetDetailPage, AssetDetailView};
pub use edit_form::AssetEditForm;
pub use modal::AssetDetailModal;

use client::ApiClient;
use dioxus::prelude::*;
use shared_types::{Activity, AppError, Asset, CustomFieldDefinition};

use crate::query::{use_query, QueryCache, QueryKey};
use crate::view_mode::{invalidations_after_edit, EditOutcome};

pub fn use_asset_query(asset_id: String) -> Resource<Result<Option<Asset>, AppError>> {
    let api = use_context::<ApiClient>();
    let key = QueryKey::asset(&asset_id);
    use_query(key, move || {
        let api = api.clone();
        let id = asset_id.clone();
        async move { api.get_asset(&id).await }
    })
}

pub fn use_activity_query(asset_id: String) -> Resource<Result<Vec<Activity>, AppError>> {
    let api = use_context::<ApiClient>();
    let key = QueryKey::activities(&asset_id);
    use_query(key, move || {
        let api = api.clone();
        let id = asset_id.clone();
        async move { api.list_asset_activities(&id).await }
    })
}

pub fn use_custom_field_definitions() -> Resource<Result<Vec<CustomFieldDefinition>, AppError>> {
    let api = use_context::<ApiClient>();
    use_query(QueryKey::custom_field_definitions(), move || {
        let api = api.clone();
        async move { api.list_custom_field_definitions().await }
    })
}

/// Apply the cache side effects of closing the edit form.
pub fn finish_edit(mut cache: QueryCache, asset_id: &str, outcome: &EditOutcome) {
    let keys = invalidations_after_edit(asset_id, outcome);
    if keys.is_empty() {
        return;
    }
    tracing::info!(asset_id, "Asset saved, refreshing");
    for key in &keys {
        cache.invalidate(key);
    }
}
