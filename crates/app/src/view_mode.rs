use shared_types::{AppError, Asset};

use crate::query::QueryKey;

/// What an asset detail surface is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewMode {
    /// Asset query in flight.
    Loading,
    Viewing,
    /// Edit form replaces the read view.
    Editing,
    /// The API has no asset with this id.
    NotFound,
    /// The asset query failed; the message is user-facing.
    Unavailable(String),
}

impl ViewMode {
    /// Derive the mode from the asset query and the local edit flag.
    ///
    /// `asset` is `None` while the query runs. The edit flag only matters
    /// once an asset is present.
    pub fn resolve(asset: Option<&Result<Option<Asset>, AppError>>, editing: bool) -> Self {
        match asset {
            None => ViewMode::Loading,
            Some(Ok(Some(_))) if editing => ViewMode::Editing,
            Some(Ok(Some(_))) => ViewMode::Viewing,
            Some(Ok(None)) => ViewMode::NotFound,
            Some(Err(e)) => ViewMode::Unavailable(e.friendly_message()),
        }
    }

    pub fn can_edit(&self) -> bool {
        matches!(self, ViewMode::Viewing)
    }
}

/// How the edit form closed.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    Saved(Asset),
    Cancelled,
}

/// Cache keys to invalidate after the edit form closes: the activity log and
/// the asset record on save, nothing on cancel.
pub fn invalidations_after_edit(asset_id: &str, outcome: &EditOutcome) -> Vec<QueryKey> {
    match outcome {
        EditOutcome::Saved(_) => vec![QueryKey::activities(asset_id), QueryKey::asset(asset_id)],
        EditOutcome::Cancelled => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryStore;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn asset() -> Asset {
        serde_json::from_value(json!({
            "id": "a-1",
            "assetTag": "IT-0042",
            "type": "LAPTOP",
            "status": "ASSIGNED",
            "condition": "GOOD"
        }))
        .unwrap()
    }

    #[test]
    fn resolves_each_query_state() {
        let found = Ok(Some(asset()));
        assert_eq!(ViewMode::resolve(None, false), ViewMode::Loading);
        assert_eq!(ViewMode::resolve(Some(&found), false), ViewMode::Viewing);
        assert_eq!(ViewMode::resolve(Some(&found), true), ViewMode::Editing);
        assert_eq!(ViewMode::resolve(Some(&Ok(None)), false), ViewMode::NotFound);
        assert_eq!(ViewMode::resolve(Some(&Ok(None)), true), ViewMode::NotFound);

        let failed = Err(AppError::network("connection reset"));
        assert!(matches!(
            ViewMode::resolve(Some(&failed), false),
            ViewMode::Unavailable(_)
        ));
    }

    #[test]
    fn only_viewing_can_edit() {
        assert!(ViewMode::Viewing.can_edit());
        assert!(!ViewMode::Editing.can_edit());
        assert!(!ViewMode::Loading.can_edit());
        assert!(!ViewMode::NotFound.can_edit());
    }

    #[test]
    fn cancel_leaves_cached_asset_untouched() {
        let mut store = QueryStore::default();
        let key = QueryKey::asset("a-1");
        store.store(&key, 0, serde_json::to_value(asset()).unwrap());

        for k in invalidations_after_edit("a-1", &EditOutcome::Cancelled) {
            store.invalidate(&k);
        }

        let cached: Asset = serde_json::from_value(store.fresh(&key).unwrap().clone()).unwrap();
        assert_eq!(cached, asset());
        assert_eq!(store.invalidation_count(&QueryKey::activities("a-1")), 0);
    }

    #[test]
    fn save_invalidates_activity_log_exactly_once() {
        let mut store = QueryStore::default();
        let outcome = EditOutcome::Saved(asset());

        for k in invalidations_after_edit("a-1", &outcome) {
            store.invalidate(&k);
        }

        assert_eq!(store.invalidation_count(&QueryKey::activities("a-1")), 1);
        assert_eq!(store.invalidation_count(&QueryKey::asset("a-1")), 1);
        assert_eq!(store.invalidation_count(&QueryKey::activities("a-2")), 0);
    }
}
