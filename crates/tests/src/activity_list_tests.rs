use pretty_assertions::assert_eq;
use shared_types::sort_newest_first;

use crate::common;

#[tokio::test]
async fn test_list_asset_activities_query_params() {
    let mock = common::spawn_mock_api().await;
    mock.client().list_asset_activities("a-7").await.unwrap();

    let recorded = &mock.state.requests()[0];
    assert_eq!(recorded.path, "/activities");
    assert_eq!(recorded.query.get("entityType").map(String::as_str), Some("ASSET"));
    assert_eq!(recorded.query.get("entityId").map(String::as_str), Some("a-7"));
}

#[tokio::test]
async fn test_list_activities_unwraps_data_envelope() {
    let mock = common::spawn_mock_api().await;
    let mut entries = mock.client().list_asset_activities("a-7").await.unwrap();
    assert_eq!(entries.len(), 2);

    sort_newest_first(&mut entries);
    assert_eq!(entries[0].id, "act-2");
    assert_eq!(entries[0].actor_name(), "Fox Mulder");
    assert_eq!(entries[1].actor_name(), "System");
}
