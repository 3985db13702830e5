use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, AssetStatus, AssetType};

use crate::common;

#[tokio::test]
async fn test_get_asset_success() {
    let mock = common::spawn_mock_api().await;
    let asset = mock.client().get_asset("a-1").await.unwrap().unwrap();

    assert_eq!(asset.id, "a-1");
    assert_eq!(asset.asset_type, AssetType::Laptop);
    assert_eq!(asset.status, AssetStatus::Assigned);
    assert_eq!(asset.purchase_price.as_deref(), Some("1999.5"));
    assert_eq!(asset.invoice().map(|d| d.id.as_str()), Some("d-1"));
}

#[tokio::test]
async fn test_get_asset_sends_bearer_token() {
    let mock = common::spawn_mock_api().await;
    mock.client().get_asset("a-1").await.unwrap();

    let requests = mock.state.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].authorization.as_deref(),
        Some("Bearer test-token")
    );
}

#[tokio::test]
async fn test_get_asset_anonymous_has_no_auth_header() {
    let mock = common::spawn_mock_api().await;
    mock.client_with_token(None).get_asset("a-1").await.unwrap();

    assert_eq!(mock.state.requests()[0].authorization, None);
}

#[tokio::test]
async fn test_get_asset_not_found_is_none() {
    let mock = common::spawn_mock_api().await;
    let result = mock.client().get_asset("missing").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_get_asset_server_error() {
    let mock = common::spawn_mock_api().await;
    let err = mock.client().get_asset("broken").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InternalError);
    assert_eq!(err.message, "database unavailable");
}

#[tokio::test]
async fn test_get_asset_malformed_body() {
    let mock = common::spawn_mock_api().await;
    let err = mock.client().get_asset("garbled").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Decode);
}

#[tokio::test]
async fn test_get_asset_unreachable_host() {
    let mock = common::MockApi {
        base_url: "http://127.0.0.1:9/api".into(),
        state: Default::default(),
    };
    let err = mock.client().get_asset("a-1").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Network);
}
