use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, Asset, AssetCondition, UpdateAssetRequest};

use crate::common;

fn request() -> UpdateAssetRequest {
    let asset: Asset = serde_json::from_value(common::laptop_json("a-1")).unwrap();
    let mut request = UpdateAssetRequest::from_asset(&asset);
    request.condition = AssetCondition::Fair;
    request.notes = Some("Hinge cracked".into());
    request
}

#[tokio::test]
async fn test_update_asset_sends_camel_case_body() {
    let mock = common::spawn_mock_api().await;
    mock.client().update_asset("a-1", &request()).await.unwrap();

    let recorded = &mock.state.requests()[0];
    assert_eq!(recorded.method, "PUT");
    assert_eq!(recorded.path, "/assets/a-1");
    let body = recorded.body.as_ref().unwrap();
    assert_eq!(body["assetTag"], "IT-0042");
    assert_eq!(body["condition"], "FAIR");
    assert_eq!(body["notes"], "Hinge cracked");
    assert!(body["serialNumber"].is_null());
}

#[tokio::test]
async fn test_update_asset_returns_saved_record() {
    let mock = common::spawn_mock_api().await;
    let saved = mock.client().update_asset("a-1", &request()).await.unwrap();
    assert_eq!(saved.condition, AssetCondition::Fair);
    assert_eq!(saved.notes.as_deref(), Some("Hinge cracked"));
}

#[tokio::test]
async fn test_update_asset_validation_error() {
    let mock = common::spawn_mock_api().await;
    let mut req = request();
    req.asset_tag = "DUPLICATE".into();

    let err = mock.client().update_asset("a-1", &req).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.friendly_message(), "Asset tag already in use");
    assert_eq!(
        err.field_errors.get("assetTag").map(String::as_str),
        Some("Already used by another asset")
    );
}
