use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

use crate::common;

#[tokio::test]
async fn test_staff_photo_returns_bytes_and_type() {
    let mock = common::spawn_mock_api().await;
    let blob = mock.client().fetch_staff_photo("u-1").await.unwrap().unwrap();
    assert_eq!(blob.content_type, "image/jpeg");
    assert_eq!(blob.bytes, vec![0xff, 0xd8, 0xff, 0xe0]);
}

#[tokio::test]
async fn test_staff_photo_not_found_is_none() {
    let mock = common::spawn_mock_api().await;
    let photo = mock.client().fetch_staff_photo("u-404").await.unwrap();
    assert!(photo.is_none());
}

#[tokio::test]
async fn test_staff_photo_other_failure_is_error() {
    let mock = common::spawn_mock_api().await;
    let err = mock.client().fetch_staff_photo("u-flaky").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::InternalError);
}

#[tokio::test]
async fn test_download_document_with_token() {
    let mock = common::spawn_mock_api().await;
    let blob = mock.client().download_document("d-1").await.unwrap();
    assert_eq!(blob.content_type, "application/pdf");
    assert_eq!(blob.bytes, b"%PDF-1.7".to_vec());
}

#[tokio::test]
async fn test_download_document_without_token_sends_nothing() {
    let mock = common::spawn_mock_api().await;
    let err = mock
        .client_with_token(None)
        .download_document("d-1")
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert!(mock.state.requests().is_empty());
}
