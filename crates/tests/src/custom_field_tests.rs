use pretty_assertions::assert_eq;
use shared_types::CustomFieldType;

use crate::common;

#[tokio::test]
async fn test_list_custom_field_definitions() {
    let mock = common::spawn_mock_api().await;
    let definitions = mock.client().list_custom_field_definitions().await.unwrap();

    assert_eq!(definitions.len(), 2);
    assert_eq!(definitions[0].name, "Cost Center");
    assert_eq!(definitions[1].field_type, CustomFieldType::Boolean);

    let recorded = &mock.state.requests()[0];
    assert_eq!(recorded.query.get("entityType").map(String::as_str), Some("ASSET"));
}
