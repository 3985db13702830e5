use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use client::{ApiClient, StaticTokenProvider};
use serde_json::{json, Value};
use shared_types::ApiSettings;
use std::collections::HashMap;

pub const TOKEN: &str = "test-token";

/// One request as the mock API saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone, Default)]
pub struct MockState {
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockState {
    fn record(
        &self,
        method: &str,
        path: String,
        query: HashMap<String, String>,
        headers: &HeaderMap,
        body: Option<Value>,
    ) {
        let authorization = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.requests.lock().unwrap().push(Recorded {
            method: method.to_string(),
            path,
            query,
            authorization,
            body,
        });
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

/// A running mock of the asset API.
pub struct MockApi {
    pub base_url: String,
    pub state: MockState,
}

impl MockApi {
    /// Client with the shared test token.
    pub fn client(&self) -> ApiClient {
        self.client_with_token(Some(TOKEN))
    }

    pub fn client_with_token(&self, token: Option<&str>) -> ApiClient {
        let settings = ApiSettings {
            base_url: self.base_url.clone(),
            token: None,
        };
        let tokens = Arc::new(StaticTokenProvider::new(token.map(str::to_string)));
        ApiClient::new(&settings, tokens)
    }
}

pub fn laptop_json(id: &str) -> Value {
    json!({
        "id": id,
        "assetTag": "IT-0042",
        "type": "LAPTOP",
        "make": "Lenovo",
        "model": "ThinkPad T14",
        "status": "ASSIGNED",
        "condition": "GOOD",
        "specifications": { "processor": "Ryzen 7", "ram": "32GB" },
        "purchasePrice": 1999.5,
        "source": "INTUNE",
        "assignedTo": { "id": "s-1", "displayName": "Dana Scully", "directoryId": "u-1" },
        "documents": [{ "id": "d-1", "fileName": "invoice.pdf", "kind": "INVOICE" }]
    })
}

async fn get_asset(
    State(state): State<MockState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    state.record("GET", format!("/assets/{id}"), HashMap::new(), &headers, None);
    match id.as_str() {
        "missing" => StatusCode::NOT_FOUND.into_response(),
        "broken" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "database unavailable" })),
        )
            .into_response(),
        "garbled" => (StatusCode::OK, "not json").into_response(),
        _ => Json(laptop_json(&id)).into_response(),
    }
}

async fn put_asset(
    State(state): State<MockState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.record(
        "PUT",
        format!("/assets/{id}"),
        HashMap::new(),
        &headers,
        Some(body.clone()),
    );
    if body["assetTag"] == "DUPLICATE" {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "message": "Asset tag already in use",
                "fieldErrors": { "assetTag": "Already used by another asset" }
            })),
        )
            .into_response();
    }
    let mut asset = laptop_json(&id);
    if let (Some(target), Some(update)) = (asset.as_object_mut(), body.as_object()) {
        for (key, value) in update {
            target.insert(key.clone(), value.clone());
        }
    }
    Json(asset).into_response()
}

async fn list_activities(
    State(state): State<MockState>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Json<Value> {
    state.record("GET", "/activities".into(), query, &headers, None);
    Json(json!({
        "data": [
            { "id": "act-1", "action": "CREATED", "timestamp": "2026-01-02T09:00:00Z" },
            {
                "id": "act-2",
                "action": "STATUS_CHANGED",
                "timestamp": "2026-01-20T21:35:00Z",
                "actor": { "id": "s-9", "displayName": "Fox Mulder" }
            }
        ]
    }))
}

async fn list_custom_fields(
    State(state): State<MockState>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Json<Value> {
    state.record("GET", "/custom-fields".into(), query, &headers, None);
    Json(json!([
        { "id": "cf-1", "name": "Cost Center", "fieldType": "TEXT" },
        { "id": "cf-2", "name": "Encrypted", "fieldType": "BOOLEAN" }
    ]))
}

async fn staff_photo(
    State(state): State<MockState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    state.record("GET", format!("/staff/{id}/photo"), HashMap::new(), &headers, None);
    match id.as_str() {
        "u-1" => (
            [(header::CONTENT_TYPE, "image/jpeg")],
            Bytes::from_static(&[0xff, 0xd8, 0xff, 0xe0]),
        )
            .into_response(),
        "u-flaky" => StatusCode::BAD_GATEWAY.into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn download_document(
    State(state): State<MockState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    state.record(
        "GET",
        format!("/documents/{id}/download"),
        HashMap::new(),
        &headers,
        None,
    );
    let expected = format!("Bearer {TOKEN}");
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some(expected.as_str());
    if !authorized {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    (
        [(header::CONTENT_TYPE, "application/pdf")],
        Bytes::from_static(b"%PDF-1.7"),
    )
        .into_response()
}

/// Start the mock API on an ephemeral port. The server lives until the
/// test's runtime shuts down.
pub async fn spawn_mock_api() -> MockApi {
    let state = MockState::default();
    let api = Router::new()
        .route("/assets/{id}", get(get_asset).put(put_asset))
        .route("/activities", get(list_activities))
        .route("/custom-fields", get(list_custom_fields))
        .route("/staff/{id}/photo", get(staff_photo))
        .route("/documents/{id}/download", get(download_document))
        .with_state(state.clone());
    let router = Router::new().nest("/api", api);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock API");
    let addr = listener.local_addr().expect("Mock API has no address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Mock API crashed");
    });

    MockApi {
        base_url: format!("http://{addr}/api"),
        state,
    }
}
