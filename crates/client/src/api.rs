use std::sync::Arc;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use shared_types::{
    Activity, ApiSettings, AppConfig, AppError, Asset, CustomFieldDefinition, UpdateAssetRequest,
    ASSET_ENTITY_TYPE,
};

use crate::auth::{StaticTokenProvider, TokenProvider};
use crate::error_convert::{error_from_response, ReqwestErrorExt};

/// Content type assumed when a binary response does not declare one.
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// A downloaded binary resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Collection endpoints answer either with a bare array or `{ "data": [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ListResponse<T> {
    Plain(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> ListResponse<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            ListResponse::Plain(items) => items,
            ListResponse::Wrapped { data } => data,
        }
    }
}

/// Typed client for the asset REST API.
///
/// Cheap to clone; clones share the HTTP connection pool and token provider.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    tokens: Arc<dyn TokenProvider>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && Arc::ptr_eq(&self.tokens, &other.tokens)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(settings: &ApiSettings, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: Arc::from(settings.base_url.trim_end_matches('/')),
            tokens,
        }
    }

    /// Client using the static token from the config file, if any.
    pub fn from_config(config: &AppConfig) -> Self {
        let tokens = Arc::new(StaticTokenProvider::new(config.api.token.clone()));
        Self::new(&config.api, tokens)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach the bearer token when the provider has one.
    async fn authorize(&self, builder: RequestBuilder) -> Result<RequestBuilder, AppError> {
        Ok(match self.tokens.access_token().await? {
            Some(token) => builder.header(AUTHORIZATION, format!("Bearer {token}")),
            None => builder,
        })
    }

    async fn send(&self, builder: RequestBuilder) -> Result<reqwest::Response, AppError> {
        self.authorize(builder)
            .await?
            .send()
            .await
            .map_err(ReqwestErrorExt::into_app_error)
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, AppError> {
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(ReqwestErrorExt::into_app_error)
    }

    async fn read_blob(response: reqwest::Response) -> Result<Blob, AppError> {
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();
        let bytes = response
            .bytes()
            .await
            .map_err(ReqwestErrorExt::into_app_error)?;
        Ok(Blob {
            bytes: bytes.to_vec(),
            content_type,
        })
    }

    // ── Assets ─────────────────────────────────────────────

    /// Fetch one asset. A 404 is not an error: it yields `Ok(None)`.
    #[tracing::instrument(skip(self))]
    pub async fn get_asset(&self, asset_id: &str) -> Result<Option<Asset>, AppError> {
        let url = self.endpoint(&format!("assets/{}", urlencoding::encode(asset_id)));
        let response = self
            .send(self.http.get(url).header(ACCEPT, "application/json"))
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(asset_id, "Asset not found");
            return Ok(None);
        }
        Self::read_json(response).await.map(Some)
    }

    #[tracing::instrument(skip(self, request))]
    pub async fn update_asset(
        &self,
        asset_id: &str,
        request: &UpdateAssetRequest,
    ) -> Result<Asset, AppError> {
        let url = self.endpoint(&format!("assets/{}", urlencoding::encode(asset_id)));
        let response = self.send(self.http.put(url).json(request)).await?;
        let asset: Asset = Self::read_json(response).await?;
        tracing::info!(asset_id, "Asset updated");
        Ok(asset)
    }

    // ── Activity log ───────────────────────────────────────

    #[tracing::instrument(skip(self))]
    pub async fn list_activities(
        &self,
        entity_type: &str,
        entity_id: &str,
    ) -> Result<Vec<Activity>, AppError> {
        let request = self
            .http
            .get(self.endpoint("activities"))
            .query(&[("entityType", entity_type), ("entityId", entity_id)]);
        let response = self.send(request).await?;
        Self::read_json::<ListResponse<Activity>>(response)
            .await
            .map(ListResponse::into_vec)
    }

    /// Activity log entries for one asset.
    pub async fn list_asset_activities(&self, asset_id: &str) -> Result<Vec<Activity>, AppError> {
        self.list_activities(ASSET_ENTITY_TYPE, asset_id).await
    }

    // ── Custom fields ──────────────────────────────────────

    #[tracing::instrument(skip(self))]
    pub async fn list_custom_field_definitions(
        &self,
    ) -> Result<Vec<CustomFieldDefinition>, AppError> {
        let request = self
            .http
            .get(self.endpoint("custom-fields"))
            .query(&[("entityType", ASSET_ENTITY_TYPE)]);
        let response = self.send(request).await?;
        Self::read_json::<ListResponse<CustomFieldDefinition>>(response)
            .await
            .map(ListResponse::into_vec)
    }

    // ── Binary resources ───────────────────────────────────

    /// Staff profile photo by directory id. `Ok(None)` when the directory has
    /// no photo for the user.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_staff_photo(&self, directory_id: &str) -> Result<Option<Blob>, AppError> {
        let url = self.endpoint(&format!(
            "staff/{}/photo",
            urlencoding::encode(directory_id)
        ));
        let response = self.send(self.http.get(url)).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::read_blob(response).await.map(Some)
    }

    /// Download an attached document. Requires a bearer token: without one no
    /// request is made.
    #[tracing::instrument(skip(self))]
    pub async fn download_document(&self, document_id: &str) -> Result<Blob, AppError> {
        let token = self
            .tokens
            .access_token()
            .await?
            .ok_or_else(|| AppError::unauthorized("Sign in to download documents"))?;
        let url = self.endpoint(&format!(
            "documents/{}/download",
            urlencoding::encode(document_id)
        ));
        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await
            .map_err(ReqwestErrorExt::into_app_error)?;
        let blob = Self::read_blob(response).await?;
        tracing::info!(document_id, size = blob.bytes.len(), "Document downloaded");
        Ok(blob)
    }
}
