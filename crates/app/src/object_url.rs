//! Browser object URLs for fetched binary data.
//!
//! Whoever creates a URL owns it and must revoke it exactly once.

use base64::prelude::*;
use client::Blob;
use dioxus::prelude::*;
use shared_types::AppError;

/// Delay before a URL handed to a new browsing context is revoked.
pub const OPENED_URL_TTL_MS: u32 = 10_000;

const CREATE_OBJECT_URL_JS: &str = r#"
    const [data, type] = await dioxus.recv();
    const raw = atob(data);
    const bytes = new Uint8Array(raw.length);
    for (let i = 0; i < raw.length; i++) {
        bytes[i] = raw.charCodeAt(i);
    }
    return URL.createObjectURL(new Blob([bytes], { type }));
"#;

/// Copy `blob` into the page and return a `blob:` URL for it.
pub async fn create_object_url(blob: &Blob) -> Result<String, AppError> {
    let encoded = BASE64_STANDARD.encode(&blob.bytes);
    let eval = document::eval(CREATE_OBJECT_URL_JS);
    eval.send((encoded, blob.content_type.clone()))
        .map_err(|e| AppError::internal(format!("Could not pass data to the page: {e}")))?;
    eval.join::<String>()
        .await
        .map_err(|e| AppError::internal(format!("Could not create object URL: {e}")))
}

/// Release a URL returned by [`create_object_url`].
pub fn revoke_object_url(url: &str) {
    tracing::debug!(url, "Revoking object URL");
    document::eval(&format!("URL.revokeObjectURL({});", js_string(url)));
}

/// Open `url` in a new browsing context and revoke it after
/// [`OPENED_URL_TTL_MS`].
pub fn open_and_release(url: &str) {
    let url = js_string(url);
    document::eval(&format!(
        r#"
        window.open({url}, "_blank", "noopener");
        setTimeout(() => URL.revokeObjectURL({url}), {OPENED_URL_TTL_MS});
        "#
    ));
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    document::eval(&format!("window.alert({});", js_string(message)));
}

/// Quote `s` as a JavaScript string literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}
