use shared_types::AppError;

/// Convert a transport-level reqwest error into an AppError.
///
/// Body decoding failures become `Decode`; everything else (connect, timeout,
/// redirect loops, CORS rejections in the browser) becomes `Network`.
pub fn reqwest_to_app_error(err: reqwest::Error) -> AppError {
    if err.is_decode() {
        AppError::decode(format!("Unexpected response body: {err}"))
    } else if let Some(status) = err.status() {
        AppError::from_status(status.as_u16(), "")
    } else {
        AppError::network(err.to_string())
    }
}

/// Extension trait providing `.into_app_error()` on reqwest::Error.
pub trait ReqwestErrorExt {
    fn into_app_error(self) -> AppError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_app_error(self) -> AppError {
        reqwest_to_app_error(self)
    }
}

/// Map a non-success response to an AppError, consuming its body.
pub async fn error_from_response(response: reqwest::Response) -> AppError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    AppError::from_status(status, &body)
}
