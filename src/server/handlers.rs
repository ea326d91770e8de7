//! HTTP request handlers for the web server.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;

use super::AppState;
use crate::extract::check_binary;
use crate::models::AnalysisRequest;

/// Root endpoint, service identification.
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "Mortgage Document Analysis API" }))
}

/// Health probe reporting environment facts: OCR tool availability and
/// whether the extraction service has a credential.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let tesseract = if check_binary("tesseract") {
        "available"
    } else {
        "not available"
    };
    let extractor = if state.extractor_configured {
        "configured"
    } else {
        "not configured"
    };

    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now(),
        "services": {
            "tesseract": tesseract,
            "extractor": extractor,
        }
    }))
}

/// Analyze an uploaded title document (PDF or image).
pub async fn analyze_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Response {
    let request = match read_file_part(&mut multipart).await {
        Ok(Some(request)) => request,
        Ok(None) => return bad_request("No file field in multipart request"),
        Err(e) => return bad_request(&format!("Malformed multipart request: {}", e)),
    };

    match state.analyzer.analyze(request).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Pull the `file` part out of the multipart body. Other parts are
/// skipped; `Ok(None)` means the body had no part by that name.
async fn read_file_part(
    multipart: &mut Multipart,
) -> Result<Option<AnalysisRequest>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field.bytes().await?.to_vec();
        return Ok(Some(AnalysisRequest { content_type, data }));
    }
    Ok(None)
}

fn bad_request(detail: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "detail": detail })),
    )
        .into_response()
}
