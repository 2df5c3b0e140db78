use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::error::{ApiError, Operation};
use crate::gateway::TranslationGateway;
use crate::page;
use crate::state::AppState;
use crate::validation::{DetectPayload, TranslatePayload};

#[derive(Debug, Serialize, PartialEq)]
pub struct TranslateResponse {
    pub success: bool,
    pub translated_text: String,
    pub detected_language: String,
    /// Serialized as `null` when the provider gave no score.
    pub confidence: Option<f64>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct DetectResponse {
    pub success: bool,
    pub language: String,
    pub confidence: f64,
}

/// Validate a translation payload and make one provider call.
pub async fn translate_text(
    gateway: &dyn TranslationGateway,
    payload: TranslatePayload,
) -> Result<TranslateResponse, ApiError> {
    let request = payload.validate()?;

    let result = gateway
        .translate(&request.text, request.source.code(), request.target.code())
        .await
        .map_err(|e| ApiError::gateway(Operation::Translate, e))?;

    info!(
        "Translated {} chars ({} -> {})",
        request.text.chars().count(),
        result.detected_source_language,
        request.target.name()
    );

    Ok(TranslateResponse {
        success: true,
        translated_text: result.translated_text,
        detected_language: result.detected_source_language,
        confidence: result.confidence,
    })
}

/// Validate a detection payload and make one provider call.
pub async fn detect_language(
    gateway: &dyn TranslationGateway,
    payload: DetectPayload,
) -> Result<DetectResponse, ApiError> {
    let request = payload.validate()?;

    let result = gateway
        .detect(&request.text)
        .await
        .map_err(|e| ApiError::gateway(Operation::Detect, e))?;

    Ok(DetectResponse {
        success: true,
        language: result.language,
        confidence: result.confidence,
    })
}

// ==================== Axum handlers ====================

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(page::render_index(state.languages))
}

pub async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslatePayload>, JsonRejection>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    translate_text(state.gateway.as_ref(), payload).await.map(Json)
}

pub async fn detect(
    State(state): State<AppState>,
    payload: Result<Json<DetectPayload>, JsonRejection>,
) -> Result<Json<DetectResponse>, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    detect_language(state.gateway.as_ref(), payload).await.map(Json)
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Unmatched routes get the page with a 404.
pub async fn not_found(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(page::render_index(state.languages)),
    )
}
