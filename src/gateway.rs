use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::languages::AUTO_DETECT_CODE;

/// Outcome of a successful translation.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationResult {
    pub translated_text: String,
    /// The language the provider resolved the source to (matters when the
    /// caller asked for "auto").
    pub detected_source_language: String,
    /// Detection confidence in the 0.0–1.0 range, if the provider reported one.
    pub confidence: Option<f64>,
}

/// Outcome of a successful language detection.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResult {
    pub language: String,
    /// Confidence in the 0.0–1.0 range.
    pub confidence: f64,
}

/// Ways a provider round trip can fail.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("network error talking to translation provider: {0}")]
    Network(#[from] reqwest::Error),

    #[error("translation provider returned {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("malformed response from translation provider: {0}")]
    MalformedResponse(String),
}

/// The external translation provider.
///
/// Implementations make exactly one round trip per call. They never retry;
/// the caller decides what a failure means.
#[async_trait]
pub trait TranslationGateway: Send + Sync {
    /// Translate `text` from `source` ("auto" allowed) into `target`.
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<TranslationResult, GatewayError>;

    /// Detect the language of `text`.
    async fn detect(&self, text: &str) -> Result<DetectionResult, GatewayError>;
}

// ==================== LibreTranslate wire types ====================

#[derive(Debug, Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct DetectRequest<'a> {
    q: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
    #[serde(default)]
    detected_language: Option<Detection>,
}

#[derive(Debug, Deserialize)]
struct Detection {
    language: String,
    confidence: f64,
}

// ==================== Language codes ====================

/// Table codes that LibreTranslate spells differently, as (table, provider).
/// Every other code is the same on both sides.
const PROVIDER_CODES: &[(&str, &str)] = &[
    ("zh-cn", "zh"),
    ("zh-tw", "zt"),
    ("iw", "he"),
    ("jw", "jv"),
    ("no", "nb"),
];

/// Extra provider spellings seen in detection results.
const PROVIDER_ALIASES: &[(&str, &str)] = &[("zh-hans", "zh-cn"), ("zh-hant", "zh-tw")];

fn to_provider_code(code: &str) -> &str {
    PROVIDER_CODES
        .iter()
        .find(|(table, _)| *table == code)
        .map(|(_, provider)| *provider)
        .unwrap_or(code)
}

fn from_provider_code(code: &str) -> String {
    let code = code.trim().to_ascii_lowercase();
    PROVIDER_CODES
        .iter()
        .map(|(table, provider)| (*provider, *table))
        .chain(PROVIDER_ALIASES.iter().copied())
        .find(|(provider, _)| *provider == code)
        .map(|(_, table)| table.to_string())
        .unwrap_or(code)
}

/// Gateway backed by a LibreTranslate-compatible HTTP API.
///
/// Callers pass and receive table codes; the mapping to LibreTranslate's
/// codes happens here.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpGateway {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, GatewayError> {
        Self::new(
            config.translate_api_url.clone(),
            config.translate_api_key.clone(),
            config.gateway_timeout,
        )
    }

    async fn post<B, R>(&self, endpoint: &str, body: &B) -> Result<R, GatewayError>
    where
        B: Serialize + ?Sized,
        R: for<'de> Deserialize<'de>,
    {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(GatewayError::Provider { status, body });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| GatewayError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl TranslationGateway for HttpGateway {
    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<TranslationResult, GatewayError> {
        let request = TranslateRequest {
            q: text,
            source: to_provider_code(source),
            target: to_provider_code(target),
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response: TranslateResponse = self.post("translate", &request).await?;

        let (detected_source_language, confidence) = match response.detected_language {
            Some(detection) => (
                from_provider_code(&detection.language),
                Some(normalize_confidence(detection.confidence)),
            ),
            // Provider only reports a detection for "auto" requests
            None if source != AUTO_DETECT_CODE => (source.to_string(), None),
            None => {
                return Err(GatewayError::MalformedResponse(
                    "auto-detect translation without detectedLanguage".to_string(),
                ))
            }
        };

        Ok(TranslationResult {
            translated_text: response.translated_text,
            detected_source_language,
            confidence,
        })
    }

    async fn detect(&self, text: &str) -> Result<DetectionResult, GatewayError> {
        let request = DetectRequest {
            q: text,
            api_key: self.api_key.as_deref(),
        };

        let detections: Vec<Detection> = self.post("detect", &request).await?;

        let best = detections
            .into_iter()
            .max_by(|a, b| a.confidence.total_cmp(&b.confidence))
            .ok_or_else(|| {
                GatewayError::MalformedResponse("detection response was empty".to_string())
            })?;

        Ok(DetectionResult {
            language: from_provider_code(&best.language),
            confidence: normalize_confidence(best.confidence),
        })
    }
}

/// Provider confidences are percentages; scale them into 0.0–1.0.
fn normalize_confidence(raw: f64) -> f64 {
    (raw / 100.0).clamp(0.0, 1.0)
}
