//! Request payloads and the checks that run before any provider call.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::languages::Language;

/// Longest text accepted for translation, in characters.
pub const MAX_TRANSLATION_CHARS: usize = 5000;

/// Shortest text accepted for detection, in characters.
pub const MIN_DETECTION_CHARS: usize = 3;

/// Input problems the user can fix. Messages are shown to the client verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter some text to translate")]
    EmptyText,

    #[error("Text is too long. Please limit to {max} characters.")]
    TextTooLong { max: usize },

    #[error("Please enter at least {min} characters for language detection")]
    TextTooShort { min: usize },

    #[error("Unsupported source language: {0}")]
    UnsupportedSource(String),

    #[error("Unsupported target language: {0}")]
    UnsupportedTarget(String),
}

/// Body of `POST /translate`. Every field is optional on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct TranslatePayload {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
}

/// Body of `POST /detect`.
#[derive(Debug, Default, Deserialize)]
pub struct DetectPayload {
    #[serde(default)]
    pub text: Option<String>,
}

/// A translation request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationRequest {
    /// Trimmed, non-empty, at most `MAX_TRANSLATION_CHARS` characters.
    pub text: String,
    pub source: Language,
    pub target: Language,
}

/// A detection request that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionRequest {
    /// Trimmed, at least `MIN_DETECTION_CHARS` characters.
    pub text: String,
}

impl TranslatePayload {
    /// Checks run in order: empty text, length, source code, target code.
    pub fn validate(self) -> Result<TranslationRequest, ValidationError> {
        let text = self.text.as_deref().unwrap_or_default().trim();

        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }

        if text.chars().count() > MAX_TRANSLATION_CHARS {
            return Err(ValidationError::TextTooLong {
                max: MAX_TRANSLATION_CHARS,
            });
        }

        let source = match non_blank(self.source.as_deref()) {
            None => Language::AUTO,
            Some(code) => Language::source(code).map_err(|e| {
                debug!("Rejecting source language: {}", e);
                ValidationError::UnsupportedSource(code.to_string())
            })?,
        };

        let target = match non_blank(self.target.as_deref()) {
            None => Language::ENGLISH,
            Some(code) => Language::target(code).map_err(|e| {
                debug!("Rejecting target language: {}", e);
                ValidationError::UnsupportedTarget(code.to_string())
            })?,
        };

        Ok(TranslationRequest {
            text: text.to_string(),
            source,
            target,
        })
    }
}

impl DetectPayload {
    pub fn validate(self) -> Result<DetectionRequest, ValidationError> {
        let text = self.text.as_deref().unwrap_or_default().trim();

        if text.chars().count() < MIN_DETECTION_CHARS {
            return Err(ValidationError::TextTooShort {
                min: MIN_DETECTION_CHARS,
            });
        }

        Ok(DetectionRequest {
            text: text.to_string(),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn translate(text: &str) -> TranslatePayload {
        TranslatePayload {
            text: Some(text.to_string()),
            ..Default::default()
        }
    }

    fn detect(text: &str) -> DetectPayload {
        DetectPayload {
            text: Some(text.to_string()),
        }
    }

    // ==================== Message Tests ====================

    #[test]
    fn test_messages_are_exact() {
        assert_eq!(
            ValidationError::EmptyText.to_string(),
            "Please enter some text to translate"
        );
        assert_eq!(
            ValidationError::TextTooLong { max: 5000 }.to_string(),
            "Text is too long. Please limit to 5000 characters."
        );
        assert_eq!(
            ValidationError::TextTooShort { min: 3 }.to_string(),
            "Please enter at least 3 characters for language detection"
        );
    }

    // ==================== Translate Tests ====================

    #[test]
    fn test_translate_defaults() {
        let request = translate("  Hello  ").validate().expect("Should be valid");

        assert_eq!(request.text, "Hello");
        assert_eq!(request.source, Language::AUTO);
        assert_eq!(request.target, Language::ENGLISH);
    }

    #[test]
    fn test_translate_missing_text_is_empty() {
        let result = TranslatePayload::default().validate();
        assert_eq!(result, Err(ValidationError::EmptyText));
    }

    #[test]
    fn test_translate_explicit_languages() {
        let payload = TranslatePayload {
            text: Some("Hello".to_string()),
            source: Some("EN".to_string()),
            target: Some("zh-tw".to_string()),
        };

        let request = payload.validate().expect("Should be valid");
        assert_eq!(request.source.code(), "en");
        assert_eq!(request.target.code(), "zh-tw");
    }

    #[test]
    fn test_translate_blank_codes_fall_back_to_defaults() {
        let payload = TranslatePayload {
            text: Some("Hello".to_string()),
            source: Some("".to_string()),
            target: Some("  ".to_string()),
        };

        let request = payload.validate().expect("Should be valid");
        assert_eq!(request.source, Language::AUTO);
        assert_eq!(request.target, Language::ENGLISH);
    }

    #[test]
    fn test_translate_unknown_source() {
        let payload = TranslatePayload {
            text: Some("Hello".to_string()),
            source: Some("xx".to_string()),
            target: None,
        };

        assert_eq!(
            payload.validate(),
            Err(ValidationError::UnsupportedSource("xx".to_string()))
        );
    }

    #[test]
    fn test_translate_auto_target_rejected() {
        let payload = TranslatePayload {
            text: Some("Hello".to_string()),
            source: None,
            target: Some("auto".to_string()),
        };

        assert_eq!(
            payload.validate(),
            Err(ValidationError::UnsupportedTarget("auto".to_string()))
        );
    }

    #[test]
    fn test_translate_length_checked_before_languages() {
        let payload = TranslatePayload {
            text: Some("a".repeat(MAX_TRANSLATION_CHARS + 1)),
            source: Some("xx".to_string()),
            target: Some("yy".to_string()),
        };

        assert_eq!(
            payload.validate(),
            Err(ValidationError::TextTooLong { max: 5000 })
        );
    }

    #[test]
    fn test_translate_boundary_counts_characters_not_bytes() {
        // 5000 two-byte characters is 10000 bytes but still within the limit
        let text = "é".repeat(MAX_TRANSLATION_CHARS);
        assert!(translate(&text).validate().is_ok());

        let text = "é".repeat(MAX_TRANSLATION_CHARS + 1);
        assert_eq!(
            translate(&text).validate(),
            Err(ValidationError::TextTooLong { max: 5000 })
        );
    }

    #[test]
    fn test_translate_surrounding_whitespace_not_counted() {
        let text = format!("   {}\n\t", "a".repeat(MAX_TRANSLATION_CHARS));
        let request = translate(&text).validate().expect("Should be valid");
        assert_eq!(request.text.len(), MAX_TRANSLATION_CHARS);
    }

    // ==================== Detect Tests ====================

    #[test]
    fn test_detect_too_short() {
        assert_eq!(
            detect("Hi").validate(),
            Err(ValidationError::TextTooShort { min: 3 })
        );
        assert_eq!(
            DetectPayload::default().validate(),
            Err(ValidationError::TextTooShort { min: 3 })
        );
    }

    #[test]
    fn test_detect_trims_before_counting() {
        assert!(detect("  Hi  ").validate().is_err());

        let request = detect("  Hey  ").validate().expect("Should be valid");
        assert_eq!(request.text, "Hey");
    }

    #[test]
    fn test_detect_counts_characters() {
        // Three CJK characters, nine bytes
        assert!(detect("日本語").validate().is_ok());
        assert!(detect("日本").validate().is_err());
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_whitespace_only_is_empty(text in "[ \t\r\n\u{00a0}\u{3000}]{0,50}") {
            prop_assert_eq!(translate(&text).validate(), Err(ValidationError::EmptyText));
        }

        #[test]
        fn prop_over_limit_is_too_long(text in "[a-zé日]{5001,5050}") {
            prop_assert_eq!(
                translate(&text).validate(),
                Err(ValidationError::TextTooLong { max: MAX_TRANSLATION_CHARS })
            );
        }

        #[test]
        fn prop_within_limit_keeps_trimmed_text(
            body in "[a-zA-Zé日][a-zA-Z é日]{0,300}[a-zA-Zé日]|[a-zA-Zé日]",
            pad in "[ \t\n]{0,5}",
        ) {
            let text = format!("{}{}{}", pad, body, pad);
            let request = translate(&text).validate();
            prop_assert!(request.is_ok());
            prop_assert_eq!(request.unwrap().text, body);
        }

        #[test]
        fn prop_short_detection_rejected(text in "[ ]{0,3}[a-z日]{0,2}[ ]{0,3}") {
            prop_assert_eq!(
                detect(&text).validate(),
                Err(ValidationError::TextTooShort { min: MIN_DETECTION_CHARS })
            );
        }
    }
}
