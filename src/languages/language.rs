//! Language type: a code that has been checked against the registry.

use crate::languages::{LanguageConfig, LanguageRegistry, AUTO_DETECT_CODE};
use anyhow::{bail, Result};
use std::fmt;

/// A language code taken from the table.
///
/// Values only come from the registry, so `code()` is always a table code.
/// Providers with their own code scheme translate it at their boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    code: &'static str,
}

impl Language {
    /// The "auto" sentinel: let the provider detect the source language.
    pub const AUTO: Language = Language {
        code: AUTO_DETECT_CODE,
    };

    /// English, the default translation target.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Resolve a source language. Any table code is accepted, "auto" included.
    ///
    /// The code is trimmed and ASCII-lowercased before lookup, so `" FR "`
    /// resolves to `fr`.
    pub fn source(code: &str) -> Result<Language> {
        let normalized = normalize(code);
        match LanguageRegistry::get().source_language(&normalized) {
            Some(config) => Ok(Language::from_config(config)),
            None => bail!("Unknown source language code: '{}'", code),
        }
    }

    /// Resolve a target language. Any table code except "auto" is accepted.
    pub fn target(code: &str) -> Result<Language> {
        let normalized = normalize(code);
        match LanguageRegistry::get().target_language(&normalized) {
            Some(config) => Ok(Language::from_config(config)),
            None => bail!("Unknown target language code: '{}'", code),
        }
    }

    fn from_config(config: &'static LanguageConfig) -> Language {
        Language { code: config.code }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Display name (e.g., "French", "Auto Detect").
    pub fn name(&self) -> &'static str {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .map(|config| config.name)
            .unwrap_or(self.code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_ascii_lowercase()
}
