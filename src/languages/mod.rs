//! Supported languages.
//!
//! - `registry`: the static code → display-name table, including the "auto" sentinel
//! - `language`: a `Language` value type that can only hold codes from the table
//!
//! # Example
//!
//! ```rust,ignore
//! use translate_web::languages::{Language, LanguageRegistry};
//!
//! let french = Language::target("fr")?;
//! let targets = LanguageRegistry::get().list_targets();
//! ```

mod language;
mod registry;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry, AUTO_DETECT_CODE};
