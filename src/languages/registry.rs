//! Language registry: the static table of language codes and display names.
//!
//! The table is built once on first access through a `OnceLock` and is never
//! mutated afterwards, so handlers can share it freely across requests.

use std::sync::OnceLock;

/// Code of the sentinel entry that asks the provider to detect the source language.
pub const AUTO_DETECT_CODE: &str = "auto";

/// One row of the language table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageConfig {
    /// Provider language code (e.g., "en", "zh-cn", "haw")
    pub code: &'static str,

    /// Human-readable name shown in the language selectors
    pub name: &'static str,
}

impl LanguageConfig {
    /// Whether this is the "auto" sentinel rather than a real language.
    pub fn is_auto_detect(&self) -> bool {
        self.code == AUTO_DETECT_CODE
    }
}

/// Global language registry singleton.
///
/// Entries keep their table order, which is also the order the selectors
/// render them in.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its exact code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All entries, including the "auto" sentinel.
    pub fn list_all(&self) -> &[LanguageConfig] {
        &self.languages
    }

    /// Entries usable as a translation target (everything except "auto").
    pub fn list_targets(&self) -> impl Iterator<Item = &LanguageConfig> {
        self.languages.iter().filter(|lang| !lang.is_auto_detect())
    }

    /// Look up a code usable as the source language ("auto" included).
    pub fn source_language(&self, code: &str) -> Option<&LanguageConfig> {
        self.get_by_code(code)
    }

    /// Look up a code usable as the target language ("auto" excluded).
    pub fn target_language(&self, code: &str) -> Option<&LanguageConfig> {
        self.get_by_code(code).filter(|lang| !lang.is_auto_detect())
    }
}

const fn lang(code: &'static str, name: &'static str) -> LanguageConfig {
    LanguageConfig { code, name }
}

/// The language table, in display order.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        lang("auto", "Auto Detect"),
        lang("af", "Afrikaans"),
        lang("sq", "Albanian"),
        lang("ar", "Arabic"),
        lang("hy", "Armenian"),
        lang("az", "Azerbaijani"),
        lang("eu", "Basque"),
        lang("be", "Belarusian"),
        lang("bn", "Bengali"),
        lang("bs", "Bosnian"),
        lang("bg", "Bulgarian"),
        lang("ca", "Catalan"),
        lang("ceb", "Cebuano"),
        lang("ny", "Chichewa"),
        lang("zh-cn", "Chinese (Simplified)"),
        lang("zh-tw", "Chinese (Traditional)"),
        lang("co", "Corsican"),
        lang("hr", "Croatian"),
        lang("cs", "Czech"),
        lang("da", "Danish"),
        lang("nl", "Dutch"),
        lang("en", "English"),
        lang("eo", "Esperanto"),
        lang("et", "Estonian"),
        lang("tl", "Filipino"),
        lang("fi", "Finnish"),
        lang("fr", "French"),
        lang("fy", "Frisian"),
        lang("gl", "Galician"),
        lang("ka", "Georgian"),
        lang("de", "German"),
        lang("el", "Greek"),
        lang("gu", "Gujarati"),
        lang("ht", "Haitian Creole"),
        lang("ha", "Hausa"),
        lang("haw", "Hawaiian"),
        lang("iw", "Hebrew"),
        lang("hi", "Hindi"),
        lang("hmn", "Hmong"),
        lang("hu", "Hungarian"),
        lang("is", "Icelandic"),
        lang("ig", "Igbo"),
        lang("id", "Indonesian"),
        lang("ga", "Irish"),
        lang("it", "Italian"),
        lang("ja", "Japanese"),
        lang("jw", "Javanese"),
        lang("kn", "Kannada"),
        lang("kk", "Kazakh"),
        lang("km", "Khmer"),
        lang("ko", "Korean"),
        lang("ku", "Kurdish (Kurmanji)"),
        lang("ky", "Kyrgyz"),
        lang("lo", "Lao"),
        lang("la", "Latin"),
        lang("lv", "Latvian"),
        lang("lt", "Lithuanian"),
        lang("lb", "Luxembourgish"),
        lang("mk", "Macedonian"),
        lang("mg", "Malagasy"),
        lang("ms", "Malay"),
        lang("ml", "Malayalam"),
        lang("mt", "Maltese"),
        lang("mi", "Maori"),
        lang("mr", "Marathi"),
        lang("mn", "Mongolian"),
        lang("my", "Myanmar (Burmese)"),
        lang("ne", "Nepali"),
        lang("no", "Norwegian"),
        lang("ps", "Pashto"),
        lang("fa", "Persian"),
        lang("pl", "Polish"),
        lang("pt", "Portuguese"),
        lang("pa", "Punjabi"),
        lang("ro", "Romanian"),
        lang("ru", "Russian"),
        lang("sm", "Samoan"),
        lang("gd", "Scots Gaelic"),
        lang("sr", "Serbian"),
        lang("st", "Sesotho"),
        lang("sn", "Shona"),
        lang("sd", "Sindhi"),
        lang("si", "Sinhala"),
        lang("sk", "Slovak"),
        lang("sl", "Slovenian"),
        lang("so", "Somali"),
        lang("es", "Spanish"),
        lang("su", "Sundanese"),
        lang("sw", "Swahili"),
        lang("sv", "Swedish"),
        lang("tg", "Tajik"),
        lang("ta", "Tamil"),
        lang("te", "Telugu"),
        lang("th", "Thai"),
        lang("tr", "Turkish"),
        lang("uk", "Ukrainian"),
        lang("ur", "Urdu"),
        lang("uz", "Uzbek"),
        lang("vi", "Vietnamese"),
        lang("cy", "Welsh"),
        lang("xh", "Xhosa"),
        lang("yi", "Yiddish"),
        lang("yo", "Yoruba"),
        lang("zu", "Zulu"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_table_size() {
        // "auto" plus 103 languages
        assert_eq!(LanguageRegistry::get().list_all().len(), 104);
    }

    #[test]
    fn test_auto_is_first_entry() {
        let first = &LanguageRegistry::get().list_all()[0];
        assert_eq!(first.code, "auto");
        assert_eq!(first.name, "Auto Detect");
        assert!(first.is_auto_detect());
    }

    #[test]
    fn test_codes_are_unique() {
        let registry = LanguageRegistry::get();
        let codes: HashSet<_> = registry.list_all().iter().map(|l| l.code).collect();
        assert_eq!(codes.len(), registry.list_all().len());
    }

    #[test]
    fn test_get_by_code_regional_variants() {
        let registry = LanguageRegistry::get();
        assert_eq!(
            registry.get_by_code("zh-cn").map(|l| l.name),
            Some("Chinese (Simplified)")
        );
        assert_eq!(
            registry.get_by_code("zh-tw").map(|l| l.name),
            Some("Chinese (Traditional)")
        );
        assert_eq!(registry.get_by_code("iw").map(|l| l.name), Some("Hebrew"));
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        let registry = LanguageRegistry::get();
        assert!(registry.get_by_code("xx").is_none());
        assert!(registry.get_by_code("").is_none());
        assert!(registry.get_by_code("EN").is_none());
    }

    #[test]
    fn test_list_targets_excludes_auto() {
        let registry = LanguageRegistry::get();
        let targets: Vec<_> = registry.list_targets().collect();

        assert_eq!(targets.len(), registry.list_all().len() - 1);
        assert!(targets.iter().all(|l| l.code != "auto"));
        assert!(targets.iter().any(|l| l.code == "en"));
    }

    #[test]
    fn test_source_and_target_support() {
        let registry = LanguageRegistry::get();

        assert_eq!(registry.source_language("auto").map(|l| l.code), Some("auto"));
        assert_eq!(registry.source_language("fr").map(|l| l.name), Some("French"));
        assert!(registry.source_language("klingon").is_none());

        assert!(registry.target_language("auto").is_none());
        assert_eq!(registry.target_language("fr").map(|l| l.name), Some("French"));
        assert!(registry.target_language("klingon").is_none());
    }
}
