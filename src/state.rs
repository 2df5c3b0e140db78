use std::sync::Arc;

use crate::languages::LanguageRegistry;
use crate::gateway::TranslationGateway;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn TranslationGateway>,
    pub languages: &'static LanguageRegistry,
}

impl AppState {
    pub fn new(gateway: Arc<dyn TranslationGateway>) -> Self {
        Self {
            gateway,
            languages: LanguageRegistry::get(),
        }
    }
}
