use crate::config::Config;
use crate::services::eligibility::EligibilityRegistry;
use crate::services::generator::MessageGenerator;

/// Shared application state, owned at the top level and handed to handlers
/// and the reminder service behind an `Arc`.
///
/// Holding the eligibility registry here (instead of process-wide state)
/// lets tests build a fresh context per case.
pub struct AppContext {
    /// Runtime configuration loaded at startup.
    pub config: Config,
    /// Recipients opted in to proactive messages.
    pub registry: EligibilityRegistry,
    /// Text-generation client with per-kind fallbacks.
    pub generator: MessageGenerator,
}

impl AppContext {
    /// Builds the context from loaded configuration.
    pub fn new(config: Config) -> Self {
        let generator = MessageGenerator::new(config.openai_api_key.clone());
        Self {
            config,
            registry: EligibilityRegistry::new(),
            generator,
        }
    }
}
