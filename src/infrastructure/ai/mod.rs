pub mod gemini;
pub mod noop;
pub mod prompt_builder;

use crate::application::config::AiConfig;
use crate::domain::ports::ExplanationService;

use self::gemini::{GeminiExplainer, GeminiSettings};
use self::noop::NoopExplainer;

/// Create the explanation service selected by configuration.
///
/// The API key is read once, here, from the environment variable named by
/// `config.api_key_env`. Returns [`NoopExplainer`] when AI is disabled, the
/// provider is unknown, or the provider cannot be set up.
#[must_use]
pub fn create_explanation_service(config: &AiConfig) -> Box<dyn ExplanationService> {
    let api_key = std::env::var(&config.api_key_env).ok();
    build_explanation_service(config, api_key)
}

fn build_explanation_service(
    config: &AiConfig,
    api_key: Option<String>,
) -> Box<dyn ExplanationService> {
    if !config.enabled {
        return Box::new(NoopExplainer::new());
    }
    match config.provider.trim() {
        "gemini" => {
            let Some(api_key) = api_key.filter(|k| !k.trim().is_empty()) else {
                tracing::warn!(
                    env = %config.api_key_env,
                    "Gemini API key not set, explanations will use the fallback text"
                );
                return Box::new(NoopExplainer::new());
            };
            let settings = GeminiSettings {
                api_key,
                model: config.model.clone(),
                base_url: config.base_url.clone(),
                timeout_secs: config.timeout_secs,
            };
            match GeminiExplainer::new(settings) {
                Ok(explainer) => Box::new(explainer),
                Err(e) => {
                    tracing::warn!("Gemini client unavailable, falling back to noop: {e}");
                    Box::new(NoopExplainer::new())
                }
            }
        }
        "noop" => Box::new(NoopExplainer::new()),
        _ => {
            tracing::warn!(
                provider = %config.provider,
                "unknown explanation provider, falling back to noop"
            );
            Box::new(NoopExplainer::new())
        }
    }
}
