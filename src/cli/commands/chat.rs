use anyhow::Result;
use std::sync::Arc;

use crate::chat::{ChatController, ChatRepl};
use crate::config::{
    ConfigManager, ResolveOptions, ResolvedConfig, resolve_config, warn_if_missing_api_key,
};
use crate::reply::{GeminiModel, ResponseClient};
use crate::session::Session;

pub struct ChatOptions {
    pub lang: Option<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let config = load_config(&options)?;
    warn_if_missing_api_key(&config);

    tracing::info!(
        model = %config.model,
        endpoint = %config.endpoint,
        language = %config.language,
        "starting chat"
    );

    let mut repl = ChatRepl::new(build_controller(config));
    repl.run().await
}

fn load_config(options: &ChatOptions) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;

    let resolve_options = ResolveOptions {
        language: options.lang.clone(),
        model: options.model.clone(),
        endpoint: options.endpoint.clone(),
    };
    resolve_config(&resolve_options, &file_config)
}

/// Wires a Gemini-backed response client into a fresh session.
pub fn build_controller(config: ResolvedConfig) -> ChatController {
    let model = GeminiModel::new(config.endpoint, config.model, config.api_key);
    let client = ResponseClient::new(Arc::new(model));
    ChatController::new(Session::new(config.language), client)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_build_controller_uses_config() {
        let config = ResolvedConfig {
            language: Language::Bengali,
            model: "gemini-1.5-flash".to_string(),
            endpoint: "http://127.0.0.1:1".to_string(),
            api_key: None,
            api_key_env: "GEMINI_API_KEY".to_string(),
        };

        let controller = build_controller(config);

        assert_eq!(controller.session().language(), Language::Bengali);
        assert!(controller.session().is_name_gate_open());
        assert_eq!(controller.client().model_name(), "gemini-1.5-flash");
    }

    #[tokio::test]
    async fn test_missing_key_replies_with_apology() {
        let config = ResolvedConfig {
            language: Language::English,
            model: "gemini-pro".to_string(),
            endpoint: "http://127.0.0.1:1".to_string(),
            api_key: None,
            api_key_env: "GEMINI_API_KEY".to_string(),
        };

        let mut controller = build_controller(config);
        controller.submit_name("Alice");
        controller.send_text("hello").await.unwrap();

        assert_eq!(
            controller.session().messages()[1].text(),
            Language::English.strings().model_apology
        );
    }
}
