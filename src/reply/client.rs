use std::sync::Arc;

use super::GenerativeModel;
use crate::i18n::Language;

/// Embeds the raw user text, unchanged, in the language's prompt template.
#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_prompt(user_text: &str, language: Language) -> String {
    // {message} is a placeholder for string replacement, not a format argument
    language
        .strings()
        .prompt_template
        .replace("{message}", user_text)
}

/// Produces an assistant reply for a user message.
///
/// Model failures never reach the caller: they are logged and replaced by the
/// localized apology for the requested language.
#[derive(Clone)]
pub struct ResponseClient {
    model: Arc<dyn GenerativeModel>,
}

impl ResponseClient {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub async fn get_reply(&self, user_text: &str, language: Language) -> String {
        let prompt = build_prompt(user_text, language);

        match self.model.generate(&prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(
                    model = %self.model.name(),
                    %language,
                    error = %e,
                    "model invocation failed, using fallback reply"
                );
                language.strings().model_apology.to_string()
            }
        }
    }
}
