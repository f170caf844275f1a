use thiserror::Error;

/// Failure while invoking the hosted model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("failed to decode model response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("prompt was blocked: {0}")]
    Blocked(String),

    #[error("model returned no text")]
    EmptyResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let e = ModelError::Status {
            status: 429,
            message: "RESOURCE_EXHAUSTED: quota".into(),
        };
        let text = e.to_string();
        assert!(text.contains("429"));
        assert!(text.contains("quota"));
    }

    #[test]
    fn test_decode_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e: ModelError = json_err.into();
        assert!(e.to_string().starts_with("failed to decode"));
    }

    #[test]
    fn test_blocked_error_display() {
        let e = ModelError::Blocked("SAFETY".into());
        assert!(e.to_string().contains("SAFETY"));
    }
}
