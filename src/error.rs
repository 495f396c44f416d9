use thiserror::Error;

/// Shown when a failure carries no message of its own.
pub const UNKNOWN_ERROR: &str = "Bilinmeyen hata";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Building the request failed before anything was sent.
    #[error("{0}")]
    Request(String),

    /// Network failure or non-2xx status, as reported by the transport.
    #[error("{0}")]
    Transport(String),

    /// The body did not match the expected shape.
    #[error("Yanıt çözümlenemedi: {0}")]
    Decode(String),

    #[error("Yapılandırma hatası: {0}")]
    Config(String),
}

impl ApiError {
    /// Text for the failure banner, falling back to [`UNKNOWN_ERROR`].
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            message
        }
    }
}

/// The error's own message followed by each distinct cause in its source
/// chain. reqwest keeps the browser's fetch message in the source only.
fn with_causes(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(with_causes(&err))
    }
}

impl From<ApiError> for String {
    fn from(err: ApiError) -> Self {
        err.user_message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_message_verbatim() {
        let err = ApiError::Transport("Network Error".to_string());
        assert_eq!(err.user_message(), "Network Error");
        assert_eq!(String::from(err), "Network Error");
    }

    #[test]
    fn test_empty_message_falls_back() {
        assert_eq!(ApiError::Transport(String::new()).user_message(), UNKNOWN_ERROR);
        assert_eq!(ApiError::Request("  ".to_string()).user_message(), UNKNOWN_ERROR);
    }

    #[derive(Debug, Error)]
    #[error("error sending request")]
    struct Outer(#[source] Inner);

    #[derive(Debug, Error)]
    #[error("Failed to fetch")]
    struct Inner;

    #[test]
    fn test_source_chain_appended() {
        assert_eq!(with_causes(&Outer(Inner)), "error sending request: Failed to fetch");
    }

    #[test]
    fn test_reqwest_error_keeps_cause() {
        let err = reqwest::Client::new()
            .get("not a url")
            .build()
            .expect_err("relative URL must fail");
        let message = ApiError::from(err).user_message();
        assert!(message.starts_with("builder error"), "got {}", message);
        assert!(message.contains("relative URL without a base"), "got {}", message);
    }

    #[test]
    fn test_decode_message_prefixed() {
        let err = ApiError::Decode("missing field `title`".to_string());
        assert!(err.user_message().contains("missing field `title`"));
    }
}
