use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },
    #[error("server responded with HTTP {status}: {excerpt}")]
    Status { status: u16, excerpt: String },
    #[error("response was not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unexpected response shape: {0}")]
    Shape(String),
}

impl FetchError {
    pub(super) fn status(status: u16, body: &str) -> Self {
        const EXCERPT_CHARS: usize = 160;

        let trimmed = body.trim();
        let excerpt = if trimmed.is_empty() {
            "empty body".to_owned()
        } else if trimmed.chars().count() > EXCERPT_CHARS {
            let head = trimmed.chars().take(EXCERPT_CHARS).collect::<String>();
            format!("{head}...")
        } else {
            trimmed.to_owned()
        };

        Self::Status { status, excerpt }
    }
}
