//! Upstream source error types.

/// Errors from fetching live quotes.
///
/// None of these reach the display: the fetch boundary turns them into an
/// unavailable quote and logs them.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// The response parsed but carried no usable value
    #[error("response contained no quote")]
    EmptyResponse,

    /// The source is switched off or has nothing to serve
    #[error("source unavailable: {0}")]
    Unavailable(String),
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_ref()
        .map(|b| format!(" (body: {b})"))
        .unwrap_or_default()
}
