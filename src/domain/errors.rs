//! Domain errors for the contributor dashboard client.

use thiserror::Error;

/// Errors surfaced by the API wrappers and application services.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or HTTP-layer failure. When the backend supplied a JSON
    /// body with an `error` field, that message is carried verbatim.
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend does not know the requested entity.
    #[error("not found: {0}")]
    NotFound(String),

    /// A local precondition was violated: the caller asked for state that
    /// only a successful fetch populates.
    #[error("{entity} {id} has not been fetched")]
    NotFetched {
        /// Kind of entity the caller asked about.
        entity: &'static str,
        /// Identifier the caller supplied.
        id: String,
    },

    /// The backend answered with a body the client cannot decode, or a
    /// page that contradicts its own pagination flags.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A form or parameter failed validation; no request was issued.
    #[error("validation failed: {0}")]
    Validation(String),
}

/// Convenience alias used throughout the crate.
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Map a non-success HTTP status and its raw body to an error variant.
    ///
    /// The backend reports failures as `{"error": "<message>"}`; when that
    /// shape is present the message is extracted, otherwise the raw body
    /// (or the status line, for an empty body) is used.
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let message = extract_error_message(body).unwrap_or_else(|| {
            if body.is_empty() {
                status.to_string()
            } else {
                body.to_string()
            }
        });
        if status == reqwest::StatusCode::NOT_FOUND {
            Self::NotFound(message)
        } else {
            Self::Transport(message)
        }
    }
}

/// Pull the `error` field out of a JSON error body, if there is one.
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("error")?.as_str().map(str::to_string)
}
