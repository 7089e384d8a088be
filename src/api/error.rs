use thiserror::Error;

/// Failures surfaced by the fetch client.
///
/// Detail strings are diagnostics for the logs; the user only ever sees
/// the fixed messages the session attaches to its Error phase.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Network failure or non-success HTTP status on a search fetch
    #[error("request failed: {0}")]
    Transport(String),

    /// Search payload lacks a usable image URL
    #[error("response missing expected fields: {0}")]
    MalformedResponse(String),

    /// Translation request failed or its payload lacks the translated text
    #[error("translation failed: {0}")]
    Translation(String),
}
