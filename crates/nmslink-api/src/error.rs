use thiserror::Error;

/// Top-level error type for the `nmslink-api` crate.
///
/// Covers every failure mode of a LibreNMS API call: transport, URL
/// construction, token rejection, envelope-level failure, and JSON decoding.
/// `nmslink-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Token rejected by the instance (HTTP 401/403).
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── API ─────────────────────────────────────────────────────────
    /// The response envelope reported a non-"ok" status.
    #[error("LibreNMS API error for {resource}: {message}")]
    Api { resource: &'static str, message: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this error came from a non-"ok" envelope status,
    /// as opposed to a transport- or decode-level failure.
    pub fn is_api_failure(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}
