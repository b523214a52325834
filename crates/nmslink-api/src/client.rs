// LibreNMS HTTP client
//
// Wraps `reqwest::Client` with v0 URL construction, authentication-header
// injection, and envelope decoding. The endpoint modules (devices, links,
// ports) are implemented as inherent methods in separate files to keep this
// module focused on transport mechanics.

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::Envelope;
use crate::transport::TransportConfig;

/// HTTP client for a LibreNMS instance's v0 REST API.
///
/// The API token travels as the `X-Auth-Token` default header on every
/// request. Endpoint methods decode the `{ status, count, <array> }`
/// envelope and surface a non-"ok" status as [`Error::Api`].
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
}

impl Client {
    /// Create a new client for the instance at `base_url`.
    ///
    /// `base_url` is the instance root without the `/api/v0` suffix
    /// (e.g. `https://nms.example.net`).
    pub fn new(
        base_url: Url,
        token: &SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut value =
            HeaderValue::from_str(token.expose_secret()).map_err(|_| Error::Authentication {
                message: "token contains characters not allowed in a header".into(),
            })?;
        value.set_sensitive(true);
        headers.insert("X-Auth-Token", value);

        let http = transport.build_client_with_headers(headers)?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    ///
    /// Use this when the caller already configured the client (tests mount
    /// the auth header themselves, or skip it entirely).
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The instance base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build a full URL for a v0 API path: `{base}/api/v0/{path}`.
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        let full = format!(
            "{}/api/v0/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path
        );
        Ok(Url::parse(&full)?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and decode the typed response envelope.
    ///
    /// Handles transport and decoding only; envelope status is checked by
    /// the endpoint methods via [`ensure_ok`].
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<T, Error> {
        debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(Error::Authentication {
                message: "token rejected by the instance".into(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}

/// Check an envelope's `status` field, mapping non-"ok" to [`Error::Api`].
pub(crate) fn ensure_ok<E: Envelope>(resource: &'static str, envelope: &E) -> Result<(), Error> {
    match envelope.status() {
        "ok" => Ok(()),
        other => Err(Error::Api {
            resource,
            message: envelope
                .message()
                .map_or_else(|| format!("status={other}"), ToOwned::to_owned),
        }),
    }
}
