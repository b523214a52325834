// LibreNMS v0 API response types
//
// Every endpoint wraps its payload in a `{ status, count, <array> }` object
// where the array key is named after the resource. The envelopes are modeled
// per endpoint; the shared `status`/`message` fields are exposed through the
// `Envelope` trait so status checking lives in one place.

use serde::{Deserialize, Serialize};

// ── Response envelopes ───────────────────────────────────────────────

/// Shared view over the envelope's `status` and `message` fields.
///
/// `status == "ok"` means success; anything else is an API-level failure
/// and `message` (when present) carries the server's explanation.
pub(crate) trait Envelope {
    fn status(&self) -> &str;
    fn message(&self) -> Option<&str>;
}

macro_rules! impl_envelope {
    ($ty:ty) => {
        impl Envelope for $ty {
            fn status(&self) -> &str {
                &self.status
            }
            fn message(&self) -> Option<&str> {
                self.message.as_deref()
            }
        }
    };
}

/// Envelope for `GET /api/v0/devices/`.
#[derive(Debug, Deserialize)]
pub struct DevicesResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub devices: Vec<ApiDevice>,
}

/// Envelope for `GET /api/v0/resources/links`.
#[derive(Debug, Deserialize)]
pub struct LinksResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub links: Vec<ApiLink>,
}

/// Envelope for `GET /api/v0/ports`.
#[derive(Debug, Deserialize)]
pub struct PortsResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub ports: Vec<ApiPort>,
}

impl_envelope!(DevicesResponse);
impl_envelope!(LinksResponse);
impl_envelope!(PortsResponse);

// ── Rows ─────────────────────────────────────────────────────────────

/// A monitored device from the inventory endpoint.
///
/// The instance returns far more columns per device; only the two this
/// crate's consumers need are modeled, the rest are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiDevice {
    pub device_id: i64,
    pub hostname: String,
}

/// A discovered adjacency between two ports, from the topology endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiLink {
    pub local_device_id: i64,
    pub remote_device_id: i64,
    pub local_port_id: i64,
    pub remote_port_id: i64,
    /// Discovery protocol that observed the adjacency ("lldp", "cdp", ...).
    pub protocol: String,
}

/// A network interface from the ports endpoint, restricted to the columns
/// requested via the `columns` query parameter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiPort {
    pub device_id: i64,
    pub port_id: i64,
    #[serde(rename = "ifName")]
    pub ifname: String,
}
