// Canonical domain types
//
// Wire rows from `nmslink-api` convert into these at the core boundary so
// the join engine never sees serde details. All types are plain data; a run
// fetches them once, joins them, prints, and drops them.

use serde::Serialize;

use nmslink_api::{ApiDevice, ApiLink, ApiPort};

/// A monitored network node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Device {
    pub device_id: i64,
    pub hostname: String,
}

/// A network interface belonging to exactly one device.
///
/// `device_id` is a foreign key into the same snapshot's device table; rows
/// referencing an unknown device are dropped by the hostname join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Port {
    pub device_id: i64,
    pub port_id: i64,
    pub ifname: String,
}

/// An observed adjacency between two ports, possibly on different devices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub local_device_id: i64,
    pub remote_device_id: i64,
    pub local_port_id: i64,
    pub remote_port_id: i64,
    pub protocol: String,
}

/// A port annotated with its owning device's hostname — the product of the
/// Port ⋈ Device inner join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostPort {
    pub device_id: i64,
    pub port_id: i64,
    pub ifname: String,
    pub hostname: String,
}

/// A link with both endpoints resolved to hostname and interface name.
///
/// Endpoint fields are `None` when the port id was not present in the
/// snapshot's annotated port table; the link row itself is never dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedLink {
    pub local_hostname: Option<String>,
    pub local_ifname: Option<String>,
    pub remote_hostname: Option<String>,
    pub remote_ifname: Option<String>,
    pub protocol: String,
}

// ── Wire → domain conversions ────────────────────────────────────────

impl From<ApiDevice> for Device {
    fn from(d: ApiDevice) -> Self {
        Self {
            device_id: d.device_id,
            hostname: d.hostname,
        }
    }
}

impl From<ApiPort> for Port {
    fn from(p: ApiPort) -> Self {
        Self {
            device_id: p.device_id,
            port_id: p.port_id,
            ifname: p.ifname,
        }
    }
}

impl From<ApiLink> for Link {
    fn from(l: ApiLink) -> Self {
        Self {
            local_device_id: l.local_device_id,
            remote_device_id: l.remote_device_id,
            local_port_id: l.local_port_id,
            remote_port_id: l.remote_port_id,
            protocol: l.protocol,
        }
    }
}
