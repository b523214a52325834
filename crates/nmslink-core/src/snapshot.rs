// Snapshot fetch orchestration
//
// One run's inventory: devices, links, ports, pulled sequentially in that
// order. No fetch overlaps another, and a failure at any step aborts the
// run before the join stage sees anything.

use tracing::debug;

use nmslink_api::Client;

use crate::error::CoreError;
use crate::model::{Device, Link, Port};
use crate::report::Sink;

/// A single run's inventory tables, fetched once and then consumed by the
/// join stage.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Devices, sorted ascending by hostname.
    pub devices: Vec<Device>,
    /// Links, in API response order.
    pub links: Vec<Link>,
    /// Ports, in API response order.
    pub ports: Vec<Port>,
}

impl Snapshot {
    /// Fetch all three tables, emitting a success line with the reported
    /// count after each one.
    pub async fn fetch(client: &Client, sink: &mut dyn Sink) -> Result<Self, CoreError> {
        let (devices, count) = client
            .list_devices()
            .await
            .map_err(|source| CoreError::Fetch {
                resource: "devices",
                source,
            })?;
        sink.success(&format!("Fetched {count} devices"));
        let mut devices: Vec<Device> = devices.into_iter().map(Device::from).collect();
        devices.sort_by(|a, b| a.hostname.cmp(&b.hostname));

        let (links, count) = client.list_links().await.map_err(|source| CoreError::Fetch {
            resource: "links",
            source,
        })?;
        sink.success(&format!("Fetched {count} links"));
        let links: Vec<Link> = links.into_iter().map(Link::from).collect();

        let (ports, count) = client.list_ports().await.map_err(|source| CoreError::Fetch {
            resource: "ports",
            source,
        })?;
        sink.success(&format!("Fetched {count} ports"));
        let ports: Vec<Port> = ports.into_iter().map(Port::from).collect();

        debug!(
            devices = devices.len(),
            links = links.len(),
            ports = ports.len(),
            "snapshot complete"
        );

        Ok(Self {
            devices,
            links,
            ports,
        })
    }
}
