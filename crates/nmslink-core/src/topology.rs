// Link-naming pipeline
//
// Port ⋈ Device attaches hostnames (inner join: ports on unknown devices
// are dropped), then every link resolves its two endpoints against the
// annotated port table with left joins, so an unresolved endpoint nulls the
// name fields instead of dropping the link.

use crate::join::{inner_join, left_join};
use crate::model::{Device, HostPort, Link, NamedLink, Port};

/// Attach the owning device's hostname to every port.
///
/// Inner join on `device_id`: a port whose device is missing from the
/// snapshot does not appear in the result.
pub fn annotate_ports(ports: &[Port], devices: &[Device]) -> Vec<HostPort> {
    inner_join(
        ports,
        devices,
        |p| p.device_id,
        |d| d.device_id,
        |p, d| HostPort {
            device_id: p.device_id,
            port_id: p.port_id,
            ifname: p.ifname.clone(),
            hostname: d.hostname.clone(),
        },
    )
}

/// One resolved endpoint, carried between the two left-join stages.
#[derive(Debug, Clone)]
struct Endpoint {
    hostname: String,
    ifname: String,
}

impl Endpoint {
    fn of(port: &HostPort) -> Self {
        Self {
            hostname: port.hostname.clone(),
            ifname: port.ifname.clone(),
        }
    }
}

/// Resolve both endpoints of every link against the annotated port table.
///
/// Two left joins keyed on port id: first the local endpoint, then the
/// remote one. Links keep their row even when neither endpoint resolves.
/// The link's own device ids are not cross-checked against the devices the
/// resolved ports belong to.
pub fn name_links(links: &[Link], ports: &[HostPort]) -> Vec<NamedLink> {
    let with_local = left_join(
        links,
        ports,
        |l| l.local_port_id,
        |p| p.port_id,
        |link, port| (link.clone(), port.map(Endpoint::of)),
    );

    left_join(
        &with_local,
        ports,
        |(link, _)| link.remote_port_id,
        |p| p.port_id,
        |(link, local), port| NamedLink {
            local_hostname: local.as_ref().map(|e| e.hostname.clone()),
            local_ifname: local.as_ref().map(|e| e.ifname.clone()),
            remote_hostname: port.map(|p| p.hostname.clone()),
            remote_ifname: port.map(|p| p.ifname.clone()),
            protocol: link.protocol.clone(),
        },
    )
}
