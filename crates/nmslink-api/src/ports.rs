// Port inventory endpoint

use tracing::debug;

use crate::client::{Client, ensure_ok};
use crate::error::Error;
use crate::models::{ApiPort, PortsResponse};

/// Columns requested from the ports endpoint. Restricting the selection
/// keeps the response small on instances with tens of thousands of ports.
const PORT_COLUMNS: &str = "device_id,port_id,ifName";

impl Client {
    /// List all ports, restricted to the id and interface-name columns.
    ///
    /// `GET /api/v0/ports?columns=device_id,port_id,ifName`
    ///
    /// Returns the port rows in response order together with the count the
    /// instance reported in the envelope.
    pub async fn list_ports(&self) -> Result<(Vec<ApiPort>, u64), Error> {
        let url = self.api_url("ports")?;
        let resp: PortsResponse = self.get(url, &[("columns", PORT_COLUMNS)]).await?;
        ensure_ok("ports", &resp)?;
        debug!(count = resp.count, "fetched port inventory");
        Ok((resp.ports, resp.count))
    }
}
