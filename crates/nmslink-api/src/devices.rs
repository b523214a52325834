// Device inventory endpoint

use tracing::debug;

use crate::client::{Client, ensure_ok};
use crate::error::Error;
use crate::models::{ApiDevice, DevicesResponse};

impl Client {
    /// List all monitored devices.
    ///
    /// `GET /api/v0/devices/`
    ///
    /// Returns the device rows in response order together with the count the
    /// instance reported in the envelope.
    pub async fn list_devices(&self) -> Result<(Vec<ApiDevice>, u64), Error> {
        let url = self.api_url("devices/")?;
        let resp: DevicesResponse = self.get(url, &[]).await?;
        ensure_ok("devices", &resp)?;
        debug!(count = resp.count, "fetched device inventory");
        Ok((resp.devices, resp.count))
    }
}
