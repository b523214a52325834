// Topology (discovered links) endpoint

use tracing::debug;

use crate::client::{Client, ensure_ok};
use crate::error::Error;
use crate::models::{ApiLink, LinksResponse};

impl Client {
    /// List all discovered links.
    ///
    /// `GET /api/v0/resources/links`
    ///
    /// Returns the link rows in response order together with the count the
    /// instance reported in the envelope. No ordering is applied.
    pub async fn list_links(&self) -> Result<(Vec<ApiLink>, u64), Error> {
        let url = self.api_url("resources/links")?;
        let resp: LinksResponse = self.get(url, &[]).await?;
        ensure_ok("links", &resp)?;
        debug!(count = resp.count, "fetched link topology");
        Ok((resp.links, resp.count))
    }
}
