//! Clap derive structure for the `nmslink` CLI.

use clap::Parser;

/// nmslink -- LibreNMS link topology as CSV
#[derive(Debug, Parser)]
#[command(
    name = "nmslink",
    version,
    about = "Map LibreNMS links to endpoint hostnames and interface names",
    long_about = "Fetches the device, link, and port inventories from a LibreNMS\n\
        instance and prints one CSV row per discovered link, with both\n\
        endpoints resolved to hostname and interface name.\n\n\
        Requires LIBRENMS_TOKEN and LIBRENMS_URL, read from the process\n\
        environment or a .env file in the working directory."
)]
pub struct Cli {
    /// Produce debugging output
    #[arg(long)]
    pub debug: bool,
}
