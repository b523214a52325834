mod cli;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use url::Url;

use nmslink_api::{Client, TransportConfig};
use nmslink_core::{Sink, Snapshot, topology};

use crate::cli::Cli;
use crate::error::CliError;
use crate::output::ConsoleSink;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.debug);

    if let Err(err) = run().await {
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(1);
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), CliError> {
    let mut sink = ConsoleSink::stdout();
    sink.rule("LibreNMS link map");

    let settings = config::load()?;
    debug!(url = %settings.url, "configuration loaded");
    sink.line(&format!("Loaded LibreNMS URL: {}", settings.url));

    let base_url: Url = settings.url.parse().map_err(|_| CliError::InvalidUrl {
        url: settings.url.clone(),
    })?;
    let client = Client::new(base_url, &settings.token, &TransportConfig::default())?;

    let snapshot = Snapshot::fetch(&client, &mut sink).await?;

    let host_ports = topology::annotate_ports(&snapshot.ports, &snapshot.devices);
    let named = topology::name_links(&snapshot.links, &host_ports);

    sink.line(output::render_csv(&named)?.trim_end());
    Ok(())
}
