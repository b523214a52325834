//! CLI error type with miette diagnostics.
//!
//! Every fatal error funnels into [`CliError`]; `main` prints the
//! diagnostic to stderr and exits 1. Typed results decide the exit code —
//! there is no `process::exit` inside the pipeline.

use miette::Diagnostic;
use thiserror::Error;

use nmslink_core::CoreError;

use crate::config::ConfigError;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(
        code(nmslink::config),
        help(
            "Set LIBRENMS_TOKEN and LIBRENMS_URL in the environment or in a\n\
             .env file in the working directory."
        )
    )]
    Config(#[from] ConfigError),

    #[error("invalid LIBRENMS_URL: {url}")]
    #[diagnostic(
        code(nmslink::url),
        help("Use the instance root without a trailing API path, e.g. https://nms.example.net")
    )]
    InvalidUrl { url: String },

    // ── Client / fetch ───────────────────────────────────────────────
    #[error("failed to build the HTTP client: {0}")]
    #[diagnostic(code(nmslink::client))]
    Client(#[from] nmslink_api::Error),

    #[error(transparent)]
    #[diagnostic(
        code(nmslink::fetch),
        help("Check the instance URL and token; run with --debug for request logs.")
    )]
    Fetch(#[from] CoreError),

    // ── Output ───────────────────────────────────────────────────────
    #[error("failed to render CSV output: {0}")]
    #[diagnostic(code(nmslink::csv))]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
