//! Domain model and link-naming pipeline for nmslink.
//!
//! This crate owns everything between the raw API rows and the printed
//! table:
//!
//! - **[`model`]** — canonical domain types (`Device`, `Port`, `Link`,
//!   `HostPort`, `NamedLink`) converted from the wire types in
//!   `nmslink-api`.
//! - **[`join`]** — generic inner/left join primitives parameterized by
//!   key-extraction closures, replacing label-based dataframe merges with
//!   compile-time structure.
//! - **[`topology`]** — the pipeline proper: attach hostnames to ports,
//!   then resolve both endpoints of every link.
//! - **[`Snapshot`]** — one run's worth of fetched inventory, pulled
//!   sequentially from the API and discarded after printing.
//! - **[`Sink`]** — the output-sink abstraction threaded through the fetch
//!   stage instead of ambient console state.

pub mod error;
pub mod join;
pub mod model;
pub mod report;
pub mod snapshot;
pub mod topology;

pub use error::CoreError;
pub use model::{Device, HostPort, Link, NamedLink, Port};
pub use report::{MemorySink, Sink};
pub use snapshot::Snapshot;
