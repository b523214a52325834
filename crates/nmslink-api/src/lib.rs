// nmslink-api: Async Rust client for the LibreNMS v0 REST API

pub mod client;
pub mod devices;
pub mod error;
pub mod links;
pub mod models;
pub mod ports;
pub mod transport;

pub use client::Client;
pub use error::Error;
pub use models::{ApiDevice, ApiLink, ApiPort};
pub use transport::{TlsMode, TransportConfig};
