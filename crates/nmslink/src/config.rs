//! Settings loading: local `.env` file plus process environment.
//!
//! `dotenvy` merges the `.env` file into the process environment (variables
//! already set win), then figment extracts the two required keys. There are
//! no defaults: a missing key aborts the run before any network call.

use figment::{Figment, providers::Env};
use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

/// The two required settings.
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// API token, sent as the `X-Auth-Token` header on every request.
    #[serde(rename = "librenms_token")]
    pub token: SecretString,

    /// Instance base URL without the `/api/v0` suffix.
    #[serde(rename = "librenms_url")]
    pub url: String,
}

/// Load settings. A missing `.env` file is fine — the keys may come from
/// the environment directly — but a present, unreadable one is an error.
pub fn load() -> Result<Settings, ConfigError> {
    match dotenvy::dotenv() {
        Ok(_) => {}
        Err(err) if err.not_found() => {}
        Err(err) => return Err(err.into()),
    }

    let settings = Figment::new()
        .merge(Env::raw().only(&["LIBRENMS_TOKEN", "LIBRENMS_URL"]))
        .extract()?;
    Ok(settings)
}
