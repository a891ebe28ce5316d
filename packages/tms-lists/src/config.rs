//! Client configuration.

use serde::Deserialize;
use std::time::Duration;

use crate::catalog::ListCatalog;
use crate::Error;

/// Configuration for the list client.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "defaults::api_url")]
    pub api_url: String,

    #[serde(default = "defaults::request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "defaults::connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default)]
    pub lists: ListCatalog,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: defaults::api_url(),
            request_timeout_secs: defaults::request_timeout_secs(),
            connect_timeout_secs: defaults::connect_timeout_secs(),
            lists: ListCatalog::default(),
        }
    }
}

impl Config {
    /// Load from an optional `tms.*` file, then `TMS_*` env vars.
    /// Nested keys use `__`, e.g. `TMS_LISTS__COURSES`.
    pub fn load() -> Result<Self, Error> {
        let config: Config = ::config::Config::builder()
            .add_source(::config::File::with_name("tms").required(false))
            .add_source(
                ::config::Environment::with_prefix("TMS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| Error::Config(format!("failed to load configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        let url = reqwest::Url::parse(&self.api_url)
            .map_err(|e| Error::Config(format!("invalid api_url `{}`: {e}", self.api_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "api_url must be http(s), got `{}`",
                url.scheme()
            )));
        }
        if self.request_timeout_secs == 0 || self.connect_timeout_secs == 0 {
            return Err(Error::Config("timeouts must be non-zero".into()));
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

mod defaults {
    pub fn api_url() -> String {
        "http://localhost:8080/_api/".into()
    }

    pub fn request_timeout_secs() -> u64 {
        30
    }

    pub fn connect_timeout_secs() -> u64 {
        10
    }
}
