use std::env;
use url::Url;
use crate::error::{Error, Result};

pub const DEFAULT_ENDPOINT: &str = "http://vtechworks.lib.vt.edu/oai/request";
pub const DEFAULT_METADATA_PREFIX: &str = "dim";

/// Where and how to harvest. Built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    pub endpoint: Url,
    pub metadata_prefix: String,
    pub user_agent: String,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        HarvestConfig {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid url"),
            metadata_prefix: String::from(DEFAULT_METADATA_PREFIX),
            user_agent: format!("harvesting/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HarvestConfig {
    pub fn new(endpoint: &str) -> Result<Self> {
        Ok(HarvestConfig {
            endpoint: Url::parse(endpoint)?,
            ..Self::default()
        })
    }

    pub fn with_metadata_prefix(mut self, prefix: &str) -> Result<Self> {
        if prefix.trim().is_empty() {
            return Err(Error::Config {
                message: String::from("metadata prefix must not be empty"),
            });
        }
        self.metadata_prefix = String::from(prefix.trim());
        Ok(self)
    }

    /// Reads `OAI_ENDPOINT` and `OAI_METADATA_PREFIX`, falling back to the defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = match lookup("OAI_ENDPOINT") {
            Some(endpoint) => Self::new(&endpoint)?,
            None => Self::default(),
        };
        match lookup("OAI_METADATA_PREFIX") {
            Some(prefix) => config.with_metadata_prefix(&prefix),
            None => Ok(config),
        }
    }
}
