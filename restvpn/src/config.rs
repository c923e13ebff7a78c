use std::env::var;

use log::debug;

pub const ADDR_VAR: &str = "RESTVPN_ADDR";
pub const KEY_VAR: &str = "RESTVPN_KEY";

pub const DEFAULT_ADDR: &str = "http://localhost:5000";

/// Where the REST service lives and how to authenticate against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Base address, used verbatim as the URL prefix.
    pub addr: String,
    /// Sent as `X-Api-Key` when present. Never empty.
    pub api_key: Option<String>,
}

impl Configuration {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let addr = lookup(ADDR_VAR)
            .filter(|addr| !addr.is_empty())
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let api_key = lookup(KEY_VAR).filter(|key| !key.is_empty());

        Configuration { addr, api_key }
    }
}

pub fn load_config() -> Configuration {
    let config = Configuration::from_lookup(|name| var(name).ok());

    if config.api_key.is_none() {
        debug!("{KEY_VAR} is not set, requests go out unauthenticated");
    }

    config
}
