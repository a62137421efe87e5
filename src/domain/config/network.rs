//! Network profile models.

use std::fmt;
use std::net::Ipv6Addr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8545;
/// Serialized form of [`NetworkId::Any`].
pub const NETWORK_ID_WILDCARD: &str = "*";

/// Chain identifier a profile accepts.
///
/// On disk this stays what the toolchain writes: `"*"` for any chain,
/// otherwise an integer (numeric strings are accepted too).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawNetworkId", into = "RawNetworkId")]
pub enum NetworkId {
    Any,
    Id(u64),
}

impl NetworkId {
    pub fn accepts(&self, chain_id: u64) -> bool {
        match self {
            NetworkId::Any => true,
            NetworkId::Id(id) => *id == chain_id,
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkId::Any => f.write_str(NETWORK_ID_WILDCARD),
            NetworkId::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for NetworkId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == NETWORK_ID_WILDCARD {
            return Ok(NetworkId::Any);
        }
        trimmed.parse::<u64>().map(NetworkId::Id).map_err(|_| AppError::ParseError {
            what: "network_id".to_string(),
            details: format!("expected \"{}\" or an integer, got '{}'", NETWORK_ID_WILDCARD, s),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawNetworkId {
    Number(u64),
    Text(String),
}

impl TryFrom<RawNetworkId> for NetworkId {
    type Error = AppError;

    fn try_from(raw: RawNetworkId) -> Result<Self, Self::Error> {
        match raw {
            RawNetworkId::Number(id) => Ok(NetworkId::Id(id)),
            RawNetworkId::Text(text) => text.parse(),
        }
    }
}

impl From<NetworkId> for RawNetworkId {
    fn from(id: NetworkId) -> Self {
        match id {
            NetworkId::Any => RawNetworkId::Text(NETWORK_ID_WILDCARD.to_string()),
            NetworkId::Id(id) => RawNetworkId::Number(id),
        }
    }
}

/// Connection parameters for one development node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkProfile {
    pub host: String,
    pub port: u16,
    pub network_id: NetworkId,
    /// Gas limit for deployments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<u64>,
    /// Gas price in wei.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<u64>,
    /// Sender account address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Connect over websockets instead of HTTP.
    #[serde(default, skip_serializing_if = "is_false")]
    pub websockets: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl NetworkProfile {
    pub fn new(host: impl Into<String>, port: u16, network_id: NetworkId) -> Self {
        Self {
            host: host.into(),
            port,
            network_id,
            gas: None,
            gas_price: None,
            from: None,
            websockets: false,
        }
    }

    /// `localhost:8545`, any chain.
    pub fn local() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT, NetworkId::Any)
    }

    pub fn scheme(&self) -> &'static str {
        if self.websockets { "ws" } else { "http" }
    }

    /// RPC endpoint URL for this profile.
    ///
    /// `host` must be a bare host name or IP address; anything that would
    /// add a path, credentials, query or port to the URL is rejected.
    pub fn endpoint(&self) -> Result<Url, AppError> {
        let host = self.host.trim();
        let raw = format!("{}://{}:{}", self.scheme(), host, self.port);
        let invalid =
            |details: String| AppError::InvalidEndpoint { endpoint: raw.clone(), details };

        let host = if host.parse::<Ipv6Addr>().is_ok() {
            format!("[{}]", host)
        } else if host.starts_with('[') && host.ends_with(']') {
            host.to_string()
        } else if host.contains(':') {
            return Err(invalid("host must not carry a port".to_string()));
        } else {
            host.to_string()
        };

        let mut url = Url::parse(&format!("{}://{}", self.scheme(), DEFAULT_HOST))
            .map_err(|e| invalid(e.to_string()))?;
        url.set_host(Some(&host)).map_err(|e| invalid(e.to_string()))?;
        url.set_port(Some(self.port)).map_err(|()| invalid("port cannot be set".to_string()))?;
        Ok(url)
    }
}
