use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::protocol::Protocol;

/// Broker endpoint used when nothing else is configured.
pub const DEFAULT_BROKER_ADDRESS: &str = "broker.example.com:9443";

pub const MAX_ADDRESSES: usize = 100;
pub const MAX_ID_LEN: usize = 100;
pub const MAX_SECRET_LEN: usize = 1000;

/// Settings the agent uses to reach its broker.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Transports to try, in order. Each entry must be `udp` or `tcp`.
    pub protocols: Vec<String>,

    /// Broker endpoints as `host:port`, highest priority first.
    pub addresses: Vec<String>,

    pub id: String,

    pub secret: String,
}

impl fmt::Debug for AgentConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentConfig")
            .field("protocols", &self.protocols)
            .field("addresses", &self.addresses)
            .field("id", &self.id)
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl AgentConfig {
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => Self::read_from_file(p),
            None => Ok(Self::default()),
        }
    }

    fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let cfg: AgentConfig = if is_json {
            serde_json::from_str(&raw)?
        } else {
            toml::from_str(&raw)?
        };
        Ok(cfg)
    }

    /// Parsed transports in configured order. Stops at the first unknown entry.
    pub fn transports(&self) -> Result<Vec<Protocol>> {
        self.protocols.iter().map(|p| p.parse::<Protocol>()).collect()
    }

    /// Copy safe to print: the secret is blanked out.
    pub fn redacted(&self) -> Self {
        let mut out = self.clone();
        if !out.secret.is_empty() {
            out.secret = "<redacted>".to_string();
        }
        out
    }
}
