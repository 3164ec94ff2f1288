use agent_config::{ensure_addresses, store, validate, AgentConfig};
use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::params::Params;

/// Seeds the shared record, applies overrides and the address fallback, then
/// validates. Returns a copy of the record that is now in effect.
pub fn run(params: &Params) -> Result<AgentConfig> {
    if let Some(path) = &params.config {
        let loaded = AgentConfig::load_or_default(Some(path))
            .with_context(|| format!("loading {:?}", path))?;
        debug!(path = %path.display(), "loaded agent config file");
        store::replace(loaded);
    }

    let mut cfg = store::lock();
    cfg.protocols = params.protocols.clone();
    if !params.addresses.is_empty() {
        cfg.addresses = params.addresses.clone();
    }
    ensure_addresses(&mut cfg);

    validate(&cfg).context("agent config rejected")?;

    info!(protocols = ?cfg.protocols, addresses = ?cfg.addresses, "agent configuration ready");
    Ok(cfg.clone())
}
