use tracing::debug;

use crate::config::{AgentConfig, DEFAULT_BROKER_ADDRESS, MAX_ADDRESSES, MAX_ID_LEN, MAX_SECRET_LEN};
use crate::error::{ConfigError, Result};
use crate::protocol::ALLOWED_PROTOCOLS;

/// Falls back to [`DEFAULT_BROKER_ADDRESS`] when no address is configured.
/// A non-empty list is left untouched.
pub fn ensure_addresses(config: &mut AgentConfig) {
    if config.addresses.is_empty() {
        debug!(address = DEFAULT_BROKER_ADDRESS, "no broker address configured, using default");
        config.addresses = vec![DEFAULT_BROKER_ADDRESS.to_string()];
    }
}

/// Checks every protocol against [`ALLOWED_PROTOCOLS`] in order and reports the
/// first one that is not allowed. An empty list passes.
pub fn validate_protocols(config: &AgentConfig) -> Result<()> {
    match config
        .protocols
        .iter()
        .find(|p| !ALLOWED_PROTOCOLS.contains(&p.as_str()))
    {
        Some(bad) => Err(ConfigError::InvalidProtocol(bad.clone())),
        None => Ok(()),
    }
}

pub fn validate_limits(config: &AgentConfig) -> Result<()> {
    if config.addresses.len() > MAX_ADDRESSES {
        return Err(ConfigError::TooManyAddresses {
            count: config.addresses.len(),
            max: MAX_ADDRESSES,
        });
    }
    if config.id.chars().count() > MAX_ID_LEN {
        return Err(ConfigError::FieldTooLong {
            field: "id",
            max: MAX_ID_LEN,
        });
    }
    if config.secret.chars().count() > MAX_SECRET_LEN {
        return Err(ConfigError::FieldTooLong {
            field: "secret",
            max: MAX_SECRET_LEN,
        });
    }
    Ok(())
}

/// Protocols first, then limits.
pub fn validate(config: &AgentConfig) -> Result<()> {
    validate_protocols(config)?;
    validate_limits(config)
}
