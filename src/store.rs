//! Process-wide agent configuration.
//!
//! The record is created with defaults on first access and lives until the
//! process exits. Every caller sees the same instance, so a change made through
//! one guard is visible to every later `get()`.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use tracing::debug;

use crate::config::AgentConfig;

static AGENT_CONFIG: OnceLock<Mutex<AgentConfig>> = OnceLock::new();

/// The shared record. Initialised with `AgentConfig::default()` on first call.
pub fn get() -> &'static Mutex<AgentConfig> {
    AGENT_CONFIG.get_or_init(|| {
        debug!("initialising agent config with defaults");
        Mutex::new(AgentConfig::default())
    })
}

/// Locks the shared record for reading or in-place mutation.
///
/// A panic in another holder does not make the record unusable; it is plain
/// data, so the poisoned guard is recovered.
pub fn lock() -> MutexGuard<'static, AgentConfig> {
    get().lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn snapshot() -> AgentConfig {
    lock().clone()
}

pub fn replace(config: AgentConfig) {
    *lock() = config;
}
