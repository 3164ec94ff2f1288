pub mod config;
pub mod error;
pub mod protocol;
pub mod store;
pub mod validate;

pub use config::{AgentConfig, DEFAULT_BROKER_ADDRESS, MAX_ADDRESSES, MAX_ID_LEN, MAX_SECRET_LEN};
pub use error::{ConfigError, Result};
pub use protocol::{Protocol, ALLOWED_PROTOCOLS};
pub use validate::{ensure_addresses, validate, validate_limits, validate_protocols};
