//! Configuration loading.
//!
//! A runtime configuration file declares logging, the memory directory and
//! the agents to create at startup. See [`ar_protocol::RuntimeConfig`].

pub mod error;
pub mod loader;

pub use error::{ConfigError, ConfigResult};
pub use loader::{load_config, parse_config_str, ConfigFormat};
