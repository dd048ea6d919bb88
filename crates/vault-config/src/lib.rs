//! vault-config
//!
//! Persistent preferences for vault hosts: wizard limits, currency, backend
//! location and where drafts live. Owns the Config model plus disk
//! persistence helpers.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;
