//! Database connection settings for wirestamp services.
//!
//! These are plain data holders populated once from a TOML file and read
//! thereafter. The one behaviour with a contract is emission: whenever a
//! [`MySqlConfig`] is serialized or debug-printed, its password is replaced by
//! a masked form first. The masker is injectable via
//! [`MySqlConfig::masked_with`]; [`mask::password`] is the default.

mod config;
mod duration;
mod error;
pub mod mask;

pub use config::{
    Backend, ConnectionsConfig, DatabaseConfig, MaskedMySqlConfig, MySqlConfig, SqliteConfig,
};
pub use error::{ConfigError, ConfigResult};
