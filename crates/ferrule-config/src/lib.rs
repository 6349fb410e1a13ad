//! # ferrule-config
//!
//! Reads flat `KEY = value` configuration files.
//!
//! ```
//! use ferrule_config::Config;
//!
//! let config = Config::parse("APP_NAME = ferrule\n# comment\nPORT=8080\n");
//! assert_eq!(config.get("APP_NAME"), "ferrule");
//! assert_eq!(config.get_parsed::<u16>("PORT").unwrap(), Some(8080));
//! assert_eq!(config.get_or("LOG_LEVEL", "info"), "info");
//! ```

pub mod config;
pub mod error;
pub mod sources;

pub use config::Config;
pub use error::{ConfigError, ConfigResult};
pub use sources::ConfigSource;
