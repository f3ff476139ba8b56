mod config;
mod error;

pub use config::{AppConfig, AppConfigExt, RunMode};
pub use error::ConfigError;
