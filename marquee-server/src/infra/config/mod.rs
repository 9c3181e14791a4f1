//! Layered server configuration: `.env`, an optional TOML file, environment
//! overrides, then CLI flags applied by the binary.

pub mod loader;
pub mod models;
pub mod sources;
pub mod warnings;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader};
pub use models::{Config, ConfigMetadata, CorsConfig, DataConfig, ServerConfig};
pub use warnings::{ConfigWarning, ConfigWarnings};
