use std::{
    net::{IpAddr, SocketAddr},
    path::PathBuf,
};

use anyhow::Context;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MOVIES_PATH: &str = "data/movies.json";
pub const DEFAULT_REVIEWS_PATH: &str = "data/reviews.json";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub cors: CorsConfig,
    pub dev_mode: bool,
    pub metadata: ConfigMetadata,
}

impl Config {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self
            .server
            .host
            .parse()
            .with_context(|| {
                format!("invalid server host '{}'", self.server.host)
            })?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Locations of the static catalogue data.
#[derive(Debug, Clone)]
pub struct DataConfig {
    pub movies_path: PathBuf,
    pub reviews_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            movies_path: PathBuf::from(DEFAULT_MOVIES_PATH),
            reviews_path: PathBuf::from(DEFAULT_REVIEWS_PATH),
        }
    }
}

/// Allowed CORS origins. Ignored in dev mode, where CORS is permissive.
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
