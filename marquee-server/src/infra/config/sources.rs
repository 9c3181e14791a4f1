use serde::Deserialize;
use std::path::PathBuf;

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub data: FileDataConfig,
    #[serde(default)]
    pub cors: FileCorsConfig,
    pub dev_mode: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct FileServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct FileDataConfig {
    pub movies: Option<PathBuf>,
    pub reviews: Option<PathBuf>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct FileCorsConfig {
    pub allowed_origins: Option<Vec<String>>,
}

/// Values read from the process environment. Everything stays raw text
/// here; the loader validates and reports bad values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub server_host: Option<String>,
    pub server_port: Option<String>,
    pub movies_path: Option<PathBuf>,
    pub reviews_path: Option<PathBuf>,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub dev_mode: Option<String>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty =
            |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            config_path: non_empty("MARQUEE_CONFIG").map(PathBuf::from),
            server_host: non_empty("SERVER_HOST"),
            server_port: non_empty("SERVER_PORT"),
            movies_path: non_empty("MOVIES_DATA_PATH").map(PathBuf::from),
            reviews_path: non_empty("REVIEWS_DATA_PATH").map(PathBuf::from),
            cors_allowed_origins: non_empty("CORS_ALLOWED_ORIGINS")
                .map(|raw| parse_csv(&raw)),
            dev_mode: non_empty("DEV_MODE"),
        }
    }
}

pub(crate) fn parse_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
