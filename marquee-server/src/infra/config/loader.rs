use once_cell::sync::Lazy;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use super::{
    models::{Config, ConfigMetadata, CorsConfig, DataConfig, ServerConfig},
    sources::{EnvConfig, FileConfig, parse_bool},
    warnings::ConfigWarnings,
};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("marquee.toml"),
        PathBuf::from("config/marquee.toml"),
    ]
});

#[derive(Debug, Default, Clone)]
struct ConfigLoaderOptions {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

/// Effective configuration plus any warnings collected while resolving it.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to load .env file")]
    EnvFile(#[from] dotenvy::Error),
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = self.load_env_file()?;
        let env_config = EnvConfig::gather();
        self.load_with_env(env_config, env_file_loaded)
    }

    /// Resolve configuration against an explicit environment snapshot.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
        env_file_loaded: bool,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;
        compose_config(file_config, env, config_path, env_file_loaded)
    }

    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        let loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true),
            None => dotenvy::dotenv().map(|_| true),
        };

        match loaded {
            Ok(loaded) => Ok(loaded),
            Err(dotenvy::Error::Io(_)) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let explicit = self
            .options
            .config_path
            .clone()
            .or_else(|| env.config_path.clone());

        let path = match explicit {
            Some(path) if !path.exists() => {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            Some(path) => path,
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
            {
                Some(path) => path.clone(),
                None => return Ok((None, None)),
            },
        };

        let file_config = read_file_config(&path)?;
        Ok((Some(file_config), Some(path)))
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    toml::from_str(&contents).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Merge file and environment sources. Environment values win over the
/// file, and both win over built-in defaults.
pub(crate) fn compose_config(
    file_config: Option<FileConfig>,
    env: EnvConfig,
    config_path: Option<PathBuf>,
    env_file_loaded: bool,
) -> Result<ConfigLoad, ConfigLoadError> {
    let mut warnings = ConfigWarnings::default();

    if file_config.is_none() {
        warnings.push_with_hint(
            "No marquee.toml detected; using defaults and environment",
            "Create marquee.toml or point MARQUEE_CONFIG at a config file",
        );
    }

    let FileConfig {
        server: file_server,
        data: file_data,
        cors: file_cors,
        dev_mode: file_dev_mode,
    } = file_config.unwrap_or_default();

    let defaults = ServerConfig::default();
    let port = match env.server_port {
        Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
            ConfigLoadError::InvalidValue {
                key: "SERVER_PORT",
                value: raw.clone(),
            }
        })?,
        None => file_server.port.unwrap_or(defaults.port),
    };
    let server = ServerConfig {
        host: env
            .server_host
            .or(file_server.host)
            .unwrap_or(defaults.host),
        port,
    };

    let default_data = DataConfig::default();
    let data = DataConfig {
        movies_path: env
            .movies_path
            .or(file_data.movies)
            .unwrap_or(default_data.movies_path),
        reviews_path: env
            .reviews_path
            .or(file_data.reviews)
            .unwrap_or(default_data.reviews_path),
    };

    let dev_mode = match env.dev_mode {
        Some(raw) => {
            parse_bool(&raw).ok_or(ConfigLoadError::InvalidValue {
                key: "DEV_MODE",
                value: raw.clone(),
            })?
        }
        None => file_dev_mode.unwrap_or(false),
    };

    let cors = CorsConfig {
        allowed_origins: env
            .cors_allowed_origins
            .or(file_cors.allowed_origins)
            .unwrap_or_default(),
    };

    if !dev_mode && cors.allowed_origins.is_empty() {
        warnings.push_with_hint(
            "CORS allow-list is empty; any origin may call the JSON API",
            "Set CORS_ALLOWED_ORIGINS to restrict cross-origin access",
        );
    }

    if !data.movies_path.exists() {
        warnings.push(format!(
            "movie data file {} does not exist yet",
            data.movies_path.display()
        ));
    }

    let config = Config {
        server,
        data,
        cors,
        dev_mode,
        metadata: ConfigMetadata {
            config_path,
            env_file_loaded,
        },
    };

    Ok(ConfigLoad { config, warnings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join("marquee.toml");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn defaults_apply_without_sources() {
        let load =
            compose_config(None, EnvConfig::default(), None, false).unwrap();

        assert_eq!(load.config.server.host, "0.0.0.0");
        assert_eq!(load.config.server.port, 8080);
        assert_eq!(
            load.config.data.movies_path,
            PathBuf::from("data/movies.json")
        );
        assert!(!load.config.dev_mode);
        assert!(
            load.warnings
                .items
                .iter()
                .any(|w| w.message.contains("No marquee.toml"))
        );
    }

    #[test]
    fn file_values_are_read() {
        let dir = tempfile::tempdir().unwrap();
        let movies = dir.path().join("movies.json");
        fs::write(&movies, "[]").unwrap();
        let path = write_config(
            dir.path(),
            &format!(
                r#"
dev_mode = true

[server]
host = "127.0.0.1"
port = 3100

[data]
movies = "{}"

[cors]
allowed_origins = ["http://localhost:5173"]
"#,
                movies.display()
            ),
        );

        let load = ConfigLoader::new()
            .with_config_path(&path)
            .load_with_env(EnvConfig::default(), false)
            .unwrap();

        assert_eq!(load.config.server.host, "127.0.0.1");
        assert_eq!(load.config.server.port, 3100);
        assert_eq!(load.config.data.movies_path, movies);
        assert_eq!(
            load.config.cors.allowed_origins,
            vec!["http://localhost:5173"]
        );
        assert!(load.config.dev_mode);
        assert_eq!(load.config.metadata.config_path, Some(path));
        assert!(load.warnings.is_empty());
    }

    #[test]
    fn environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            dir.path(),
            "[server]\nport = 3100\n\n\
             [data]\nreviews = \"file-reviews.json\"\n",
        );
        let env = EnvConfig {
            server_port: Some("9090".into()),
            reviews_path: Some(PathBuf::from("env-reviews.json")),
            dev_mode: Some("yes".into()),
            ..EnvConfig::default()
        };

        let load = ConfigLoader::new()
            .with_config_path(&path)
            .load_with_env(env, false)
            .unwrap();

        assert_eq!(load.config.server.port, 9090);
        assert_eq!(
            load.config.data.reviews_path,
            PathBuf::from("env-reviews.json")
        );
        assert!(load.config.dev_mode);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigLoader::new()
            .with_config_path(dir.path().join("absent.toml"))
            .load_with_env(EnvConfig::default(), false)
            .unwrap_err();
        assert!(matches!(err, ConfigLoadError::MissingConfig { .. }));
    }

    #[test]
    fn rejects_unknown_keys_and_bad_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "[server]\nport = \"eighty\"\n");
        let err = ConfigLoader::new()
            .with_config_path(&path)
            .load_with_env(EnvConfig::default(), false)
            .unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse { .. }));

        let env = EnvConfig {
            server_port: Some("99999".into()),
            ..EnvConfig::default()
        };
        let err = compose_config(None, env, None, false).unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::InvalidValue { key: "SERVER_PORT", .. }
        ));
    }
}
