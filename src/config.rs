//! Server configuration
//!
//! Layered: built-in defaults, then an optional YAML file, then command-line
//! flags. Example file:
//!
//! ```yaml
//! host: 127.0.0.1
//! port: 8080
//! workers: 2
//! log_level: debug
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Bad or incomplete command-line argument
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Invalid log level: '{0}' (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel(String),

    #[error("Worker count must be at least 1")]
    NoWorkers,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    /// 0 lets the OS pick a free port
    pub port: u16,
    pub workers: usize,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5000,
            workers: 4,
            log_level: "info".into(),
        }
    }
}

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Serve(ServerConfig),
    Help,
}

impl ServerConfig {
    /// Load a YAML config file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ServerConfig =
            serde_yaml::from_str(&text).map_err(|source| ConfigError::Yaml {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter, ConfigError> {
        log::LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        self.level_filter()?;
        Ok(())
    }
}

/// Parse command-line arguments (without the program name).
///
/// `--config` is applied first wherever it appears, so flags always override
/// file values.
pub fn parse_args<I>(args: I) -> Result<Command, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();

    let mut config = match find_config_path(&args)? {
        Some(path) => ServerConfig::from_file(Path::new(path))?,
        None => ServerConfig::default(),
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
            }
            "--host" => {
                i += 1;
                config.host = value(&args, i, "--host")?.to_string();
            }
            "--port" => {
                i += 1;
                config.port = value(&args, i, "--port")?
                    .parse()
                    .map_err(|_| ConfigError::InvalidArgument("--port requires a valid port number".into()))?;
            }
            "--workers" => {
                i += 1;
                config.workers = value(&args, i, "--workers")?
                    .parse()
                    .map_err(|_| ConfigError::InvalidArgument("--workers requires a valid number".into()))?;
            }
            "--log-level" => {
                i += 1;
                config.log_level = value(&args, i, "--log-level")?.to_string();
            }
            "--help" | "-h" => return Ok(Command::Help),
            other => {
                return Err(ConfigError::InvalidArgument(format!("Unknown argument: {}", other)));
            }
        }
        i += 1;
    }

    config.validate()?;
    Ok(Command::Serve(config))
}

pub fn usage() -> &'static str {
    "Usage: music-theory-server [OPTIONS]

Options:
  --config <PATH>       YAML config file
  --host <HOST>         Bind address (default: 0.0.0.0)
  --port <PORT>         Listen port (default: 5000)
  --workers <N>         Request worker threads (default: 4)
  --log-level <LEVEL>   off, error, warn, info, debug, trace (default: info)
  --help, -h            Show this help"
}

fn find_config_path(args: &[String]) -> Result<Option<&str>, ConfigError> {
    match args.iter().position(|a| a == "--config") {
        Some(i) => value(args, i + 1, "--config").map(Some),
        None => Ok(None),
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, ConfigError> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| ConfigError::InvalidArgument(format!("{} requires a value", flag)))
}
