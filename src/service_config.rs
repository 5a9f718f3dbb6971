use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_FILES_DIR: &str = "files";

/// Environment variable overriding the listen port.
pub const PORT_ENV: &str = "PORT";
/// Environment variable overriding the managed directory.
pub const FILES_DIR_ENV: &str = "FILES_DIR";

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the HTTP server.
    pub port: u16,
    /// Root of the managed directory, created at startup if absent.
    pub files_dir: PathBuf,

    // logging
    pub log_level: tracing::Level,
    /// Directory for log files (optional, logs to stdout only if not set)
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Resolve configuration from CLI flags and the environment.
    ///
    /// Precedence: explicit flag > environment variable > default.
    pub fn resolve(
        port: Option<u16>,
        files_dir: Option<PathBuf>,
        log_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let port = resolve_port(port, std::env::var(PORT_ENV).ok())?;
        let files_dir = files_dir
            .or_else(|| std::env::var(FILES_DIR_ENV).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FILES_DIR));

        Ok(Self {
            port,
            files_dir,
            log_level: tracing::Level::INFO,
            log_dir,
        })
    }
}

fn resolve_port(explicit: Option<u16>, env: Option<String>) -> Result<u16, ConfigError> {
    if let Some(port) = explicit {
        return Ok(port);
    }
    match env {
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidPort(raw.clone())),
        None => Ok(DEFAULT_PORT),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid port value: {0}")]
    InvalidPort(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_port_wins() {
        assert_eq!(
            resolve_port(Some(8080), Some("9090".to_string())).unwrap(),
            8080
        );
    }

    #[test]
    fn test_env_port_over_default() {
        assert_eq!(resolve_port(None, Some("9090".to_string())).unwrap(), 9090);
    }

    #[test]
    fn test_default_port() {
        assert_eq!(resolve_port(None, None).unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn test_invalid_env_port() {
        assert!(resolve_port(None, Some("not-a-port".to_string())).is_err());
    }
}
