//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::BreakerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// The settings file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read breaker settings {}: {}", path.display(), source)
            }
            ConfigError::Parse(e) => write!(f, "breaker settings are not valid TOML: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "invalid breaker settings: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Validation(_) => None,
        }
    }
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<BreakerConfig, ConfigError> {
    let config: BreakerConfig = toml::from_str(content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<BreakerConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content)?;

    tracing::debug!(path = %path.display(), namespace = %config.keys.namespace, "Configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full() {
        let config = parse_config(
            r#"
            [keys]
            namespace = "edge_breaker"

            [logging]
            filter = "debug"
            json = true
            "#,
        )
        .unwrap();
        assert_eq!(config.keys.namespace, "edge_breaker");
        assert_eq!(config.logging.filter, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[keys\nnamespace = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("breaker settings are not valid TOML"));
    }

    #[test]
    fn test_validation_error() {
        let err = parse_config("[keys]\nnamespace = \"a:b\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref e) if e.len() == 1));
        assert!(err
            .to_string()
            .starts_with("invalid breaker settings: keys.namespace"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("breaker_cfg_{}.toml", std::process::id()));
        std::fs::write(&path, "[keys]\nnamespace = \"from_file\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.keys.namespace, "from_file");

        std::fs::remove_file(&path).unwrap_or_default();
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/breaker.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/breaker.toml"));
    }
}
