//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::keys::DEFAULT_NAMESPACE;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BreakerConfig {
    /// Store key settings.
    pub keys: KeyConfig,

    /// Log output settings.
    pub logging: LoggingConfig,
}

/// Store key settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyConfig {
    /// Prefix for every key (e.g., "circuit_breaker").
    pub namespace: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,

    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "ttl_circuit_breaker=info".to_string(),
            json: false,
        }
    }
}
