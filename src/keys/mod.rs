//! Store key naming.
//!
//! # Key Layout
//! ```text
//! <namespace>:<service>:total_failures:<token>   one per recorded failure
//! <namespace>:<service>:total_failures:*         search pattern for the above
//! <namespace>:<service>:open                     open marker
//! <namespace>:<service>:half_open                half-open marker
//! ```
//!
//! # Design Decisions
//! - Naming is a trait so the breaker can be tested against fixed keys
//! - Failure tokens are random (UUID v4), so concurrent writers never collide
//! - `:` and `%` in service names are percent-encoded, so a service is exactly one segment
//! - The encoded service name is also glob-escaped inside the search pattern

use uuid::Uuid;

use crate::config::KeyConfig;

/// Default namespace prefixed to every key.
pub const DEFAULT_NAMESPACE: &str = "circuit_breaker";

const FAILURES_SEGMENT: &str = "total_failures";
const OPEN_SEGMENT: &str = "open";
const HALF_OPEN_SEGMENT: &str = "half_open";

/// Derives store keys for a service.
pub trait KeyNamer: Send + Sync {
    /// A fresh key for a new failure marker. Never repeats for a service.
    fn failure_store_key(&self, service: &str) -> String;

    /// A glob pattern matching every failure marker of `service`.
    fn failure_search_pattern(&self, service: &str) -> String;

    /// The open marker key.
    fn open_key(&self, service: &str) -> String;

    /// The half-open marker key.
    fn half_open_key(&self, service: &str) -> String;
}

/// `<namespace>:<service>:...` key scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespacedKeys {
    namespace: String,
}

impl NamespacedKeys {
    /// Create a namer using `namespace` as the key prefix.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Create a namer from key settings.
    pub fn from_config(config: &KeyConfig) -> Self {
        Self::new(config.namespace.clone())
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn prefix(&self, service: &str) -> String {
        format!("{}:{}", self.namespace, encode_service(service))
    }
}

impl Default for NamespacedKeys {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}

impl KeyNamer for NamespacedKeys {
    fn failure_store_key(&self, service: &str) -> String {
        format!(
            "{}:{}:{}",
            self.prefix(service),
            FAILURES_SEGMENT,
            Uuid::new_v4().simple()
        )
    }

    fn failure_search_pattern(&self, service: &str) -> String {
        format!(
            "{}:{}:{}:*",
            escape_glob(&self.namespace),
            escape_glob(&encode_service(service)),
            FAILURES_SEGMENT
        )
    }

    fn open_key(&self, service: &str) -> String {
        format!("{}:{}", self.prefix(service), OPEN_SEGMENT)
    }

    fn half_open_key(&self, service: &str) -> String {
        format!("{}:{}", self.prefix(service), HALF_OPEN_SEGMENT)
    }
}

/// Percent-encode `%` and `:` so a service name is always one key segment.
pub fn encode_service(service: &str) -> String {
    let mut encoded = String::with_capacity(service.len());
    for c in service.chars() {
        match c {
            '%' => encoded.push_str("%25"),
            ':' => encoded.push_str("%3A"),
            c => encoded.push(c),
        }
    }
    encoded
}

/// Backslash-escape glob metacharacters so `raw` matches only itself.
pub fn escape_glob(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
