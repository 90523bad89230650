//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Breaker operations produce:
//!     → tracing events (service, ttl, error fields)
//!     → metrics.rs (failure, transition and adapter error counters)
//!
//! Consumers:
//!     → logging.rs subscriber (stdout, pretty or JSON)
//!     → whatever metrics recorder the embedding process installs
//! ```
//!
//! # Design Decisions
//! - The library never installs a metrics exporter; recording is a no-op until one exists
//! - Logging setup is opt-in so embedders keep control of their subscriber

pub mod logging;
pub mod metrics;
