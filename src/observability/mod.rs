//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, gauges via the metrics facade)
//! ```
//!
//! # Design Decisions
//! - Every orchestrator log line carries the match id
//! - Metrics are cheap and exporter-agnostic

pub mod logging;
pub mod metrics;
