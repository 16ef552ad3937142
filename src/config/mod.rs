//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → BailOutConfig (validated, immutable)
//!     → store.rs (ConfigStore, read fresh on every failure event)
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → atomic swap inside ConfigStore
//!     → next failure event observes new values
//! ```
//!
//! # Design Decisions
//! - A single config value is immutable; changes swap the whole value
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Presentation strings (text position) are parsed lazily and never fail

pub mod loader;
pub mod position;
pub mod schema;
pub mod store;
pub mod validation;
pub mod watcher;

pub use position::{parse_position, Vector3};
pub use schema::BailOutConfig;
pub use store::ConfigStore;
