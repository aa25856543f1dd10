//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! lifelog.toml (optional, working directory)
//!     → loader.rs (parse & deserialize, or defaults when absent)
//!     → validation.rs (semantic checks)
//!     → LifelogConfig (validated, immutable for the process lifetime)
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup and never reloaded
//! - All fields have defaults; no file means the built-in behaviour
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::HeartbeatConfig;
pub use schema::LifelogConfig;
pub use schema::ObservabilityConfig;
pub use schema::SinkConfig;
