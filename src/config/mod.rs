//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → registry::build() and the admin server
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; level changes at runtime go through the
//!   admin API and are not written back
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::AdminConfig;
pub use schema::AppConfig;
pub use schema::LoggingConfig;
pub use schema::ObservabilityConfig;
