//! Runtime log level administration.
//!
//! A registry of named loggers (static or dynamic), a controller that
//! validates and applies level changes to it, and an admin HTTP surface.

pub mod admin;
pub mod config;
pub mod control;
pub mod error;
pub mod http;
pub mod levels;
pub mod lifecycle;
pub mod observability;
pub mod registry;

pub use config::schema::AppConfig;
pub use control::LevelController;
pub use error::ChangeError;
pub use http::AdminServer;
pub use levels::Level;
pub use lifecycle::Shutdown;
pub use registry::LoggerRegistry;
