//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, tracing layer, graceful shutdown)
//!     → admin handlers (parse query, call LevelController)
//!     → response.rs (error, usage and logger listing text)
//!     → Send to client
//! ```

pub mod response;
pub mod server;

pub use server::{AdminServer, AppState};
