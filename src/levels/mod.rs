//! Level vocabulary.
//!
//! # Responsibilities
//! - Define the closed, ordered set of severity names
//! - Convert between names and ranks in both directions
//! - Map `tracing` event levels onto the vocabulary
//!
//! # Design Decisions
//! - The vocabulary is fixed at build time; there is no runtime registration
//! - Name and rank tables are generated from a single list

mod level;

pub use level::{all_level_names, parse_level, Level};
