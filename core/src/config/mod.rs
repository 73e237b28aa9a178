//! Application configuration.
//!
//! - `types.rs` (data structures + defaults)
//! - `load.rs`  (IO: file lookup + env overrides)

pub mod load;
mod types;

pub use load::{load, load_default, DEFAULT_CONFIG_FILE};
pub use types::*;
