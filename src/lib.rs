//! TUI Blicblock (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_blicblock::{core,input,term,types}` so
//! the binary, integration tests and benchmarks share one import path.

pub use tui_blicblock_core as core;
pub use tui_blicblock_input as input;
pub use tui_blicblock_term as term;
pub use tui_blicblock_types as types;
