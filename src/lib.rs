//! TUI Memory (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_memory::{core,input,term,types}`
//! and hosts the runtime settings used by the binary.

pub mod runtime;

pub use tui_memory_core as core;
pub use tui_memory_input as input;
pub use tui_memory_term as term;
pub use tui_memory_types as types;
