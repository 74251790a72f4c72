//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders into
//! a simple framebuffer that is diffed and flushed to the terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so layout and hit-testing can be unit-tested
//! - Share one layout between drawing and pointer hit-testing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, HudView, Layout, Viewport, CARD_H, CARD_W, GAP_X};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
