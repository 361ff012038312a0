//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids widget
//! toolkits and renders into a simple framebuffer that is then flushed to the
//! terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Derive the stage height from the terminal once, at startup
//! - Allow precise control over aspect ratio (3 chars wide per stage cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use upstair_core as core;
pub use upstair_types as types;

pub use fb::{FrameBuffer, Glyph, Ink};
pub use game_view::{AnchorY, GameView, HudView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
