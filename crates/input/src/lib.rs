//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::StageAction`].

pub mod map;

pub use upstair_types as types;

pub use map::{handle_key_event, should_quit};
