//! Upstair (workspace facade crate).
//!
//! Re-exports the workspace crates under `upstair::{core,engine,input,term,types}`
//! and holds the binary's configuration and logging setup.

pub mod config;
pub mod logging;

pub use upstair_core as core;
pub use upstair_engine as engine;
pub use upstair_input as input;
pub use upstair_term as term;
pub use upstair_types as types;

pub use config::AppConfig;
