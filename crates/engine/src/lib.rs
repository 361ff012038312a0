//! Session layer: composes the stage primitives for a presentation layer.
//!
//! The stage only exposes legality queries, hops and resets. Deciding that a
//! blocked hop means "start over" happens here, together with the seed policy.

pub mod session;

pub use upstair_core as core;
pub use upstair_types as types;

pub use session::{SeedSource, Session, StepOutcome};
