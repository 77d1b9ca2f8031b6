//! Step definitions for task dialog behaviour scenarios.

pub mod given;
pub mod world;
