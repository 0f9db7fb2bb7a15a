//! Step definitions for task move BDD scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
