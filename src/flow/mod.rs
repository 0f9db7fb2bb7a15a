//! Task workflow progression for taskboard.
//!
//! A project selects one of two workflow kinds: a simple four-stage board
//! shared by everyone, or an advanced thirteen-stage board where each role
//! owns a fixed table of permitted moves. This module compiles the
//! configuration selected for a request into an immutable [`TaskFlow`]
//! instance and answers every board and transition query from it:
//!
//! - Domain types and static tables in [`domain`]
//! - The query facade in [`engine`]

pub mod domain;
pub mod engine;

pub use engine::{FlowSnapshot, MoveTarget, TaskFlow};

#[cfg(test)]
mod tests;
