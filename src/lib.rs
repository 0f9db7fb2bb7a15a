//! Taskboard: role-parameterized task workflow engine.
//!
//! This crate compiles a project's workflow configuration and a viewer's
//! roles into an immutable transition table, then answers move-legality,
//! board-layout, and creation-status queries over it. It is a pure
//! in-process library: no persistence, no I/O, no shared mutable state, so
//! an instance can be rebuilt cheaply for every request.
//!
//! # Architecture
//!
//! - **Domain** ([`flow::domain`]): closed status, role, and lane
//!   enumerations plus the static per-role move tables.
//! - **Engine** ([`flow::engine`]): the [`flow::TaskFlow`] facade built
//!   eagerly from a workflow kind and role list; every query afterwards is
//!   a non-suspending pure read.
//!
//! Callers own enforcement: a rejected move query means "reject the
//! mutation", creation-status queries compute the initial status for a new
//! task, and board snapshots feed client responses.

pub mod flow;
