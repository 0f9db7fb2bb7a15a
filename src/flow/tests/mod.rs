//! Unit tests for the flow module.
//!
//! Tests are organised by concept: string boundaries and catalog metadata,
//! role alias resolution, board construction, the two workflow kinds'
//! query behaviour, and transport snapshots.

mod snapshot_tests;
