//! # Testing Utilities
//!
//! Helpers for testing token type sets, used by this crate's own tests and
//! available to clients.
//!
//! ## Snapshot Testing
//!
//! [`SnapshotTester`] compares a lexer's rendered tokens or candidates with
//! a stored `.snap` file, so a change in tie-breaking or gap handling shows
//! up as a readable diff.

pub mod snapshot;

pub use snapshot::SnapshotTester;
