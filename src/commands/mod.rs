//! Board Command Wrappers
//!
//! Fire-and-forget bindings from UI events to Board operations.
//! Failures are already logged by the Board; handlers only discard them.

mod board;

pub use board::*;
