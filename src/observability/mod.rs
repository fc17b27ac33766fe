//! Tracing setup for hosts that want the engine's diagnostics.
//!
//! The engine logs through `tracing` macros only; installing a subscriber is
//! the host's choice. [`init_tracing`] offers the standard pipeline for hosts
//! that have none of their own.

pub mod init;

pub use init::init_tracing;
