//! The filter state machine.
//!
//! This module is the core of the crate, sitting between event dispatch and
//! the rendering layer. It follows a unidirectional data flow:
//!
//! ```text
//! Click → predicate gate → tag lookup → FilterState reconciliation
//!                                             │
//!                                             ▼
//!                            view model → class changes on the surface
//! ```
//!
//! # Modules
//!
//! - [`handler`]: [`FilterEngine`] — snapshot, click handling, render driving
//! - [`state`]: [`FilterState`] — the two active-tag lists and their
//!   reconciliation rules

pub mod handler;
pub mod state;

pub use handler::{ButtonRecord, ClickEvent, FilterEngine, ItemRecord};
pub use state::FilterState;
