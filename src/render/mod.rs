//! The presentation step: derive display state, then write it to the surface.
//!
//! Rendering is split the same way the engine splits state from events: a
//! pure view-model computation from [`FilterState`] and the element snapshot,
//! and an apply step that turns the view model into idempotent class changes
//! through [`ClassOps`]. The view model contains no filter logic consumers
//! need to re-run; it is display-ready.
//!
//! [`FilterState`]: crate::FilterState
//! [`ClassOps`]: crate::surface::ClassOps
//!
//! # Modules
//!
//! - [`apply`]: class mutation from a computed view model
//! - [`viewmodel`]: display-state derivation from filter state

pub mod apply;
pub mod viewmodel;

pub use apply::apply;
pub use viewmodel::{compute_viewmodel, ButtonView, FadeDirective, FilterViewModel, ItemView};
