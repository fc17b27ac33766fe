//! The collaborator seam between the engine and whatever holds the elements.
//!
//! The engine never talks to a concrete document model. It sees elements as
//! opaque [`ElementId`] handles and works through three small traits:
//!
//! - [`ElementQuery`]: class-based lookup, insertion-order preserved
//! - [`ClassOps`]: idempotent membership-style class mutation
//! - [`EventSource`]: per-lane click registration at construction time
//!
//! [`MemorySurface`] implements all three in memory and is what the tests and
//! headless embedders use. A DOM-backed embedder implements the same traits
//! over its own element handles.

pub mod memory;

pub use memory::MemorySurface;

use crate::domain::Lane;

/// Opaque handle to one element on a rendering surface.
///
/// Identity is assigned by the surface; the engine only stores and compares
/// handles, never interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

/// Class-based element lookup.
pub trait ElementQuery {
    /// Returns every element on the surface carrying `class`, in insertion
    /// order.
    fn select(&self, class: &str) -> Vec<ElementId>;

    /// Returns the elements within `scope` carrying `class`, preserving the
    /// order of `scope`.
    fn find_by_class(&self, class: &str, scope: &[ElementId]) -> Vec<ElementId>;

    /// Returns the full class list of one element.
    ///
    /// Unknown handles yield an empty list.
    fn class_list(&self, element: ElementId) -> Vec<String>;
}

/// Idempotent membership-style class mutation.
///
/// `add_class` is a no-op if the class is already present; `remove_class` is
/// a no-op if it is absent. Unknown handles are ignored.
pub trait ClassOps {
    /// Returns whether the element currently carries `class`.
    fn has_class(&self, element: ElementId, class: &str) -> bool;

    /// Adds `class` to the element if not already present.
    fn add_class(&mut self, element: ElementId, class: &str);

    /// Removes `class` from the element if present.
    fn remove_class(&mut self, element: ElementId, class: &str);
}

/// Click-event wiring performed once at engine construction.
///
/// The engine registers each lane's button snapshot here; the host dispatches
/// later clicks back to [`FilterEngine::handle_click`] carrying the element
/// and lane it registered. Elements added to the surface after registration
/// are not wired.
///
/// [`FilterEngine::handle_click`]: crate::FilterEngine::handle_click
pub trait EventSource {
    /// Registers one lane's click handler over the given button set.
    fn register(&mut self, lane: Lane, buttons: &[ElementId]);
}
