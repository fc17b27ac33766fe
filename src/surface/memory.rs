//! In-memory rendering surface.
//!
//! [`MemorySurface`] is a flat element store: each element is a class list,
//! handles are insertion indices. It implements every collaborator trait the
//! engine needs, which makes it both the test double and a real surface for
//! headless embedders that mirror the class changes elsewhere.
//!
//! # Fixture format
//!
//! A surface can be loaded from a JSON document: an array of elements, each an
//! array of class strings.
//!
//! ```json
//! [
//!     ["sf-g-demo", "sf-btn-primary", "sf-f-red"],
//!     ["sf-g-demo", "sf-item", "sf-f-red"]
//! ]
//! ```

use std::fs;
use std::path::Path;

use crate::domain::{Lane, LanesiftError, Result};
use crate::engine::ClickEvent;
use super::{ClassOps, ElementId, ElementQuery, EventSource};

/// A surface holding elements as plain class lists.
///
/// Elements are addressed by insertion index. Class mutation follows the
/// idempotent membership semantics of [`ClassOps`]; queries preserve
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    elements: Vec<Vec<String>>,
    registrations: Vec<(Lane, Vec<ElementId>)>,
}

impl MemorySurface {
    /// Creates an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element with the given classes and returns its handle.
    ///
    /// # Example
    ///
    /// ```
    /// use lanesift::MemorySurface;
    ///
    /// let mut surface = MemorySurface::new();
    /// let id = surface.add_element(["sf-g-demo", "sf-item", "sf-f-red"]);
    /// assert_eq!(surface.classes_of(id), ["sf-g-demo", "sf-item", "sf-f-red"]);
    /// ```
    pub fn add_element<I, T>(&mut self, classes: I) -> ElementId
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let id = ElementId(self.elements.len());
        self.elements.push(classes.into_iter().map(Into::into).collect());
        id
    }

    /// Loads a surface from a JSON fixture string.
    ///
    /// # Errors
    ///
    /// Returns [`LanesiftError::Parse`] if the document is not an array of
    /// class-string arrays.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let elements: Vec<Vec<String>> = serde_json::from_str(json)
            .map_err(|e| LanesiftError::Parse(format!("invalid surface fixture: {e}")))?;
        Ok(Self {
            elements,
            registrations: Vec::new(),
        })
    }

    /// Loads a surface from a JSON fixture file.
    ///
    /// # Errors
    ///
    /// Returns [`LanesiftError::Io`] if the file cannot be read and
    /// [`LanesiftError::Parse`] if its contents do not decode.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Returns the number of elements on the surface.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns whether the surface holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the class list of one element.
    ///
    /// Unknown handles yield an empty slice.
    #[must_use]
    pub fn classes_of(&self, element: ElementId) -> &[String] {
        self.elements.get(element.0).map_or(&[], Vec::as_slice)
    }

    /// Returns the lane a button was registered under, if any.
    #[must_use]
    pub fn registered_lane(&self, element: ElementId) -> Option<Lane> {
        self.registrations
            .iter()
            .find(|(_, buttons)| buttons.contains(&element))
            .map(|(lane, _)| *lane)
    }

    /// Builds the click event a host dispatcher would deliver for a button.
    ///
    /// Returns `None` for elements that were never registered, mirroring a
    /// DOM where only wired buttons fire the handler.
    #[must_use]
    pub fn click_event(&self, element: ElementId) -> Option<ClickEvent> {
        self.registered_lane(element).map(|lane| ClickEvent {
            target: element,
            lane,
        })
    }
}

impl ElementQuery for MemorySurface {
    fn select(&self, class: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, classes)| classes.iter().any(|c| c == class))
            .map(|(idx, _)| ElementId(idx))
            .collect()
    }

    fn find_by_class(&self, class: &str, scope: &[ElementId]) -> Vec<ElementId> {
        scope
            .iter()
            .copied()
            .filter(|id| self.classes_of(*id).iter().any(|c| c == class))
            .collect()
    }

    fn class_list(&self, element: ElementId) -> Vec<String> {
        self.classes_of(element).to_vec()
    }
}

impl ClassOps for MemorySurface {
    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.classes_of(element).iter().any(|c| c == class)
    }

    fn add_class(&mut self, element: ElementId, class: &str) {
        if self.has_class(element, class) {
            return;
        }
        if let Some(classes) = self.elements.get_mut(element.0) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        if let Some(classes) = self.elements.get_mut(element.0) {
            classes.retain(|c| c != class);
        }
    }
}

impl EventSource for MemorySurface {
    fn register(&mut self, lane: Lane, buttons: &[ElementId]) {
        tracing::debug!(lane = lane.as_str(), buttons = buttons.len(), "registering click handler");
        self.registrations.push((lane, buttons.to_vec()));
    }
}
