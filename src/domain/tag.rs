//! Typed filter tags parsed from element class lists.
//!
//! A filter tag is the full filter class an element carries, e.g. `sf-f-red`
//! for the default `sf` prefix. Tags are parsed once when the engine snapshots
//! its buttons and items, so the click path compares typed values instead of
//! re-scanning raw class strings on every event.

use serde::{Deserialize, Serialize};

/// The identifying tag a button or item carries within a lane's vocabulary.
///
/// Stored as the complete filter class (prefix included) so that button tags
/// and item tags compare directly. The "all" sentinel is an ordinary tag whose
/// value equals the resolved all class; the engine special-cases it by
/// comparison, not by type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterTag(String);

impl FilterTag {
    /// Wraps a complete filter class as a tag.
    #[must_use]
    pub fn new(class: impl Into<String>) -> Self {
        Self(class.into())
    }

    /// Returns the underlying filter class.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extracts the filter tag from a class list, if present.
    ///
    /// Scans for classes starting with `filter_prefix` (e.g. `sf-f-`). When an
    /// element carries several, the last one wins, matching how the class
    /// attribute is scanned front to back with later entries overwriting
    /// earlier ones.
    ///
    /// # Example
    ///
    /// ```
    /// use lanesift::FilterTag;
    ///
    /// let classes = ["btn".to_string(), "sf-f-red".to_string()];
    /// let tag = FilterTag::scan(&classes, "sf-f-");
    /// assert_eq!(tag, Some(FilterTag::new("sf-f-red")));
    /// ```
    #[must_use]
    pub fn scan(classes: &[String], filter_prefix: &str) -> Option<Self> {
        classes
            .iter()
            .filter(|class| class.starts_with(filter_prefix))
            .next_back()
            .map(Self::new)
    }

    /// Extracts every filter tag from a class list, in class-list order.
    ///
    /// Items may carry tags from both lane vocabularies; all of them are
    /// collected here and matched per lane at render time.
    #[must_use]
    pub fn scan_all(classes: &[String], filter_prefix: &str) -> Vec<Self> {
        classes
            .iter()
            .filter(|class| class.starts_with(filter_prefix))
            .map(Self::new)
            .collect()
    }
}

impl std::fmt::Display for FilterTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
