//! Lanesift: a two-lane item filter as an embeddable behavior unit.
//!
//! Lanesift manages one group of filter buttons and items: clicks on primary-
//! or secondary-lane buttons reconcile the active-filter state, and every
//! button and item class is re-derived from that state. The crate is
//! surface-agnostic; elements are opaque handles behind small traits, with an
//! in-memory implementation included.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host event dispatch (ClickEvent)                   │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Engine Layer (engine/)                             │  ← State machine
//! │  - Predicate gating and tag lookup                  │
//! │  - FilterState reconciliation                       │
//! └─────────────────────────────────────────────────────┘
//!         │                              │
//! ┌───────────────────┐        ┌───────────────────────┐
//! │ Render Layer      │        │ Surface Layer         │
//! │ (render/)         │───────▶│ (surface/)            │
//! │ - View models     │        │ - Query/class traits  │
//! │ - Class apply     │        │ - MemorySurface       │
//! └───────────────────┘        └───────────────────────┘
//!         │                              │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Lanes, filter tags, class names                  │
//! │  - Error types                                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`domain`]: Core vocabulary types (lanes, tags, class names, errors)
//! - [`engine`]: Filter state machine and click handling
//! - [`render`]: Display-state derivation and class application
//! - [`surface`]: Collaborator traits plus the in-memory surface
//! - [`observability`]: Optional tracing subscriber setup
//!
//! # Class vocabulary
//!
//! All classes derive from the configured prefix (default `sf`) and the group
//! name passed to [`FilterEngine::attach`]:
//!
//! - group scope: `sf-g-{group}`
//! - buttons: `sf-btn-primary`, `sf-btn-secondary`
//! - items: `sf-item`
//! - filter tags: `sf-f-{tag}`, with `sf-f-all` as the "show everything"
//!   sentinel
//! - display state: `sf-active`, `sf-hidden`, `sf-fade`
//!
//! # Example
//!
//! ```
//! use lanesift::{FilterEngine, FilterOptions, MemorySurface};
//! use lanesift::surface::ClassOps;
//!
//! let mut surface = MemorySurface::new();
//! let red_btn = surface.add_element(["sf-g-demo", "sf-btn-primary", "sf-f-red"]);
//! let all_btn = surface.add_element(["sf-g-demo", "sf-btn-primary", "sf-f-all"]);
//! let red_item = surface.add_element(["sf-g-demo", "sf-item", "sf-f-red"]);
//! let blue_item = surface.add_element(["sf-g-demo", "sf-item", "sf-f-blue"]);
//!
//! let mut engine = FilterEngine::attach(&mut surface, "demo", FilterOptions::default());
//!
//! // Click "red": only the red item stays visible.
//! let click = surface.click_event(red_btn).unwrap();
//! engine.handle_click(&mut surface, &click);
//! assert!(!surface.has_class(red_item, "sf-hidden"));
//! assert!(surface.has_class(blue_item, "sf-hidden"));
//!
//! // Click "all": the lane constraint is dropped.
//! let click = surface.click_event(all_btn).unwrap();
//! engine.handle_click(&mut surface, &click);
//! assert!(!surface.has_class(blue_item, "sf-hidden"));
//! ```

pub mod domain;
pub mod engine;
pub mod observability;
pub mod render;
pub mod surface;

pub use domain::{ClassNames, FilterTag, Lane, LanesiftError, Result};
pub use engine::{ClickEvent, FilterEngine, FilterState};
pub use render::{FilterViewModel, compute_viewmodel};
pub use surface::{ElementId, MemorySurface};

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Predicate over raw click events, gating which clicks are processed.
///
/// Used when the host attaches its handler somewhere up the tree from the
/// buttons themselves and needs to reject events whose real target is not a
/// filter button.
pub type ClickPredicate = Box<dyn Fn(&ClickEvent) -> bool>;

/// Construction-time options for a [`FilterEngine`].
///
/// Immutable for the engine's lifetime. All fields have defaults; the three
/// display classes fall back to names derived from the prefix (see
/// [`ClassNames::resolve`]).
#[derive(Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// The class prefix every derived name starts with. Default: `"sf"`.
    pub prefix: String,

    /// Class applied to active buttons. Default: `{prefix}-active`.
    pub active_class: Option<String>,

    /// Class applied to hidden items. Default: `{prefix}-hidden`.
    pub hidden_class: Option<String>,

    /// Class applied to non-selected buttons while their lane is constrained
    /// and fading is enabled. Default: `{prefix}-fade`.
    pub fade_class: Option<String>,

    /// Allows several tags to be active per lane. Default: `false`.
    pub multiselect: bool,

    /// Fades buttons that are not selected, unless no button is selected in
    /// their lane. Default: `false`.
    pub fade: bool,

    /// Deactivates an already-active tag when its button is clicked again.
    /// Default: `true`.
    pub toggle: bool,

    /// Optional predicate called on every click before any processing.
    ///
    /// A `false` return makes the click a complete no-op. Not serializable;
    /// always `None` when options are loaded from a map or file.
    #[serde(skip)]
    pub button_filter: Option<ClickPredicate>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            prefix: "sf".to_string(),
            active_class: None,
            hidden_class: None,
            fade_class: None,
            multiselect: false,
            fade: false,
            toggle: true,
            button_filter: None,
        }
    }
}

impl std::fmt::Debug for FilterOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterOptions")
            .field("prefix", &self.prefix)
            .field("active_class", &self.active_class)
            .field("hidden_class", &self.hidden_class)
            .field("fade_class", &self.fade_class)
            .field("multiselect", &self.multiselect)
            .field("fade", &self.fade)
            .field("toggle", &self.toggle)
            .field("button_filter", &self.button_filter.is_some())
            .finish()
    }
}

impl FilterOptions {
    /// Parses options from a flat string map.
    ///
    /// Host frameworks commonly hand widget configuration over as string
    /// pairs (data attributes, embed parameters). Unknown keys are ignored
    /// and unparseable boolean values fall back to their defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use lanesift::FilterOptions;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("prefix".to_string(), "flt".to_string());
    /// map.insert("multiselect".to_string(), "true".to_string());
    ///
    /// let options = FilterOptions::from_map(&map);
    /// assert_eq!(options.prefix, "flt");
    /// assert!(options.multiselect);
    /// assert!(options.toggle);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let flag = |key: &str, fallback: bool| {
            map.get(key)
                .and_then(|value| value.parse::<bool>().ok())
                .unwrap_or(fallback)
        };

        Self {
            prefix: map
                .get("prefix")
                .filter(|value| !value.is_empty())
                .cloned()
                .unwrap_or(defaults.prefix),
            active_class: map.get("active_class").cloned(),
            hidden_class: map.get("hidden_class").cloned(),
            fade_class: map.get("fade_class").cloned(),
            multiselect: flag("multiselect", defaults.multiselect),
            fade: flag("fade", defaults.fade),
            toggle: flag("toggle", defaults.toggle),
            button_filter: None,
        }
    }

    /// Loads options from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`LanesiftError::Io`] if the file cannot be read,
    /// [`LanesiftError::Parse`] if the TOML does not decode, and
    /// [`LanesiftError::Options`] if decoded values are invalid.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use lanesift::FilterOptions;
    ///
    /// let options = FilterOptions::from_file("filter.toml")?;
    /// # Ok::<(), lanesift::LanesiftError>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let options: Self = toml::from_str(&contents)
            .map_err(|e| LanesiftError::Parse(format!("invalid options file: {e}")))?;
        options.validate()?;
        Ok(options)
    }

    /// Checks decoded option values.
    ///
    /// # Errors
    ///
    /// Returns [`LanesiftError::Options`] when the prefix is empty, which
    /// would make every class on the surface parse as a filter tag.
    pub fn validate(&self) -> Result<()> {
        if self.prefix.is_empty() {
            return Err(LanesiftError::Options(
                "prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_documented_values() {
        let options = FilterOptions::default();
        assert_eq!(options.prefix, "sf");
        assert!(options.active_class.is_none());
        assert!(!options.multiselect);
        assert!(!options.fade);
        assert!(options.toggle);
        assert!(options.button_filter.is_none());
    }

    #[test]
    fn from_map_falls_back_on_bad_values() {
        let mut map = BTreeMap::new();
        map.insert("toggle".to_string(), "definitely".to_string());
        map.insert("fade".to_string(), "true".to_string());
        map.insert("prefix".to_string(), String::new());

        let options = FilterOptions::from_map(&map);
        assert!(options.toggle);
        assert!(options.fade);
        assert_eq!(options.prefix, "sf");
    }

    #[test]
    fn loads_options_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "prefix = \"flt\"\nmultiselect = true\nactive_class = \"is-on\""
        )
        .unwrap();

        let options = FilterOptions::from_file(file.path()).unwrap();
        assert_eq!(options.prefix, "flt");
        assert!(options.multiselect);
        assert_eq!(options.active_class.as_deref(), Some("is-on"));
        assert!(options.toggle);
    }

    #[test]
    fn rejects_empty_prefix_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "prefix = \"\"").unwrap();

        let err = FilterOptions::from_file(file.path()).unwrap_err();
        assert!(matches!(err, LanesiftError::Options(_)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "prefix = [not toml").unwrap();

        let err = FilterOptions::from_file(file.path()).unwrap_err();
        assert!(matches!(err, LanesiftError::Parse(_)));
    }
}
