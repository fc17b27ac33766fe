//! Class names resolved from options and the managed group name.
//!
//! All class names the engine touches derive from the configured prefix
//! unless explicitly overridden. Resolution happens once at construction so
//! the rest of the engine works with plain strings instead of re-deriving
//! names per click.

use crate::FilterOptions;
use super::Lane;

/// The complete set of class names an engine instance operates on.
///
/// Derived from [`FilterOptions`] and the group name by [`ClassNames::resolve`].
/// Immutable for the engine's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    /// Group scope class, `{prefix}-g-{group}`.
    pub group: String,
    /// Primary button class, `{prefix}-btn-primary`.
    pub btn_primary: String,
    /// Secondary button class, `{prefix}-btn-secondary`.
    pub btn_secondary: String,
    /// Item class, `{prefix}-item`.
    pub item: String,
    /// Prefix shared by every filter tag, `{prefix}-f-`.
    pub filter_prefix: String,
    /// The "all" sentinel tag, `{prefix}-f-all`.
    pub all: String,
    /// Class applied to active buttons.
    pub active: String,
    /// Class applied to hidden items.
    pub hidden: String,
    /// Class applied to non-selected buttons when fading is enabled.
    pub fade: String,
}

impl ClassNames {
    /// Resolves every class name for one managed group.
    ///
    /// The display classes fall back to `{prefix}-active`, `{prefix}-hidden`
    /// and `{prefix}-fade` unless overridden in the options.
    ///
    /// # Example
    ///
    /// ```
    /// use lanesift::{ClassNames, FilterOptions};
    ///
    /// let names = ClassNames::resolve(&FilterOptions::default(), "demo");
    /// assert_eq!(names.group, "sf-g-demo");
    /// assert_eq!(names.active, "sf-active");
    /// assert_eq!(names.all, "sf-f-all");
    /// ```
    #[must_use]
    pub fn resolve(options: &FilterOptions, group: &str) -> Self {
        let prefix = &options.prefix;
        Self {
            group: format!("{prefix}-g-{group}"),
            btn_primary: format!("{prefix}-btn-primary"),
            btn_secondary: format!("{prefix}-btn-secondary"),
            item: format!("{prefix}-item"),
            filter_prefix: format!("{prefix}-f-"),
            all: format!("{prefix}-f-all"),
            active: options
                .active_class
                .clone()
                .unwrap_or_else(|| format!("{prefix}-active")),
            hidden: options
                .hidden_class
                .clone()
                .unwrap_or_else(|| format!("{prefix}-hidden")),
            fade: options
                .fade_class
                .clone()
                .unwrap_or_else(|| format!("{prefix}-fade")),
        }
    }

    /// Returns the button class for one lane.
    #[must_use]
    pub fn button_class(&self, lane: Lane) -> &str {
        match lane {
            Lane::Primary => &self.btn_primary,
            Lane::Secondary => &self.btn_secondary,
        }
    }
}
