//! Filter state and the reconciliation rules applied on each click.
//!
//! [`FilterState`] is the single source of truth for which tags are active in
//! each lane. It is created empty at engine construction and mutated only by
//! the click path; display state on buttons and items is always re-derived
//! from it, never the other way around.
//!
//! # Semantics
//!
//! An empty lane is deliberately overloaded: it means both "nothing selected"
//! and "no constraint" (every item passes that lane, no button is faded).
//! Every consumer of the state treats empty as pass-everything.

use crate::domain::{FilterTag, Lane};

/// The two active-tag lists, one per lane.
///
/// Tags are kept in activation order. With multiselect disabled each list
/// holds at most one tag; with it enabled, duplicates can only arise from
/// duplicate tags in the markup, and removal always takes exactly one
/// occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    active_primary: Vec<FilterTag>,
    active_secondary: Vec<FilterTag>,
}

impl FilterState {
    /// Creates an empty state: both lanes unconstrained.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns one lane's active tags in activation order.
    #[must_use]
    pub fn active(&self, lane: Lane) -> &[FilterTag] {
        match lane {
            Lane::Primary => &self.active_primary,
            Lane::Secondary => &self.active_secondary,
        }
    }

    /// Returns whether a lane is in the "all" state (no constraint).
    #[must_use]
    pub fn is_unconstrained(&self, lane: Lane) -> bool {
        self.active(lane).is_empty()
    }

    /// Clears one lane back to the "all" state.
    pub fn clear(&mut self, lane: Lane) {
        self.active_mut(lane).clear();
    }

    /// Reconciles one lane after a click on a tagged button.
    ///
    /// This is the whole decision table:
    ///
    /// - `is_all`: the lane is cleared unconditionally, regardless of the
    ///   toggle and multiselect settings.
    /// - toggle enabled: an already-active tag is deactivated, removing
    ///   exactly the last matching occurrence. An inactive tag is activated,
    ///   first clearing the lane when multiselect is off.
    /// - toggle disabled: the lane is cleared when multiselect is off, then
    ///   the tag is added only if not already present, so repeated clicks are
    ///   idempotent.
    ///
    /// Both lanes use the same last-index removal; duplicates elsewhere in
    /// the list are never collapsed.
    ///
    /// # Example
    ///
    /// ```
    /// use lanesift::{FilterState, FilterTag, Lane};
    ///
    /// let mut state = FilterState::new();
    /// let red = FilterTag::new("sf-f-red");
    /// state.apply_click(Lane::Primary, &red, false, true, false);
    /// assert_eq!(state.active(Lane::Primary), [red.clone()]);
    ///
    /// // Toggle off again.
    /// state.apply_click(Lane::Primary, &red, false, true, false);
    /// assert!(state.is_unconstrained(Lane::Primary));
    /// ```
    pub fn apply_click(
        &mut self,
        lane: Lane,
        tag: &FilterTag,
        is_all: bool,
        toggle: bool,
        multiselect: bool,
    ) {
        if is_all {
            tracing::debug!(lane = lane.as_str(), "all sentinel clicked, clearing lane");
            self.clear(lane);
            return;
        }

        let active = self.active_mut(lane);
        if toggle {
            if let Some(position) = active.iter().rposition(|t| t == tag) {
                active.remove(position);
            } else {
                if !multiselect {
                    active.clear();
                }
                active.push(tag.clone());
            }
        } else {
            if !multiselect {
                active.clear();
            }
            if !active.contains(tag) {
                active.push(tag.clone());
            }
        }

        tracing::trace!(
            lane = lane.as_str(),
            active = ?self.active(lane),
            "lane reconciled"
        );
    }

    fn active_mut(&mut self, lane: Lane) -> &mut Vec<FilterTag> {
        match lane {
            Lane::Primary => &mut self.active_primary,
            Lane::Secondary => &mut self.active_secondary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(name: &str) -> FilterTag {
        FilterTag::new(format!("sf-f-{name}"))
    }

    #[test]
    fn repeated_clicks_without_toggle_keep_one_tag() {
        let mut state = FilterState::new();
        for _ in 0..3 {
            state.apply_click(Lane::Primary, &tag("red"), false, false, false);
        }
        assert_eq!(state.active(Lane::Primary), [tag("red")]);
    }

    #[test]
    fn all_sentinel_clears_lane_under_every_configuration() {
        for (toggle, multiselect) in [(false, false), (false, true), (true, false), (true, true)] {
            let mut state = FilterState::new();
            state.apply_click(Lane::Secondary, &tag("a"), false, toggle, multiselect);
            state.apply_click(Lane::Secondary, &tag("b"), false, toggle, multiselect);
            state.apply_click(Lane::Secondary, &tag("all"), true, toggle, multiselect);
            assert!(state.is_unconstrained(Lane::Secondary));
        }
    }

    #[test]
    fn multiselect_toggle_accumulates_and_removes() {
        let mut state = FilterState::new();
        state.apply_click(Lane::Primary, &tag("a"), false, true, true);
        state.apply_click(Lane::Primary, &tag("b"), false, true, true);
        assert_eq!(state.active(Lane::Primary), [tag("a"), tag("b")]);

        state.apply_click(Lane::Primary, &tag("a"), false, true, true);
        assert_eq!(state.active(Lane::Primary), [tag("b")]);
    }

    #[test]
    fn single_select_toggle_replaces() {
        let mut state = FilterState::new();
        state.apply_click(Lane::Primary, &tag("a"), false, true, false);
        state.apply_click(Lane::Primary, &tag("b"), false, true, false);
        assert_eq!(state.active(Lane::Primary), [tag("b")]);
    }

    #[test]
    fn toggle_removal_takes_exactly_one_occurrence() {
        // Duplicate active tags can only come from duplicated markup; removal
        // must still take the last matching occurrence only, on both lanes.
        for lane in [Lane::Primary, Lane::Secondary] {
            let mut state = FilterState::new();
            state
                .active_mut(lane)
                .extend([tag("a"), tag("b"), tag("a")]);
            state.apply_click(lane, &tag("a"), false, true, true);
            assert_eq!(state.active(lane), [tag("a"), tag("b")]);
        }
    }

    #[test]
    fn lanes_are_independent() {
        let mut state = FilterState::new();
        state.apply_click(Lane::Primary, &tag("a"), false, true, false);
        state.apply_click(Lane::Secondary, &tag("x"), false, true, false);
        assert_eq!(state.active(Lane::Primary), [tag("a")]);
        assert_eq!(state.active(Lane::Secondary), [tag("x")]);

        state.clear(Lane::Primary);
        assert!(state.is_unconstrained(Lane::Primary));
        assert_eq!(state.active(Lane::Secondary), [tag("x")]);
    }
}
