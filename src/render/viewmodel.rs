//! Display-state derivation from filter state.
//!
//! [`compute_viewmodel`] re-derives the visual state of every button and item
//! from scratch after each processed click. Nothing is read back from the
//! surface; the filter state plus the construction-time snapshot fully
//! determine the outcome.
//!
//! # Button rules
//!
//! For every button, independent of which lane was clicked:
//!
//! - active is dropped, then re-set only for buttons whose tag is in their
//!   lane's active list;
//! - when fading is enabled, fade is set first, then selectively cleared, so
//!   "not visually distinguished" is the default whenever fading is on;
//! - an unconstrained lane clears fade on all of that lane's buttons: fading
//!   only distinguishes selected from unselected while a selection exists.
//!
//! The fade outcome is a tri-state [`FadeDirective`] rather than a boolean: a
//! fade-disabled engine never sets the class but still clears it on the same
//! branches, leaving it untouched otherwise.
//!
//! # Item rules
//!
//! Every item starts hidden; an item becomes visible when each lane is either
//! unconstrained or matches at least one of the item's tags (logical AND
//! across lanes).

use crate::engine::handler::{ButtonRecord, ItemRecord};
use crate::engine::FilterState;
use crate::surface::ElementId;

/// What to do with the fade class on one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirective {
    /// Add the fade class.
    Set,
    /// Remove the fade class.
    Clear,
    /// Leave the fade class as it is.
    Keep,
}

/// Display state for a single button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    /// Surface handle of the button.
    pub element: ElementId,
    /// Whether the button carries the active class.
    pub active: bool,
    /// Fade class directive.
    pub fade: FadeDirective,
}

/// Display state for a single item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    /// Surface handle of the item.
    pub element: ElementId,
    /// Whether the item carries the hidden class.
    pub hidden: bool,
}

/// Complete display state for one engine's scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterViewModel {
    /// Display state for every snapshot button, in snapshot order.
    pub buttons: Vec<ButtonView>,
    /// Display state for every snapshot item, in snapshot order.
    pub items: Vec<ItemView>,
}

/// Derives the full view model from the current filter state.
///
/// `fade` is the engine's fade option; it decides whether unselected buttons
/// get the fade class set while their lane is constrained.
#[must_use]
pub fn compute_viewmodel(
    state: &FilterState,
    buttons: &[ButtonRecord],
    items: &[ItemRecord],
    fade: bool,
) -> FilterViewModel {
    let button_views = buttons
        .iter()
        .map(|button| {
            let lane_active = state.active(button.lane);
            let mut active = false;
            let mut fade_directive = if fade {
                FadeDirective::Set
            } else {
                FadeDirective::Keep
            };

            if lane_active.is_empty() {
                fade_directive = FadeDirective::Clear;
            } else if button
                .tag
                .as_ref()
                .is_some_and(|tag| lane_active.contains(tag))
            {
                active = true;
                fade_directive = FadeDirective::Clear;
            }

            ButtonView {
                element: button.element,
                active,
                fade: fade_directive,
            }
        })
        .collect();

    let primary_all = state.is_unconstrained(crate::Lane::Primary);
    let secondary_all = state.is_unconstrained(crate::Lane::Secondary);

    let item_views = items
        .iter()
        .map(|item| {
            let passes = |lane, unconstrained: bool| {
                unconstrained
                    || item
                        .tags
                        .iter()
                        .any(|tag| state.active(lane).contains(tag))
            };
            let visible = passes(crate::Lane::Primary, primary_all)
                && passes(crate::Lane::Secondary, secondary_all);
            ItemView {
                element: item.element,
                hidden: !visible,
            }
        })
        .collect();

    let viewmodel = FilterViewModel {
        buttons: button_views,
        items: item_views,
    };

    tracing::trace!(
        buttons = viewmodel.buttons.len(),
        hidden_items = viewmodel.items.iter().filter(|i| i.hidden).count(),
        "view model computed"
    );

    viewmodel
}
