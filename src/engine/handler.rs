//! The filter engine: snapshot, click handling, render driving.
//!
//! [`FilterEngine`] owns the [`FilterState`] for one managed group and the
//! button/item snapshot taken at construction. Each click runs to completion
//! synchronously: gate on the configured predicate, look the button up in the
//! snapshot, reconcile the lane, then re-derive every button and item class
//! through the render layer.
//!
//! # Snapshot semantics
//!
//! `attach` queries the group scope once and parses filter tags once. Buttons
//! or items added to the surface afterwards are neither wired for events nor
//! rendered; re-attach to pick them up.

use crate::domain::{ClassNames, FilterTag, Lane};
use crate::render;
use crate::surface::{ClassOps, ElementId, ElementQuery, EventSource};
use crate::FilterOptions;
use super::FilterState;

/// A click delivered by the host's event dispatch.
///
/// Carries the element that triggered the event and the lane it was
/// registered under. The engine resolves the element's filter tag from its
/// construction-time snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    /// The button that was clicked.
    pub target: ElementId,
    /// The lane the button was registered under.
    pub lane: Lane,
}

/// One button captured at construction time.
#[derive(Debug, Clone)]
pub struct ButtonRecord {
    /// Surface handle of the button.
    pub element: ElementId,
    /// The lane the button belongs to.
    pub lane: Lane,
    /// The button's filter tag, parsed once from its class list.
    ///
    /// `None` when the button carries no filter class; clicks on such a
    /// button are no-ops.
    pub tag: Option<FilterTag>,
}

/// One item captured at construction time.
#[derive(Debug, Clone)]
pub struct ItemRecord {
    /// Surface handle of the item.
    pub element: ElementId,
    /// Every filter tag the item carries, from both lane vocabularies.
    pub tags: Vec<FilterTag>,
}

/// The filter engine for one managed group.
///
/// Owns the active-filter state and the element snapshot; display state on
/// the surface is re-derived from here after every processed click. One
/// instance per group, no shared state between instances.
///
/// # Example
///
/// ```
/// use lanesift::{FilterEngine, FilterOptions, MemorySurface};
///
/// let mut surface = MemorySurface::new();
/// let red_button = surface.add_element(["sf-g-demo", "sf-btn-primary", "sf-f-red"]);
/// let red_item = surface.add_element(["sf-g-demo", "sf-item", "sf-f-red"]);
/// let blue_item = surface.add_element(["sf-g-demo", "sf-item", "sf-f-blue"]);
///
/// let mut engine = FilterEngine::attach(&mut surface, "demo", FilterOptions::default());
/// let event = surface.click_event(red_button).unwrap();
/// assert!(engine.handle_click(&mut surface, &event));
///
/// use lanesift::surface::ClassOps;
/// assert!(!surface.has_class(red_item, "sf-hidden"));
/// assert!(surface.has_class(blue_item, "sf-hidden"));
/// ```
pub struct FilterEngine {
    group: String,
    options: FilterOptions,
    classes: ClassNames,
    buttons: Vec<ButtonRecord>,
    items: Vec<ItemRecord>,
    state: FilterState,
}

impl FilterEngine {
    /// Attaches an engine to one group on a surface.
    ///
    /// Resolves class names, snapshots the group's buttons and items with
    /// their parsed tags, and registers one click handler per lane over the
    /// button sets present right now. An empty scope is valid: the engine
    /// holds empty collections and every click is a no-op.
    pub fn attach<S>(surface: &mut S, group: &str, options: FilterOptions) -> Self
    where
        S: ElementQuery + EventSource,
    {
        let classes = ClassNames::resolve(&options, group);
        let scope = surface.select(&classes.group);

        let mut buttons = Vec::new();
        let mut lane_buttons = |surface: &mut S, lane: Lane| {
            let found = surface.find_by_class(classes.button_class(lane), &scope);
            for &element in &found {
                buttons.push(ButtonRecord {
                    element,
                    lane,
                    tag: FilterTag::scan(&surface.class_list(element), &classes.filter_prefix),
                });
            }
            found
        };
        let primary = lane_buttons(surface, Lane::Primary);
        let secondary = lane_buttons(surface, Lane::Secondary);

        let items = surface
            .find_by_class(&classes.item, &scope)
            .into_iter()
            .map(|element| ItemRecord {
                tags: FilterTag::scan_all(&surface.class_list(element), &classes.filter_prefix),
                element,
            })
            .collect::<Vec<_>>();

        surface.register(Lane::Primary, &primary);
        surface.register(Lane::Secondary, &secondary);

        tracing::debug!(
            group = %group,
            scope_size = scope.len(),
            primary_buttons = primary.len(),
            secondary_buttons = secondary.len(),
            items = items.len(),
            "engine attached"
        );

        Self {
            group: group.to_string(),
            options,
            classes,
            buttons,
            items,
            state: FilterState::new(),
        }
    }

    /// Processes one click and re-renders on success.
    ///
    /// Returns `true` when the click was applied and the surface re-rendered,
    /// `false` when it was a no-op: the configured `button_filter` rejected
    /// the event, the target is not a registered button for that lane, or the
    /// button carries no parseable filter tag. No-ops leave both state and
    /// surface untouched.
    ///
    /// A `button_filter` predicate that panics propagates normally; that is a
    /// caller-configuration fault, not an engine concern.
    pub fn handle_click<S>(&mut self, surface: &mut S, event: &ClickEvent) -> bool
    where
        S: ClassOps,
    {
        let _span = tracing::debug_span!(
            "handle_click",
            group = %self.group,
            lane = event.lane.as_str(),
            target = event.target.0
        )
        .entered();

        if let Some(filter) = &self.options.button_filter {
            if !filter(event) {
                tracing::debug!("event rejected by button filter");
                return false;
            }
        }

        let Some(button) = self
            .buttons
            .iter()
            .find(|b| b.element == event.target && b.lane == event.lane)
        else {
            tracing::debug!("target is not a registered button for this lane");
            return false;
        };

        let Some(tag) = button.tag.clone() else {
            tracing::debug!("button carries no filter tag");
            return false;
        };

        let is_all = tag.as_str() == self.classes.all;
        self.state.apply_click(
            event.lane,
            &tag,
            is_all,
            self.options.toggle,
            self.options.multiselect,
        );

        self.render(surface);
        true
    }

    /// Re-derives every button and item class from the current state.
    fn render<S: ClassOps>(&self, surface: &mut S) {
        let viewmodel = render::compute_viewmodel(
            &self.state,
            &self.buttons,
            &self.items,
            self.options.fade,
        );
        render::apply(surface, &self.classes, &viewmodel);
    }

    /// Returns the group name this engine manages.
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Returns the current filter state.
    #[must_use]
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Returns the resolved class names.
    #[must_use]
    pub fn classes(&self) -> &ClassNames {
        &self.classes
    }

    /// Returns the button snapshot taken at construction.
    #[must_use]
    pub fn buttons(&self) -> &[ButtonRecord] {
        &self.buttons
    }

    /// Returns the item snapshot taken at construction.
    #[must_use]
    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }
}

impl std::fmt::Debug for FilterEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterEngine")
            .field("group", &self.group)
            .field("buttons", &self.buttons.len())
            .field("items", &self.items.len())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    fn demo_surface() -> (MemorySurface, ElementId, ElementId) {
        let mut surface = MemorySurface::new();
        let red = surface.add_element(["sf-g-demo", "sf-btn-primary", "sf-f-red"]);
        let untagged = surface.add_element(["sf-g-demo", "sf-btn-primary"]);
        surface.add_element(["sf-g-demo", "sf-item", "sf-f-red"]);
        (surface, red, untagged)
    }

    #[test]
    fn attach_with_empty_scope_is_valid() {
        let mut surface = MemorySurface::new();
        surface.add_element(["sf-g-other", "sf-btn-primary", "sf-f-red"]);

        let mut engine = FilterEngine::attach(&mut surface, "demo", FilterOptions::default());
        assert!(engine.buttons().is_empty());
        assert!(engine.items().is_empty());

        let event = ClickEvent {
            target: ElementId(0),
            lane: Lane::Primary,
        };
        assert!(!engine.handle_click(&mut surface, &event));
    }

    #[test]
    fn untagged_button_click_is_a_noop() {
        let (mut surface, _, untagged) = demo_surface();
        let mut engine = FilterEngine::attach(&mut surface, "demo", FilterOptions::default());

        let event = surface.click_event(untagged).unwrap();
        let before = surface.clone();
        assert!(!engine.handle_click(&mut surface, &event));
        assert!(engine.state().is_unconstrained(Lane::Primary));
        assert_eq!(surface.classes_of(untagged), before.classes_of(untagged));
    }

    #[test]
    fn button_filter_gates_the_click() {
        let (mut surface, red, _) = demo_surface();
        let options = FilterOptions {
            button_filter: Some(Box::new(|_| false)),
            ..FilterOptions::default()
        };
        let mut engine = FilterEngine::attach(&mut surface, "demo", options);

        let event = surface.click_event(red).unwrap();
        assert!(!engine.handle_click(&mut surface, &event));
        assert!(engine.state().is_unconstrained(Lane::Primary));
    }

    #[test]
    fn buttons_added_after_attach_are_not_wired() {
        let (mut surface, _, _) = demo_surface();
        let mut engine = FilterEngine::attach(&mut surface, "demo", FilterOptions::default());

        let late = surface.add_element(["sf-g-demo", "sf-btn-primary", "sf-f-blue"]);
        assert!(surface.click_event(late).is_none());

        // Even a hand-built event for the late button is rejected.
        let event = ClickEvent {
            target: late,
            lane: Lane::Primary,
        };
        assert!(!engine.handle_click(&mut surface, &event));
    }

    #[test]
    fn click_activates_tag_and_renders() {
        let (mut surface, red, _) = demo_surface();
        let mut engine = FilterEngine::attach(&mut surface, "demo", FilterOptions::default());

        let event = surface.click_event(red).unwrap();
        assert!(engine.handle_click(&mut surface, &event));
        assert_eq!(
            engine.state().active(Lane::Primary),
            [FilterTag::new("sf-f-red")]
        );
        assert!(surface.has_class(red, "sf-active"));
    }
}
