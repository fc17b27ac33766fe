//! Class mutation from a computed view model.
//!
//! The apply step is the only place display classes are written. It walks the
//! view model and issues idempotent [`ClassOps`] calls; the surface ends up
//! in the same state no matter what classes it carried before, except where a
//! [`FadeDirective::Keep`] deliberately leaves the fade class alone.

use crate::domain::ClassNames;
use crate::surface::ClassOps;
use super::viewmodel::{FadeDirective, FilterViewModel};

/// Writes a view model to the surface.
pub fn apply<S: ClassOps>(surface: &mut S, classes: &ClassNames, viewmodel: &FilterViewModel) {
    for button in &viewmodel.buttons {
        if button.active {
            surface.add_class(button.element, &classes.active);
        } else {
            surface.remove_class(button.element, &classes.active);
        }
        match button.fade {
            FadeDirective::Set => surface.add_class(button.element, &classes.fade),
            FadeDirective::Clear => surface.remove_class(button.element, &classes.fade),
            FadeDirective::Keep => {}
        }
    }

    for item in &viewmodel.items {
        if item.hidden {
            surface.add_class(item.element, &classes.hidden);
        } else {
            surface.remove_class(item.element, &classes.hidden);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::viewmodel::{ButtonView, ItemView};
    use crate::surface::{ElementId, MemorySurface};
    use crate::FilterOptions;

    fn names() -> ClassNames {
        ClassNames::resolve(&FilterOptions::default(), "demo")
    }

    #[test]
    fn writes_active_and_hidden_classes() {
        let mut surface = MemorySurface::new();
        let on = surface.add_element(["sf-btn-primary"]);
        let off = surface.add_element(["sf-btn-primary", "sf-active"]);
        let shown = surface.add_element(["sf-item", "sf-hidden"]);
        let concealed = surface.add_element(["sf-item"]);

        let viewmodel = FilterViewModel {
            buttons: vec![
                ButtonView { element: on, active: true, fade: FadeDirective::Keep },
                ButtonView { element: off, active: false, fade: FadeDirective::Keep },
            ],
            items: vec![
                ItemView { element: shown, hidden: false },
                ItemView { element: concealed, hidden: true },
            ],
        };
        apply(&mut surface, &names(), &viewmodel);

        assert!(surface.has_class(on, "sf-active"));
        assert!(!surface.has_class(off, "sf-active"));
        assert!(!surface.has_class(shown, "sf-hidden"));
        assert!(surface.has_class(concealed, "sf-hidden"));
    }

    #[test]
    fn fade_directives_map_to_class_ops() {
        let mut surface = MemorySurface::new();
        let set = surface.add_element(["sf-btn-primary"]);
        let cleared = surface.add_element(["sf-btn-primary", "sf-fade"]);
        let kept = surface.add_element(["sf-btn-primary", "sf-fade"]);

        let button = |element: ElementId, fade| ButtonView { element, active: false, fade };
        let viewmodel = FilterViewModel {
            buttons: vec![
                button(set, FadeDirective::Set),
                button(cleared, FadeDirective::Clear),
                button(kept, FadeDirective::Keep),
            ],
            items: vec![],
        };
        apply(&mut surface, &names(), &viewmodel);

        assert!(surface.has_class(set, "sf-fade"));
        assert!(!surface.has_class(cleared, "sf-fade"));
        assert!(surface.has_class(kept, "sf-fade"));
    }
}
