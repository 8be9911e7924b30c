use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_throttle_fn, use_window};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::view_state::{DisplaySurface, SectionBounds, SectionId, ViewState};

/// Upper bound on how often scroll events recompute the active section.
const SCROLL_THROTTLE_MS: f64 = 100.0;

/// The live page. Only touch from event handlers, the DOM is not there during SSR.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSurface;

impl BrowserSurface {
    fn element(section: SectionId) -> Option<HtmlElement> {
        document()
            .get_element_by_id(section.element_id())?
            .dyn_into::<HtmlElement>()
            .ok()
    }
}

impl DisplaySurface for BrowserSurface {
    fn section_bounds(&self, section: SectionId) -> Option<SectionBounds> {
        let el = Self::element(section)?;
        Some(SectionBounds::new(
            el.offset_top() as f64,
            el.offset_height() as f64,
        ))
    }

    fn scroll_offset(&self) -> f64 {
        window().scroll_y().unwrap_or_default()
    }

    fn scroll_into_view(&self, section: SectionId) -> bool {
        let el = if let Some(el) = Self::element(section) {
            el
        } else {
            return false;
        };
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }
}

/// Keeps `active_section` in step with the window scroll position.
///
/// The scroll listener lives as long as the calling component: it is removed
/// when the owning reactive scope is cleaned up.
pub fn use_section_tracking(state: RwSignal<ViewState>) {
    let recompute = use_throttle_fn(
        move || {
            let mut next = state.get_untracked();
            if next.sync_with_scroll(&BrowserSurface) {
                state.set(next);
            }
        },
        SCROLL_THROTTLE_MS,
    );

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let _ = recompute();
    });
}
