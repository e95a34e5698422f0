//! Smooth scrolling for same-page anchor navigation.

use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::Callback;

/// Scrolls the first element matching `selector` into view with a smooth
/// animation. Silently does nothing when the selector matches no element.
pub fn scroll_to(selector: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Ok(Some(target)) = document.query_selector(selector) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

/// Click handler for `<a href="#...">` links: suppresses the default jump
/// navigation and animates to the target instead.
pub fn anchor_callback(href: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to(href);
    })
}
