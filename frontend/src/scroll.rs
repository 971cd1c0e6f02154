use std::cell::RefCell;

use log::{debug, warn};
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

const LOCKED_BODY_STYLE: [&str; 4] = ["position", "top", "width", "overflow"];

/// Counts overlapping lock holders so only the outermost one touches the body.
#[derive(Debug, Default)]
struct LockDepth {
    holders: usize,
    saved_offset: f64,
}

impl LockDepth {
    /// Returns true when this is the first holder.
    fn enter(&mut self) -> bool {
        self.holders += 1;
        self.holders == 1
    }

    /// Returns true when the last holder left.
    fn leave(&mut self) -> bool {
        if self.holders == 0 {
            return false;
        }
        self.holders -= 1;
        self.holders == 0
    }
}

thread_local! {
    static LOCK: RefCell<LockDepth> = RefCell::new(LockDepth::default());
}

/// Freezes page scrolling while alive. The body is pinned in place and the
/// scroll offset is restored when the last guard is dropped.
#[must_use = "the page unlocks as soon as the guard is dropped"]
pub struct ScrollLock {
    _private: (),
}

impl ScrollLock {
    pub fn acquire() -> Self {
        LOCK.with(|lock| {
            let mut lock = lock.borrow_mut();
            if lock.enter() {
                let offset = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                lock.saved_offset = offset;
                pin_body(offset);
                debug!("Scroll locked at offset {}", offset);
            }
        });
        ScrollLock { _private: () }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        LOCK.with(|lock| {
            let mut lock = lock.borrow_mut();
            if lock.leave() {
                unpin_body(lock.saved_offset);
                debug!("Scroll unlocked, back to offset {}", lock.saved_offset);
            }
        });
    }
}

/// Holds a [`ScrollLock`] for as long as `active` stays true or until unmount.
#[hook]
pub fn use_scroll_lock(active: bool) {
    use_effect_with_deps(
        move |active| {
            let guard = (*active).then(ScrollLock::acquire);
            move || drop(guard)
        },
        active,
    );
}

fn body() -> Option<HtmlElement> {
    let body = window().and_then(|w| w.document()).and_then(|d| d.body());
    if body.is_none() {
        warn!("No document body available");
    }
    body
}

fn top_offset(offset: f64) -> String {
    format!("-{}px", offset.max(0.0).round())
}

fn pin_body(offset: f64) {
    let Some(body) = body() else { return };
    let style = body.style();
    let top = top_offset(offset);
    let values = ["fixed", top.as_str(), "100%", "hidden"];
    for (property, value) in LOCKED_BODY_STYLE.iter().zip(values) {
        if style.set_property(property, value).is_err() {
            warn!("Failed to set body {}", property);
        }
    }
}

fn unpin_body(offset: f64) {
    if let Some(body) = body() {
        let style = body.style();
        for property in LOCKED_BODY_STYLE {
            let _ = style.remove_property(property);
        }
    }
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, offset);
    }
}

/// Smooth-scrolls to the element matching `selector`, e.g. `#portfolio`.
pub fn scroll_to_section(selector: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    match document.query_selector(selector) {
        Ok(Some(element)) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        _ => warn!("No section matches {}", selector),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_outermost_holder_toggles_body() {
        let mut depth = LockDepth::default();
        assert!(depth.enter());
        assert!(!depth.enter());
        assert!(!depth.leave());
        assert!(depth.leave());
    }

    #[test]
    fn unbalanced_release_is_harmless() {
        let mut depth = LockDepth::default();
        assert!(!depth.leave());
        assert!(depth.enter());
    }

    #[test]
    fn top_offset_is_negative_pixels() {
        assert_eq!(top_offset(420.0), "-420px");
        assert_eq!(top_offset(12.6), "-13px");
        assert_eq!(top_offset(-5.0), "-0px");
    }
}
