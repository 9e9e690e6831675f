use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use wasm_bindgen::JsCast;

use crate::config::{NAVBAR_ELEVATE_AFTER_PX, NAVBAR_HIDE_AFTER_PX, NAVBAR_OFFSET_PX};

/// Scroll target for a section, leaving room for the fixed navbar.
pub fn section_scroll_top(offset_top: f64) -> f64 {
    offset_top - NAVBAR_OFFSET_PX
}

/// Smoothly scrolls to the element with `section_id`. Unknown ids are ignored.
pub fn scroll_to_section(section_id: &str) {
    let Some(window) = web_sys::window() else { return };
    let Some(target) = window
        .document()
        .and_then(|d| d.get_element_by_id(section_id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(section_scroll_top(target.offset_top() as f64));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Returns the fragment of an in-page link, `"#faq"` -> `"faq"`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NavbarAppearance {
    pub elevated: bool,
    pub hidden: bool,
}

/// Remembers the previous scroll position to tell direction.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavbarScroll {
    last_scroll_y: f64,
}

impl NavbarScroll {
    pub fn new(initial_scroll_y: f64) -> Self {
        Self {
            last_scroll_y: initial_scroll_y,
        }
    }

    pub fn on_scroll(&mut self, scroll_y: f64) -> NavbarAppearance {
        let appearance = NavbarAppearance {
            elevated: scroll_y > NAVBAR_ELEVATE_AFTER_PX,
            hidden: scroll_y > self.last_scroll_y && scroll_y > NAVBAR_HIDE_AFTER_PX,
        };
        self.last_scroll_y = scroll_y;
        appearance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_leaves_room_for_navbar() {
        assert_eq!(section_scroll_top(1_000.0), 920.0);
    }

    #[test]
    fn anchors_strip_hash() {
        assert_eq!(anchor_target("#pricing"), Some("pricing"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/terms"), None);
    }

    #[test]
    fn navbar_elevates_past_threshold() {
        let mut nav = NavbarScroll::default();
        assert!(!nav.on_scroll(100.0).elevated);
        assert!(nav.on_scroll(101.0).elevated);
        assert!(!nav.on_scroll(50.0).elevated);
    }

    #[test]
    fn navbar_hides_only_when_scrolling_down_far_enough() {
        let mut nav = NavbarScroll::new(0.0);
        assert!(!nav.on_scroll(150.0).hidden);
        assert!(nav.on_scroll(250.0).hidden);
        assert!(nav.on_scroll(400.0).hidden);
        assert!(!nav.on_scroll(380.0).hidden);
        assert!(!nav.on_scroll(380.0).hidden);
    }
}
