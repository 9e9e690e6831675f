use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::analytics::{Analytics, AnalyticsEvent};
use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_SELECTORS, REVEAL_THRESHOLD};

fn observe_all(observer: &IntersectionObserver, selector: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return;
    };
    for index in 0..nodes.length() {
        if let Some(element) = nodes.item(index).and_then(|n| n.dyn_into::<Element>().ok()) {
            observer.observe(&element);
        }
    }
}

fn viewed_section(element: &Element) -> Option<String> {
    if !element.id().is_empty() {
        return Some(element.id());
    }
    element
        .closest("section")
        .ok()
        .flatten()
        .map(|s| s.id())
        .filter(|id| !id.is_empty())
}

/// Adds `animate-in` to cards and sections the first time they scroll into
/// view, and reports each viewed section.
#[hook]
pub fn use_scroll_reveal(analytics: Analytics) {
    use_effect_with_deps(
        move |_| {
            let supported = web_sys::window()
                .map(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
                .unwrap_or(false);

            let observer = if supported {
                let callback = Closure::wrap(Box::new(
                    move |entries: Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                continue;
                            };
                            if !entry.is_intersecting() {
                                continue;
                            }
                            let target = entry.target();
                            let _ = target.class_list().add_1("animate-in");
                            if let Some(section) = viewed_section(&target) {
                                analytics.track(AnalyticsEvent::new("section_viewed").with("section", section));
                            }
                            observer.unobserve(&target);
                        }
                    },
                ) as Box<dyn FnMut(Array, IntersectionObserver)>);

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
                options.set_root_margin(REVEAL_ROOT_MARGIN);

                match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
                    Ok(observer) => {
                        observe_all(&observer, REVEAL_SELECTORS);
                        observe_all(&observer, "section[id]");
                        Some((observer, callback))
                    }
                    Err(e) => {
                        debug!("IntersectionObserver unavailable: {:?}", e);
                        None
                    }
                }
            } else {
                None
            };

            move || {
                if let Some((observer, _callback)) = observer {
                    observer.disconnect();
                }
            }
        },
        (),
    );
}
