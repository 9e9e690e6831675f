use gloo_timers::callback::Timeout;
use log::error;
use serde_json::Value;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Date, Error as JsError, Reflect};
use web_sys::{Element, ErrorEvent, Event, MouseEvent, PromiseRejectionEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::analytics::engagement::{report_scroll_depth, should_report_time_on_page, ScrollDepthTracker};
use crate::analytics::{Analytics, AnalyticsEvent};
use crate::config::{SCROLL_DEPTH_DEBOUNCE_MS, TIME_ON_PAGE_TICK_MS};
use crate::session::PageSession;

const CTA_SELECTOR: &str = ".cta-primary, .btn--primary";

fn document_hidden() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .map(|d| d.hidden())
        .unwrap_or(false)
}

fn elapsed_secs(started_at_ms: f64) -> u64 {
    ((Date::now() - started_at_ms) / 1000.0).floor().max(0.0) as u64
}

fn closest_section_id(element: &Element) -> Option<String> {
    element
        .closest("section")
        .ok()
        .flatten()
        .map(|section| section.id())
        .filter(|id| !id.is_empty())
}

fn rejection_reason(reason: &wasm_bindgen::JsValue) -> Value {
    if reason.is_undefined() || reason.is_null() {
        return Value::Null;
    }
    let text = reason
        .dyn_ref::<JsError>()
        .map(|e| String::from(e.to_string()))
        .or_else(|| reason.as_string())
        .unwrap_or_else(|| format!("{:?}", reason));
    Value::from(text)
}

/// Wires up page-level engagement tracking for the landing page.
#[hook]
pub fn use_page_analytics(analytics: Analytics, session: &PageSession) {
    let started_at = use_mut_ref(Date::now);
    let depth = use_mut_ref(ScrollDepthTracker::default);

    // Page load
    {
        let analytics = analytics.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    analytics.track(
                        AnalyticsEvent::new("page_loaded")
                            .with("page_title", document.title())
                            .with("referrer", document.referrer()),
                    );
                }
                || ()
            },
            (),
        );
    }

    // Visibility changes are dispatched on the document.
    {
        let analytics = analytics.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().and_then(|w| w.document());
                let listener = document.map(|document| {
                    let target = document.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        let name = if target.hidden() { "page_hidden" } else { "page_visible" };
                        analytics.track(AnalyticsEvent::new(name));
                    }) as Box<dyn FnMut()>);
                    let _ = document.add_event_listener_with_callback(
                        "visibilitychange",
                        callback.as_ref().unchecked_ref(),
                    );
                    (document, callback)
                });
                move || {
                    if let Some((document, callback)) = listener {
                        let _ = document.remove_event_listener_with_callback(
                            "visibilitychange",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    // Primary call-to-action clicks, delegated from the window.
    {
        let analytics = analytics.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let Some(button) = target.closest(CTA_SELECTOR).ok().flatten() else {
                return;
            };
            let button_text = button.text_content().unwrap_or_default().trim().to_string();
            let section = closest_section_id(&button).unwrap_or_else(|| "unknown".to_string());
            analytics.track(
                AnalyticsEvent::new("cta_clicked")
                    .with("button_text", button_text)
                    .with("section", section),
            );
        });
    }

    // Scroll depth, measured once scrolling settles. Each scroll event
    // replaces the pending timeout, which cancels the previous one.
    {
        let analytics = analytics.clone();
        let depth = depth.clone();
        let pending = use_mut_ref(|| None::<Timeout>);
        use_event_with_window("scroll", move |_: Event| {
            let analytics = analytics.clone();
            let depth = depth.clone();
            *pending.borrow_mut() = Some(Timeout::new(SCROLL_DEPTH_DEBOUNCE_MS, move || {
                let Some(window) = web_sys::window() else { return };
                let scroll_top = window.page_y_offset().unwrap_or(0.0);
                let inner_height = window
                    .inner_height()
                    .ok()
                    .and_then(|h| h.as_f64())
                    .unwrap_or(0.0);
                let scroll_height = window
                    .document()
                    .and_then(|d| d.body())
                    .map(|b| b.scroll_height() as f64)
                    .unwrap_or(0.0);

                report_scroll_depth(
                    &mut depth.borrow_mut(),
                    &analytics,
                    scroll_top,
                    scroll_height - inner_height,
                );
            }));
        });
    }

    // Time on page
    {
        let analytics = analytics.clone();
        let started_at = started_at.clone();
        let depth = depth.clone();
        use_interval(
            move || {
                if document_hidden() {
                    return;
                }
                let seconds = elapsed_secs(*started_at.borrow());
                if should_report_time_on_page(seconds) {
                    analytics.track(
                        AnalyticsEvent::new("time_on_page")
                            .with("seconds", seconds)
                            .with("max_scroll_depth", depth.borrow().max_depth()),
                    );
                }
            },
            TIME_ON_PAGE_TICK_MS,
        );
    }

    // Page exit
    {
        let analytics = analytics.clone();
        let form_started = session.form_started;
        let plan_selected = session.selected_plan.clone();
        use_event_with_window("beforeunload", move |_: Event| {
            analytics.track(
                AnalyticsEvent::new("page_exit")
                    .with("time_spent_seconds", elapsed_secs(*started_at.borrow()))
                    .with("max_scroll_depth", depth.borrow().max_depth())
                    .with("form_started", form_started)
                    .with("plan_selected", plan_selected.clone()),
            );
        });
    }

    // Uncaught errors and rejected promises
    {
        let analytics = analytics.clone();
        use_event_with_window("error", move |e: ErrorEvent| {
            error!("Global error: {}", e.message());
            let stack = Reflect::get(&e.error(), &"stack".into())
                .ok()
                .and_then(|s| s.as_string());
            analytics.track(
                AnalyticsEvent::new("javascript_error")
                    .with("error_message", e.message())
                    .with("error_filename", e.filename())
                    .with("error_lineno", e.lineno())
                    .with("error_stack", stack.map(Value::from).unwrap_or(Value::Null)),
            );
        });
    }
    use_event_with_window("unhandledrejection", move |e: PromiseRejectionEvent| {
        let reason = rejection_reason(&e.reason());
        error!("Unhandled promise rejection: {}", reason);
        analytics.track(AnalyticsEvent::new("promise_rejection").with("reason", reason));
    });
}
