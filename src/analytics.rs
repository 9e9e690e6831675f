//! Analytics events and the sink they are handed to.
//!
//! Nothing here talks to a real analytics provider. The console sink logs every
//! record, enriched with page context, so a real integration only has to swap
//! the sink.

pub mod engagement;

use std::rc::Rc;

use chrono::{DateTime, SecondsFormat, Utc};
use log::warn;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub event: String,
    pub properties: Map<String, Value>,
}

impl AnalyticsEvent {
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            properties: Map::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Flattens the event into one record. Caller properties override the
    /// page context keys when they collide.
    pub fn enrich(&self, page: &PageContext, timestamp: DateTime<Utc>) -> Value {
        let mut record = Map::new();
        record.insert("event".into(), Value::from(self.event.clone()));
        record.insert(
            "timestamp".into(),
            Value::from(timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        record.insert("page_url".into(), Value::from(page.page_url.clone()));
        record.insert("user_agent".into(), Value::from(page.user_agent.clone()));
        record.insert("referrer".into(), Value::from(page.referrer.clone()));
        for (key, value) in &self.properties {
            record.insert(key.clone(), value.clone());
        }
        Value::Object(record)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageContext {
    pub page_url: String,
    pub user_agent: String,
    pub referrer: String,
}

impl PageContext {
    pub fn current() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        Self {
            page_url: window.location().href().unwrap_or_default(),
            user_agent: window.navigator().user_agent().unwrap_or_default(),
            referrer: window.document().map(|d| d.referrer()).unwrap_or_default(),
        }
    }
}

pub trait AnalyticsSink {
    fn record(&self, event: AnalyticsEvent);
}

/// Logs each record to the browser console as a plain object.
pub struct ConsoleSink;

impl AnalyticsSink for ConsoleSink {
    fn record(&self, event: AnalyticsEvent) {
        let record = event.enrich(&PageContext::current(), Utc::now());
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        match record.serialize(&serializer) {
            Ok(js) => web_sys::console::log_2(&"Analytics Event:".into(), &js),
            Err(e) => warn!("Could not hand analytics event {} to console: {}", event.event, e),
        }
    }
}

/// Cheap, clonable handle components carry around.
#[derive(Clone)]
pub struct Analytics {
    sink: Rc<dyn AnalyticsSink>,
}

impl Analytics {
    pub fn new(sink: Rc<dyn AnalyticsSink>) -> Self {
        Self { sink }
    }

    pub fn console() -> Self {
        Self::new(Rc::new(ConsoleSink))
    }

    pub fn track(&self, event: AnalyticsEvent) {
        self.sink.record(event);
    }
}

impl AnalyticsSink for Analytics {
    fn record(&self, event: AnalyticsEvent) {
        self.track(event);
    }
}

impl PartialEq for Analytics {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.sink, &other.sink)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingSink;
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn page() -> PageContext {
        PageContext {
            page_url: "https://pythonwebcourse.com/#pricing".into(),
            user_agent: "test-agent".into(),
            referrer: "https://search.example".into(),
        }
    }

    #[test]
    fn enrich_adds_page_context_and_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let record = AnalyticsEvent::new("plan_selected")
            .with("plan", "Cohort")
            .enrich(&page(), at);

        assert_eq!(
            record,
            json!({
                "event": "plan_selected",
                "timestamp": "2024-03-01T12:30:00.000Z",
                "page_url": "https://pythonwebcourse.com/#pricing",
                "user_agent": "test-agent",
                "referrer": "https://search.example",
                "plan": "Cohort",
            })
        );
    }

    #[test]
    fn caller_properties_win_over_page_context() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let record = AnalyticsEvent::new("page_loaded")
            .with("referrer", "direct")
            .enrich(&page(), at);
        assert_eq!(record["referrer"], json!("direct"));
    }

    #[test]
    fn handle_forwards_to_sink() {
        let sink = Rc::new(RecordingSink::default());
        let analytics = Analytics::new(sink.clone());
        analytics.track(AnalyticsEvent::new("page_visible"));
        analytics.track(AnalyticsEvent::new("page_hidden"));
        assert_eq!(sink.events.borrow().len(), 2);
        assert_eq!(sink.named("page_hidden").len(), 1);
    }

    #[test]
    fn handles_compare_by_sink_identity() {
        let sink: Rc<dyn AnalyticsSink> = Rc::new(RecordingSink::default());
        let a = Analytics::new(sink.clone());
        let b = Analytics::new(sink);
        let c = Analytics::new(Rc::new(RecordingSink::default()));
        assert!(a == b);
        assert!(a != c);
    }
}
