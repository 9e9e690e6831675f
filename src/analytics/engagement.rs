use std::collections::BTreeSet;

use super::{AnalyticsEvent, AnalyticsSink};
use crate::config::{SCROLL_DEPTH_MARKERS, TIME_ON_PAGE_REPORT_EVERY_SECS};

/// Rounded scroll position in percent of the scrollable height.
pub fn scroll_percent(scroll_top: f64, scrollable_height: f64) -> u32 {
    if scrollable_height <= 0.0 {
        // Nothing to scroll: the reader has seen everything.
        return 100;
    }
    (scroll_top / scrollable_height * 100.0).round().clamp(0.0, 100.0) as u32
}

#[derive(Debug, Default, Clone)]
pub struct ScrollDepthTracker {
    max_depth: u32,
    reported: BTreeSet<u32>,
}

impl ScrollDepthTracker {
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Records a scroll position and returns the markers crossed for the first time.
    pub fn observe(&mut self, percent: u32) -> Vec<u32> {
        self.max_depth = self.max_depth.max(percent);
        SCROLL_DEPTH_MARKERS
            .iter()
            .copied()
            .filter(|marker| percent >= *marker && self.reported.insert(*marker))
            .collect()
    }
}

/// Feeds one settled scroll measurement to the tracker and reports every
/// newly crossed marker.
pub fn report_scroll_depth(
    tracker: &mut ScrollDepthTracker,
    sink: &dyn AnalyticsSink,
    scroll_top: f64,
    scrollable_height: f64,
) {
    let percent = scroll_percent(scroll_top, scrollable_height);
    for marker in tracker.observe(percent) {
        sink.record(AnalyticsEvent::new("scroll_depth").with("depth_percent", marker));
    }
}

pub fn should_report_time_on_page(elapsed_secs: u64) -> bool {
    elapsed_secs > 0 && elapsed_secs % TIME_ON_PAGE_REPORT_EVERY_SECS == 0
}

/// Focus-to-blur timing for a single form field.
#[derive(Debug, Default, Clone)]
pub struct FieldTimer {
    started_at_ms: Option<f64>,
}

impl FieldTimer {
    pub fn start(&mut self, now_ms: f64) {
        self.started_at_ms = Some(now_ms);
    }

    /// Milliseconds since the last focus, or `None` if the field was never focused.
    pub fn elapsed(&self, now_ms: f64) -> Option<u64> {
        self.started_at_ms
            .map(|start| (now_ms - start).max(0.0).round() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::testing::RecordingSink;
    use serde_json::json;

    #[test]
    fn percent_rounds_and_clamps() {
        assert_eq!(scroll_percent(0.0, 1000.0), 0);
        assert_eq!(scroll_percent(245.0, 1000.0), 25);
        assert_eq!(scroll_percent(1200.0, 1000.0), 100);
        assert_eq!(scroll_percent(-10.0, 1000.0), 0);
    }

    #[test]
    fn unscrollable_page_counts_as_fully_read() {
        assert_eq!(scroll_percent(0.0, 0.0), 100);
    }

    #[test]
    fn each_marker_reported_once() {
        let mut tracker = ScrollDepthTracker::default();
        assert_eq!(tracker.observe(30), vec![25]);
        assert_eq!(tracker.observe(30), Vec::<u32>::new());
        assert_eq!(tracker.observe(80), vec![50, 75]);
        assert_eq!(tracker.observe(10), Vec::<u32>::new());
        assert_eq!(tracker.observe(100), vec![90, 100]);
        assert_eq!(tracker.observe(100), Vec::<u32>::new());
    }

    #[test]
    fn max_depth_never_decreases() {
        let mut tracker = ScrollDepthTracker::default();
        tracker.observe(62);
        tracker.observe(12);
        assert_eq!(tracker.max_depth(), 62);
    }

    #[test]
    fn time_on_page_reports_every_thirty_seconds() {
        assert!(!should_report_time_on_page(0));
        assert!(!should_report_time_on_page(29));
        assert!(should_report_time_on_page(30));
        assert!(!should_report_time_on_page(31));
        assert!(should_report_time_on_page(90));
    }

    #[test]
    fn field_timer_needs_a_focus_first() {
        let mut timer = FieldTimer::default();
        assert_eq!(timer.elapsed(500.0), None);
        timer.start(1_000.0);
        assert_eq!(timer.elapsed(3_400.4), Some(2_400));
    }

    #[test]
    fn every_settled_scroll_keeps_reporting() {
        let sink = RecordingSink::default();
        let mut tracker = ScrollDepthTracker::default();

        report_scroll_depth(&mut tracker, &sink, 300.0, 1000.0);
        report_scroll_depth(&mut tracker, &sink, 800.0, 1000.0);
        report_scroll_depth(&mut tracker, &sink, 1000.0, 1000.0);

        let depths: Vec<_> = sink
            .named("scroll_depth")
            .iter()
            .map(|e| e.get("depth_percent").cloned())
            .collect();
        assert_eq!(
            depths,
            vec![
                Some(json!(25)),
                Some(json!(50)),
                Some(json!(75)),
                Some(json!(90)),
                Some(json!(100)),
            ]
        );
        assert_eq!(tracker.max_depth(), 100);
    }
}
