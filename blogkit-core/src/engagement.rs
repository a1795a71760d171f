//! Page-view and engagement logging.
//!
//! Nothing leaves the page: events are written to the log under
//! [`LOG_TARGET`] as JSON, ready for a telemetry sink to pick up later.
use serde::{Deserialize, Serialize};

use crate::progress::ScrollMetrics;

pub const LOG_TARGET: &str = "blogkit::engagement";

/// Wall-clock source in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EngagementEvent {
    PageView {
        path: String,
    },
    #[serde(rename_all = "camelCase")]
    EngagementSummary {
        path: String,
        time_spent_seconds: u64,
        max_scroll_percent: u8,
    },
}

impl EngagementEvent {
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| format!("{{\"error\":\"{err}\"}}"))
    }

    fn emit(&self) {
        log::info!(target: LOG_TARGET, "{}", self.to_json());
    }
}

pub struct EngagementTracker<C: Clock> {
    path: String,
    clock: C,
    started_ms: f64,
    max_scroll: u8,
    finished: bool,
}

impl<C: Clock> EngagementTracker<C> {
    /// Start tracking and log the page view.
    pub fn start(path: impl Into<String>, clock: C) -> Self {
        let started_ms = clock.now_ms();
        let tracker = Self {
            path: path.into(),
            clock,
            started_ms,
            max_scroll: 0,
            finished: false,
        };
        tracker.page_view().emit();
        tracker
    }

    #[must_use]
    pub fn page_view(&self) -> EngagementEvent {
        EngagementEvent::PageView {
            path: self.path.clone(),
        }
    }

    #[must_use]
    pub const fn max_scroll(&self) -> u8 {
        self.max_scroll
    }

    /// Record a scroll position; the maximum never decreases.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> u8 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = metrics.percent().round() as u8;
        self.max_scroll = self.max_scroll.max(percent);
        self.max_scroll
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn time_spent_seconds(&self) -> u64 {
        let elapsed = (self.clock.now_ms() - self.started_ms).max(0.0);
        (elapsed / 1000.0).round() as u64
    }

    #[must_use]
    pub fn summary(&self) -> EngagementEvent {
        EngagementEvent::EngagementSummary {
            path: self.path.clone(),
            time_spent_seconds: self.time_spent_seconds(),
            max_scroll_percent: self.max_scroll,
        }
    }

    /// Log the summary at page unload. Later calls return `None`.
    pub fn finish(&mut self) -> Option<EngagementEvent> {
        if self.finished {
            return None;
        }
        self.finished = true;
        let summary = self.summary();
        summary.emit();
        Some(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::ManualClock;

    #[test]
    fn max_scroll_is_monotonic() {
        let mut tracker = EngagementTracker::start("/posts/a", ManualClock::default());
        let mut previous = 0;
        for top in [0.0, 200.0, 600.0, 900.0, 400.0, 100.0, 0.0] {
            let max = tracker.on_scroll(ScrollMetrics::new(top, 1000.0, 2000.0));
            assert!(max >= previous);
            previous = max;
        }
        assert_eq!(tracker.max_scroll(), 90);
    }

    #[test]
    fn unscrollable_page_keeps_max_at_zero() {
        let mut tracker = EngagementTracker::start("/", ManualClock::default());
        assert_eq!(tracker.on_scroll(ScrollMetrics::new(0.0, 800.0, 800.0)), 0);
    }

    #[test]
    fn summary_rounds_seconds_and_serializes_contract_fields() {
        let clock = ManualClock::at(10_000.0);
        let mut tracker = EngagementTracker::start("/posts/a", clock.clone());
        tracker.on_scroll(ScrollMetrics::new(333.0, 1000.0, 2000.0));
        clock.advance(12_600.0);

        let summary = tracker.finish().expect("first finish");
        assert_eq!(
            summary,
            EngagementEvent::EngagementSummary {
                path: "/posts/a".into(),
                time_spent_seconds: 13,
                max_scroll_percent: 33,
            }
        );
        let json: serde_json::Value = serde_json::from_str(&summary.to_json()).unwrap();
        assert_eq!(json["event"], "engagement_summary");
        assert_eq!(json["timeSpentSeconds"], 13);
        assert_eq!(json["maxScrollPercent"], 33);
        assert!(tracker.finish().is_none());
    }

    #[test]
    fn page_view_serializes_with_event_tag() {
        let tracker = EngagementTracker::start("/about", ManualClock::default());
        assert_eq!(
            tracker.page_view().to_json(),
            r#"{"event":"page_view","path":"/about"}"#
        );
    }
}
