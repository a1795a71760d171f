//! Reading progress math and the progress bar controller.
use serde::{Deserialize, Serialize};

use crate::surface::StyleTarget;

/// Fixed styles for the progress bar inserted at the top of the viewport.
pub const PROGRESS_BAR_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("width", "0%"),
    ("height", "3px"),
    (
        "background",
        "linear-gradient(90deg, var(--color-primary), var(--color-accent))",
    ),
    ("z-index", "9999"),
    ("transition", "width 0.1s ease"),
];

/// Scroll position snapshot taken on each scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub const fn new(scroll_top: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            scroll_top,
            viewport_height,
            document_height,
        }
    }

    /// Share of the scrollable range already read, in `[0, 100]`.
    ///
    /// A page that cannot scroll (document no taller than the viewport)
    /// reports 0, as does any non-finite input.
    #[must_use]
    pub fn percent(&self) -> f64 {
        let range = self.document_height - self.viewport_height;
        if !(range.is_finite() && self.scroll_top.is_finite()) || range <= 0.0 {
            return 0.0;
        }
        (self.scroll_top / range * 100.0).clamp(0.0, 100.0)
    }
}

/// Format a percentage as a CSS width.
#[must_use]
pub fn css_width(percent: f64) -> String {
    format!("{percent}%")
}

pub struct ProgressIndicator<B: StyleTarget> {
    bar: B,
}

impl<B: StyleTarget> ProgressIndicator<B> {
    pub fn new(bar: B) -> Self {
        bar.apply_styles(PROGRESS_BAR_STYLE);
        Self { bar }
    }

    pub fn on_scroll(&self, metrics: ScrollMetrics) -> f64 {
        let percent = metrics.percent();
        self.bar.set_style("width", &css_width(percent));
        percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingElement;

    #[test]
    fn halfway_is_fifty_percent() {
        assert!((ScrollMetrics::new(500.0, 1000.0, 2000.0).percent() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn overscroll_clamps() {
        assert!(
            (ScrollMetrics::new(1500.0, 1000.0, 2000.0).percent() - 100.0).abs() < f64::EPSILON
        );
        assert!(ScrollMetrics::new(-40.0, 1000.0, 2000.0).percent().abs() < f64::EPSILON);
    }

    #[test]
    fn unscrollable_page_is_zero_not_nan() {
        let equal = ScrollMetrics::new(0.0, 1000.0, 1000.0).percent();
        assert!(equal.is_finite());
        assert!(equal.abs() < f64::EPSILON);
        let shorter = ScrollMetrics::new(10.0, 1000.0, 800.0).percent();
        assert!(shorter.abs() < f64::EPSILON);
        assert!(ScrollMetrics::new(f64::NAN, 1000.0, 2000.0).percent().abs() < f64::EPSILON);
    }

    #[test]
    fn indicator_styles_bar_and_tracks_width() {
        let bar = RecordingElement::default();
        let indicator = ProgressIndicator::new(bar.clone());
        assert_eq!(bar.style("height").as_deref(), Some("3px"));
        assert_eq!(bar.style("width").as_deref(), Some("0%"));
        assert_eq!(bar.style("z-index").as_deref(), Some("9999"));

        indicator.on_scroll(ScrollMetrics::new(500.0, 1000.0, 2000.0));
        assert_eq!(bar.style("width").as_deref(), Some("50%"));
        indicator.on_scroll(ScrollMetrics::new(0.0, 900.0, 900.0));
        assert_eq!(bar.style("width").as_deref(), Some("0%"));
        indicator.on_scroll(ScrollMetrics::new(250.0, 1000.0, 2000.0));
        assert_eq!(bar.style("width").as_deref(), Some("25%"));
    }
}
