use anyhow::{Context, Result, ensure};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, eval, scroll_to_fraction};
use blogkit_core::recording::ManualClock;
use blogkit_core::{EngagementEvent, EngagementTracker, ScrollMetrics};

pub struct EngagementScenario;

impl CombinedScenario for EngagementScenario {
    fn name(&self) -> &'static str {
        "Engagement Logging"
    }

    fn run_logic(&self) -> Result<()> {
        let clock = ManualClock::at(1_000.0);
        let mut tracker = EngagementTracker::start("/posts/hello", clock.clone());
        ensure!(tracker.page_view().to_json().contains("\"event\":\"page_view\""));

        tracker.on_scroll(ScrollMetrics::new(250.0, 1000.0, 2000.0));
        tracker.on_scroll(ScrollMetrics::new(100.0, 1000.0, 2000.0));
        ensure!(tracker.max_scroll() == 25, "max scroll never decreases");

        clock.advance(12_400.0);
        let summary = tracker.finish().context("first finish emits")?;
        ensure!(
            summary
                == EngagementEvent::EngagementSummary {
                    path: "/posts/hello".into(),
                    time_spent_seconds: 12,
                    max_scroll_percent: 25,
                }
        );
        ensure!(summary.to_json().contains("\"maxScrollPercent\":25"));
        ensure!(tracker.finish().is_none(), "summary is emitted once");
        Ok(())
    }
}

#[async_trait::async_trait]
impl BrowserScenario for EngagementScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.open(driver).await?;
        scroll_to_fraction(driver, 0.5).await?;

        let summary = ctx.bridge.engagement().await?;
        let pathname = eval(driver, "return window.location.pathname;").await?;
        ensure!(
            summary["event"] == "engagement_summary",
            "unexpected summary {summary}"
        );
        ensure!(summary["path"] == pathname, "summary path {} != {pathname}", summary["path"]);

        let seen = ctx.bridge.state().await?.max_scroll_percent.unwrap_or(0);
        let reported = summary["maxScrollPercent"].as_u64().unwrap_or(0);
        ensure!(
            reported == u64::from(seen),
            "summary reports {reported}% but the tracker saw {seen}%"
        );
        ctx.note(&format!("engagement summary {summary}"));
        Ok(())
    }
}
