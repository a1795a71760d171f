use anyhow::{Result, ensure};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, eval, scroll_to_fraction};
use blogkit_core::recording::RecordingElement;
use blogkit_core::{ProgressIndicator, ScrollMetrics};

pub struct ProgressScenario;

impl CombinedScenario for ProgressScenario {
    fn name(&self) -> &'static str {
        "Reading Progress"
    }

    fn run_logic(&self) -> Result<()> {
        let bar = RecordingElement::default();
        let indicator = ProgressIndicator::new(bar.clone());
        ensure!(bar.style("width").as_deref() == Some("0%"));
        ensure!(bar.style("position").as_deref() == Some("fixed"));

        let half = indicator.on_scroll(ScrollMetrics::new(500.0, 1000.0, 2000.0));
        ensure!((half - 50.0).abs() < f64::EPSILON);
        ensure!(bar.style("width").as_deref() == Some("50%"));

        let short_page = indicator.on_scroll(ScrollMetrics::new(0.0, 1000.0, 800.0));
        ensure!(short_page.abs() < f64::EPSILON, "pages shorter than the viewport report 0%");

        let overscroll = indicator.on_scroll(ScrollMetrics::new(1400.0, 1000.0, 2000.0));
        ensure!((overscroll - 100.0).abs() < f64::EPSILON, "rubber-band scrolling is clamped");
        Ok(())
    }
}

const BAR_WIDTH: &str =
    "const b = document.getElementById('reading-progress'); return b ? b.style.width : null;";
fn percent_of(width: &serde_json::Value) -> Option<f64> {
    width.as_str()?.strip_suffix('%')?.parse().ok()
}

const SCROLL_RANGE: &str = "return document.documentElement.scrollHeight - window.innerHeight;";

#[async_trait::async_trait]
impl BrowserScenario for ProgressScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.open(driver).await?;
        let range = eval(driver, SCROLL_RANGE).await?.as_f64().unwrap_or(0.0);
        if range <= 0.0 {
            ensure!(eval(driver, BAR_WIDTH).await?.as_str() == Some("0%"));
            ctx.note("page does not scroll; bar stays at 0%");
            return Ok(());
        }

        // Sub-pixel scroll offsets keep the bar a hair short of the ends.
        scroll_to_fraction(driver, 1.0).await?;
        let width = eval(driver, BAR_WIDTH).await?;
        ensure!(
            percent_of(&width).is_some_and(|p| p >= 99.0),
            "bar should be full at the bottom, got {width}"
        );
        scroll_to_fraction(driver, 0.0).await?;
        let width = eval(driver, BAR_WIDTH).await?;
        ensure!(
            percent_of(&width).is_some_and(|p| p <= 1.0),
            "bar should empty at the top, got {width}"
        );
        ctx.note("progress bar tracked the scroll");
        Ok(())
    }
}
