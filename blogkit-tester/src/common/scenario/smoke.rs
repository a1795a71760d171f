use anyhow::{Result, ensure};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, count};
use blogkit_core::recording::{RecordingImage, RecordingScrollHost};
use blogkit_core::{AnchorHandler, AnchorOutcome, EnhancerConfig, LazyLoader, LoaderMode};

pub struct SmokeScenario;

impl CombinedScenario for SmokeScenario {
    fn name(&self) -> &'static str {
        "Smoke Test"
    }

    fn run_logic(&self) -> Result<()> {
        let cfg = EnhancerConfig::default();
        cfg.validate()?;

        let image = RecordingImage::new("placeholder.svg", Some("photo.jpg"));
        let mut loader = LazyLoader::new(vec![image.clone()], LoaderMode::Observing, &cfg);
        let revealed = loader.on_intersection([(image.clone(), true), (image.clone(), true)]);
        ensure!(revealed.len() == 1, "an image is revealed once");
        ensure!(image.source() == "photo.jpg", "deferred source swapped in");
        ensure!(image.is_loaded(), "revealed image marked loaded");

        let anchors = AnchorHandler::new(RecordingScrollHost::with_ids(&["intro"]));
        ensure!(anchors.follow("#intro") == AnchorOutcome::Scrolled);
        ensure!(anchors.follow("#gone") == AnchorOutcome::Unmatched);
        ensure!(anchors.follow("#") == AnchorOutcome::Empty);
        Ok(())
    }
}

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.open(driver).await?;
        ensure!(
            count(driver, "body.loaded").await? == 1,
            "body should carry the `loaded` class once enhancements run"
        );
        ensure!(
            count(driver, "#reading-progress").await? == 1,
            "exactly one progress bar expected"
        );
        ctx.note("page enhanced, bridge connected");
        Ok(())
    }
}
