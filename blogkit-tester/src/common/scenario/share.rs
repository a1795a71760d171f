use anyhow::{Context, Result, ensure};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx};
use blogkit_core::recording::RecordingOpener;
use blogkit_core::share::encode_component;
use blogkit_core::{EnhancerConfig, ShareContext, ShareDispatcher, SharePlatform};

pub struct ShareScenario;

impl CombinedScenario for ShareScenario {
    fn name(&self) -> &'static str {
        "Share Links"
    }

    fn run_logic(&self) -> Result<()> {
        let cfg = EnhancerConfig::default();
        let opener = RecordingOpener::default();
        let dispatcher = ShareDispatcher::new(opener.clone(), cfg.share_popup_features.clone());
        let ctx = ShareContext {
            url: "https://blog.example/posts/rust & wasm?ref=feed".into(),
            title: "Rust & WASM: a tour".into(),
            description: "Notes from the road".into(),
        };

        for platform in SharePlatform::ALL {
            let url = dispatcher
                .dispatch(platform.id(), &ctx)
                .with_context(|| format!("{platform} produced no URL"))?;
            ensure!(
                url.contains(&encode_component(&ctx.url)),
                "{platform} must embed the encoded page URL: {url}"
            );
            ensure!(!url.contains('{'), "{platform} left a placeholder: {url}");
        }
        ensure!(dispatcher.dispatch("myspace", &ctx).is_none());
        ensure!(opener.opened().len() == SharePlatform::ALL.len());
        Ok(())
    }
}

#[async_trait::async_trait]
impl BrowserScenario for ShareScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.open(driver).await?;
        let buttons = driver.find_all(By::Css("[data-share]")).await?;
        for button in &buttons {
            let platform = button.attr("data-share").await?.unwrap_or_default();
            ensure!(
                platform.parse::<SharePlatform>().is_ok(),
                "share button names unknown platform `{platform}`"
            );
        }
        ctx.note(&format!("{} share buttons recognised", buttons.len()));
        Ok(())
    }
}
