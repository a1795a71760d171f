use anyhow::{Context, Result, ensure};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx};
use blogkit_core::recording::RecordingElement;
use blogkit_core::{EnhancerConfig, MemoryPreferenceStore, Theme, ThemeController, ThemeValue};

pub struct ThemeScenario;

impl CombinedScenario for ThemeScenario {
    fn name(&self) -> &'static str {
        "Theme Persistence"
    }

    fn run_logic(&self) -> Result<()> {
        let cfg = EnhancerConfig::default();
        let attr = cfg.theme_attribute.as_str();
        let key = cfg.theme_storage_key.as_str();

        let store = MemoryPreferenceStore::new();
        let root = RecordingElement::default();
        let mut first_visit = ThemeController::new(store.clone(), root.clone(), &cfg);
        ensure!(root.attribute(attr).as_deref() == Some("light"), "first visit is light");
        ensure!(store.peek(key).as_deref() == Some("light"), "default is persisted");

        first_visit.toggle();
        ensure!(root.attribute(attr).as_deref() == Some("dark"));
        let second_visit = ThemeController::new(store.clone(), RecordingElement::default(), &cfg);
        ensure!(
            *second_visit.current() == ThemeValue::Known(Theme::Dark),
            "dark survives a reload"
        );

        let odd_root = RecordingElement::default();
        let mut odd = ThemeController::new(
            MemoryPreferenceStore::new().with_entry(key, "sepia"),
            odd_root.clone(),
            &cfg,
        );
        ensure!(odd_root.attribute(attr).as_deref() == Some("sepia"));
        ensure!(odd.toggle() == Theme::Light, "unknown themes toggle to light");

        let mut blocked = ThemeController::new(
            MemoryPreferenceStore::read_only(),
            RecordingElement::default(),
            &cfg,
        );
        ensure!(blocked.toggle() == Theme::Dark, "toggle works without storage");
        Ok(())
    }
}

async fn root_theme(driver: &WebDriver) -> Result<Option<String>> {
    let html = driver.find(By::Tag("html")).await?;
    Ok(html.attr("data-theme").await?)
}

#[async_trait::async_trait]
impl BrowserScenario for ThemeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.open(driver).await?;
        let before = ctx.bridge.state().await?.theme.context("theme widget not mounted")?;
        ensure!(root_theme(driver).await?.as_deref() == Some(before.as_str()));

        driver
            .find(By::Id("themeToggle"))
            .await
            .context("theme toggle button")?
            .click()
            .await?;
        let after = ctx.bridge.state().await?.theme.context("theme after click")?;
        ensure!(after != before, "click should flip the theme ({before} -> {after})");
        ensure!(root_theme(driver).await?.as_deref() == Some(after.as_str()));

        driver.refresh().await?;
        ctx.bridge.ensure_available().await?;
        let reloaded = ctx.bridge.state().await?.theme;
        ensure!(
            reloaded.as_deref() == Some(after.as_str()),
            "theme should persist across reloads"
        );
        ctx.note(&format!("theme {before} -> {after}, persisted"));

        ctx.bridge.toggle_theme().await?;
        Ok(())
    }
}
