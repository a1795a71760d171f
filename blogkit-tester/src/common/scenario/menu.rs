use anyhow::{Context, Result, ensure};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, eval};
use blogkit_core::MenuController;
use blogkit_core::recording::RecordingElement;

pub struct MenuScenario;

impl CombinedScenario for MenuScenario {
    fn name(&self) -> &'static str {
        "Mobile Menu"
    }

    fn run_logic(&self) -> Result<()> {
        let menu = RecordingElement::default();
        let button = RecordingElement::default();
        let mut ctl = MenuController::new(Some(menu.clone()), Some(button.clone()));

        ensure!(ctl.toggle(), "first toggle opens");
        ensure!(menu.style("display").as_deref() == Some("flex"));
        ensure!(button.has_class("active"));

        ensure!(!ctl.toggle(), "second toggle closes");
        ensure!(menu.style_count() == 0, "closing clears the overlay styles");
        ensure!(!button.has_class("active"));

        let lone_button = RecordingElement::default();
        let mut headless =
            MenuController::<RecordingElement, _>::new(None, Some(lone_button.clone()));
        ensure!(headless.toggle(), "flag flips without a menu element");
        ensure!(lone_button.has_class("active"));
        Ok(())
    }
}

const MENU_DISPLAY: &str =
    "const m = document.querySelector('.nav-menu'); return m ? m.style.display : null;";

#[async_trait::async_trait]
impl BrowserScenario for MenuScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.open(driver).await?;
        ensure!(
            ctx.bridge.state().await?.menu_open == Some(false),
            "menu should start closed"
        );

        // The toggle is hidden at desktop widths, so drive it through the bridge.
        let opened = ctx.bridge.toggle_menu().await?.context("menu widget not mounted")?;
        ensure!(opened, "first toggle should open the menu");
        ensure!(eval(driver, MENU_DISPLAY).await?.as_str() == Some("flex"));

        let reopened = ctx.bridge.toggle_menu().await?;
        ensure!(reopened == Some(false), "second toggle should close the menu");
        ensure!(eval(driver, MENU_DISPLAY).await?.as_str() == Some(""));
        ctx.note("menu opened and closed");
        Ok(())
    }
}
