use anyhow::{Result, ensure};
use futures::executor::block_on;
use std::time::Duration;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, count};
use blogkit_core::recording::{InstantSleeper, RecordingToastHost, ScriptedClipboard, ToastEvent};
use blogkit_core::{CopyLinkController, CopyOutcome, EnhancerConfig};

pub struct CopyScenario;

impl CombinedScenario for CopyScenario {
    fn name(&self) -> &'static str {
        "Copy Link and Toast"
    }

    fn run_logic(&self) -> Result<()> {
        let cfg = EnhancerConfig::default();
        let url = "https://blog.example/posts/hello";

        let clipboard = ScriptedClipboard::accepting();
        let toasts = RecordingToastHost::default();
        let sleeper = InstantSleeper::default();
        let ctl = CopyLinkController::new(clipboard.clone(), toasts.clone(), sleeper.clone(), &cfg);
        ensure!(block_on(ctl.copy(url)) == CopyOutcome::Copied);
        ensure!(clipboard.contents().as_deref() == Some(url));
        ensure!(
            toasts.events()
                == [
                    ToastEvent::Shown(cfg.toast_message.clone()),
                    ToastEvent::Exiting,
                    ToastEvent::Removed,
                ]
        );
        ensure!(sleeper.slept() == [cfg.toast_visible_ms, cfg.toast_exit_ms]);
        ensure!(toasts.visible() == 0, "toast is gone afterwards");

        let quiet = RecordingToastHost::default();
        let failing = CopyLinkController::new(
            ScriptedClipboard::rejecting("denied"),
            quiet.clone(),
            InstantSleeper::default(),
            &cfg,
        );
        ensure!(matches!(block_on(failing.copy(url)), CopyOutcome::Failed(_)));
        ensure!(quiet.events().is_empty(), "no toast when the copy fails");
        Ok(())
    }
}

#[async_trait::async_trait]
impl BrowserScenario for CopyScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.open(driver).await?;
        let Ok(button) = driver.find(By::Css("[data-copy-link]")).await else {
            ctx.note("no copy-link button on this page");
            return Ok(());
        };
        button.click().await?;

        // Headless browsers may deny clipboard access; then no toast shows at all.
        tokio::time::sleep(Duration::from_millis(500)).await;
        let shown = count(driver, ".blogkit-toast").await?;
        ensure!(shown <= 1, "{shown} toasts visible after one click");

        tokio::time::sleep(Duration::from_millis(3500)).await;
        ensure!(
            count(driver, ".blogkit-toast").await? == 0,
            "toast should be removed after its exit animation"
        );
        ctx.note(if shown == 1 {
            "toast shown and removed"
        } else {
            "clipboard denied; no toast"
        });
        Ok(())
    }
}
