use anyhow::{Context, Result};
use std::time::Duration;
use thirtyfour::prelude::*;

use crate::browser::TestBridge;

pub mod copy;
pub mod engagement;
pub mod menu;
pub mod progress;
pub mod share;
pub mod smoke;
pub mod theme;
pub mod toc;

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub base_url: String,
    pub bridge: TestBridge<'a>,
    pub verbose: bool,
}

impl ScenarioCtx<'_> {
    /// Load the page under test and wait for the bridge to appear.
    pub async fn open(&self, driver: &WebDriver) -> Result<()> {
        driver.goto(&self.base_url).await?;
        self.bridge.ensure_available().await
    }

    pub fn note(&self, message: &str) {
        if self.verbose {
            println!("  {message}");
        }
    }
}

// Browser half of a scenario
#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;
}

// Every scenario checks the controllers with in-memory fakes and can replay
// the same behaviour against a real page.
pub trait CombinedScenario: BrowserScenario {
    fn name(&self) -> &'static str;
    fn run_logic(&self) -> Result<()>;
}

const CATALOG: &[(&str, &str)] = &[
    ("smoke", "Smoke Test"),
    ("theme", "Theme Persistence"),
    ("share", "Share Links"),
    ("menu", "Mobile Menu"),
    ("progress", "Reading Progress"),
    ("toc", "Table of Contents"),
    ("copy", "Copy Link and Toast"),
    ("engagement", "Engagement Logging"),
];

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "theme" | "dark-mode" => Some(Box::new(theme::ThemeScenario)),
        "share" | "share-links" => Some(Box::new(share::ShareScenario)),
        "menu" | "mobile-menu" => Some(Box::new(menu::MenuScenario)),
        "progress" | "reading-progress" => Some(Box::new(progress::ProgressScenario)),
        "toc" | "table-of-contents" => Some(Box::new(toc::TocScenario)),
        "copy" | "copy-link" => Some(Box::new(copy::CopyScenario)),
        "engagement" => Some(Box::new(engagement::EngagementScenario)),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    CATALOG.to_vec()
}

/// Expand `all` into every catalogued scenario, keeping the others in order.
pub fn expand_scenarios(requested: &[String]) -> Vec<String> {
    let mut scenarios = Vec::new();
    for name in requested {
        if name.eq_ignore_ascii_case("all") {
            scenarios.extend(CATALOG.iter().map(|(key, _)| (*key).to_string()));
        } else {
            scenarios.push(name.clone());
        }
    }
    scenarios.dedup();
    scenarios
}

pub(crate) async fn count(driver: &WebDriver, css: &str) -> Result<usize> {
    Ok(driver.find_all(By::Css(css)).await?.len())
}

pub(crate) async fn eval(driver: &WebDriver, script: &str) -> Result<serde_json::Value> {
    let ret = driver
        .execute(script, vec![])
        .await
        .with_context(|| format!("evaluating `{script}`"))?;
    Ok(ret.json().clone())
}

/// Scroll the window and give passive listeners a frame to run.
pub(crate) async fn scroll_to_fraction(driver: &WebDriver, fraction: f64) -> Result<()> {
    let script = format!(
        "window.scrollTo(0, (document.documentElement.scrollHeight - window.innerHeight) * {fraction});"
    );
    eval(driver, &script).await?;
    tokio::time::sleep(Duration::from_millis(250)).await;
    Ok(())
}
