use anyhow::{Context, Result, ensure};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, count, eval};
use blogkit_core::{EnhancerConfig, HeadingLevel, HeadingSource, TocIndex};

pub struct TocScenario;

impl CombinedScenario for TocScenario {
    fn name(&self) -> &'static str {
        "Table of Contents"
    }

    fn run_logic(&self) -> Result<()> {
        let cfg = EnhancerConfig::default();
        let min = usize::try_from(cfg.toc_min_headings)?;
        let prefix = cfg.toc_id_prefix.as_str();

        let headings = [
            HeadingSource::new(Some("heading-1"), HeadingLevel::H2, "Why"),
            HeadingSource::new(None, HeadingLevel::H2, "  How  "),
            HeadingSource::new(None, HeadingLevel::H3, "Details"),
        ];
        let index = TocIndex::build(&headings, prefix, min).context("three headings qualify")?;
        let ids: Vec<&str> = index.entries().iter().map(|e| e.id.as_str()).collect();
        ensure!(
            ids == ["heading-1", "heading-1-1", "heading-2"],
            "generated ids must stay unique: {ids:?}"
        );
        ensure!(index.entries()[1].text == "How", "heading text is trimmed");
        ensure!(index.assignments().len() == 2, "existing ids are left alone");

        ensure!(
            TocIndex::build(&headings[..2], prefix, min).is_none(),
            "two headings are below the threshold"
        );
        Ok(())
    }
}

const BROKEN_LINKS: &str = "return Array.from(document.querySelectorAll('.table-of-contents a'))\
    .filter(a => !document.getElementById(a.getAttribute('href').slice(1))).length;";

#[async_trait::async_trait]
impl BrowserScenario for TocScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        ctx.open(driver).await?;
        let rendered = count(driver, ".table-of-contents li").await?;
        match ctx.bridge.state().await?.toc_entries {
            Some(entries) => {
                ensure!(rendered == entries, "{entries} entries built, {rendered} rendered");
                let broken = eval(driver, BROKEN_LINKS).await?.as_u64().unwrap_or(u64::MAX);
                ensure!(broken == 0, "{broken} contents links point nowhere");
                ctx.note(&format!("table of contents with {entries} entries"));
            }
            None => {
                ensure!(rendered == 0, "no table of contents expected on this page");
                ctx.note("page too short for a table of contents");
            }
        }
        Ok(())
    }
}
