use anyhow::{Context, Result};
use chrono::Utc;
use std::{fs, path::Path};
use thirtyfour::prelude::*;

use crate::browser::bridge::BRIDGE_STATE_SCRIPT;

pub fn artifacts_dir(base: &str, browser: &str, scenario: &str) -> String {
    let ts = Utc::now().format("%Y%m%dT%H%M%S");
    format!("{base}/{browser}/{scenario}/{ts}")
}

/// Save what the page looked like when a browser scenario failed.
pub async fn capture_artifacts(driver: &WebDriver, dir: &str, err: &anyhow::Error) -> Result<()> {
    let screenshot = driver.screenshot_as_png().await.ok();
    let source = driver.source().await.ok();
    let state = driver
        .execute(BRIDGE_STATE_SCRIPT, vec![])
        .await
        .ok()
        .map(|ret| ret.json().clone());
    let chain = format!("{err:#}");

    write_artifact_files(
        Path::new(dir),
        screenshot.as_deref(),
        source.as_deref(),
        state.as_ref(),
        &chain,
    )
}

fn write_artifact_files(
    dir: &Path,
    screenshot: Option<&[u8]>,
    source: Option<&str>,
    state: Option<&serde_json::Value>,
    error_chain: &str,
) -> Result<()> {
    fs::create_dir_all(dir).context("creating artifacts dir")?;

    if let Some(png) = screenshot {
        let _ = fs::write(dir.join("screenshot.png"), png);
    }
    if let Some(src) = source {
        let _ = fs::write(dir.join("dom.html"), src);
    }
    if let Some(state_json) = state.filter(|value| !value.is_null()) {
        let payload = serde_json::to_vec_pretty(state_json).unwrap_or_default();
        let _ = fs::write(dir.join("bridge-state.json"), payload);
    }
    let _ = fs::write(dir.join("error.txt"), error_chain);

    Ok(())
}

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scratch_dir(label: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "blogkit-{label}-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    #[test]
    fn split_csv_trims_and_filters() {
        assert_eq!(split_csv(" theme, ,toc,  copy "), vec!["theme", "toc", "copy"]);
    }

    #[test]
    fn artifacts_dir_nests_browser_then_scenario() {
        let dir = artifacts_dir("target/out", "firefox", "menu");
        assert!(dir.starts_with("target/out/firefox/menu/"));
    }

    #[test]
    fn null_bridge_state_is_not_written() {
        let base = scratch_dir("artifacts");
        write_artifact_files(&base, None, Some("<html />"), Some(&json!(null)), "boom")
            .expect("write artifacts");

        assert!(base.join("dom.html").exists());
        assert!(base.join("error.txt").exists());
        assert!(!base.join("bridge-state.json").exists());
        assert!(!base.join("screenshot.png").exists());
    }

    #[test]
    fn bridge_state_is_pretty_printed() {
        let base = scratch_dir("state");
        let state = json!({ "theme": "dark", "menuOpen": true });
        write_artifact_files(&base, Some(&[1, 2, 3]), None, Some(&state), "boom")
            .expect("write artifacts");

        let written = fs::read_to_string(base.join("bridge-state.json")).expect("state saved");
        assert!(written.contains("\"theme\": \"dark\""));
        assert!(base.join("screenshot.png").exists());
    }
}
