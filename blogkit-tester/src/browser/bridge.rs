use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thirtyfour::prelude::*;

/// Evaluates to the bridge snapshot, or `null` on pages without the bridge.
pub const BRIDGE_STATE_SCRIPT: &str =
    "return window.__blogkitTest ? window.__blogkitTest.state() : null";

/// Mirror of the snapshot returned by `window.__blogkitTest.state()`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BridgeState {
    pub theme: Option<String>,
    pub menu_open: Option<bool>,
    pub max_scroll_percent: Option<u8>,
    pub toc_entries: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct TestBridge<'a> {
    driver: &'a WebDriver,
}

impl<'a> TestBridge<'a> {
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    pub async fn ensure_available(&self) -> Result<()> {
        let result = self
            .driver
            .execute("return !!window.__blogkitTest", vec![])
            .await?;
        if !result.json().as_bool().unwrap_or(false) {
            bail!("__blogkitTest is not available. Did you pass ?test=1 to a page loading blogkit?");
        }
        Ok(())
    }

    pub async fn state(&self) -> Result<BridgeState> {
        let value = self.call("state").await?;
        serde_json::from_value(value).context("parsing bridge state")
    }

    pub async fn toggle_theme(&self) -> Result<Option<String>> {
        Ok(self.call("toggleTheme").await?.as_str().map(str::to_string))
    }

    pub async fn toggle_menu(&self) -> Result<Option<bool>> {
        Ok(self.call("toggleMenu").await?.as_bool())
    }

    /// The engagement summary the page would log if it unloaded now.
    pub async fn engagement(&self) -> Result<Value> {
        self.call("engagement").await
    }

    async fn call(&self, function: &str) -> Result<Value> {
        let script = format!("return window.__blogkitTest.{function}()");
        let result = self
            .driver
            .execute(&script, vec![])
            .await
            .with_context(|| format!("calling __blogkitTest.{function}"))?;
        Ok(result.json().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bridge_state_reads_camel_case_snapshot() {
        let state: BridgeState = serde_json::from_value(json!({
            "theme": "dark",
            "menuOpen": false,
            "maxScrollPercent": 42,
            "tocEntries": null
        }))
        .expect("snapshot parses");
        assert_eq!(state.theme.as_deref(), Some("dark"));
        assert_eq!(state.menu_open, Some(false));
        assert_eq!(state.max_scroll_percent, Some(42));
        assert_eq!(state.toc_entries, None);
    }
}
