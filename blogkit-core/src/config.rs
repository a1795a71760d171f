//! Enhancer configuration: DOM contract points, timings and defaults.
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Errors raised when configuration invariants are violated.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} must be at least {min} (got {value})")]
    MinViolation {
        field: &'static str,
        min: u32,
        value: u32,
    },
    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

/// Every selector, key and timing the widgets depend on.
///
/// Missing fields fall back to the defaults, so a page override only has to
/// name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhancerConfig {
    pub theme_storage_key: String,
    pub theme_attribute: String,
    pub theme_toggle_id: String,
    pub menu_toggle_id: String,
    pub nav_menu_selector: String,
    pub share_attribute: String,
    pub share_popup_features: String,
    pub copy_link_attribute: String,
    pub toast_message: String,
    pub toast_visible_ms: u32,
    pub toast_exit_ms: u32,
    pub content_selector: String,
    pub toc_heading_selector: String,
    pub toc_id_prefix: String,
    pub toc_min_headings: u32,
    pub toc_title: String,
    pub lazy_image_selector: String,
    pub deferred_src_attribute: String,
    pub loaded_class: String,
    pub anchor_selector: String,
    pub service_worker_path: String,
    pub log_level: String,
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: "theme".into(),
            theme_attribute: "data-theme".into(),
            theme_toggle_id: "themeToggle".into(),
            menu_toggle_id: "mobileMenuToggle".into(),
            nav_menu_selector: ".nav-menu".into(),
            share_attribute: "data-share".into(),
            share_popup_features: "width=600,height=400".into(),
            copy_link_attribute: "data-copy-link".into(),
            toast_message: "Link copied to clipboard!".into(),
            toast_visible_ms: 3000,
            toast_exit_ms: 300,
            content_selector: ".article-content".into(),
            toc_heading_selector: "h2, h3".into(),
            toc_id_prefix: "heading-".into(),
            toc_min_headings: 3,
            toc_title: "Table of Contents".into(),
            lazy_image_selector: "img[loading=\"lazy\"]".into(),
            deferred_src_attribute: "data-src".into(),
            loaded_class: "loaded".into(),
            anchor_selector: "a[href^=\"#\"]".into(),
            service_worker_path: "/sw.js".into(),
            log_level: "info".into(),
        }
    }
}

impl EnhancerConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value violates [`Self::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check the invariants the widgets rely on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("theme_storage_key", &self.theme_storage_key),
            ("theme_attribute", &self.theme_attribute),
            ("content_selector", &self.content_selector),
            ("toc_heading_selector", &self.toc_heading_selector),
            ("toc_id_prefix", &self.toc_id_prefix),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty { field });
            }
        }
        if self.toc_min_headings < 1 {
            return Err(ConfigError::MinViolation {
                field: "toc_min_headings",
                min: 1,
                value: self.toc_min_headings,
            });
        }
        if self.toast_visible_ms < 1 {
            return Err(ConfigError::MinViolation {
                field: "toast_visible_ms",
                min: 1,
                value: self.toast_visible_ms,
            });
        }
        self.level_filter().map(|_| ())
    }

    /// Maximum log level requested by the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `log_level` is not a recognised level name.
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}
