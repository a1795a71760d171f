//! Configuration loading: embedded defaults, optionally overridden by the page.
use blogkit_core::EnhancerConfig;
use web_sys::Document;

const EMBEDDED_CONFIG: &str = include_str!("../static/config/blogkit.json");

/// Id of the `<script type="application/json">` block a page can use to override defaults.
pub const OVERRIDE_ELEMENT_ID: &str = "blogkit-config";

/// The configuration shipped with the crate.
#[must_use]
pub fn embedded() -> EnhancerConfig {
    EnhancerConfig::from_json(EMBEDDED_CONFIG).unwrap_or_else(|err| {
        log::warn!("embedded configuration invalid, using built-in defaults: {err}");
        EnhancerConfig::default()
    })
}

/// Pick the page override when it is present and valid, else the embedded defaults.
#[must_use]
pub fn resolve(page_override: Option<&str>) -> EnhancerConfig {
    let Some(json) = page_override.map(str::trim).filter(|json| !json.is_empty()) else {
        return embedded();
    };
    EnhancerConfig::from_json(json).unwrap_or_else(|err| {
        log::warn!("#{OVERRIDE_ELEMENT_ID} ignored: {err}");
        embedded()
    })
}

#[must_use]
pub fn load(doc: &Document) -> EnhancerConfig {
    let page_override = doc
        .get_element_by_id(OVERRIDE_ELEMENT_ID)
        .and_then(|el| el.text_content());
    resolve(page_override.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_matches_defaults() {
        assert_eq!(embedded(), EnhancerConfig::default());
    }

    #[test]
    fn valid_override_wins() {
        let cfg = resolve(Some(r#"{ "toc_min_headings": 4, "toast_message": "Copied" }"#));
        assert_eq!(cfg.toc_min_headings, 4);
        assert_eq!(cfg.toast_message, "Copied");
        assert_eq!(cfg.theme_toggle_id, "themeToggle");
    }

    #[test]
    fn invalid_or_blank_override_falls_back() {
        assert_eq!(resolve(Some("{ broken")), embedded());
        assert_eq!(resolve(Some(r#"{ "toast_visible_ms": 0 }"#)), embedded());
        assert_eq!(resolve(Some("   ")), embedded());
        assert_eq!(resolve(None), embedded());
    }
}
