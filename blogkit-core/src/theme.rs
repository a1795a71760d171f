//! Theme persistence and toggling.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::EnhancerConfig;
use crate::store::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored theme value. Values outside the two known themes are carried
/// through untouched so a stylesheet that defines extra themes keeps working.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeValue {
    Known(Theme),
    Unrecognized(String),
}

impl ThemeValue {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "light" => Self::Known(Theme::Light),
            "dark" => Self::Known(Theme::Dark),
            other => Self::Unrecognized(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(theme) => theme.as_str(),
            Self::Unrecognized(raw) => raw,
        }
    }

    /// Next theme on toggle. Only `light` flips to dark; everything else returns to light.
    #[must_use]
    pub const fn toggled(&self) -> Theme {
        match self {
            Self::Known(Theme::Light) => Theme::Dark,
            Self::Known(Theme::Dark) | Self::Unrecognized(_) => Theme::Light,
        }
    }
}

impl Default for ThemeValue {
    fn default() -> Self {
        Self::Known(Theme::default())
    }
}

impl From<Theme> for ThemeValue {
    fn from(theme: Theme) -> Self {
        Self::Known(theme)
    }
}

/// The element that carries the theme attribute (the document root in the browser).
pub trait ThemeTarget {
    fn apply_theme(&self, attribute: &str, value: &str);
}

pub struct ThemeController<S, R>
where
    S: PreferenceStore,
    R: ThemeTarget,
{
    store: S,
    root: R,
    storage_key: String,
    attribute: String,
    current: ThemeValue,
}

impl<S, R> ThemeController<S, R>
where
    S: PreferenceStore,
    R: ThemeTarget,
{
    /// Read the persisted preference and apply it to the root.
    pub fn new(store: S, root: R, cfg: &EnhancerConfig) -> Self {
        let stored = match store.get(&cfg.theme_storage_key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("theme preference unreadable, using default: {err}");
                None
            }
        };
        let initial = stored.map_or_else(ThemeValue::default, |raw| ThemeValue::parse(&raw));
        if let ThemeValue::Unrecognized(raw) = &initial {
            log::warn!("unrecognized stored theme `{raw}` applied as-is");
        }

        let mut controller = Self {
            store,
            root,
            storage_key: cfg.theme_storage_key.clone(),
            attribute: cfg.theme_attribute.clone(),
            current: ThemeValue::default(),
        };
        controller.apply(initial);
        controller
    }

    #[must_use]
    pub const fn current(&self) -> &ThemeValue {
        &self.current
    }

    /// Flip between light and dark, persisting the result.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.apply(next.into());
        log::debug!("theme toggled to {next}");
        next
    }

    fn apply(&mut self, value: ThemeValue) {
        self.root.apply_theme(&self.attribute, value.as_str());
        if let Err(err) = self.store.set(&self.storage_key, value.as_str()) {
            log::warn!("theme preference not persisted: {err}");
        }
        self.current = value;
    }
}
