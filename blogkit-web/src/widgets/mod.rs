//! Wiring between page elements and the blogkit-core controllers.
//!
//! Each widget mounts independently: a page without a theme toggle, a nav
//! menu or an article body simply skips that feature.
use std::cell::RefCell;
use std::rc::Rc;

use blogkit_core::{EnhancerConfig, ScrollMetrics};
use web_sys::{Document, Window};

use crate::dom::WebError;

pub mod anchors;
pub mod copy_link;
pub mod engagement;
pub mod lazy;
pub mod menu;
pub mod progress;
pub mod service_worker;
pub mod share;
pub mod theme;
pub mod toc;

/// Everything a widget needs to find its elements.
#[derive(Clone)]
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub config: Rc<EnhancerConfig>,
}

impl Page {
    #[must_use]
    pub fn new(window: Window, document: Document, config: EnhancerConfig) -> Self {
        Self {
            window,
            document,
            config: Rc::new(config),
        }
    }

    /// Current scroll position of the document.
    #[must_use]
    pub fn scroll_metrics(&self) -> ScrollMetrics {
        let scroll_top = self.window.scroll_y().unwrap_or(0.0);
        let viewport = self
            .window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);
        let document_height = self
            .document
            .document_element()
            .map_or(0.0, |root| f64::from(root.scroll_height()));
        ScrollMetrics::new(scroll_top, viewport, document_height)
    }
}

/// Controllers that stay reachable after mounting (the test bridge reads them).
#[derive(Default)]
pub struct Mounted {
    pub theme: Option<Rc<RefCell<theme::WebTheme>>>,
    pub menu: Option<Rc<RefCell<menu::WebMenu>>>,
    pub engagement: Option<Rc<RefCell<engagement::WebEngagement>>>,
    pub toc_entries: Option<usize>,
}

/// Mount every widget in page order. A failing widget is logged and skipped.
pub fn mount_all(page: &Page) -> Mounted {
    let theme = settle("theme", theme::mount(page));
    settle("share", share::mount(page));
    let menu = settle("menu", menu::mount(page));
    settle("progress", progress::mount(page));
    settle("lazy images", lazy::mount(page));
    settle("anchors", anchors::mount(page));
    settle("copy link", copy_link::mount(page));
    let toc_entries = settle("table of contents", toc::mount(page)).flatten();
    let engagement = settle("engagement", engagement::mount(page));
    settle("service worker", service_worker::mount(page));

    Mounted {
        theme,
        menu,
        engagement,
        toc_entries,
    }
}

fn settle<T>(widget: &str, result: Result<T, WebError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{widget} not mounted: {err}");
            None
        }
    }
}
