use std::cell::Cell;

use web_sys::{Document, Window};

use crate::dom::{self, WebError};
use crate::widgets::{self, Page};
use crate::{config, logger, test_bridge};

/// Run `init` once the DOM is parsed; immediately if that already happened.
///
/// # Errors
/// Returns an error if the `DOMContentLoaded` listener cannot be attached.
pub fn when_ready(document: &Document, init: impl FnOnce() + 'static) -> Result<(), WebError> {
    if document.ready_state() != "loading" {
        init();
        return Ok(());
    }
    let pending = Cell::new(Some(init));
    dom::listen(document, "DOMContentLoaded", move |_| {
        if let Some(init) = pending.take() {
            init();
        }
    })
}

/// Load configuration, mount every widget and flag the body as enhanced.
pub fn enhance(window: &Window, document: &Document) -> widgets::Mounted {
    let cfg = config::load(document);
    match cfg.level_filter() {
        Ok(level) => logger::init(level),
        Err(err) => log::warn!("{err}"),
    }
    let page = Page::new(window.clone(), document.clone(), cfg);
    let mounted = widgets::mount_all(&page);

    if let Some(body) = document.body() {
        let _ = body.class_list().add_1(&page.config.loaded_class);
    }
    test_bridge::install(window, &mounted);
    log::info!("blog enhancements initialized");
    mounted
}

/// # Errors
/// Returns an error outside a browser document.
pub fn boot() -> Result<(), WebError> {
    let window = dom::window().ok_or(WebError::Missing("window"))?;
    let document = window.document().ok_or(WebError::Missing("document"))?;
    let ready_doc = document.clone();
    when_ready(&document, move || {
        enhance(&window, &ready_doc);
    })
}
