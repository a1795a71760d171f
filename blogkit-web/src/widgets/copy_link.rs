use std::rc::Rc;

use blogkit_core::CopyLinkController;
use web_sys::Element;

use super::Page;
use crate::components::DomToastHost;
use crate::dom::{self, WebError};
use crate::host::{NavigatorClipboard, TimeoutSleeper};

/// Wire every `[data-copy-link]` button to copy the current URL.
///
/// # Errors
/// Returns an error if the selector query or a listener registration fails.
pub fn mount(page: &Page) -> Result<usize, WebError> {
    let cfg = &page.config;
    let buttons: Vec<Element> = dom::nodes_as(
        &page
            .document
            .query_selector_all(&format!("[{}]", cfg.copy_link_attribute))?,
    );
    let controller = Rc::new(CopyLinkController::new(
        NavigatorClipboard(page.window.clone()),
        DomToastHost(page.document.clone()),
        TimeoutSleeper,
        cfg,
    ));

    for button in &buttons {
        let controller = Rc::clone(&controller);
        let window = page.window.clone();
        dom::listen(button, "click", move |_| {
            let controller = Rc::clone(&controller);
            let url = window.location().href().unwrap_or_default();
            wasm_bindgen_futures::spawn_local(async move {
                controller.copy(&url).await;
            });
        })?;
    }
    Ok(buttons.len())
}
