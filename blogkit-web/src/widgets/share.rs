use std::rc::Rc;

use blogkit_core::{ShareContext, ShareDispatcher};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlMetaElement};

use super::Page;
use crate::dom::{self, WebError};
use crate::host::PopupOpener;

/// Wire every `[data-share]` button. Returns how many were found.
///
/// # Errors
/// Returns an error if the selector query or a listener registration fails.
pub fn mount(page: &Page) -> Result<usize, WebError> {
    let cfg = &page.config;
    let buttons: Vec<Element> =
        dom::nodes_as(&page.document.query_selector_all(&format!("[{}]", cfg.share_attribute))?);
    let dispatcher = Rc::new(ShareDispatcher::new(
        PopupOpener(page.window.clone()),
        cfg.share_popup_features.clone(),
    ));

    for button in &buttons {
        let dispatcher = Rc::clone(&dispatcher);
        let page = page.clone();
        let clicked = button.clone();
        dom::listen(button, "click", move |_| {
            let platform = clicked
                .get_attribute(&page.config.share_attribute)
                .unwrap_or_default();
            dispatcher.dispatch(&platform, &share_context(&page));
        })?;
    }
    Ok(buttons.len())
}

/// Read at click time so single-page navigations share the right URL.
fn share_context(page: &Page) -> ShareContext {
    let description = page
        .document
        .query_selector(r#"meta[name="description"]"#)
        .ok()
        .flatten()
        .and_then(|meta| meta.dyn_into::<HtmlMetaElement>().ok())
        .map(|meta| meta.content())
        .unwrap_or_default();
    ShareContext {
        url: page.window.location().href().unwrap_or_default(),
        title: page.document.title(),
        description,
    }
}
