use blogkit_core::AnchorHandler;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use super::Page;
use crate::dom::{self, WebError};
use crate::host::DocumentScroller;

/// Smooth-scroll in-page links.
///
/// One delegated listener on the document, so links inserted later (the
/// table of contents) behave the same as links present at load.
///
/// # Errors
/// Returns an error if the listener cannot be attached.
pub fn mount(page: &Page) -> Result<(), WebError> {
    let handler = AnchorHandler::new(DocumentScroller(page.document.clone()));
    let selector = page.config.anchor_selector.clone();
    dom::listen(&page.document, "click", move |event: Event| {
        let Some(link) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(&selector).ok().flatten())
        else {
            return;
        };
        let href = link.get_attribute("href").unwrap_or_default();
        if !AnchorHandler::<DocumentScroller>::intercepts(&href) {
            return;
        }
        event.prevent_default();
        let outcome = handler.follow(&href);
        log::debug!("anchor {href}: {outcome:?}");
    })
}
