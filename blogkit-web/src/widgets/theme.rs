use std::cell::RefCell;
use std::rc::Rc;

use blogkit_core::ThemeController;

use super::Page;
use crate::dom::{self, WebError};
use crate::host::{DocumentRoot, LocalPreferenceStore};

pub type WebTheme = ThemeController<LocalPreferenceStore, DocumentRoot>;

/// Apply the stored theme and wire the toggle button, if the page has one.
///
/// # Errors
/// Returns an error when the document has no root element or the click
/// listener cannot be attached.
pub fn mount(page: &Page) -> Result<Rc<RefCell<WebTheme>>, WebError> {
    let root = page
        .document
        .document_element()
        .ok_or(WebError::Missing("documentElement"))?;
    let controller = Rc::new(RefCell::new(ThemeController::new(
        LocalPreferenceStore::open(),
        DocumentRoot(root),
        &page.config,
    )));

    match page.document.get_element_by_id(&page.config.theme_toggle_id) {
        Some(button) => {
            let controller = Rc::clone(&controller);
            dom::listen(&button, "click", move |_| {
                let theme = controller.borrow_mut().toggle();
                log::debug!("theme switched to {theme}");
            })?;
        }
        None => log::debug!("no #{} on this page", page.config.theme_toggle_id),
    }
    Ok(controller)
}
