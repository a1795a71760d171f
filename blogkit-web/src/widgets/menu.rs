use std::cell::RefCell;
use std::rc::Rc;

use blogkit_core::MenuController;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::Page;
use crate::dom::{self, WebError};
use crate::host::DomElement;

pub type WebMenu = MenuController<DomElement, DomElement>;

/// # Errors
/// Returns an error if the menu selector is invalid or the click listener
/// cannot be attached.
pub fn mount(page: &Page) -> Result<Rc<RefCell<WebMenu>>, WebError> {
    let cfg = &page.config;
    let toggle = page
        .document
        .get_element_by_id(&cfg.menu_toggle_id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(DomElement);
    let menu = page
        .document
        .query_selector(&cfg.nav_menu_selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(DomElement);
    if menu.is_none() {
        log::debug!("no {} on this page", cfg.nav_menu_selector);
    }

    let button = toggle.as_ref().map(|DomElement(el)| el.clone());
    let controller = Rc::new(RefCell::new(MenuController::new(menu, toggle)));
    if let Some(button) = button {
        let controller = Rc::clone(&controller);
        dom::listen(&button, "click", move |_| {
            controller.borrow_mut().toggle();
        })?;
    }
    Ok(controller)
}
