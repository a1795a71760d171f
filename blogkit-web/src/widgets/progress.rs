use blogkit_core::ProgressIndicator;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::Page;
use crate::dom::{self, WebError};
use crate::host::DomElement;

pub const BAR_ID: &str = "reading-progress";

/// Append the fixed progress bar to `<body>` and follow window scrolls.
///
/// # Errors
/// Returns an error if the page has no body or the bar cannot be created.
pub fn mount(page: &Page) -> Result<(), WebError> {
    let body = page.document.body().ok_or(WebError::Missing("body"))?;
    let bar = page
        .document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| WebError::Js("created div is not an HtmlElement".into()))?;
    bar.set_id(BAR_ID);
    body.append_child(&bar)?;

    let indicator = ProgressIndicator::new(DomElement(bar));
    let scrolled = page.clone();
    dom::listen_passive(&page.window, "scroll", move |_| {
        indicator.on_scroll(scrolled.scroll_metrics());
    })
}
