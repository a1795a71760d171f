use std::cell::RefCell;
use std::rc::Rc;

use blogkit_core::{LazyLoader, LoaderMode};
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlImageElement, IntersectionObserver, IntersectionObserverEntry};

use super::Page;
use crate::dom::{self, WebError};
use crate::host::DomImage;

/// Observe deferred images and swap in their real source on first sight.
/// Without `IntersectionObserver` the images keep their current source.
///
/// # Errors
/// Returns an error if the selector is invalid or the observer cannot be built.
pub fn mount(page: &Page) -> Result<LoaderMode, WebError> {
    let images: Vec<DomImage> = dom::nodes_as::<HtmlImageElement>(
        &page.document.query_selector_all(&page.config.lazy_image_selector)?,
    )
    .into_iter()
    .map(DomImage)
    .collect();

    let mode = if dom::has_property(&page.window, "IntersectionObserver") {
        LoaderMode::Observing
    } else {
        log::debug!("IntersectionObserver unsupported; {} images left as-is", images.len());
        LoaderMode::Unsupported
    };
    let loader = Rc::new(RefCell::new(LazyLoader::new(images, mode, &page.config)));
    if mode == LoaderMode::Unsupported {
        return Ok(mode);
    }

    let handler = Rc::clone(&loader);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let batch: Vec<(DomImage, bool)> = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let intersecting = entry.is_intersecting();
                    entry
                        .target()
                        .dyn_into::<HtmlImageElement>()
                        .ok()
                        .map(|img| (DomImage(img), intersecting))
                })
                .collect();
            for image in handler.borrow_mut().on_intersection(batch) {
                observer.unobserve(&image.0);
            }
        },
    );
    let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
    callback.forget();

    for image in loader.borrow().pending() {
        observer.observe(&image.0);
    }
    Ok(mode)
}
