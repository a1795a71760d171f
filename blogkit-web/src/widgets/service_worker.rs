use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{ServiceWorkerContainer, ServiceWorkerRegistration, Window};

use super::Page;
use crate::dom::{self, WebError};
use crate::paths;

/// Register the offline worker once the window has finished loading.
///
/// # Errors
/// Returns an error if the load listener cannot be attached.
pub fn mount(page: &Page) -> Result<(), WebError> {
    if !supported(&page.window) {
        log::debug!("service workers unsupported");
        return Ok(());
    }
    let container = page.window.navigator().service_worker();
    let script = paths::site_path(&page.config.service_worker_path);

    if page.document.ready_state() == "complete" {
        register(&container, &script);
        return Ok(());
    }
    dom::listen(&page.window, "load", move |_| register(&container, &script))
}

/// Whether the browser exposes `navigator.serviceWorker` (secure contexts only).
#[must_use]
pub fn supported(window: &Window) -> bool {
    dom::has_property(&window.navigator(), "serviceWorker")
}

fn register(container: &ServiceWorkerContainer, script: &str) {
    let promise = container.register(script);
    let script = script.to_string();
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(value) => {
                let scope = value
                    .dyn_into::<ServiceWorkerRegistration>()
                    .map(|registration| registration.scope())
                    .unwrap_or_default();
                log::info!("service worker {script} registered for {scope}");
            }
            Err(err) => log::warn!(
                "service worker {script} registration failed: {}",
                dom::js_error_message(&err)
            ),
        }
    });
}
