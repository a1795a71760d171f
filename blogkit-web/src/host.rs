//! Browser implementations of the blogkit-core capability traits.
use async_trait::async_trait;
use blogkit_core::{
    ClassTarget, Clipboard, ClipboardError, Clock, LazyImage, PreferenceStore, ScrollHost,
    Sleeper, StoreError, StyleTarget, ThemeTarget, WindowOpener,
};
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, Element, HtmlElement, HtmlImageElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition, Storage, Window,
};

use crate::dom;

/// `localStorage`, or nothing when the browser blocks it (private mode, sandboxed iframes).
pub struct LocalPreferenceStore {
    storage: Option<Storage>,
}

impl LocalPreferenceStore {
    #[must_use]
    pub fn open() -> Self {
        let storage = match dom::local_storage() {
            Ok(storage) => Some(storage),
            Err(err) => {
                log::debug!("preference storage disabled: {err}");
                None
            }
        };
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StoreError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("localStorage unavailable".into()))
    }
}

impl PreferenceStore for LocalPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|err| StoreError::Unavailable(dom::js_error_message(&err)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| StoreError::WriteRejected {
                key: key.to_string(),
                reason: dom::js_error_message(&err),
            })
    }
}

/// A live element styled through its inline style declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement(pub HtmlElement);

impl StyleTarget for DomElement {
    fn set_style(&self, property: &str, value: &str) {
        let _ = self.0.style().set_property(property, value);
    }

    fn remove_style(&self, property: &str) {
        let _ = self.0.style().remove_property(property);
    }
}

impl ClassTarget for DomElement {
    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }
}

/// The `<html>` element, which carries the theme attribute.
pub struct DocumentRoot(pub Element);

impl ThemeTarget for DocumentRoot {
    fn apply_theme(&self, attribute: &str, value: &str) {
        if let Err(err) = self.0.set_attribute(attribute, value) {
            log::warn!("theme attribute not applied: {}", dom::js_error_message(&err));
        }
    }
}

pub struct PopupOpener(pub Window);

impl WindowOpener for PopupOpener {
    fn open(&self, url: &str, target: &str, features: &str) {
        match self
            .0
            .open_with_url_and_target_and_features(url, target, features)
        {
            Ok(Some(_)) => {}
            Ok(None) => log::debug!("share popup blocked by the browser"),
            Err(err) => log::warn!("share popup failed: {}", dom::js_error_message(&err)),
        }
    }
}

/// `navigator.clipboard`, which only exists in secure contexts. Reached through
/// `Reflect` so the build does not depend on web-sys' unstable clipboard bindings.
pub struct NavigatorClipboard(pub Window);

#[async_trait(?Send)]
impl Clipboard for NavigatorClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let navigator = self.0.navigator();
        if !dom::has_property(&navigator, "clipboard") {
            return Err(ClipboardError("clipboard API unavailable".into()));
        }
        let failed = |err: JsValue| ClipboardError(dom::js_error_message(&err));
        let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard")).map_err(failed)?;
        let write_text: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .map_err(failed)?
            .dyn_into()
            .map_err(|_| ClipboardError("clipboard.writeText is not a function".into()))?;
        let promise: Promise = write_text
            .call1(&clipboard, &JsValue::from_str(text))
            .map_err(failed)?
            .dyn_into()
            .map_err(|_| ClipboardError("clipboard.writeText returned no promise".into()))?;
        JsFuture::from(promise).await.map(|_| ()).map_err(failed)
    }
}

pub struct TimeoutSleeper;

#[async_trait(?Send)]
impl Sleeper for TimeoutSleeper {
    async fn sleep_ms(&self, duration_ms: u32) {
        let duration = i32::try_from(duration_ms).unwrap_or(i32::MAX);
        if let Err(err) = dom::sleep_ms(duration).await {
            log::warn!("timer failed: {}", dom::js_error_message(&err));
        }
    }
}

pub struct DateClock;

impl Clock for DateClock {
    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }
}

pub struct DocumentScroller(pub Document);

impl ScrollHost for DocumentScroller {
    type Target = Element;

    fn find_target(&self, id: &str) -> Option<Self::Target> {
        self.0.get_element_by_id(id)
    }

    fn scroll_smoothly_to(&self, target: &Self::Target) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomImage(pub HtmlImageElement);

impl LazyImage for DomImage {
    fn deferred_source(&self, attribute: &str) -> Option<String> {
        self.0.get_attribute(attribute).filter(|src| !src.is_empty())
    }

    fn current_source(&self) -> String {
        self.0.src()
    }

    fn set_source(&self, src: &str) {
        self.0.set_src(src);
    }

    fn mark_loaded(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }
}
