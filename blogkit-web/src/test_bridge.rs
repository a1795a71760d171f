//! `window.__blogkitTest`, installed only when the page URL carries `test=1`.
//! The browser tester reads widget state through it instead of scraping styles.
use std::cell::RefCell;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::widgets::Mounted;
use crate::widgets::engagement::WebEngagement;
use crate::widgets::menu::WebMenu;
use crate::widgets::theme::WebTheme;

pub const BRIDGE_GLOBAL: &str = "__blogkitTest";

#[must_use]
pub fn test_mode_enabled(search: &str) -> bool {
    search
        .trim_start_matches('?')
        .split('&')
        .any(|pair| pair == "test=1")
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BridgeSnapshot {
    theme: Option<String>,
    menu_open: Option<bool>,
    max_scroll_percent: Option<u8>,
    toc_entries: Option<usize>,
}

fn snapshot(
    theme: Option<&Rc<RefCell<WebTheme>>>,
    menu: Option<&Rc<RefCell<WebMenu>>>,
    engagement: Option<&Rc<RefCell<WebEngagement>>>,
    toc_entries: Option<usize>,
) -> BridgeSnapshot {
    BridgeSnapshot {
        theme: theme.map(|t| t.borrow().current().as_str().to_string()),
        menu_open: menu.map(|m| m.borrow().is_open()),
        max_scroll_percent: engagement.map(|e| e.borrow().max_scroll()),
        toc_entries,
    }
}

/// Expose `state()`, `toggleTheme()`, `toggleMenu()` and `engagement()`.
/// The closures live for the rest of the page.
pub fn install(window: &Window, mounted: &Mounted) {
    if !window
        .location()
        .search()
        .is_ok_and(|search| test_mode_enabled(&search))
    {
        return;
    }

    let (theme, menu, engagement) = (
        mounted.theme.clone(),
        mounted.menu.clone(),
        mounted.engagement.clone(),
    );
    let toc_entries = mounted.toc_entries;

    let state = {
        let (theme, menu, engagement) = (theme.clone(), menu.clone(), engagement.clone());
        Closure::<dyn FnMut() -> JsValue>::new(move || {
            serde_wasm_bindgen::to_value(&snapshot(
                theme.as_ref(),
                menu.as_ref(),
                engagement.as_ref(),
                toc_entries,
            ))
            .unwrap_or(JsValue::NULL)
        })
    };
    let toggle_theme = Closure::<dyn FnMut() -> JsValue>::new(move || {
        theme.as_ref().map_or(JsValue::NULL, |t| {
            JsValue::from_str(t.borrow_mut().toggle().as_str())
        })
    });
    let toggle_menu = Closure::<dyn FnMut() -> JsValue>::new(move || {
        menu.as_ref()
            .map_or(JsValue::NULL, |m| JsValue::from_bool(m.borrow_mut().toggle()))
    });
    let summary = Closure::<dyn FnMut() -> JsValue>::new(move || {
        engagement.as_ref().map_or(JsValue::NULL, |e| {
            serde_wasm_bindgen::to_value(&e.borrow().summary()).unwrap_or(JsValue::NULL)
        })
    });

    let bridge = js_sys::Object::new();
    for (name, closure) in [
        ("state", state),
        ("toggleTheme", toggle_theme),
        ("toggleMenu", toggle_menu),
        ("engagement", summary),
    ] {
        let _ = js_sys::Reflect::set(
            &bridge,
            &JsValue::from_str(name),
            closure.as_ref().unchecked_ref(),
        );
        closure.forget();
    }
    let _ = js_sys::Reflect::set(window, &JsValue::from_str(BRIDGE_GLOBAL), &bridge);
    log::debug!("test bridge installed as window.{BRIDGE_GLOBAL}");
}
