#![cfg(target_arch = "wasm32")]

use blogkit_core::{EnhancerConfig, LoaderMode};
use blogkit_web::dom;
use blogkit_web::widgets::{self, Page};
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventInit, HtmlElement, HtmlImageElement};

wasm_bindgen_test_configure!(run_in_browser);

const ARTICLE: &str = r#"
<button id="themeToggle">theme</button>
<button id="mobileMenuToggle">menu</button>
<nav class="nav-menu"></nav>
<article class="article-content">
  <p>Intro</p>
  <h2>First</h2><p>a</p>
  <h3 id="kept">Second</h3><p>b</p>
  <h2>Third</h2><p>c</p>
</article>
"#;

fn fresh_page() -> Page {
    page_with(ARTICLE)
}

fn page_with(markup: &str) -> Page {
    let window = dom::window().expect("window");
    let document = window.document().expect("document");
    document.body().expect("body").set_inner_html(markup);
    Page::new(window, document, EnhancerConfig::default())
}

/// Dispatch a bubbling, cancelable click and report whether a listener cancelled it.
fn cancelable_click(target: &Element) -> bool {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("click", &init).expect("click event");
    target.dispatch_event(&event).expect("dispatched");
    event.default_prevented()
}

fn click(document: &Document, id: &str) {
    document
        .get_element_by_id(id)
        .expect("element present")
        .dyn_into::<HtmlElement>()
        .expect("html element")
        .click();
}

#[wasm_bindgen_test]
fn theme_toggle_flips_root_attribute() {
    let page = fresh_page();
    let controller = widgets::theme::mount(&page).expect("theme mounts");
    let root = page.document.document_element().expect("root");
    let before = root.get_attribute("data-theme").expect("theme applied on load");

    click(&page.document, "themeToggle");

    let after = root.get_attribute("data-theme").expect("theme attribute");
    assert_ne!(before, after);
    assert_eq!(controller.borrow().current().as_str(), after);
}

#[wasm_bindgen_test]
fn menu_toggle_shows_overlay_and_marks_button() {
    let page = fresh_page();
    let menu = widgets::menu::mount(&page).expect("menu mounts");

    click(&page.document, "mobileMenuToggle");
    assert!(menu.borrow().is_open());
    let nav = page
        .document
        .query_selector(".nav-menu")
        .expect("query")
        .expect("nav")
        .dyn_into::<HtmlElement>()
        .expect("html element");
    assert_eq!(nav.style().get_property_value("display").as_deref(), Ok("flex"));
    let button = page.document.get_element_by_id("mobileMenuToggle").expect("toggle");
    assert!(button.class_list().contains("active"));

    click(&page.document, "mobileMenuToggle");
    assert!(!menu.borrow().is_open());
    assert_eq!(nav.style().get_property_value("display").as_deref(), Ok(""));
    assert!(!button.class_list().contains("active"));
}

#[wasm_bindgen_test]
fn progress_bar_is_appended_once() {
    let page = fresh_page();
    widgets::progress::mount(&page).expect("progress mounts");
    let bar = page
        .document
        .get_element_by_id(widgets::progress::BAR_ID)
        .expect("bar present")
        .dyn_into::<HtmlElement>()
        .expect("html element");
    assert_eq!(bar.style().get_property_value("position").as_deref(), Ok("fixed"));
}

#[wasm_bindgen_test]
fn table_of_contents_assigns_ids_and_follows_first_paragraph() {
    let page = fresh_page();
    let rendered = widgets::toc::mount(&page).expect("toc mounts");
    assert_eq!(rendered, Some(3));

    let article = page
        .document
        .query_selector(".article-content")
        .expect("query")
        .expect("article");
    let headings = article.query_selector_all("h2, h3").expect("headings");
    let ids: Vec<String> = dom::nodes_as::<web_sys::Element>(&headings)
        .iter()
        .map(web_sys::Element::id)
        .collect();
    assert_eq!(ids, ["heading-0", "kept", "heading-2"]);

    let first = article.first_element_child().expect("intro paragraph");
    let container = first.next_element_sibling().expect("toc container");
    assert!(container.class_list().contains(widgets::toc::CONTAINER_CLASS));
}

#[wasm_bindgen_test]
fn short_articles_get_no_table_of_contents() {
    let page = page_with(r#"<article class="article-content"><p>x</p><h2>Only</h2></article>"#);
    assert_eq!(widgets::toc::mount(&page).expect("toc mounts"), None);
    assert!(
        page.document
            .query_selector(".table-of-contents")
            .expect("query")
            .is_none()
    );
}

#[wasm_bindgen_test]
fn headings_without_a_paragraph_get_ids_but_no_table_of_contents() {
    let page = page_with(
        r#"<article class="article-content"><h2>One</h2><h2>Two</h2><h3>Three</h3></article>"#,
    );
    assert_eq!(widgets::toc::mount(&page).expect("toc mounts"), None);

    let headings = page
        .document
        .query_selector_all(".article-content h2, .article-content h3")
        .expect("headings");
    let ids: Vec<String> = dom::nodes_as::<Element>(&headings)
        .iter()
        .map(Element::id)
        .collect();
    assert_eq!(ids, ["heading-0", "heading-1", "heading-2"]);
    assert!(
        page.document
            .query_selector(".table-of-contents")
            .expect("query")
            .is_none()
    );
}

#[wasm_bindgen_test]
fn unmatched_fragment_click_still_suppresses_navigation() {
    let page = page_with(r##"<a id="dangling" href="#missing">nowhere</a>"##);
    widgets::anchors::mount(&page).expect("anchors mount");
    let link = page.document.get_element_by_id("dangling").expect("link");
    assert!(cancelable_click(&link));
}

#[wasm_bindgen_test]
fn table_of_contents_links_added_later_are_intercepted() {
    let page = fresh_page();
    widgets::anchors::mount(&page).expect("anchors mount");
    widgets::toc::mount(&page).expect("toc mounts");

    let link = page
        .document
        .query_selector(".table-of-contents a")
        .expect("query")
        .expect("toc link");
    assert_eq!(link.get_attribute("href").as_deref(), Some("#heading-0"));
    assert!(cancelable_click(&link));
}

#[wasm_bindgen_test]
fn external_links_keep_default_navigation() {
    let page = page_with(r#"<a id="away" href="https://example.org/">away</a>"#);
    widgets::anchors::mount(&page).expect("anchors mount");
    let link = page.document.get_element_by_id("away").expect("link");
    assert!(!cancelable_click(&link));
}

#[wasm_bindgen_test]
async fn visible_lazy_image_swaps_in_deferred_source() {
    let page = page_with(
        r#"<img id="hero" loading="lazy" src="placeholder.png" data-src="full.png"
             width="20" height="20" style="display:block">"#,
    );
    let mode = widgets::lazy::mount(&page).expect("lazy mounts");
    assert_eq!(mode, LoaderMode::Observing);

    dom::sleep_ms(250).await.expect("timer");

    let image = page
        .document
        .get_element_by_id("hero")
        .expect("image")
        .dyn_into::<HtmlImageElement>()
        .expect("img element");
    assert!(image.src().ends_with("/full.png"), "src was {}", image.src());
    assert!(image.class_list().contains("loaded"));
}

#[wasm_bindgen_test]
fn lazy_images_stay_deferred_without_intersection_observer() {
    let page = page_with(
        r#"<img id="hero" loading="lazy" src="placeholder.png" data-src="full.png">"#,
    );
    let key = JsValue::from_str("IntersectionObserver");
    let saved = Reflect::get(&page.window, &key).expect("read constructor");
    Reflect::set(&page.window, &key, &JsValue::UNDEFINED).expect("hide constructor");

    let mode = widgets::lazy::mount(&page);
    Reflect::set(&page.window, &key, &saved).expect("restore constructor");

    assert_eq!(mode.expect("lazy mounts"), LoaderMode::Unsupported);
    let image = page
        .document
        .get_element_by_id("hero")
        .expect("image")
        .dyn_into::<HtmlImageElement>()
        .expect("img element");
    assert!(image.src().ends_with("/placeholder.png"));
    assert!(!image.class_list().contains("loaded"));
}

#[wasm_bindgen_test]
fn service_worker_support_follows_navigator() {
    let page = page_with("");
    let navigator = page.window.navigator();
    let exposed = Reflect::get(&navigator, &JsValue::from_str("serviceWorker"))
        .map(|value| !value.is_undefined() && !value.is_null())
        .expect("read navigator");
    assert_eq!(widgets::service_worker::supported(&page.window), exposed);
    widgets::service_worker::mount(&page).expect("service worker mounts");
}

#[wasm_bindgen_test]
fn service_worker_is_skipped_when_navigator_lacks_it() {
    let page = page_with("");
    let navigator = page.window.navigator();
    let key = JsValue::from_str("serviceWorker");
    let descriptor = Object::new();
    Reflect::set(&descriptor, &JsValue::from_str("value"), &JsValue::UNDEFINED).expect("value");
    Reflect::set(&descriptor, &JsValue::from_str("configurable"), &JsValue::TRUE)
        .expect("configurable");
    Object::define_property(&navigator, &key, &descriptor);

    let supported = widgets::service_worker::supported(&page.window);
    let mounted = widgets::service_worker::mount(&page);
    Reflect::delete_property(&navigator, &key).expect("restore navigator");

    assert!(!supported);
    mounted.expect("mount is a no-op");
}
