//! Recording implementations of every capability trait.
//!
//! These back the unit tests and the logic mode of the QA tester. Each one
//! is a cheap handle over shared state: clone it, hand one copy to the
//! controller, and inspect the other.
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::anchor::ScrollHost;
use crate::copy::{Clipboard, ClipboardError, Sleeper, ToastHandle, ToastHost};
use crate::engagement::Clock;
use crate::lazy::LazyImage;
use crate::share::WindowOpener;
use crate::surface::{ClassTarget, StyleTarget};
use crate::theme::ThemeTarget;

#[derive(Debug, Clone, Default)]
pub struct RecordingElement {
    styles: Rc<RefCell<BTreeMap<String, String>>>,
    classes: Rc<RefCell<BTreeSet<String>>>,
    attributes: Rc<RefCell<BTreeMap<String, String>>>,
}

impl RecordingElement {
    #[must_use]
    pub fn style(&self, property: &str) -> Option<String> {
        self.styles.borrow().get(property).cloned()
    }

    #[must_use]
    pub fn style_count(&self) -> usize {
        self.styles.borrow().len()
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().contains(class)
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.borrow().get(name).cloned()
    }
}

impl StyleTarget for RecordingElement {
    fn set_style(&self, property: &str, value: &str) {
        self.styles
            .borrow_mut()
            .insert(property.to_string(), value.to_string());
    }

    fn remove_style(&self, property: &str) {
        self.styles.borrow_mut().remove(property);
    }
}

impl ClassTarget for RecordingElement {
    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().insert(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().remove(class);
    }
}

impl ThemeTarget for RecordingElement {
    fn apply_theme(&self, attribute: &str, value: &str) {
        self.attributes
            .borrow_mut()
            .insert(attribute.to_string(), value.to_string());
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingOpener {
    opened: Rc<RefCell<Vec<String>>>,
}

impl RecordingOpener {
    #[must_use]
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl WindowOpener for RecordingOpener {
    fn open(&self, url: &str, _target: &str, _features: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }
}

/// Clipboard that either accepts every write or rejects with a fixed reason.
#[derive(Debug, Clone, Default)]
pub struct ScriptedClipboard {
    rejection: Option<String>,
    contents: Rc<RefCell<Option<String>>>,
}

impl ScriptedClipboard {
    #[must_use]
    pub fn accepting() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rejecting(reason: &str) -> Self {
        Self {
            rejection: Some(reason.to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Clipboard for ScriptedClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if let Some(reason) = &self.rejection {
            return Err(ClipboardError(reason.clone()));
        }
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}

/// Sleeper that returns immediately and remembers what it was asked to wait.
#[derive(Debug, Clone, Default)]
pub struct InstantSleeper {
    slept: Rc<RefCell<Vec<u32>>>,
}

impl InstantSleeper {
    #[must_use]
    pub fn slept(&self) -> Vec<u32> {
        self.slept.borrow().clone()
    }

    #[must_use]
    pub fn total_ms(&self) -> u64 {
        self.slept.borrow().iter().map(|ms| u64::from(*ms)).sum()
    }
}

#[async_trait(?Send)]
impl Sleeper for InstantSleeper {
    async fn sleep_ms(&self, duration_ms: u32) {
        self.slept.borrow_mut().push(duration_ms);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastEvent {
    Shown(String),
    Exiting,
    Removed,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingToastHost {
    events: Rc<RefCell<Vec<ToastEvent>>>,
    detached: bool,
}

impl RecordingToastHost {
    /// A host with no page to attach to; every `show` fails.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            detached: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn events(&self) -> Vec<ToastEvent> {
        self.events.borrow().clone()
    }

    /// Toasts shown and not yet removed.
    #[must_use]
    pub fn visible(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .fold(0_usize, |acc, event| match event {
                ToastEvent::Shown(_) => acc + 1,
                ToastEvent::Removed => acc.saturating_sub(1),
                ToastEvent::Exiting => acc,
            })
    }
}

pub struct RecordedToast {
    events: Rc<RefCell<Vec<ToastEvent>>>,
}

impl ToastHandle for RecordedToast {
    fn begin_exit(&self) {
        self.events.borrow_mut().push(ToastEvent::Exiting);
    }

    fn remove(self) {
        self.events.borrow_mut().push(ToastEvent::Removed);
    }
}

impl ToastHost for RecordingToastHost {
    type Toast = RecordedToast;

    fn show(&self, message: &str) -> Option<Self::Toast> {
        if self.detached {
            return None;
        }
        self.events
            .borrow_mut()
            .push(ToastEvent::Shown(message.to_string()));
        Some(RecordedToast {
            events: Rc::clone(&self.events),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    #[must_use]
    pub fn at(now_ms: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(now_ms)),
        }
    }

    pub fn advance(&self, delta_ms: f64) {
        self.now.set(self.now.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingScrollHost {
    ids: Rc<BTreeSet<String>>,
    scrolled: Rc<RefCell<Vec<String>>>,
}

impl RecordingScrollHost {
    #[must_use]
    pub fn with_ids(ids: &[&str]) -> Self {
        Self {
            ids: Rc::new(ids.iter().map(|id| (*id).to_string()).collect()),
            scrolled: Rc::default(),
        }
    }

    #[must_use]
    pub fn scrolled(&self) -> Vec<String> {
        self.scrolled.borrow().clone()
    }
}

impl ScrollHost for RecordingScrollHost {
    type Target = String;

    fn find_target(&self, id: &str) -> Option<Self::Target> {
        self.ids.get(id).cloned()
    }

    fn scroll_smoothly_to(&self, target: &Self::Target) {
        self.scrolled.borrow_mut().push(target.clone());
    }
}

#[derive(Debug, Default)]
struct ImageState {
    source: String,
    deferred: Option<String>,
    loaded: bool,
    writes: usize,
}

/// Image handle compared by identity, like a DOM node.
#[derive(Debug, Clone, Default)]
pub struct RecordingImage {
    state: Rc<RefCell<ImageState>>,
}

impl RecordingImage {
    #[must_use]
    pub fn new(source: &str, deferred: Option<&str>) -> Self {
        Self {
            state: Rc::new(RefCell::new(ImageState {
                source: source.to_string(),
                deferred: deferred.map(str::to_string),
                loaded: false,
                writes: 0,
            })),
        }
    }

    #[must_use]
    pub fn source(&self) -> String {
        self.state.borrow().source.clone()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.state.borrow().loaded
    }

    #[must_use]
    pub fn writes(&self) -> usize {
        self.state.borrow().writes
    }
}

impl PartialEq for RecordingImage {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl LazyImage for RecordingImage {
    fn deferred_source(&self, _attribute: &str) -> Option<String> {
        self.state.borrow().deferred.clone()
    }

    fn current_source(&self) -> String {
        self.source()
    }

    fn set_source(&self, src: &str) {
        let mut state = self.state.borrow_mut();
        state.source = src.to_string();
        state.writes += 1;
    }

    fn mark_loaded(&self, _class: &str) {
        self.state.borrow_mut().loaded = true;
    }
}
