use std::cell::RefCell;
use std::rc::Rc;

use blogkit_core::EngagementTracker;

use super::Page;
use crate::dom::{self, WebError};
use crate::host::DateClock;

pub type WebEngagement = EngagementTracker<DateClock>;

/// Log the page view now and the engagement summary when the page goes away.
///
/// `pagehide` backs up `beforeunload`, which mobile browsers often skip;
/// the tracker emits its summary only once.
///
/// # Errors
/// Returns an error if a listener cannot be attached.
pub fn mount(page: &Page) -> Result<Rc<RefCell<WebEngagement>>, WebError> {
    let path = page
        .window
        .location()
        .pathname()
        .unwrap_or_else(|_| "/".to_string());
    let tracker = Rc::new(RefCell::new(EngagementTracker::start(path, DateClock)));

    let scrolled = Rc::clone(&tracker);
    let metrics = page.clone();
    dom::listen_passive(&page.window, "scroll", move |_| {
        scrolled.borrow_mut().on_scroll(metrics.scroll_metrics());
    })?;

    for event in ["beforeunload", "pagehide"] {
        let leaving = Rc::clone(&tracker);
        dom::listen(&page.window, event, move |_| {
            leaving.borrow_mut().finish();
        })?;
    }
    Ok(tracker)
}
