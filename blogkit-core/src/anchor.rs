//! In-page anchor links with animated scrolling.

/// Resolves fragment targets and scrolls to them.
pub trait ScrollHost {
    type Target;

    fn find_target(&self, id: &str) -> Option<Self::Target>;
    /// Bring `target` to the top of the viewport with smooth motion.
    fn scroll_smoothly_to(&self, target: &Self::Target);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorOutcome {
    Scrolled,
    /// The fragment names no element on the page.
    Unmatched,
    /// A bare `#` link, or not an in-page link at all.
    Empty,
}

/// Fragment id of an in-page link: `"#intro"` gives `Some("intro")`.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub struct AnchorHandler<H: ScrollHost> {
    host: H,
}

impl<H: ScrollHost> AnchorHandler<H> {
    pub const fn new(host: H) -> Self {
        Self { host }
    }

    /// Whether the click on a link with `href` must have its default navigation
    /// suppressed. Every `#` link is suppressed, including ones whose target is
    /// missing, so a stale fragment leaves the URL and scroll position alone.
    #[must_use]
    pub fn intercepts(href: &str) -> bool {
        href.starts_with('#')
    }

    pub fn follow(&self, href: &str) -> AnchorOutcome {
        let Some(id) = fragment_target(href) else {
            return AnchorOutcome::Empty;
        };
        match self.host.find_target(id) {
            Some(target) => {
                self.host.scroll_smoothly_to(&target);
                AnchorOutcome::Scrolled
            }
            None => {
                log::debug!("anchor `{href}` has no matching element");
                AnchorOutcome::Unmatched
            }
        }
    }
}
