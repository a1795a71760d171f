//! Mobile navigation toggle.
use crate::surface::{ClassTarget, StyleTarget};

/// Inline declarations that turn the navigation menu into a vertical overlay
/// below the fixed header.
pub const MENU_OVERLAY_STYLE: &[(&str, &str)] = &[
    ("display", "flex"),
    ("flex-direction", "column"),
    ("position", "absolute"),
    ("top", "var(--navbar-height)"),
    ("left", "0"),
    ("right", "0"),
    ("background", "var(--color-bg)"),
    ("padding", "var(--spacing-xl)"),
    ("box-shadow", "var(--shadow-lg)"),
];

pub const ACTIVE_CLASS: &str = "active";

/// Owns the open/closed flag for the mobile menu. Either element may be
/// missing from the page; the flag still flips so a later render stays in sync.
pub struct MenuController<M, T>
where
    M: StyleTarget,
    T: ClassTarget,
{
    menu: Option<M>,
    toggle: Option<T>,
    open: bool,
}

impl<M, T> MenuController<M, T>
where
    M: StyleTarget,
    T: ClassTarget,
{
    pub const fn new(menu: Option<M>, toggle: Option<T>) -> Self {
        Self {
            menu,
            toggle,
            open: false,
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        if self.open {
            self.show();
        } else {
            self.hide();
        }
        self.open
    }

    fn show(&self) {
        if let Some(menu) = &self.menu {
            menu.apply_styles(MENU_OVERLAY_STYLE);
        } else {
            log::debug!("menu toggle ignored: navigation menu element missing");
        }
        if let Some(toggle) = &self.toggle {
            toggle.add_class(ACTIVE_CLASS);
        }
    }

    fn hide(&self) {
        if let Some(menu) = &self.menu {
            for (property, _) in MENU_OVERLAY_STYLE {
                menu.remove_style(property);
            }
        }
        if let Some(toggle) = &self.toggle {
            toggle.remove_class(ACTIVE_CLASS);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::RecordingElement;

    #[test]
    fn opening_applies_overlay_and_marks_toggle() {
        let menu = RecordingElement::default();
        let button = RecordingElement::default();
        let mut ctl = MenuController::new(Some(menu.clone()), Some(button.clone()));
        assert!(ctl.toggle());
        assert_eq!(menu.style("display").as_deref(), Some("flex"));
        assert_eq!(menu.style("top").as_deref(), Some("var(--navbar-height)"));
        assert_eq!(menu.style_count(), MENU_OVERLAY_STYLE.len());
        assert!(button.has_class("active"));
    }

    #[test]
    fn two_toggles_restore_default_layout() {
        let menu = RecordingElement::default();
        let button = RecordingElement::default();
        let mut ctl = MenuController::new(Some(menu.clone()), Some(button.clone()));
        ctl.toggle();
        assert!(!ctl.toggle());
        assert!(!ctl.is_open());
        assert_eq!(menu.style_count(), 0);
        assert!(!button.has_class("active"));
    }

    #[test]
    fn missing_elements_do_not_fail() {
        let mut ctl: MenuController<RecordingElement, RecordingElement> =
            MenuController::new(None, None);
        assert!(ctl.toggle());
        assert!(!ctl.toggle());
    }
}
