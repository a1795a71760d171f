//! Minimal element capabilities shared by the styling controllers.
//!
//! Implementations wrap a live DOM node in the browser and a recording fake
//! in tests. Writes are infallible from the controller's point of view: a
//! browser that rejects an inline style has nothing useful to report back.

pub trait StyleTarget {
    fn set_style(&self, property: &str, value: &str);
    fn remove_style(&self, property: &str);

    fn apply_styles(&self, declarations: &[(&str, &str)]) {
        for (property, value) in declarations {
            self.set_style(property, value);
        }
    }
}

pub trait ClassTarget {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}
