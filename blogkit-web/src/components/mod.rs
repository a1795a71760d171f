pub mod toast;
pub mod toc;

pub use toast::{DomToastHost, Toast, ToastProps};
pub use toc::{TableOfContents, TableOfContentsProps};
