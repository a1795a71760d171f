//! blogkit core
//!
//! Platform-agnostic reading and engagement controllers for static blog pages.
//! Every browser facility (storage, clipboard, timers, DOM surfaces) is reached
//! through a capability trait so the controllers run and test without a browser.

pub mod anchor;
pub mod config;
pub mod copy;
pub mod engagement;
pub mod lazy;
pub mod menu;
pub mod progress;
pub mod recording;
pub mod share;
pub mod store;
pub mod surface;
pub mod theme;
pub mod toc;

// Re-export commonly used types
pub use anchor::{AnchorHandler, AnchorOutcome, ScrollHost, fragment_target};
pub use config::{ConfigError, EnhancerConfig};
pub use copy::{
    Clipboard, ClipboardError, CopyLinkController, CopyOutcome, Sleeper, ToastHandle, ToastHost,
};
pub use engagement::{Clock, EngagementEvent, EngagementTracker};
pub use lazy::{LazyImage, LazyLoader, LoaderMode};
pub use menu::{MENU_OVERLAY_STYLE, MenuController};
pub use progress::{PROGRESS_BAR_STYLE, ProgressIndicator, ScrollMetrics};
pub use share::{
    ShareContext, ShareDispatcher, SharePlatform, UnknownPlatform, WindowOpener, share_url,
};
pub use store::{MemoryPreferenceStore, PreferenceStore, StoreError};
pub use surface::{ClassTarget, StyleTarget};
pub use theme::{Theme, ThemeController, ThemeTarget, ThemeValue};
pub use toc::{HeadingLevel, HeadingSource, TocEntry, TocIndex};
