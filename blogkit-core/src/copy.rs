//! Copy-link to clipboard with a transient toast confirmation.
use async_trait::async_trait;

use crate::config::EnhancerConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardError(pub String);

#[async_trait(?Send)]
pub trait Clipboard {
    /// Write `text` to the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform refuses the write (missing permission,
    /// insecure context, no clipboard API).
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep_ms(&self, duration_ms: u32);
}

/// A toast that is currently on screen.
pub trait ToastHandle {
    /// Swap the entrance animation for the exit animation.
    fn begin_exit(&self);
    fn remove(self);
}

pub trait ToastHost {
    type Toast: ToastHandle;

    /// Create, attach and animate in a toast. `None` when the page has nowhere to put it.
    fn show(&self, message: &str) -> Option<Self::Toast>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed(ClipboardError),
}

pub struct CopyLinkController<C, H, S>
where
    C: Clipboard,
    H: ToastHost,
    S: Sleeper,
{
    clipboard: C,
    toasts: H,
    sleeper: S,
    message: String,
    visible_ms: u32,
    exit_ms: u32,
}

impl<C, H, S> CopyLinkController<C, H, S>
where
    C: Clipboard,
    H: ToastHost,
    S: Sleeper,
{
    pub fn new(clipboard: C, toasts: H, sleeper: S, cfg: &EnhancerConfig) -> Self {
        Self {
            clipboard,
            toasts,
            sleeper,
            message: cfg.toast_message.clone(),
            visible_ms: cfg.toast_visible_ms,
            exit_ms: cfg.toast_exit_ms,
        }
    }

    /// Copy `url` and, on success, run the toast through its whole lifetime.
    ///
    /// The future resolves once the toast has been removed. Failures are
    /// logged and reported in the outcome; nothing is shown to the reader.
    pub async fn copy(&self, url: &str) -> CopyOutcome {
        if let Err(err) = self.clipboard.write_text(url).await {
            log::error!("Failed to copy: {err}");
            return CopyOutcome::Failed(err);
        }
        self.notify().await;
        CopyOutcome::Copied
    }

    async fn notify(&self) {
        let Some(toast) = self.toasts.show(&self.message) else {
            log::warn!("copy toast skipped: no place to attach it");
            return;
        };
        self.sleeper.sleep_ms(self.visible_ms).await;
        toast.begin_exit();
        self.sleeper.sleep_ms(self.exit_ms).await;
        toast.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{InstantSleeper, RecordingToastHost, ScriptedClipboard, ToastEvent};
    use futures::executor::block_on;

    #[test]
    fn successful_copy_shows_one_toast_for_3300ms() {
        let clipboard = ScriptedClipboard::accepting();
        let toasts = RecordingToastHost::default();
        let sleeper = InstantSleeper::default();
        let ctl = CopyLinkController::new(
            clipboard.clone(),
            toasts.clone(),
            sleeper.clone(),
            &EnhancerConfig::default(),
        );

        let outcome = block_on(ctl.copy("https://blog.example/post"));
        assert_eq!(outcome, CopyOutcome::Copied);
        assert_eq!(clipboard.contents().as_deref(), Some("https://blog.example/post"));
        assert_eq!(
            toasts.events(),
            vec![
                ToastEvent::Shown("Link copied to clipboard!".into()),
                ToastEvent::Exiting,
                ToastEvent::Removed,
            ]
        );
        assert_eq!(sleeper.slept(), vec![3000, 300]);
        assert_eq!(sleeper.total_ms(), 3300);
    }

    #[test]
    fn failed_copy_shows_nothing() {
        let clipboard = ScriptedClipboard::rejecting("NotAllowedError");
        let toasts = RecordingToastHost::default();
        let sleeper = InstantSleeper::default();
        let ctl = CopyLinkController::new(
            clipboard,
            toasts.clone(),
            sleeper.clone(),
            &EnhancerConfig::default(),
        );

        let outcome = block_on(ctl.copy("https://blog.example/post"));
        assert_eq!(
            outcome,
            CopyOutcome::Failed(ClipboardError("NotAllowedError".into()))
        );
        assert!(toasts.events().is_empty());
        assert!(sleeper.slept().is_empty());
    }

    #[test]
    fn missing_toast_host_still_reports_copied() {
        let toasts = RecordingToastHost::detached();
        let ctl = CopyLinkController::new(
            ScriptedClipboard::accepting(),
            toasts.clone(),
            InstantSleeper::default(),
            &EnhancerConfig::default(),
        );
        assert_eq!(block_on(ctl.copy("u")), CopyOutcome::Copied);
        assert!(toasts.events().is_empty());
    }
}
