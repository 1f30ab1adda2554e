//! Blocking user dialogs
//!
//! Errors are surfaced as plain alerts and deletes are confirmed with a
//! blocking prompt, so both go through this trait.

/// Alert and confirmation prompts
pub trait Dialogs {
    fn alert(&self, message: &str);

    fn confirm(&self, message: &str) -> bool;
}

/// `window.alert` / `window.confirm`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            tracing::warn!(text = message, "No window to show alert");
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            tracing::warn!(text = message, error = ?e, "Failed to show alert");
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
