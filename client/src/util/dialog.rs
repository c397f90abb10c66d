//! Blocking browser prompts and history helpers.
//!
//! Thin wrappers over `window.alert`, `window.confirm` and `history.back`.
//! Outside a browser they no-op, and `confirm` declines.

#[cfg(test)]
#[path = "dialog_test.rs"]
mod dialog_test;

/// Show a blocking alert with `message`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_err() {
                log::warn!("alert could not be shown: {message}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Ask a blocking yes/no question. Returns `true` only on an explicit yes.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Return to the previous history entry.
pub fn history_back() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    }
}
