//! Blocking `alert`/`confirm` dialogs.
//!
//! Outside the browser there is nobody to ask: alerts are logged and
//! confirmations are declined.

/// Show a blocking message box
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
            return;
        }
    }
    tracing::warn!("alert: {}", message);
}

/// Ask the user to confirm a destructive action
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            return window.confirm_with_message(message).unwrap_or(false);
        }
    }
    tracing::debug!("confirm declined without a browser: {}", message);
    false
}
