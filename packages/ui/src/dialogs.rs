//! Blocking browser dialogs and failure reporting.
//!
//! On the web these are `window.alert` / `window.confirm`. Other targets have no
//! blocking dialog, so messages are logged and confirmations are accepted.

use std::fmt::Display;

/// Show a blocking message.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!(message, "alert");
}

/// Ask the user to confirm an action. Dismissing the dialog counts as "no".
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!(message, "confirm (auto-accepted)");
        true
    }
}

/// Log a failed backend call.
pub fn report_error(context: &str, err: &impl Display) {
    tracing::error!("{context}: {err}");
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&format!("{context}: {err}").into());
}
