//! Blocking operator notifications.

/// Show a blocking browser alert. No-op when no window is available.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
