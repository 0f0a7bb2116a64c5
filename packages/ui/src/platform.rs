//! Browser primitives used by the views: blocking dialogs, page host, timers.
//!
//! Native builds have no browser window; dialogs are logged and treated as
//! declined so nothing destructive runs without a user answer.

use std::time::Duration;

/// Show a blocking alert.
pub fn alert(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("alert: {}", message);
    }
}

/// Ask the user to confirm. Returns `false` when no dialog can be shown.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!("confirm (declined, no window): {}", message);
        false
    }
}

/// Hostname the page was served from, empty outside the browser.
pub fn hostname() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().hostname().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

/// `scheme://host:port` of the page, empty outside the browser.
pub fn origin() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

/// Resolve a root-relative API base such as `/api` against the page origin.
pub fn absolute_base_url(base_url: &str, origin: &str) -> String {
    if base_url.starts_with('/') && !origin.is_empty() {
        format!("{}{}", origin.trim_end_matches('/'), base_url)
    } else {
        base_url.to_string()
    }
}

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_base_url() {
        assert_eq!(
            absolute_base_url("/api", "https://me.example"),
            "https://me.example/api"
        );
        assert_eq!(
            absolute_base_url("https://api.example/api", "https://me.example"),
            "https://api.example/api"
        );
        assert_eq!(absolute_base_url("/api", ""), "/api");
    }

    #[test]
    fn test_dialogs_decline_without_window() {
        assert!(!confirm("Delete?"));
        assert_eq!(hostname(), "");
    }
}
