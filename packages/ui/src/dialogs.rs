//! Blocking browser dialogs.
//!
//! Web and desktop both render into a webview, so `window.confirm` and
//! `window.alert` are reachable through `document::eval` on every platform.

use dioxus::prelude::*;

/// Ask the user a yes/no question. A dialog that cannot be shown counts as "no".
pub async fn confirm(message: &str) -> bool {
    let js = format!("return window.confirm({});", js_string(message));
    match document::eval(&js).join::<bool>().await {
        Ok(answer) => answer,
        Err(e) => {
            tracing::warn!("confirm dialog failed: {e}");
            false
        }
    }
}

/// Show a message and wait until the user dismisses it.
pub async fn alert(message: &str) {
    let js = format!("window.alert({}); return null;", js_string(message));
    if let Err(e) = document::eval(&js).join::<serde_json::Value>().await {
        tracing::warn!("alert dialog failed: {e}");
    }
}

fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}
