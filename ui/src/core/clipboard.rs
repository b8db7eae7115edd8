//! System clipboard access.

use dioxus::logger::tracing::{debug, warn};
use thiserror::Error;

use super::platform;

#[derive(Debug, Error, PartialEq)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

pub async fn copy_text(payload: String) -> Result<(), ClipboardError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let unavailable = |what: &str| ClipboardError::Unavailable(what.to_string());

        let window = web_sys::window().ok_or_else(|| unavailable("window"))?;
        let document = window
            .document()
            .ok_or_else(|| unavailable("document"))?
            .dyn_into::<web_sys::HtmlDocument>()
            .map_err(|_| unavailable("html document"))?;
        let body = document.body().ok_or_else(|| unavailable("body"))?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| unavailable("textarea"))?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| unavailable("textarea cast"))?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        let copied = document.exec_command("copy").unwrap_or(false);
        textarea.remove();
        if copied {
            Ok(())
        } else {
            Err(ClipboardError::Rejected("copy command blocked".into()))
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard =
            Clipboard::new().map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
        clipboard
            .set_text(payload)
            .map_err(|err| ClipboardError::Rejected(err.to_string()))
    }
}

/// Fire-and-forget copy. Failures are logged and otherwise ignored.
pub fn copy_detached(payload: String) {
    platform::spawn_future(async move {
        let chars = payload.chars().count();
        match copy_text(payload).await {
            Ok(()) => debug!(chars, "copied to clipboard"),
            Err(err) => warn!("failed to copy text: {err}"),
        }
    });
}
