//! Inline status messages.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Success,
}

/// A message shown in place, above or instead of page content.
#[component]
pub fn InlineMessage(
    message: String,
    #[props(default = MessageKind::Error)] kind: MessageKind,
) -> Element {
    let class = match kind {
        MessageKind::Error => "message error-message",
        MessageKind::Success => "message success-message",
    };

    rsx! {
        div {
            class: "{class}",
            role: "alert",
            "{message}"
        }
    }
}

/// Blocking acknowledgment. Only the review success path uses this.
pub fn acknowledge(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!("{}", message);
    }
}
