//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Shows a "Try Again" button when set
    pub on_retry: Option<EventHandler<MouseEvent>>,
}

/// Displays an error message in a styled box, optionally with a retry button.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let on_retry = props.on_retry;

    rsx! {
        div {
            style: "max-width: 420px; margin: 40px auto; padding: 16px 20px; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            h2 {
                style: "margin: 0 0 8px 0; font-size: 18px;",
                "Error Loading Data"
            }
            p {
                style: "margin: 0;",
                "{props.message}"
            }
            if let Some(handler) = on_retry {
                button {
                    style: "margin-top: 12px; width: 100%; padding: 8px; background: #E53935; color: white; border: none; border-radius: 4px; cursor: pointer;",
                    onclick: move |evt| handler.call(evt),
                    "Try Again"
                }
            }
        }
    }
}
