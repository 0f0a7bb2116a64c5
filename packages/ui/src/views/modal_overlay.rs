use dioxus::prelude::*;

use crate::controllers::CloseReason;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card or on the close button triggers `on_close`.
#[component]
pub fn ModalOverlay(title: String, on_close: EventHandler<CloseReason>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal active",
            onclick: move |_| on_close.call(CloseReason::Backdrop),
            div {
                class: "modal-content",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-header",
                    h2 { "{title}" }
                    button {
                        class: "close-btn",
                        r#type: "button",
                        onclick: move |_| on_close.call(CloseReason::CloseButton),
                        "×"
                    }
                }
                {children}
            }
        }
    }
}
