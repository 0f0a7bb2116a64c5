use std::time::Duration;

use dioxus::prelude::*;

use crate::feedback::{clear_if_current, expire, FormMessage};

/// Inline message under a form. Renders nothing when there is no message.
#[component]
pub fn FormMessageView(message: Option<FormMessage>) -> Element {
    match message {
        Some(message) => rsx! {
            div { class: message.class(), "{message.text}" }
        },
        None => rsx! {},
    }
}

/// Show `next`, and clear success messages after `clear_after`.
///
/// The timer is not cancelled when a newer message replaces this one; it only
/// clears the slot if the same message is still showing.
pub fn flash(mut slot: Signal<Option<FormMessage>>, next: FormMessage, clear_after: Duration) {
    slot.set(Some(next.clone()));
    if next.is_success() {
        spawn(async move {
            if expire(&next, clear_after).await {
                slot.with_mut(|current| clear_if_current(current, &next));
            }
        });
    }
}
