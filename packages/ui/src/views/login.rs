use dioxus::prelude::*;

use crate::controllers::login::LOGIN_SUCCESS;
use crate::controllers::{redirect_after, submit_login};
use crate::feedback::FormMessage;
use crate::forms::LoginForm;
use crate::use_services;
use crate::views::FormMessageView;

/// Username/password login. Navigates to the dashboard shortly after a
/// successful login so the success message is visible.
#[component]
pub fn LoginView(on_navigate: EventHandler<String>) -> Element {
    let services = use_services();
    let mut form = use_signal(LoginForm::default);
    let mut message = use_signal(|| Option::<FormMessage>::None);
    let mut busy = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = services.backend.clone();
        let redirect_delay = services.timing.redirect_delay();
        async move {
            busy.set(true);
            let current = form.peek().clone();
            let outcome = submit_login(&backend, &current).await;
            message.set(Some(outcome.message(LOGIN_SUCCESS)));
            if let Some(to) = redirect_after(&outcome, redirect_delay).await {
                on_navigate.call(to.to_string());
            }
            busy.set(false);
        }
    };

    rsx! {
        div {
            class: "login-container",
            h1 { "Admin login" }
            form {
                id: "loginForm",
                class: "login-form",
                onsubmit,
                div {
                    class: "form-group",
                    label { r#for: "username", "Username" }
                    input {
                        id: "username",
                        r#type: "text",
                        autocomplete: "username",
                        value: "{form.read().username}",
                        oninput: move |evt| form.write().username = evt.value(),
                    }
                }
                div {
                    class: "form-group",
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        autocomplete: "current-password",
                        value: "{form.read().password}",
                        oninput: move |evt| form.write().password = evt.value(),
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Logging in..." } else { "Log in" }
                }
                FormMessageView { message: message() }
            }
        }
    }
}
