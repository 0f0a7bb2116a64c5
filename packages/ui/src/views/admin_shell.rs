use api::Session;
use dioxus::prelude::*;

use crate::controllers::{guard, logout, AdminPage, GuardOutcome, LogoutOutcome};
use crate::platform::{alert, confirm};
use crate::{icons, use_services, Icon};

const NAV_PAGES: [AdminPage; 4] = [
    AdminPage::Dashboard,
    AdminPage::Projects,
    AdminPage::Profile,
    AdminPage::Settings,
];

/// Layout shared by the admin pages.
///
/// Checks the session on mount and only renders `children` once it is
/// confirmed. The session is provided to descendants through
/// [`crate::use_session`].
#[component]
pub fn AdminShell(page: AdminPage, on_navigate: EventHandler<String>, children: Element) -> Element {
    let services = use_services();
    let mut session = use_context_provider(|| Signal::new(Option::<Session>::None));

    let backend = services.backend.clone();
    let _guard = use_resource(move || {
        let backend = backend.clone();
        async move {
            match guard(&backend, page).await {
                GuardOutcome::Public => {}
                GuardOutcome::Redirect { to, alert: message } => {
                    if let Some(message) = message {
                        alert(&message);
                    }
                    on_navigate.call(to.to_string());
                }
                GuardOutcome::Authorized { session: confirmed, .. } => {
                    session.set(Some(confirmed));
                }
            }
        }
    });

    let backend = services.backend.clone();
    let on_logout = move |_| {
        let backend = backend.clone();
        async move {
            let confirmed = confirm("Log out now?");
            match logout(&backend, confirmed).await {
                LogoutOutcome::Cancelled => {}
                LogoutOutcome::Redirect(to) => on_navigate.call(to.to_string()),
                LogoutOutcome::Failed(message) => alert(&message),
            }
        }
    };

    let current = session();
    let Some(current) = current else {
        return rsx! {
            div { class: "admin-loading", "Checking session..." }
        };
    };
    let display_name = current
        .user
        .as_ref()
        .map(|u| u.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "admin-layout",
            aside {
                class: "admin-sidebar",
                h2 { "Admin" }
                nav {
                    for item in NAV_PAGES {
                        button {
                            key: "{item.path()}",
                            class: if item == page { "nav-link active" } else { "nav-link" },
                            onclick: move |_| on_navigate.call(item.path().to_string()),
                            "{item.title()}"
                        }
                    }
                }
                button {
                    id: "logoutBtn",
                    class: "btn btn-outline",
                    onclick: on_logout,
                    Icon { icon: icons::FaRightFromBracket, width: 14, height: 14 }
                    " Log out"
                }
            }
            main {
                class: "admin-main",
                header {
                    class: "admin-header",
                    h1 { "{page.title()}" }
                    span { class: "admin-user", "{display_name}" }
                }
                {children}
            }
        }
    }
}
