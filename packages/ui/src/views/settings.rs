use dioxus::prelude::*;

use crate::controllers::settings::{SETTINGS_RESTORED, SETTINGS_SAVED};
use crate::controllers::{load_settings, reset_settings, submit_settings, ResetOutcome};
use crate::feedback::FormMessage;
use crate::forms::SettingsForm;
use crate::platform::confirm;
use crate::views::{flash, FormMessageView, TextField};
use crate::use_services;

const THEME_COLORS: [(&str, &str); 4] = [
    ("blue", "Blue"),
    ("green", "Green"),
    ("purple", "Purple"),
    ("orange", "Orange"),
];

/// Site-wide settings with save and restore-defaults.
#[component]
pub fn SettingsView() -> Element {
    let services = use_services();
    let message_clear = services.timing.message_clear();
    let mut form = use_signal(SettingsForm::default);
    let message = use_signal(|| Option::<FormMessage>::None);
    let mut saving = use_signal(|| false);

    let backend = services.backend.clone();
    let _load = use_resource(move || {
        let backend = backend.clone();
        async move {
            form.set(load_settings(&backend).await);
        }
    });

    let backend = services.backend.clone();
    let on_save = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        async move {
            let current = form.peek().clone();
            saving.set(true);
            let outcome = submit_settings(&backend, &current).await;
            saving.set(false);
            flash(message, outcome.message(SETTINGS_SAVED), message_clear);
        }
    };

    let backend = services.backend.clone();
    let on_reset = move |_| {
        let backend = backend.clone();
        async move {
            let confirmed = confirm("Restore the default settings?");
            match reset_settings(&backend, confirmed).await {
                ResetOutcome::Cancelled => {}
                ResetOutcome::Restored(defaults) => {
                    form.set(defaults);
                    flash(message, FormMessage::success(SETTINGS_RESTORED), message_clear);
                }
                ResetOutcome::Failed(text) => flash(message, FormMessage::error(text), message_clear),
            }
        }
    };

    let settings = form.read().settings.clone();

    rsx! {
        section {
            class: "card",
            form {
                id: "settingsForm",
                onsubmit: on_save,
                h2 { "General" }
                TextField {
                    id: "siteName",
                    label: "Site name",
                    value: settings.site_name,
                    on_input: move |v: String| form.write().settings.site_name = v,
                }
                div {
                    class: "form-group",
                    label { r#for: "siteDescription", "Site description" }
                    textarea {
                        id: "siteDescription",
                        rows: "3",
                        value: "{settings.site_description}",
                        oninput: move |evt| form.write().settings.site_description = evt.value(),
                    }
                }
                TextField {
                    id: "siteFooter",
                    label: "Footer text",
                    value: settings.site_footer,
                    on_input: move |v: String| form.write().settings.site_footer = v,
                }

                h2 { "Appearance" }
                div {
                    class: "form-group",
                    label { r#for: "themeColor", "Theme color" }
                    select {
                        id: "themeColor",
                        value: "{settings.theme_color}",
                        onchange: move |evt| form.write().settings.theme_color = evt.value(),
                        for (value, name) in THEME_COLORS {
                            option {
                                key: "{value}",
                                value: "{value}",
                                selected: settings.theme_color == value,
                                "{name}"
                            }
                        }
                    }
                }
                Toggle {
                    id: "darkMode",
                    label: "Dark mode",
                    checked: settings.dark_mode,
                    on_toggle: move |on: bool| form.write().settings.dark_mode = on,
                }
                Toggle {
                    id: "showSocialLinks",
                    label: "Show social links",
                    checked: settings.show_social_links,
                    on_toggle: move |on: bool| form.write().settings.show_social_links = on,
                }

                h2 { "Advanced" }
                TextField {
                    id: "apiUrl",
                    label: "API URL",
                    value: settings.api_url,
                    on_input: move |v: String| form.write().settings.api_url = v,
                }
                Toggle {
                    id: "enableAnalytics",
                    label: "Enable analytics",
                    checked: settings.enable_analytics,
                    on_toggle: move |on: bool| form.write().settings.enable_analytics = on,
                }

                div {
                    class: "form-actions",
                    button {
                        id: "resetSettings",
                        class: "btn btn-outline",
                        r#type: "button",
                        onclick: on_reset,
                        "Restore defaults"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Saving..." } else { "Save settings" }
                    }
                }
                FormMessageView { message: message() }
            }
        }
    }
}

#[component]
fn Toggle(id: String, label: String, checked: bool, on_toggle: EventHandler<bool>) -> Element {
    rsx! {
        div {
            class: "form-group form-check",
            input {
                id: "{id}",
                r#type: "checkbox",
                checked: checked,
                onchange: move |evt| on_toggle.call(evt.checked()),
            }
            label { r#for: "{id}", "{label}" }
        }
    }
}
