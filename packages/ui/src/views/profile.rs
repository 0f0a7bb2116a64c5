use dioxus::prelude::*;

use crate::controllers::profile::{PASSWORD_SAVED, PROFILE_SAVED};
use crate::controllers::{submit_password, submit_profile};
use crate::feedback::{FormMessage, Submission};
use crate::forms::{PasswordForm, ProfileForm};
use crate::views::{flash, FormMessageView, TextField};
use crate::{use_services, use_session};

/// Profile details and the password change form.
#[component]
pub fn ProfileView() -> Element {
    let services = use_services();
    let message_clear = services.timing.message_clear();
    let session = use_session();

    let initial = move || {
        session
            .peek()
            .as_ref()
            .and_then(|s| s.user.as_ref())
            .map(ProfileForm::from_user)
            .unwrap_or_default()
    };
    let mut profile = use_signal(initial);
    let mut profile_message = use_signal(|| Option::<FormMessage>::None);
    let mut password = use_signal(PasswordForm::default);
    let password_message = use_signal(|| Option::<FormMessage>::None);
    let mut saving_profile = use_signal(|| false);
    let mut saving_password = use_signal(|| false);

    let backend = services.backend.clone();
    let on_profile = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        async move {
            let current = profile.peek().clone();
            saving_profile.set(true);
            let outcome = submit_profile(&backend, &current).await;
            saving_profile.set(false);
            flash(profile_message, outcome.message(PROFILE_SAVED), message_clear);
            if let Submission::Done(cleared) = outcome {
                profile.set(cleared);
            }
        }
    };

    let backend = services.backend.clone();
    let on_password = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        async move {
            let current = password.peek().clone();
            saving_password.set(true);
            let outcome = submit_password(&backend, &current).await;
            saving_password.set(false);
            flash(password_message, outcome.message(PASSWORD_SAVED), message_clear);
            if outcome.is_done() {
                password.set(PasswordForm::default());
            }
        }
    };

    let on_cancel = move |_| {
        profile.set(initial());
        profile_message.set(None);
    };

    rsx! {
        section {
            class: "card",
            h2 { "Profile" }
            form {
                id: "profileForm",
                onsubmit: on_profile,
                div {
                    class: "form-group",
                    label { r#for: "profileUsername", "Username" }
                    input {
                        id: "profileUsername",
                        r#type: "text",
                        readonly: true,
                        value: "{profile.read().username}",
                    }
                }
                TextField {
                    id: "profileFullName",
                    label: "Full name",
                    value: profile.read().full_name.clone(),
                    on_input: move |v: String| profile.write().full_name = v,
                }
                TextField {
                    id: "profileEmail",
                    label: "Email",
                    kind: "email",
                    value: profile.read().email.clone(),
                    on_input: move |v: String| profile.write().email = v,
                }
                div {
                    class: "form-group",
                    label { r#for: "profileBio", "Bio" }
                    textarea {
                        id: "profileBio",
                        rows: "4",
                        value: "{profile.read().bio}",
                        oninput: move |evt| profile.write().bio = evt.value(),
                    }
                }
                TextField {
                    id: "profileWebsite",
                    label: "Website",
                    kind: "url",
                    value: profile.read().website.clone(),
                    on_input: move |v: String| profile.write().website = v,
                }
                TextField {
                    id: "profileGithub",
                    label: "GitHub",
                    value: profile.read().github.clone(),
                    on_input: move |v: String| profile.write().github = v,
                }
                TextField {
                    id: "profileTwitter",
                    label: "Twitter",
                    value: profile.read().twitter.clone(),
                    on_input: move |v: String| profile.write().twitter = v,
                }
                TextField {
                    id: "profileLinkedin",
                    label: "LinkedIn",
                    value: profile.read().linkedin.clone(),
                    on_input: move |v: String| profile.write().linkedin = v,
                }
                TextField {
                    id: "profilePassword",
                    label: "New password (leave empty to keep)",
                    kind: "password",
                    value: profile.read().password.clone(),
                    on_input: move |v: String| profile.write().password = v,
                }
                TextField {
                    id: "profileConfirmPassword",
                    label: "Confirm new password",
                    kind: "password",
                    value: profile.read().confirm_password.clone(),
                    on_input: move |v: String| profile.write().confirm_password = v,
                }
                div {
                    class: "form-actions",
                    button { class: "btn btn-outline", r#type: "button", onclick: on_cancel, "Cancel" }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: saving_profile(),
                        if saving_profile() { "Saving..." } else { "Save profile" }
                    }
                }
                FormMessageView { message: profile_message() }
            }
        }
        section {
            class: "card",
            h2 { "Change password" }
            form {
                id: "passwordForm",
                onsubmit: on_password,
                TextField {
                    id: "currentPassword",
                    label: "Current password",
                    kind: "password",
                    value: password.read().current_password.clone(),
                    on_input: move |v: String| password.write().current_password = v,
                }
                TextField {
                    id: "newPassword",
                    label: "New password",
                    kind: "password",
                    value: password.read().new_password.clone(),
                    on_input: move |v: String| password.write().new_password = v,
                }
                TextField {
                    id: "confirmNewPassword",
                    label: "Confirm new password",
                    kind: "password",
                    value: password.read().confirm_password.clone(),
                    on_input: move |v: String| password.write().confirm_password = v,
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: saving_password(),
                    if saving_password() { "Updating..." } else { "Update password" }
                }
                FormMessageView { message: password_message() }
            }
        }
    }
}
