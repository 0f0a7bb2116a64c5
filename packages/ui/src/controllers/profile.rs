//! Profile and password forms. Both write through `PUT /profile`.

use api::Backend;

use crate::feedback::Submission;
use crate::forms::{PasswordForm, ProfileForm};

pub const PROFILE_SAVED: &str = "Profile updated";
pub const PASSWORD_SAVED: &str = "Password updated";

const PROFILE_FAILED: &str = "Failed to update profile";
const PASSWORD_FAILED: &str = "Failed to update password";

/// Save the profile. On success the returned form has its password fields cleared.
pub async fn submit_profile<B: Backend>(backend: &B, form: &ProfileForm) -> Submission<ProfileForm> {
    let update = match form.validate() {
        Ok(update) => update,
        Err(e) => return Submission::Invalid(e),
    };
    match backend.update_profile(&update).await {
        Ok(()) => {
            tracing::info!("Profile updated");
            let mut saved = form.clone();
            saved.clear_passwords();
            Submission::Done(saved)
        }
        Err(e) => {
            tracing::error!("Failed to update profile: {}", e);
            Submission::Failed(e.user_message(PROFILE_FAILED))
        }
    }
}

/// Change the password. On success the caller resets the form.
pub async fn submit_password<B: Backend>(backend: &B, form: &PasswordForm) -> Submission<()> {
    let update = match form.validate() {
        Ok(update) => update,
        Err(e) => return Submission::Invalid(e),
    };
    match backend.update_profile(&update).await {
        Ok(()) => {
            tracing::info!("Password changed");
            Submission::Done(())
        }
        Err(e) => {
            tracing::error!("Failed to change password: {}", e);
            Submission::Failed(e.user_message(PASSWORD_FAILED))
        }
    }
}
