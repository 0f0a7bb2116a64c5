use std::time::Duration;

use api::Backend;

use crate::feedback::Submission;
use crate::forms::LoginForm;
use crate::platform::sleep;

use super::session::DASHBOARD_PATH;

pub const LOGIN_SUCCESS: &str = "Login successful, redirecting...";
const LOGIN_FAILED: &str = "Login failed";

/// Validate and send the login form.
///
/// On success the caller shows [`LOGIN_SUCCESS`] and navigates to the returned
/// path after the configured redirect delay.
pub async fn submit_login<B: Backend>(backend: &B, form: &LoginForm) -> Submission<&'static str> {
    let credentials = match form.validate() {
        Ok(credentials) => credentials,
        Err(e) => return Submission::Invalid(e),
    };
    match backend.login(&credentials).await {
        Ok(()) => {
            tracing::info!("Logged in as {}", credentials.username);
            Submission::Done(DASHBOARD_PATH)
        }
        Err(e) => {
            tracing::error!("Login failed: {}", e);
            Submission::Failed(e.user_message(LOGIN_FAILED))
        }
    }
}

/// Page to open after a login went through, once `delay` has passed so the
/// success message stays readable. `None` for any other outcome.
pub async fn redirect_after(outcome: &Submission<&'static str>, delay: Duration) -> Option<&'static str> {
    let Submission::Done(to) = outcome else {
        return None;
    };
    sleep(delay).await;
    Some(*to)
}
