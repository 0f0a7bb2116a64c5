use api::{Backend, SiteSettings};

use crate::feedback::Submission;
use crate::forms::SettingsForm;

pub const SETTINGS_SAVED: &str = "Settings saved";
pub const SETTINGS_RESTORED: &str = "Default settings restored";

const SETTINGS_FAILED: &str = "Failed to save settings";
const RESET_FAILED: &str = "Failed to restore default settings";

/// Current settings, or the defaults when the backend has none to offer.
pub async fn load_settings<B: Backend>(backend: &B) -> SettingsForm {
    match backend.load_settings().await {
        Ok(settings) => SettingsForm::new(settings),
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            SettingsForm::new(SiteSettings::default())
        }
    }
}

pub async fn submit_settings<B: Backend>(backend: &B, form: &SettingsForm) -> Submission<()> {
    let settings = match form.validate() {
        Ok(settings) => settings,
        Err(e) => return Submission::Invalid(e),
    };
    match backend.save_settings(&settings).await {
        Ok(()) => {
            tracing::info!("Settings saved");
            Submission::Done(())
        }
        Err(e) => {
            tracing::error!("Failed to save settings: {}", e);
            Submission::Failed(e.user_message(SETTINGS_FAILED))
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ResetOutcome {
    Cancelled,
    Restored(SettingsForm),
    Failed(String),
}

/// Restore the backend defaults once the user confirmed.
pub async fn reset_settings<B: Backend>(backend: &B, confirmed: bool) -> ResetOutcome {
    if !confirmed {
        return ResetOutcome::Cancelled;
    }
    match backend.reset_settings().await {
        Ok(settings) => ResetOutcome::Restored(SettingsForm::new(settings)),
        Err(e) => {
            tracing::error!("Failed to reset settings: {}", e);
            ResetOutcome::Failed(e.user_message(RESET_FAILED))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::ValidationError;
    use api::{Call, MockBackend};

    #[tokio::test]
    async fn test_empty_site_name_sends_nothing() {
        let backend = MockBackend::seeded().logged_in();
        let mut form = load_settings(&backend).await;
        backend.clear_calls();
        form.settings.site_name = "   ".to_string();
        assert_eq!(
            submit_settings(&backend, &form).await,
            Submission::Invalid(ValidationError::MissingSiteName)
        );
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_save_and_reset() {
        let backend = MockBackend::seeded().logged_in();
        let mut form = load_settings(&backend).await;
        form.settings.site_name = "Folio".to_string();
        form.settings.dark_mode = true;
        assert_eq!(submit_settings(&backend, &form).await, Submission::Done(()));
        assert_eq!(load_settings(&backend).await.settings.site_name, "Folio");

        assert_eq!(reset_settings(&backend, false).await, ResetOutcome::Cancelled);
        assert!(!backend.calls().contains(&Call::ResetSettings));

        let ResetOutcome::Restored(form) = reset_settings(&backend, true).await else {
            panic!("reset failed");
        };
        assert_eq!(form.settings, SiteSettings::default());
    }

    #[tokio::test]
    async fn test_load_falls_back_to_defaults() {
        let backend = MockBackend::seeded();
        backend.set_offline(true);
        assert_eq!(load_settings(&backend).await.settings, SiteSettings::default());
    }
}
