//! # Typed form state
//!
//! Each admin form is a plain struct bound to the inputs of its view. `validate()`
//! runs the presence and equality checks that must pass before any request is
//! issued, and the `to_*` conversions build the request bodies.
//!
//! | Form | Checks |
//! |------|--------|
//! | [`LoginForm`] | username and password present |
//! | [`ProfileForm`] | a new password, when given, matches its confirmation |
//! | [`PasswordForm`] | current password present, confirmation matches, minimum length |
//! | [`ProjectForm`] | title and description present |
//! | [`SettingsForm`] | site name present |

use api::{Credentials, ProfileUpdate, Project, ProjectDraft, ProjectId, SiteSettings, UserInfo};
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Why a form was not submitted. `Display` is the inline message.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your username and password")]
    MissingCredentials,
    #[error("The two passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("Please enter your current password")]
    MissingCurrentPassword,
    #[error("Project title and description are required")]
    MissingProjectFields,
    #[error("Site name is required")]
    MissingSiteName,
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Trimmed value of a shown field. An emptied field is sent as `""` so the
/// backend clears it.
fn shown(s: &str) -> Option<String> {
    Some(s.trim().to_string())
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<Credentials, ValidationError> {
        if blank(&self.username) || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(Credentials {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// Profile editor. `username` is display-only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileForm {
    pub username: String,
    pub email: String,
    pub bio: String,
    pub full_name: String,
    pub website: String,
    pub github: String,
    pub twitter: String,
    pub linkedin: String,
    pub password: String,
    pub confirm_password: String,
}

impl ProfileForm {
    /// Populate from the session's user record.
    pub fn from_user(user: &UserInfo) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            bio: user.bio.clone(),
            full_name: user.full_name.clone().unwrap_or_default(),
            website: user.website.clone().unwrap_or_default(),
            github: user.github.clone().unwrap_or_default(),
            twitter: user.twitter.clone().unwrap_or_default(),
            linkedin: user.linkedin.clone().unwrap_or_default(),
            password: String::new(),
            confirm_password: String::new(),
        }
    }

    /// Email and bio are always sent; the password only when one was typed.
    pub fn validate(&self) -> Result<ProfileUpdate, ValidationError> {
        if !self.password.is_empty() && self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(ProfileUpdate {
            email: Some(self.email.trim().to_string()),
            bio: Some(self.bio.clone()),
            full_name: shown(&self.full_name),
            website: shown(&self.website),
            github: shown(&self.github),
            twitter: shown(&self.twitter),
            linkedin: shown(&self.linkedin),
            password: (!self.password.is_empty()).then(|| self.password.clone()),
            current_password: None,
        })
    }

    pub fn clear_passwords(&mut self) {
        self.password.clear();
        self.confirm_password.clear();
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordForm {
    pub fn validate(&self) -> Result<ProfileUpdate, ValidationError> {
        if self.current_password.is_empty() {
            return Err(ValidationError::MissingCurrentPassword);
        }
        if self.new_password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        Ok(ProfileUpdate {
            password: Some(self.new_password.clone()),
            current_password: Some(self.current_password.clone()),
            ..Default::default()
        })
    }
}

/// Create/edit form for a project. `id` is set when editing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectForm {
    pub id: Option<ProjectId>,
    pub title: String,
    pub description: String,
    pub category: String,
    pub image: String,
    pub link: String,
}

impl ProjectForm {
    pub fn from_project(project: &Project) -> Self {
        Self {
            id: Some(project.id),
            title: project.title.clone(),
            description: project.description.clone(),
            category: project.category.clone(),
            image: project.image.clone(),
            link: project.link.clone(),
        }
    }

    pub fn validate(&self) -> Result<ProjectDraft, ValidationError> {
        let draft = ProjectDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category.trim().to_string(),
            image: self.image.trim().to_string(),
            link: self.link.trim().to_string(),
        };
        if draft.missing_required() {
            return Err(ValidationError::MissingProjectFields);
        }
        Ok(draft)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettingsForm {
    pub settings: SiteSettings,
}

impl SettingsForm {
    pub fn new(settings: SiteSettings) -> Self {
        Self { settings }
    }

    pub fn validate(&self) -> Result<SiteSettings, ValidationError> {
        if blank(&self.settings.site_name) {
            return Err(ValidationError::MissingSiteName);
        }
        let mut settings = self.settings.clone();
        settings.site_name = settings.site_name.trim().to_string();
        Ok(settings)
    }
}
