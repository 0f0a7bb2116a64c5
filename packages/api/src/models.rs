//! # Records exchanged with the admin backend
//!
//! Everything here is transient: the backend owns the data and the client only
//! reflects it. The only client-side invariant lives in
//! [`ProjectDraft::missing_required`].
//!
//! | Struct | Wire shape |
//! |--------|-----------|
//! | [`Session`] | `check-login` payload: `logged_in` plus an optional `user` |
//! | [`UserInfo`] | The logged-in admin's profile |
//! | [`Project`] | One portfolio entry. The backend may send the title as `name` |
//! | [`ProjectDraft`] | Body of `POST /projects` and `PUT /projects/{id}` |
//! | [`DashboardStats`] | `dashboard.stats` payload |
//! | [`ProfileUpdate`] | Body of `PUT /profile`; `None` fields are omitted |
//! | [`SiteSettings`] | Site-wide settings shown on the settings page |

use serde::{Deserialize, Deserializer, Serialize};

pub type ProjectId = u64;

/// Nullable text columns arrive as `null`; treat them like an empty string.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Login body for `POST /login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Server-asserted login state for the current browser credential.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub logged_in: bool,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

/// Profile of the admin user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

impl UserInfo {
    /// Name shown in the admin header, falling back to the username.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.username,
        }
    }
}

/// A portfolio entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub link: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub created_at: String,
}

impl Project {
    /// The editable part of this project.
    pub fn to_draft(&self) -> ProjectDraft {
        ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            image: self.image.clone(),
            link: self.link.clone(),
        }
    }
}

/// Fields sent when creating or updating a project.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub image: String,
    pub link: String,
}

impl ProjectDraft {
    /// True when title or description is blank.
    pub fn missing_required(&self) -> bool {
        self.title.trim().is_empty() || self.description.trim().is_empty()
    }
}

/// Read-only dashboard counters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_visits: Option<u64>,
    #[serde(default)]
    pub project_count: Option<u64>,
    #[serde(default)]
    pub last_login: Option<String>,
}

impl DashboardStats {
    pub fn total_visits_label(&self) -> String {
        self.total_visits.unwrap_or(0).to_string()
    }

    /// Falls back to the number of loaded projects when the backend omits the count.
    pub fn project_count_label(&self, loaded: usize) -> String {
        self.project_count.unwrap_or(loaded as u64).to_string()
    }

    pub fn last_login_label(&self) -> String {
        match self.last_login.as_deref() {
            Some(ts) if !ts.is_empty() => ts.to_string(),
            _ => "Never".to_string(),
        }
    }
}

/// Partial profile update. Only the fields that are `Some` are sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
}

/// Site-wide settings edited on the settings page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub site_name: String,
    pub site_description: String,
    pub site_footer: String,
    pub theme_color: String,
    pub dark_mode: bool,
    pub show_social_links: bool,
    pub api_url: String,
    pub enable_analytics: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "My Blog".to_string(),
            site_description: "A personal blog and project showcase".to_string(),
            site_footer: "© My Blog | Designed and built by me".to_string(),
            theme_color: "blue".to_string(),
            dark_mode: false,
            show_social_links: true,
            api_url: "/api".to_string(),
            enable_analytics: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_accepts_name_alias() {
        let json = r##"{"id": 2, "name": "Task manager", "description": "Todo app",
                       "image": "", "link": "#", "created_at": "2024-01-02"}"##;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.title, "Task manager");
        assert_eq!(project.category, "");
        assert_eq!(project.created_at, "2024-01-02");
    }

    #[test]
    fn test_project_null_columns_read_as_empty() {
        let json = r#"{"id": 1, "name": "Blog", "description": null, "category": null,
                       "image": null, "link": null, "created_at": null}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.title, "Blog");
        assert_eq!(project.description, "");
        assert_eq!(project.image, "");
        assert_eq!(project.link, "");
        assert_eq!(project.created_at, "");
    }

    #[test]
    fn test_user_null_bio_reads_as_empty() {
        let json = r#"{"username": "admin", "email": "a@b.c", "bio": null, "website": null}"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.bio, "");
        assert_eq!(user.website, None);
    }

    #[test]
    fn test_profile_update_omits_unset_fields() {
        let update = ProfileUpdate {
            email: Some("a@b.c".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"email": "a@b.c"}));
    }

    #[test]
    fn test_draft_requires_title_and_description() {
        let mut draft = ProjectDraft {
            title: "  ".to_string(),
            description: "desc".to_string(),
            ..Default::default()
        };
        assert!(draft.missing_required());
        draft.title = "Blog".to_string();
        assert!(!draft.missing_required());
        draft.description = String::new();
        assert!(draft.missing_required());
    }

    #[test]
    fn test_dashboard_labels_fall_back() {
        let stats = DashboardStats::default();
        assert_eq!(stats.total_visits_label(), "0");
        assert_eq!(stats.project_count_label(4), "4");
        assert_eq!(stats.last_login_label(), "Never");

        let stats = DashboardStats {
            total_visits: Some(128),
            project_count: Some(3),
            last_login: Some("2024-05-01 10:00".to_string()),
        };
        assert_eq!(stats.total_visits_label(), "128");
        assert_eq!(stats.project_count_label(0), "3");
        assert_eq!(stats.last_login_label(), "2024-05-01 10:00");
    }

    #[test]
    fn test_display_name_prefers_full_name() {
        let mut user = UserInfo {
            username: "admin".to_string(),
            ..Default::default()
        };
        assert_eq!(user.display_name(), "admin");
        user.full_name = Some("Ada".to_string());
        assert_eq!(user.display_name(), "Ada");
    }
}
