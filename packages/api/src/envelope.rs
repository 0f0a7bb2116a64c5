//! Decoding of the backend response envelope.
//!
//! Every endpoint answers with a single JSON object:
//!
//! ```json
//! {"status": "success", "message": "optional", "projects": [ ... ]}
//! ```
//!
//! The payload keys sit next to `status` rather than under a nested field, so the
//! payload type is decoded from the whole object. `check-login` answers may omit
//! `status` entirely, which counts as success when the HTTP status is 2xx.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;

pub const SUCCESS: &str = "success";

#[derive(Debug, Default, Deserialize)]
struct Head {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Turn a response into the payload `T` or an [`ApiError`].
///
/// `http_status` is the numeric status code; anything outside 2xx is a rejection
/// carrying the envelope's `message` when one can be read.
pub fn decode<T: DeserializeOwned>(http_status: u16, body: &str) -> Result<T, ApiError> {
    let ok = (200..300).contains(&http_status);
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) if ok => return Err(ApiError::Transport(format!("unreadable response: {e}"))),
        Err(_) => {
            return Err(ApiError::Rejected {
                status: Some(http_status),
                message: None,
            })
        }
    };

    let head = Head::deserialize(&value).unwrap_or_default();
    if !ok {
        return Err(ApiError::Rejected {
            status: Some(http_status),
            message: head.message,
        });
    }
    if let Some(status) = head.status.as_deref() {
        if status != SUCCESS {
            return Err(ApiError::Rejected {
                status: None,
                message: head.message,
            });
        }
    }

    T::deserialize(value).map_err(|e| ApiError::Transport(format!("unexpected payload: {e}")))
}

/// Payload of endpoints that only acknowledge.
#[derive(Debug, Default, Deserialize)]
pub struct Ack {}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectsPayload {
    #[serde(alias = "data")]
    pub projects: Vec<crate::models::Project>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectPayload {
    #[serde(alias = "data")]
    pub project: crate::models::Project,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DashboardPayload {
    pub dashboard: DashboardBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DashboardBody {
    #[serde(default)]
    pub stats: crate::models::DashboardStats,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SettingsPayload {
    #[serde(default)]
    pub settings: crate::models::SiteSettings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Session;

    #[test]
    fn test_success_payload() {
        let body = r#"{"status": "success", "projects": [
            {"id": 1, "title": "Blog", "description": "Flask blog", "category": "web"}
        ]}"#;
        let payload: ProjectsPayload = decode(200, body).unwrap();
        assert_eq!(payload.projects.len(), 1);
        assert_eq!(payload.projects[0].title, "Blog");
    }

    #[test]
    fn test_application_failure_carries_message() {
        let body = r#"{"status": "fail", "message": "bad creds"}"#;
        let err = decode::<Ack>(200, body).unwrap_err();
        assert_eq!(err, ApiError::rejected("bad creds"));
    }

    #[test]
    fn test_http_failure_carries_message() {
        let body = r#"{"status": "error", "message": "Project not found"}"#;
        let err = decode::<Ack>(404, body).unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                status: Some(404),
                message: Some("Project not found".to_string()),
            }
        );
    }

    #[test]
    fn test_http_failure_with_html_body() {
        let err = decode::<Ack>(502, "<html>Bad gateway</html>").unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                status: Some(502),
                message: None,
            }
        );
    }

    #[test]
    fn test_unreadable_success_is_transport_error() {
        let err = decode::<Ack>(200, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[test]
    fn test_session_without_status_field() {
        let session: Session = decode(200, r#"{"logged_in": false}"#).unwrap();
        assert!(!session.logged_in);
        assert!(session.user.is_none());

        let body = r#"{"status": "success", "logged_in": true,
                       "user": {"username": "admin", "email": "a@b.c", "bio": ""}}"#;
        let session: Session = decode(200, body).unwrap();
        assert!(session.logged_in);
        assert_eq!(session.user.unwrap().username, "admin");
    }

    #[test]
    fn test_project_rows_with_null_columns() {
        let body = r#"{"status": "success", "projects": [
            {"id": 1, "name": "Blog", "description": "d", "image": null, "link": null,
             "created_at": "2024-01-02"},
            {"id": 2, "name": "Shop", "description": "e", "image": "/s.png", "link": "https://shop"}
        ]}"#;
        let payload: ProjectsPayload = decode(200, body).unwrap();
        assert_eq!(payload.projects.len(), 2);
        assert_eq!(payload.projects[0].image, "");
        assert_eq!(payload.projects[0].link, "");
        assert_eq!(payload.projects[1].created_at, "");
    }

    #[test]
    fn test_projects_under_data_key() {
        let body = r#"{"status": "success", "data": [
            {"id": 3, "title": "Notes", "description": "n", "link": null, "image": null,
             "category": "app", "created_at": "2024-03-01"}
        ]}"#;
        let payload: ProjectsPayload = decode(200, body).unwrap();
        assert_eq!(payload.projects[0].title, "Notes");

        let body = r#"{"status": "success", "data": {"id": 3, "title": "Notes", "description": "n",
                       "link": null, "image": null, "category": null, "created_at": "2024-03-01"}}"#;
        let payload: ProjectPayload = decode(200, body).unwrap();
        assert_eq!(payload.project.id, 3);
        assert_eq!(payload.project.category, "");
    }

    #[test]
    fn test_create_acknowledgement_without_project() {
        let body = r#"{"status": "success", "message": "created", "data": {"id": 7, "title": "CLI"}}"#;
        assert!(decode::<Ack>(201, body).is_ok());
    }

    #[test]
    fn test_unauthorized_rejection() {
        let body = r#"{"status": "error", "message": "Please log in first"}"#;
        let err = decode::<Ack>(401, body).unwrap_err();
        assert_eq!(err.user_message("x"), "Please log in first");
    }

    #[test]
    fn test_dashboard_payload() {
        let body = r#"{"status": "success", "dashboard": {"stats":
            {"total_visits": 128, "last_login": "2024-05-01 10:00"}}}"#;
        let payload: DashboardPayload = decode(200, body).unwrap();
        assert_eq!(payload.dashboard.stats.total_visits, Some(128));
        assert_eq!(payload.dashboard.stats.project_count, None);
    }
}
