use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::ApiError;
use crate::models::{
    Credentials, DashboardStats, ProfileUpdate, Project, ProjectDraft, ProjectId, Session,
    SiteSettings, UserInfo,
};
use crate::Backend;

pub const DEMO_USERNAME: &str = "admin";
pub const DEMO_PASSWORD: &str = "admin123";

/// One request received by a [`MockBackend`].
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    CheckLogin,
    Login { username: String },
    Logout,
    Dashboard,
    ListProjects,
    GetProject(ProjectId),
    CreateProject(ProjectDraft),
    UpdateProject(ProjectId, ProjectDraft),
    DeleteProject(ProjectId),
    UpdateProfile(ProfileUpdate),
    LoadSettings,
    SaveSettings(SiteSettings),
    ResetSettings,
}

#[derive(Debug)]
struct State {
    logged_in: bool,
    password: String,
    user: UserInfo,
    projects: Vec<Project>,
    next_id: ProjectId,
    settings: SiteSettings,
    total_visits: u64,
    last_login: Option<String>,
    failure: Option<ApiError>,
    calls: Vec<Call>,
}

/// In-memory backend for demos and tests.
///
/// Behaves like the real API: mutations need a logged-in session, unknown ids are
/// rejected with `404`, and every request is recorded in [`MockBackend::calls`].
#[derive(Clone, Debug)]
pub struct MockBackend {
    state: Arc<Mutex<State>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// Empty backend with the demo account and no projects.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                logged_in: false,
                password: DEMO_PASSWORD.to_string(),
                user: UserInfo {
                    username: DEMO_USERNAME.to_string(),
                    ..Default::default()
                },
                projects: Vec::new(),
                next_id: 1,
                settings: SiteSettings::default(),
                total_visits: 0,
                last_login: None,
                failure: None,
                calls: Vec::new(),
            })),
        }
    }

    /// Backend pre-filled with the demo profile and three projects.
    pub fn seeded() -> Self {
        let backend = Self::new();
        {
            let mut state = backend.state();
            state.total_visits = 128;
            state.user = UserInfo {
                username: DEMO_USERNAME.to_string(),
                email: "admin@example.com".to_string(),
                bio: "Developer who enjoys building for the web and working with data.".to_string(),
                full_name: Some("Folio Admin".to_string()),
                website: Some("https://folio.example.com".to_string()),
                github: Some("https://github.com/folio".to_string()),
                twitter: None,
                linkedin: None,
            };
        }
        for (title, description, category) in [
            ("Personal blog", "A personal showcase site built on a small REST API.", "web"),
            ("Task manager", "A simple and efficient task management tool.", "app"),
            ("Data dashboard", "Interactive charts over public datasets.", "data"),
        ] {
            backend.insert(ProjectDraft {
                title: title.to_string(),
                description: description.to_string(),
                category: category.to_string(),
                image: "https://picsum.photos/seed/folio/300/200".to_string(),
                link: "#".to_string(),
            });
        }
        backend
    }

    /// Start with a logged-in session.
    pub fn logged_in(self) -> Self {
        self.state().logged_in = true;
        self
    }

    /// Replace the demo account's credentials.
    pub fn with_credentials(self, username: &str, password: &str) -> Self {
        {
            let mut state = self.state();
            state.user.username = username.to_string();
            state.password = password.to_string();
        }
        self
    }

    /// Make every following call fail as if the network were down.
    pub fn set_offline(&self, offline: bool) {
        self.state().failure =
            offline.then(|| ApiError::Transport("mock backend is offline".to_string()));
    }

    /// Make every following call fail with `error`; `None` restores normal answers.
    pub fn fail_with(&self, error: Option<ApiError>) {
        self.state().failure = error;
    }

    /// Requests received so far, oldest first.
    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }

    /// Current project list, bypassing the request log.
    pub fn projects(&self) -> Vec<Project> {
        self.state().projects.clone()
    }

    /// Current profile, bypassing the request log.
    pub fn user(&self) -> UserInfo {
        self.state().user.clone()
    }

    /// Add a project directly, bypassing the session check and the request log.
    pub fn insert(&self, draft: ProjectDraft) -> Project {
        let mut state = self.state();
        let project = Project {
            id: state.next_id,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            image: draft.image,
            link: draft.link,
            created_at: chrono::Local::now().format("%Y-%m-%d").to_string(),
        };
        state.next_id += 1;
        state.projects.push(project.clone());
        project
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Record `call` and run the transport check.
    fn enter(&self, call: Call) -> Result<MutexGuard<'_, State>, ApiError> {
        let mut state = self.state();
        state.calls.push(call);
        if let Some(error) = &state.failure {
            return Err(error.clone());
        }
        Ok(state)
    }

    /// Like [`MockBackend::enter`], but also requires a session.
    fn enter_authed(&self, call: Call) -> Result<MutexGuard<'_, State>, ApiError> {
        let state = self.enter(call)?;
        if !state.logged_in {
            return Err(ApiError::Rejected {
                status: Some(401),
                message: Some("Please log in first".to_string()),
            });
        }
        Ok(state)
    }
}

fn not_found() -> ApiError {
    ApiError::Rejected {
        status: Some(404),
        message: Some("Project not found".to_string()),
    }
}

impl Backend for MockBackend {
    async fn check_login(&self) -> Result<Session, ApiError> {
        let state = self.enter(Call::CheckLogin)?;
        Ok(Session {
            logged_in: state.logged_in,
            user: state.logged_in.then(|| state.user.clone()),
        })
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let mut state = self.enter(Call::Login {
            username: credentials.username.clone(),
        })?;
        if credentials.username != state.user.username || credentials.password != state.password {
            return Err(ApiError::Rejected {
                status: Some(401),
                message: Some("Invalid username or password".to_string()),
            });
        }
        state.logged_in = true;
        state.last_login = Some(chrono::Local::now().format("%Y-%m-%d %H:%M").to_string());
        Ok(())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let mut state = self.enter(Call::Logout)?;
        state.logged_in = false;
        Ok(())
    }

    async fn dashboard(&self) -> Result<DashboardStats, ApiError> {
        let state = self.enter_authed(Call::Dashboard)?;
        Ok(DashboardStats {
            total_visits: Some(state.total_visits),
            project_count: Some(state.projects.len() as u64),
            last_login: state.last_login.clone(),
        })
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        let state = self.enter(Call::ListProjects)?;
        Ok(state.projects.clone())
    }

    async fn get_project(&self, id: ProjectId) -> Result<Project, ApiError> {
        let state = self.enter(Call::GetProject(id))?;
        state
            .projects
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(not_found)
    }

    async fn create_project(&self, draft: &ProjectDraft) -> Result<(), ApiError> {
        drop(self.enter_authed(Call::CreateProject(draft.clone()))?);
        let project = self.insert(draft.clone());
        tracing::debug!("Mock created project {}", project.id);
        Ok(())
    }

    async fn update_project(&self, id: ProjectId, draft: &ProjectDraft) -> Result<(), ApiError> {
        let mut state = self.enter_authed(Call::UpdateProject(id, draft.clone()))?;
        let project = state
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(not_found)?;
        project.title = draft.title.clone();
        project.description = draft.description.clone();
        project.category = draft.category.clone();
        project.image = draft.image.clone();
        project.link = draft.link.clone();
        Ok(())
    }

    async fn delete_project(&self, id: ProjectId) -> Result<(), ApiError> {
        let mut state = self.enter_authed(Call::DeleteProject(id))?;
        let before = state.projects.len();
        state.projects.retain(|p| p.id != id);
        if state.projects.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        let mut state = self.enter_authed(Call::UpdateProfile(update.clone()))?;
        if let Some(password) = &update.password {
            if let Some(current) = &update.current_password {
                if *current != state.password {
                    return Err(ApiError::rejected("Current password is incorrect"));
                }
            }
            state.password = password.clone();
        }
        let user = &mut state.user;
        if let Some(email) = &update.email {
            user.email = email.clone();
        }
        if let Some(bio) = &update.bio {
            user.bio = bio.clone();
        }
        for (field, value) in [
            (&mut user.full_name, &update.full_name),
            (&mut user.website, &update.website),
            (&mut user.github, &update.github),
            (&mut user.twitter, &update.twitter),
            (&mut user.linkedin, &update.linkedin),
        ] {
            if let Some(value) = value {
                *field = (!value.is_empty()).then(|| value.clone());
            }
        }
        Ok(())
    }

    async fn load_settings(&self) -> Result<SiteSettings, ApiError> {
        let state = self.enter_authed(Call::LoadSettings)?;
        Ok(state.settings.clone())
    }

    async fn save_settings(&self, settings: &SiteSettings) -> Result<(), ApiError> {
        let mut state = self.enter_authed(Call::SaveSettings(settings.clone()))?;
        state.settings = settings.clone();
        Ok(())
    }

    async fn reset_settings(&self) -> Result<SiteSettings, ApiError> {
        let mut state = self.enter_authed(Call::ResetSettings)?;
        state.settings = SiteSettings::default();
        Ok(state.settings.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_credentials() -> Credentials {
        Credentials {
            username: DEMO_USERNAME.to_string(),
            password: DEMO_PASSWORD.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_flow() {
        let backend = MockBackend::seeded();

        let session = backend.check_login().await.unwrap();
        assert!(!session.logged_in);
        assert!(session.user.is_none());

        let bad = Credentials {
            username: "admin".to_string(),
            password: "nope".to_string(),
        };
        let err = backend.login(&bad).await.unwrap_err();
        assert_eq!(err.user_message("Login failed"), "Invalid username or password");

        backend.login(&demo_credentials()).await.unwrap();
        let session = backend.check_login().await.unwrap();
        assert!(session.logged_in);
        assert_eq!(session.user.unwrap().email, "admin@example.com");

        let stats = backend.dashboard().await.unwrap();
        assert_eq!(stats.total_visits, Some(128));
        assert_eq!(stats.project_count, Some(3));
        assert!(stats.last_login.is_some());

        backend.logout().await.unwrap();
        assert!(!backend.check_login().await.unwrap().logged_in);
    }

    #[tokio::test]
    async fn test_mutations_require_session() {
        let backend = MockBackend::seeded();
        let err = backend.delete_project(1).await.unwrap_err();
        assert!(matches!(err, ApiError::Rejected { status: Some(401), .. }));
        assert_eq!(backend.projects().len(), 3);

        // Reading the public list does not.
        assert_eq!(backend.list_projects().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_project_crud() {
        let backend = MockBackend::new().logged_in();
        backend
            .create_project(&ProjectDraft {
                title: "CLI".to_string(),
                description: "A command line tool".to_string(),
                category: "tools".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let created = backend.get_project(1).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.created_at.len(), "2024-01-01".len());

        let mut draft = created.to_draft();
        draft.title = "CLI v2".to_string();
        backend.update_project(created.id, &draft).await.unwrap();
        assert_eq!(backend.get_project(1).await.unwrap().title, "CLI v2");

        backend.delete_project(1).await.unwrap();
        let err = backend.get_project(1).await.unwrap_err();
        assert_eq!(err.user_message("x"), "Project not found");
        assert!(backend.delete_project(1).await.is_err());
    }

    #[tokio::test]
    async fn test_offline_records_call_and_fails() {
        let backend = MockBackend::seeded();
        backend.set_offline(true);
        let err = backend.list_projects().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(backend.calls(), vec![Call::ListProjects]);
    }

    #[tokio::test]
    async fn test_injected_failure() {
        let backend = MockBackend::seeded();
        backend.fail_with(Some(ApiError::rejected("maintenance")));
        let err = backend.check_login().await.unwrap_err();
        assert_eq!(err.user_message("x"), "maintenance");
        backend.fail_with(None);
        assert!(backend.check_login().await.is_ok());
    }

    #[tokio::test]
    async fn test_password_change_checks_current() {
        let backend = MockBackend::new().logged_in();
        let update = ProfileUpdate {
            password: Some("secret99".to_string()),
            current_password: Some("wrong".to_string()),
            ..Default::default()
        };
        assert!(backend.update_profile(&update).await.is_err());

        let update = ProfileUpdate {
            password: Some("secret99".to_string()),
            current_password: Some(DEMO_PASSWORD.to_string()),
            ..Default::default()
        };
        backend.update_profile(&update).await.unwrap();
        backend.logout().await.unwrap();
        let creds = Credentials {
            username: DEMO_USERNAME.to_string(),
            password: "secret99".to_string(),
        };
        backend.login(&creds).await.unwrap();
    }

    #[tokio::test]
    async fn test_settings_reset() {
        let backend = MockBackend::new().logged_in();
        let mut settings = backend.load_settings().await.unwrap();
        settings.site_name = "Renamed".to_string();
        settings.dark_mode = true;
        backend.save_settings(&settings).await.unwrap();
        assert_eq!(backend.load_settings().await.unwrap().site_name, "Renamed");

        let restored = backend.reset_settings().await.unwrap();
        assert_eq!(restored, SiteSettings::default());
    }
}
