//! # API crate: typed client for the Folio admin backend
//!
//! Every admin view talks to the backend through the [`Backend`] trait defined here.
//! Two implementations are shipped and can be swapped at launch time:
//!
//! | Backend | Module | Purpose |
//! |---------|--------|---------|
//! | [`HttpBackend`] | [`http`] | Credentialed JSON calls against the real REST API |
//! | [`MockBackend`] | [`mock`] | In-memory backend seeded with demo data, used for demos and tests |
//! | [`AnyBackend`] | crate root | Enum wrapper so views can hold either backend behind one type |
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | `folio.toml` client configuration (base URL resolution, timings, backend choice) |
//! | [`envelope`] | Decoding of the `{status, message, ...payload}` response envelope |
//! | [`error`] | [`ApiError`], the two failure kinds every call can produce |
//! | [`models`] | Session, project, dashboard, profile and settings records |

use std::future::Future;

pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod mock;
pub mod models;

pub use config::{BackendKind, ClientConfig};
pub use error::ApiError;
pub use http::HttpBackend;
pub use mock::{Call, MockBackend};
pub use models::{
    Credentials, DashboardStats, ProfileUpdate, Project, ProjectDraft, ProjectId, Session,
    SiteSettings, UserInfo,
};

/// Async interface to the admin REST API.
///
/// All methods resolve to `Err` on transport failure or when the backend answers
/// with a non-success envelope. Nothing is retried.
pub trait Backend {
    /// `GET /check-login`
    fn check_login(&self) -> impl Future<Output = Result<Session, ApiError>>;
    /// `POST /login`
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<(), ApiError>>;
    /// `POST /logout`
    fn logout(&self) -> impl Future<Output = Result<(), ApiError>>;
    /// `GET /dashboard`
    fn dashboard(&self) -> impl Future<Output = Result<DashboardStats, ApiError>>;
    /// `GET /projects`
    fn list_projects(&self) -> impl Future<Output = Result<Vec<Project>, ApiError>>;
    /// `GET /projects/{id}`
    fn get_project(&self, id: ProjectId) -> impl Future<Output = Result<Project, ApiError>>;
    /// `POST /projects`. Only the acknowledgement is read; the list is reloaded afterwards.
    fn create_project(&self, draft: &ProjectDraft) -> impl Future<Output = Result<(), ApiError>>;
    /// `PUT /projects/{id}`
    fn update_project(
        &self,
        id: ProjectId,
        draft: &ProjectDraft,
    ) -> impl Future<Output = Result<(), ApiError>>;
    /// `DELETE /projects/{id}`
    fn delete_project(&self, id: ProjectId) -> impl Future<Output = Result<(), ApiError>>;
    /// `PUT /profile`
    fn update_profile(
        &self,
        update: &ProfileUpdate,
    ) -> impl Future<Output = Result<(), ApiError>>;
    /// `GET /settings`
    fn load_settings(&self) -> impl Future<Output = Result<SiteSettings, ApiError>>;
    /// `PUT /settings`
    fn save_settings(
        &self,
        settings: &SiteSettings,
    ) -> impl Future<Output = Result<(), ApiError>>;
    /// `DELETE /settings`, restoring the backend defaults.
    fn reset_settings(&self) -> impl Future<Output = Result<SiteSettings, ApiError>>;
}

/// Either backend, selected by [`BackendKind`].
#[derive(Clone, Debug)]
pub enum AnyBackend {
    Live(HttpBackend),
    Mock(MockBackend),
}

impl AnyBackend {
    /// Build the backend described by `config` for a page served from `hostname`.
    pub fn from_config(config: &ClientConfig, hostname: &str) -> Result<Self, ApiError> {
        match config.api.backend {
            BackendKind::Live => {
                let base_url = config.api.resolve_base_url(hostname);
                tracing::info!("Using live backend at {}", base_url);
                Ok(Self::Live(HttpBackend::new(base_url)?))
            }
            BackendKind::Mock => {
                tracing::info!("Using in-memory mock backend");
                Ok(Self::Mock(MockBackend::seeded()))
            }
        }
    }
}

macro_rules! delegate {
    ($self:ident, $backend:ident => $call:expr) => {
        match $self {
            AnyBackend::Live($backend) => $call.await,
            AnyBackend::Mock($backend) => $call.await,
        }
    };
}

impl Backend for AnyBackend {
    async fn check_login(&self) -> Result<Session, ApiError> {
        delegate!(self, b => b.check_login())
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        delegate!(self, b => b.login(credentials))
    }

    async fn logout(&self) -> Result<(), ApiError> {
        delegate!(self, b => b.logout())
    }

    async fn dashboard(&self) -> Result<DashboardStats, ApiError> {
        delegate!(self, b => b.dashboard())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        delegate!(self, b => b.list_projects())
    }

    async fn get_project(&self, id: ProjectId) -> Result<Project, ApiError> {
        delegate!(self, b => b.get_project(id))
    }

    async fn create_project(&self, draft: &ProjectDraft) -> Result<(), ApiError> {
        delegate!(self, b => b.create_project(draft))
    }

    async fn update_project(&self, id: ProjectId, draft: &ProjectDraft) -> Result<(), ApiError> {
        delegate!(self, b => b.update_project(id, draft))
    }

    async fn delete_project(&self, id: ProjectId) -> Result<(), ApiError> {
        delegate!(self, b => b.delete_project(id))
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        delegate!(self, b => b.update_profile(update))
    }

    async fn load_settings(&self) -> Result<SiteSettings, ApiError> {
        delegate!(self, b => b.load_settings())
    }

    async fn save_settings(&self, settings: &SiteSettings) -> Result<(), ApiError> {
        delegate!(self, b => b.save_settings(settings))
    }

    async fn reset_settings(&self) -> Result<SiteSettings, ApiError> {
        delegate!(self, b => b.reset_settings())
    }
}
