//! Live backend over HTTP.
//!
//! Session cookies must travel with every request. In the browser this is the
//! fetch `credentials: include` mode; native builds keep a cookie jar inside the
//! `reqwest` client instead.

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::envelope::{
    self, Ack, DashboardPayload, ProjectPayload, ProjectsPayload, SettingsPayload,
};
use crate::error::ApiError;
use crate::models::{
    Credentials, DashboardStats, ProfileUpdate, Project, ProjectDraft, ProjectId, Session,
    SiteSettings,
};
use crate::Backend;

#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client for the API rooted at `base_url` (e.g. `"/api"` or
    /// `"https://host/api"`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        #[cfg(target_arch = "wasm32")]
        let client = Client::builder().build()?;
        #[cfg(not(target_arch = "wasm32"))]
        let client = Client::builder().cookie_store(true).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as `/projects/3`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!("Request failed: {}", e);
            ApiError::from(e)
        })?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        let result = envelope::decode(status, &body);
        if let Err(e) = &result {
            tracing::warn!("Backend rejected request: {}", e);
        }
        result
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::GET, path)).await
    }

    async fn with_body<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(self.request(method, path).json(body)).await
    }
}

impl Backend for HttpBackend {
    async fn check_login(&self) -> Result<Session, ApiError> {
        self.get("/check-login").await
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let _: Ack = self.with_body(Method::POST, "/login", credentials).await?;
        Ok(())
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let _: Ack = self.send(self.request(Method::POST, "/logout")).await?;
        Ok(())
    }

    async fn dashboard(&self) -> Result<DashboardStats, ApiError> {
        let payload: DashboardPayload = self.get("/dashboard").await?;
        Ok(payload.dashboard.stats)
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        let payload: ProjectsPayload = self.get("/projects").await?;
        Ok(payload.projects)
    }

    async fn get_project(&self, id: ProjectId) -> Result<Project, ApiError> {
        let payload: ProjectPayload = self.get(&format!("/projects/{id}")).await?;
        Ok(payload.project)
    }

    async fn create_project(&self, draft: &ProjectDraft) -> Result<(), ApiError> {
        let _: Ack = self.with_body(Method::POST, "/projects", draft).await?;
        Ok(())
    }

    async fn update_project(&self, id: ProjectId, draft: &ProjectDraft) -> Result<(), ApiError> {
        let _: Ack = self
            .with_body(Method::PUT, &format!("/projects/{id}"), draft)
            .await?;
        Ok(())
    }

    async fn delete_project(&self, id: ProjectId) -> Result<(), ApiError> {
        let _: Ack = self
            .send(self.request(Method::DELETE, &format!("/projects/{id}")))
            .await?;
        Ok(())
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        let _: Ack = self.with_body(Method::PUT, "/profile", update).await?;
        Ok(())
    }

    async fn load_settings(&self) -> Result<SiteSettings, ApiError> {
        let payload: SettingsPayload = self.get("/settings").await?;
        Ok(payload.settings)
    }

    async fn save_settings(&self, settings: &SiteSettings) -> Result<(), ApiError> {
        let _: Ack = self.with_body(Method::PUT, "/settings", settings).await?;
        Ok(())
    }

    async fn reset_settings(&self) -> Result<SiteSettings, ApiError> {
        let payload: SettingsPayload = self
            .send(self.request(Method::DELETE, "/settings"))
            .await?;
        Ok(payload.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let backend = HttpBackend::new("https://api.example.com/api/").unwrap();
        assert_eq!(backend.base_url(), "https://api.example.com/api");
        assert_eq!(
            backend.url("/projects/3"),
            "https://api.example.com/api/projects/3"
        );
    }

    #[tokio::test]
    async fn test_request_that_cannot_be_sent_is_transport_error() {
        // reqwest refuses non-http schemes before opening a connection.
        let backend = HttpBackend::new("ftp://files.example/api").unwrap();
        let err = backend.check_login().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert_eq!(err.user_message("x"), "Unable to reach the server");
    }
}
