//! Project list view and the create/edit/delete actions routed from it.
//!
//! The list is never patched in place: every successful mutation is followed by a
//! full reload from the backend, and the reloaded [`ListState`] is part of the
//! outcome so the view can swap it in wholesale.

use api::{Backend, Project, ProjectId};

use crate::feedback::{FormMessage, Submission};
use crate::forms::ProjectForm;

pub const RECENT_COUNT: usize = 3;
pub const SUMMARY_CHARS: usize = 50;
pub const ALL_CATEGORIES: &str = "all";

pub const CREATED: &str = "Project added";
pub const UPDATED: &str = "Project updated";
pub const DELETED: &str = "Project deleted";

const CREATE_FAILED: &str = "Failed to add project";
const UPDATE_FAILED: &str = "Failed to update project";
const DELETE_FAILED: &str = "Failed to delete project";
const DETAIL_FAILED: &str = "Failed to load project details, please retry";

/// Rendering state of a project table or grid.
#[derive(Clone, Debug, PartialEq)]
pub enum ListState {
    Loading,
    Empty,
    Failed,
    Loaded(Vec<Project>),
}

impl ListState {
    fn from_projects(projects: Vec<Project>) -> Self {
        if projects.is_empty() {
            Self::Empty
        } else {
            Self::Loaded(projects)
        }
    }

    /// Placeholder text for every state except [`ListState::Loaded`].
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some("Loading projects..."),
            Self::Empty => Some("No projects yet"),
            Self::Failed => Some("Failed to load"),
            Self::Loaded(_) => None,
        }
    }

    pub fn projects(&self) -> &[Project] {
        match self {
            Self::Loaded(projects) => projects,
            _ => &[],
        }
    }
}

/// Fetch the whole collection.
pub async fn load_projects<B: Backend>(backend: &B) -> ListState {
    match backend.list_projects().await {
        Ok(projects) => ListState::from_projects(projects),
        Err(e) => {
            tracing::error!("Failed to load projects: {}", e);
            ListState::Failed
        }
    }
}

/// The first [`RECENT_COUNT`] projects, for the dashboard.
pub async fn load_recent<B: Backend>(backend: &B) -> ListState {
    match load_projects(backend).await {
        ListState::Loaded(mut projects) => {
            projects.truncate(RECENT_COUNT);
            ListState::Loaded(projects)
        }
        other => other,
    }
}

/// Create a project, then reload the list.
pub async fn create_project<B: Backend>(backend: &B, form: &ProjectForm) -> Submission<ListState> {
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(e) => return Submission::Invalid(e),
    };
    match backend.create_project(&draft).await {
        Ok(()) => {
            tracing::info!("Created project {}", draft.title);
            Submission::Done(load_projects(backend).await)
        }
        Err(e) => {
            tracing::error!("Failed to create project: {}", e);
            Submission::Failed(e.user_message(CREATE_FAILED))
        }
    }
}

/// Save an edited project, then reload the list.
///
/// A form without an id has nothing to update and is treated like a failed save.
pub async fn update_project<B: Backend>(backend: &B, form: &ProjectForm) -> Submission<ListState> {
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(e) => return Submission::Invalid(e),
    };
    let Some(id) = form.id else {
        return Submission::Failed(UPDATE_FAILED.to_string());
    };
    match backend.update_project(id, &draft).await {
        Ok(()) => {
            tracing::info!("Updated project {}", id);
            Submission::Done(load_projects(backend).await)
        }
        Err(e) => {
            tracing::error!("Failed to update project {}: {}", id, e);
            Submission::Failed(e.user_message(UPDATE_FAILED))
        }
    }
}

/// How an unsuccessful save from the project dialog is reported.
#[derive(Clone, Debug, PartialEq)]
pub enum SaveFailure {
    /// Shown under the create form.
    Inline(FormMessage),
    /// Edits report every problem, validation included, in an alert.
    Alert(String),
}

/// `None` when the save went through.
pub fn save_failure(outcome: &Submission<ListState>, editing: bool) -> Option<SaveFailure> {
    if outcome.is_done() {
        return None;
    }
    let message = outcome.message("");
    Some(if editing {
        SaveFailure::Alert(message.text)
    } else {
        SaveFailure::Inline(message)
    })
}

/// Load one project into an edit form. `Err` carries the alert text.
pub async fn prepare_edit<B: Backend>(backend: &B, id: ProjectId) -> Result<ProjectForm, String> {
    backend
        .get_project(id)
        .await
        .map(|project| ProjectForm::from_project(&project))
        .map_err(|e| {
            tracing::error!("Failed to load project {}: {}", id, e);
            DETAIL_FAILED.to_string()
        })
}

#[derive(Clone, Debug, PartialEq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation prompt; nothing was sent.
    Cancelled,
    Deleted(ListState),
    Failed(String),
}

/// Delete a project once the user confirmed, then reload the list.
pub async fn delete_project<B: Backend>(backend: &B, id: ProjectId, confirmed: bool) -> DeleteOutcome {
    if !confirmed {
        return DeleteOutcome::Cancelled;
    }
    match backend.delete_project(id).await {
        Ok(()) => {
            tracing::info!("Deleted project {}", id);
            DeleteOutcome::Deleted(load_projects(backend).await)
        }
        Err(e) => {
            tracing::error!("Failed to delete project {}: {}", id, e);
            DeleteOutcome::Failed(e.user_message(DELETE_FAILED))
        }
    }
}

/// First [`SUMMARY_CHARS`] characters of a description, with `...` when cut.
pub fn summarize(description: &str) -> String {
    let mut chars = description.chars();
    let head: String = chars.by_ref().take(SUMMARY_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Projects shown under a category filter button.
pub fn filter_by_category<'a>(projects: &'a [Project], filter: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| filter == ALL_CATEGORIES || p.category == filter)
        .collect()
}

/// Distinct categories in first-seen order, for the filter buttons.
pub fn categories(projects: &[Project]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for project in projects {
        if !project.category.is_empty() && !seen.contains(&project.category) {
            seen.push(project.category.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::ValidationError;
    use api::{ApiError, Call, MockBackend, ProjectDraft};

    fn form(title: &str, description: &str) -> ProjectForm {
        ProjectForm {
            title: title.to_string(),
            description: description.to_string(),
            category: "web".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_list_states() {
        let backend = MockBackend::new();
        assert_eq!(load_projects(&backend).await, ListState::Empty);

        let backend = MockBackend::seeded();
        let state = load_projects(&backend).await;
        assert_eq!(state.projects().len(), 3);
        assert_eq!(state.placeholder(), None);

        backend.set_offline(true);
        assert_eq!(load_projects(&backend).await, ListState::Failed);

        let placeholders = [ListState::Loading, ListState::Empty, ListState::Failed]
            .map(|s| s.placeholder().unwrap());
        assert_ne!(placeholders[0], placeholders[1]);
        assert_ne!(placeholders[1], placeholders[2]);
    }

    #[tokio::test]
    async fn test_recent_keeps_first_three() {
        let backend = MockBackend::seeded();
        backend.insert(ProjectDraft {
            title: "Fourth".to_string(),
            description: "d".to_string(),
            ..Default::default()
        });
        let state = load_recent(&backend).await;
        let titles: Vec<_> = state.projects().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Personal blog", "Task manager", "Data dashboard"]);
    }

    #[tokio::test]
    async fn test_create_invalid_sends_nothing() {
        let backend = MockBackend::seeded().logged_in();
        let outcome = create_project(&backend, &form("", "desc")).await;
        assert_eq!(outcome, Submission::Invalid(ValidationError::MissingProjectFields));
        let outcome = create_project(&backend, &form("Title", "")).await;
        assert_eq!(outcome, Submission::Invalid(ValidationError::MissingProjectFields));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_reloads_list() {
        let backend = MockBackend::seeded().logged_in();
        let outcome = create_project(&backend, &form("CLI", "A command line tool")).await;
        let Submission::Done(state) = outcome else {
            panic!("create failed: {outcome:?}");
        };
        assert_eq!(state.projects().len(), 4);
        assert_eq!(state.projects()[3].title, "CLI");

        let calls = backend.calls();
        assert!(matches!(calls[0], Call::CreateProject(_)));
        assert_eq!(calls[1], Call::ListProjects);
    }

    #[tokio::test]
    async fn test_create_failure_keeps_message() {
        let backend = MockBackend::seeded();
        let outcome = create_project(&backend, &form("CLI", "tool")).await;
        assert_eq!(outcome, Submission::Failed("Please log in first".to_string()));
        // No reload after a failed mutation.
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_edit_roundtrip() {
        let backend = MockBackend::seeded().logged_in();
        let mut edit = prepare_edit(&backend, 2).await.unwrap();
        assert_eq!(edit.id, Some(2));
        assert_eq!(edit.title, "Task manager");

        edit.title = "Task manager 2".to_string();
        let Submission::Done(state) = update_project(&backend, &edit).await else {
            panic!("update failed");
        };
        assert_eq!(state.projects()[1].title, "Task manager 2");
        assert_eq!(backend.calls().last(), Some(&Call::ListProjects));
    }

    #[tokio::test]
    async fn test_prepare_edit_unknown_id() {
        let backend = MockBackend::seeded();
        assert_eq!(prepare_edit(&backend, 42).await, Err(DETAIL_FAILED.to_string()));
    }

    #[tokio::test]
    async fn test_update_without_id_fails() {
        let backend = MockBackend::seeded().logged_in();
        let outcome = update_project(&backend, &form("T", "D")).await;
        assert_eq!(outcome, Submission::Failed(UPDATE_FAILED.to_string()));
        assert!(backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_unconfirmed_delete_sends_nothing() {
        let backend = MockBackend::seeded().logged_in();
        assert_eq!(delete_project(&backend, 3, false).await, DeleteOutcome::Cancelled);
        assert!(backend.calls().is_empty());
        assert_eq!(backend.projects().len(), 3);
    }

    #[tokio::test]
    async fn test_delete_reloads_without_stale_entry() {
        let backend = MockBackend::seeded().logged_in();
        let DeleteOutcome::Deleted(state) = delete_project(&backend, 3, true).await else {
            panic!("delete failed");
        };
        assert!(state.projects().iter().all(|p| p.id != 3));
        assert_eq!(backend.calls(), vec![Call::DeleteProject(3), Call::ListProjects]);
    }

    #[tokio::test]
    async fn test_delete_failure_message() {
        let backend = MockBackend::seeded().logged_in();
        backend.fail_with(Some(ApiError::Rejected {
            status: Some(500),
            message: None,
        }));
        assert_eq!(
            delete_project(&backend, 1, true).await,
            DeleteOutcome::Failed(DELETE_FAILED.to_string())
        );
    }

    #[test]
    fn test_summarize() {
        assert_eq!(summarize("short"), "short");
        let exact = "x".repeat(SUMMARY_CHARS);
        assert_eq!(summarize(&exact), exact);
        let long = "é".repeat(SUMMARY_CHARS + 1);
        let summary = summarize(&long);
        assert!(summary.ends_with("..."));
        assert_eq!(summary.chars().count(), SUMMARY_CHARS + 3);
    }

    #[test]
    fn test_category_filter() {
        let backend = MockBackend::seeded();
        let projects = backend.projects();
        assert_eq!(filter_by_category(&projects, ALL_CATEGORIES).len(), 3);
        let web = filter_by_category(&projects, "web");
        assert_eq!(web.len(), 1);
        assert_eq!(web[0].title, "Personal blog");
        assert!(filter_by_category(&projects, "games").is_empty());
        assert_eq!(categories(&projects), ["web", "app", "data"]);
    }

    #[tokio::test]
    async fn test_edit_failures_are_alerts() {
        let backend = MockBackend::seeded().logged_in();
        let mut edit = prepare_edit(&backend, 1).await.unwrap();
        edit.description.clear();
        let outcome = update_project(&backend, &edit).await;
        assert_eq!(
            save_failure(&outcome, true),
            Some(SaveFailure::Alert(
                ValidationError::MissingProjectFields.to_string()
            ))
        );

        let outcome = create_project(&backend, &form("", "")).await;
        assert_eq!(
            save_failure(&outcome, false),
            Some(SaveFailure::Inline(FormMessage::error(
                ValidationError::MissingProjectFields.to_string()
            )))
        );

        let outcome = create_project(&backend, &form("CLI", "tool")).await;
        assert_eq!(save_failure(&outcome, false), None);
    }
}
