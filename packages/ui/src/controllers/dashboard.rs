use api::{Backend, DashboardStats, Project};

use super::projects::{load_recent, ListState};

const DASHBOARD_FAILED: &str = "Failed to load dashboard data, please refresh and try again";

#[derive(Clone, Debug, PartialEq)]
pub enum DashboardOutcome {
    Loaded {
        stats: DashboardStats,
        recent: ListState,
    },
    /// Stats could not be fetched; the text is shown in an alert.
    Failed(String),
}

/// Fetch the stats, then the recent projects.
pub async fn load_dashboard<B: Backend>(backend: &B) -> DashboardOutcome {
    match backend.dashboard().await {
        Ok(stats) => DashboardOutcome::Loaded {
            stats,
            recent: load_recent(backend).await,
        },
        Err(e) => {
            tracing::error!("Failed to load dashboard: {}", e);
            DashboardOutcome::Failed(DASHBOARD_FAILED.to_string())
        }
    }
}

/// Column headings of the recent projects table.
pub const RECENT_COLUMNS: [&str; 4] = ["ID", "Title", "Category", "Created"];

/// Cells of one recent project row, in [`RECENT_COLUMNS`] order.
pub fn recent_row(project: &Project) -> [String; 4] {
    [
        project.id.to_string(),
        project.title.clone(),
        project.category.clone(),
        project.created_at.clone(),
    ]
}
