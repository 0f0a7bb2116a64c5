use api::DashboardStats;
use dioxus::prelude::*;

use crate::controllers::dashboard::{recent_row, RECENT_COLUMNS};
use crate::controllers::{load_dashboard, DashboardOutcome, ListState};
use crate::platform::alert;
use crate::{icons, use_services, Icon};

/// Stats cards plus the three most recent projects.
#[component]
pub fn DashboardView() -> Element {
    let services = use_services();
    let mut stats = use_signal(DashboardStats::default);
    let mut recent = use_signal(|| ListState::Loading);

    let backend = services.backend.clone();
    let _load = use_resource(move || {
        let backend = backend.clone();
        async move {
            match load_dashboard(&backend).await {
                DashboardOutcome::Loaded {
                    stats: loaded,
                    recent: projects,
                } => {
                    stats.set(loaded);
                    recent.set(projects);
                }
                DashboardOutcome::Failed(message) => {
                    recent.set(ListState::Failed);
                    alert(&message);
                }
            }
        }
    });

    let loaded_count = recent.read().projects().len();
    let stats = stats.read();

    rsx! {
        section {
            class: "stats-grid",
            StatCard {
                id: "totalVisits",
                label: "Total visits",
                value: stats.total_visits_label(),
                Icon { icon: icons::FaEye, width: 20, height: 20 }
            }
            StatCard {
                id: "projectCount",
                label: "Projects",
                value: stats.project_count_label(loaded_count),
                Icon { icon: icons::FaFolderOpen, width: 20, height: 20 }
            }
            StatCard {
                id: "lastLogin",
                label: "Last login",
                value: stats.last_login_label(),
                Icon { icon: icons::FaClock, width: 20, height: 20 }
            }
        }
        section {
            class: "recent-projects",
            h2 { "Recent projects" }
            table {
                class: "data-table",
                thead {
                    tr {
                        for heading in RECENT_COLUMNS {
                            th { key: "{heading}", "{heading}" }
                        }
                    }
                }
                tbody {
                    id: "recentProjects",
                    if let Some(placeholder) = recent.read().placeholder() {
                        tr {
                            td { colspan: "{RECENT_COLUMNS.len()}", class: "placeholder", "{placeholder}" }
                        }
                    }
                    for project in recent.read().projects().iter().cloned() {
                        tr {
                            key: "{project.id}",
                            for cell in recent_row(&project) {
                                td { "{cell}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(id: String, label: String, value: String, children: Element) -> Element {
    rsx! {
        div {
            class: "stat-card",
            div { class: "stat-icon", {children} }
            div {
                class: "stat-body",
                span { class: "stat-label", "{label}" }
                strong { id: "{id}", "{value}" }
            }
        }
    }
}
