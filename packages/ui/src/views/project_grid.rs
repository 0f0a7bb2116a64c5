use dioxus::prelude::*;

use crate::controllers::projects::{categories, filter_by_category, ALL_CATEGORIES};
use crate::controllers::{load_projects, ListState};
use crate::use_services;

/// Public project showcase with one filter button per category.
#[component]
pub fn ProjectGrid() -> Element {
    let services = use_services();
    let mut list = use_signal(|| ListState::Loading);
    let mut filter = use_signal(|| ALL_CATEGORIES.to_string());

    let backend = services.backend.clone();
    let _load = use_resource(move || {
        let backend = backend.clone();
        async move {
            list.set(load_projects(&backend).await);
        }
    });

    let state = list.read();
    let active = filter();
    let mut buttons = vec![(ALL_CATEGORIES.to_string(), "All".to_string())];
    buttons.extend(categories(state.projects()).into_iter().map(|c| (c.clone(), c)));
    let shown: Vec<_> = filter_by_category(state.projects(), &active)
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        section {
            id: "projects",
            class: "projects-section",
            h2 { "Projects" }
            div {
                class: "filter-buttons",
                for (value, name) in buttons {
                    button {
                        key: "{value}",
                        class: if value == active { "filter-btn active" } else { "filter-btn" },
                        onclick: {
                            let value = value.clone();
                            move |_| filter.set(value.clone())
                        },
                        "{name}"
                    }
                }
            }
            if let Some(placeholder) = state.placeholder() {
                p { class: "placeholder", "{placeholder}" }
            }
            div {
                class: "projects-grid",
                for project in shown {
                    article {
                        key: "{project.id}",
                        class: "project-card",
                        if !project.image.is_empty() {
                            img { src: "{project.image}", alt: "{project.title}" }
                        }
                        div {
                            class: "project-info",
                            h3 { "{project.title}" }
                            span { class: "project-category", "{project.category}" }
                            p { "{project.description}" }
                            if !project.link.is_empty() {
                                a {
                                    href: "{project.link}",
                                    target: "_blank",
                                    rel: "noopener",
                                    "View project"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
