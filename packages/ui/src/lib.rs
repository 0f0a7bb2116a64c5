//! This crate contains all shared UI for the workspace: form models, the
//! controllers that drive the admin pages, and the Dioxus views on top of them.

pub mod controllers;
pub mod feedback;
pub mod forms;
pub mod platform;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod context;
pub use context::{use_services, use_session, Services};

pub mod views;
pub use views::{
    AdminShell, DashboardView, LoginView, ProfileView, ProjectGrid, ProjectsView, SettingsView,
};
