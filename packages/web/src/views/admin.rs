//! Admin routes. Every page except login is wrapped in [`AdminShell`], which
//! checks the session before the page content loads.

use dioxus::prelude::*;
use ui::controllers::AdminPage;
use ui::{AdminShell, DashboardView, LoginView, ProfileView, ProjectsView, SettingsView};

use super::use_path_navigator;
use crate::Route;

/// Redirect `/admin` to the dashboard.
#[component]
pub fn AdminIndex() -> Element {
    let nav = use_navigator();
    nav.replace(Route::AdminDashboard {});
    rsx! {}
}

#[component]
pub fn AdminLogin() -> Element {
    let on_navigate = use_path_navigator();
    rsx! {
        LoginView { on_navigate }
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    let on_navigate = use_path_navigator();
    rsx! {
        AdminShell { page: AdminPage::Dashboard, on_navigate, DashboardView {} }
    }
}

#[component]
pub fn AdminProjects() -> Element {
    let on_navigate = use_path_navigator();
    rsx! {
        AdminShell { page: AdminPage::Projects, on_navigate, ProjectsView {} }
    }
}

#[component]
pub fn AdminProfile() -> Element {
    let on_navigate = use_path_navigator();
    rsx! {
        AdminShell { page: AdminPage::Profile, on_navigate, ProfileView {} }
    }
}

#[component]
pub fn AdminSettings() -> Element {
    let on_navigate = use_path_navigator();
    rsx! {
        AdminShell { page: AdminPage::Settings, on_navigate, SettingsView {} }
    }
}
