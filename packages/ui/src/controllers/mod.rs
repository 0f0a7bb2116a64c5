//! Renderer-independent controllers behind the admin views.
//!
//! Each controller is an async function over [`api::Backend`] that returns a typed
//! outcome. Views decide how to show it (inline message, alert, redirect), which
//! keeps these functions testable against [`api::MockBackend`].

pub mod dashboard;
pub mod login;
pub mod modal;
pub mod profile;
pub mod projects;
pub mod session;
pub mod settings;

pub use dashboard::{load_dashboard, DashboardOutcome};
pub use login::{redirect_after, submit_login};
pub use modal::{CloseReason, ProjectModal};
pub use profile::{submit_password, submit_profile};
pub use projects::{
    create_project, delete_project, load_projects, load_recent, prepare_edit, save_failure,
    update_project, DeleteOutcome, ListState, SaveFailure,
};
pub use session::{guard, logout, AdminPage, GuardOutcome, LogoutOutcome};
pub use settings::{load_settings, reset_settings, submit_settings, ResetOutcome};
