mod admin;
pub use admin::{AdminDashboard, AdminIndex, AdminLogin, AdminProfile, AdminProjects, AdminSettings};

mod home;
pub use home::Home;

use dioxus::prelude::*;

use crate::Route;

/// Navigation callback for the shared views, which only know paths.
pub(crate) fn use_path_navigator() -> EventHandler<String> {
    let nav = use_navigator();
    use_callback(move |path: String| match path.parse::<Route>() {
        Ok(route) => {
            nav.push(route);
        }
        Err(e) => tracing::warn!("No route for {}: {}", path, e),
    })
}
