use dioxus::prelude::*;
use ui::ProjectGrid;

use crate::Route;

/// Public landing page with the project showcase.
#[component]
pub fn Home() -> Element {
    rsx! {
        header {
            class: "site-header",
            h1 { "My Blog" }
            nav {
                a { href: "#projects", "Projects" }
                Link { to: Route::AdminLogin {}, "Admin" }
            }
        }
        main {
            ProjectGrid {}
        }
    }
}
