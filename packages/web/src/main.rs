use api::{AnyBackend, ClientConfig, MockBackend};
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::Services;
use views::{AdminDashboard, AdminIndex, AdminLogin, AdminProfile, AdminProjects, AdminSettings, Home};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/admin")]
    AdminIndex {},
    #[route("/admin/login")]
    AdminLogin {},
    #[route("/admin/dashboard")]
    AdminDashboard {},
    #[route("/admin/projects")]
    AdminProjects {},
    #[route("/admin/profile")]
    AdminProfile {},
    #[route("/admin/settings")]
    AdminSettings {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Deployment config baked into the bundle.
const CONFIG_TOML: &str = include_str!("../folio.toml");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }
    dioxus::launch(App);
}

fn load_config() -> ClientConfig {
    match ClientConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid {}, using defaults: {}", ClientConfig::filename(), e);
            ClientConfig::default()
        }
    }
}

fn build_services() -> Services {
    let mut config = load_config();
    config.api.base_url = ui::platform::absolute_base_url(&config.api.base_url, &ui::platform::origin());

    let backend = match AnyBackend::from_config(&config, &ui::platform::hostname()) {
        Ok(backend) => backend,
        Err(e) => {
            tracing::error!("Failed to create HTTP client, falling back to mock backend: {}", e);
            AnyBackend::Mock(MockBackend::seeded())
        }
    };

    Services {
        backend,
        timing: config.timing,
    }
}

#[component]
fn App() -> Element {
    use_context_provider(build_services);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
