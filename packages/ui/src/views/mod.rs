mod admin_shell;
pub use admin_shell::AdminShell;

mod form_message;
pub use form_message::{flash, FormMessageView};

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod text_field;
pub use text_field::TextField;

mod login;
pub use login::LoginView;

mod dashboard;
pub use dashboard::DashboardView;

mod projects;
pub use projects::ProjectsView;

mod profile;
pub use profile::ProfileView;

mod settings;
pub use settings::SettingsView;

mod project_grid;
pub use project_grid::ProjectGrid;
