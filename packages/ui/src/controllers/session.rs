//! Session guard for the admin pages.

use api::{Backend, Session};

pub const LOGIN_PATH: &str = "/admin/login";
pub const DASHBOARD_PATH: &str = "/admin/dashboard";

const UNREACHABLE_ALERT: &str = "Unable to reach the server, please refresh and try again";
const LOGOUT_FAILED_ALERT: &str = "Logout failed, please refresh and try again";

/// The admin pages, each with its own initializer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminPage {
    Login,
    Dashboard,
    Projects,
    Profile,
    Settings,
}

impl AdminPage {
    /// Match a request path such as `/admin/projects` or `/admin/projects/`.
    pub fn from_path(path: &str) -> Option<Self> {
        let rest = path.strip_prefix("/admin")?.trim_matches('/');
        match rest {
            "login" => Some(Self::Login),
            "" | "dashboard" => Some(Self::Dashboard),
            "projects" => Some(Self::Projects),
            "profile" => Some(Self::Profile),
            "settings" => Some(Self::Settings),
            _ => None,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Dashboard => DASHBOARD_PATH,
            Self::Projects => "/admin/projects",
            Self::Profile => "/admin/profile",
            Self::Settings => "/admin/settings",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Dashboard => "Dashboard",
            Self::Projects => "Projects",
            Self::Profile => "Profile",
            Self::Settings => "Settings",
        }
    }
}

/// Decision taken by [`guard`] for one page load.
#[derive(Clone, Debug, PartialEq)]
pub enum GuardOutcome {
    /// The login page, which needs no session.
    Public,
    /// Leave the page, after showing `alert` if there is one.
    Redirect {
        to: &'static str,
        alert: Option<String>,
    },
    /// Session confirmed; run the page initializer.
    Authorized { page: AdminPage, session: Session },
}

/// Check the session before showing `page`.
///
/// A logged-out session or an unreachable backend sends the user to the login
/// page. There is no retry.
pub async fn guard<B: Backend>(backend: &B, page: AdminPage) -> GuardOutcome {
    if page == AdminPage::Login {
        return GuardOutcome::Public;
    }
    match backend.check_login().await {
        Ok(session) if session.logged_in => {
            tracing::debug!("Session valid, opening {:?}", page);
            GuardOutcome::Authorized { page, session }
        }
        Ok(_) => GuardOutcome::Redirect {
            to: LOGIN_PATH,
            alert: None,
        },
        Err(e) => {
            tracing::error!("Login check failed: {}", e);
            GuardOutcome::Redirect {
                to: LOGIN_PATH,
                alert: Some(UNREACHABLE_ALERT.to_string()),
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogoutOutcome {
    Cancelled,
    Redirect(&'static str),
    Failed(String),
}

/// Log out once the user confirmed.
pub async fn logout<B: Backend>(backend: &B, confirmed: bool) -> LogoutOutcome {
    if !confirmed {
        return LogoutOutcome::Cancelled;
    }
    match backend.logout().await {
        Ok(()) => LogoutOutcome::Redirect(LOGIN_PATH),
        Err(e) => {
            tracing::error!("Logout failed: {}", e);
            LogoutOutcome::Failed(LOGOUT_FAILED_ALERT.to_string())
        }
    }
}
