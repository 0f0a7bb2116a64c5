//! App-wide services shared through Dioxus context.

use api::config::TimingSection;
use api::{AnyBackend, Session};
use dioxus::prelude::*;

/// Backend handle plus the timings the form views need.
#[derive(Clone, Debug)]
pub struct Services {
    pub backend: AnyBackend,
    pub timing: TimingSection,
}

/// Get the services installed by the app root with `use_context_provider`.
pub fn use_services() -> Services {
    use_context::<Services>()
}

/// Session confirmed by the enclosing [`crate::AdminShell`]; `None` until checked.
pub fn use_session() -> Signal<Option<Session>> {
    use_context::<Signal<Option<Session>>>()
}
