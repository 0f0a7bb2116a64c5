use api::ProjectId;

use crate::forms::ProjectForm;

/// Why the project dialog closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseReason {
    CloseButton,
    Backdrop,
    Saved,
}

/// Open/closed state of the project dialog, independent of the form it hosts.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ProjectModal {
    #[default]
    Closed,
    Open(ProjectForm),
}

impl ProjectModal {
    /// Open with an empty form for a new project.
    pub fn open_create(&mut self) {
        *self = Self::Open(ProjectForm::default());
    }

    /// Open with a form loaded by [`super::projects::prepare_edit`].
    pub fn open_edit(&mut self, form: ProjectForm) {
        *self = Self::Open(form);
    }

    pub fn close(&mut self, reason: CloseReason) {
        tracing::debug!("Project dialog closed: {:?}", reason);
        *self = Self::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn form(&self) -> Option<&ProjectForm> {
        match self {
            Self::Open(form) => Some(form),
            Self::Closed => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut ProjectForm> {
        match self {
            Self::Open(form) => Some(form),
            Self::Closed => None,
        }
    }

    /// Id of the project being edited, `None` when creating or closed.
    pub fn editing(&self) -> Option<ProjectId> {
        self.form().and_then(|f| f.id)
    }

    pub fn title(&self) -> &'static str {
        if self.editing().is_some() {
            "Edit project"
        } else {
            "Add project"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut modal = ProjectModal::default();
        assert!(!modal.is_open());
        assert!(modal.form().is_none());

        modal.open_create();
        assert!(modal.is_open());
        assert_eq!(modal.editing(), None);
        assert_eq!(modal.title(), "Add project");

        modal.form_mut().unwrap().title = "Draft".to_string();
        modal.close(CloseReason::Backdrop);
        assert_eq!(modal, ProjectModal::Closed);

        // Reopening starts from a blank form.
        modal.open_create();
        assert_eq!(modal.form().unwrap().title, "");

        modal.open_edit(ProjectForm {
            id: Some(7),
            title: "Existing".to_string(),
            ..Default::default()
        });
        assert_eq!(modal.editing(), Some(7));
        assert_eq!(modal.title(), "Edit project");
        modal.close(CloseReason::Saved);
        assert!(!modal.is_open());
    }
}
