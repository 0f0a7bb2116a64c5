use api::ProjectId;
use dioxus::prelude::*;

use crate::controllers::projects::{summarize, CREATED, DELETED, UPDATED};
use crate::controllers::{
    create_project, delete_project, load_projects, prepare_edit, save_failure, update_project,
    CloseReason, DeleteOutcome, ListState, ProjectModal, SaveFailure,
};
use crate::feedback::{FormMessage, Submission};
use crate::forms::ProjectForm;
use crate::platform::{alert, confirm};
use crate::views::{flash, FormMessageView, ModalOverlay};
use crate::{icons, use_services, Icon};

/// Project management: table, add/edit modal, delete with confirmation.
#[component]
pub fn ProjectsView() -> Element {
    let services = use_services();
    let message_clear = services.timing.message_clear();
    let mut list = use_signal(|| ListState::Loading);
    let mut modal = use_signal(ProjectModal::default);
    let page_message = use_signal(|| Option::<FormMessage>::None);
    let mut modal_message = use_signal(|| Option::<FormMessage>::None);
    let mut saving = use_signal(|| false);

    let backend = services.backend.clone();
    let _load = use_resource(move || {
        let backend = backend.clone();
        async move {
            list.set(load_projects(&backend).await);
        }
    });

    let backend = services.backend.clone();
    let on_edit = move |id: ProjectId| {
        let backend = backend.clone();
        spawn(async move {
            match prepare_edit(&backend, id).await {
                Ok(form) => {
                    modal_message.set(None);
                    modal.write().open_edit(form);
                }
                Err(message) => alert(&message),
            }
        });
    };

    let backend = services.backend.clone();
    let on_delete = move |id: ProjectId| {
        let backend = backend.clone();
        spawn(async move {
            let confirmed = confirm("Delete this project? This cannot be undone.");
            match delete_project(&backend, id, confirmed).await {
                DeleteOutcome::Cancelled => {}
                DeleteOutcome::Deleted(state) => {
                    list.set(state);
                    flash(page_message, FormMessage::success(DELETED), message_clear);
                }
                DeleteOutcome::Failed(message) => alert(&message),
            }
        });
    };

    let backend = services.backend.clone();
    let on_save = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        async move {
            let Some(form) = modal.peek().form().cloned() else {
                return;
            };
            saving.set(true);
            let editing = form.id.is_some();
            let outcome = if editing {
                update_project(&backend, &form).await
            } else {
                create_project(&backend, &form).await
            };
            saving.set(false);
            match outcome {
                Submission::Done(state) => {
                    list.set(state);
                    modal.write().close(CloseReason::Saved);
                    let text = if editing { UPDATED } else { CREATED };
                    flash(page_message, FormMessage::success(text), message_clear);
                }
                other => match save_failure(&other, editing) {
                    Some(SaveFailure::Alert(text)) => alert(&text),
                    Some(SaveFailure::Inline(message)) => modal_message.set(Some(message)),
                    None => {}
                },
            }
        }
    };

    rsx! {
        div {
            class: "page-actions",
            button {
                id: "addProjectBtn",
                class: "btn btn-primary",
                onclick: move |_| {
                    modal_message.set(None);
                    modal.write().open_create();
                },
                Icon { icon: icons::FaPlus, width: 14, height: 14 }
                " Add project"
            }
        }
        FormMessageView { message: page_message() }
        ProjectTable {
            state: list(),
            on_edit,
            on_delete,
        }
        if let Some(current) = modal.read().form().cloned() {
            ModalOverlay {
                title: modal.read().title().to_string(),
                on_close: move |reason: CloseReason| modal.write().close(reason),
                form {
                    id: "projectForm",
                    onsubmit: on_save,
                    ProjectFields {
                        form: current,
                        on_change: move |next: ProjectForm| {
                            if let Some(open) = modal.write().form_mut() {
                                *open = next;
                            }
                        },
                    }
                    div {
                        class: "form-actions",
                        button {
                            class: "btn btn-outline",
                            r#type: "button",
                            onclick: move |_| modal.write().close(CloseReason::CloseButton),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: saving(),
                            if saving() { "Saving..." } else { "Save" }
                        }
                    }
                    FormMessageView { message: modal_message() }
                }
            }
        }
    }
}

/// Admin table of every project with edit and delete actions.
#[component]
fn ProjectTable(
    state: ListState,
    on_edit: EventHandler<ProjectId>,
    on_delete: EventHandler<ProjectId>,
) -> Element {
    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    th { "Title" }
                    th { "Category" }
                    th { "Description" }
                    th { "Actions" }
                }
            }
            tbody {
                id: "projectsTable",
                if let Some(placeholder) = state.placeholder() {
                    tr {
                        td { colspan: "4", class: "placeholder", "{placeholder}" }
                    }
                }
                for project in state.projects().iter().cloned() {
                    tr {
                        key: "{project.id}",
                        td { "{project.title}" }
                        td { "{project.category}" }
                        td { "{summarize(&project.description)}" }
                        td {
                            class: "row-actions",
                            button {
                                class: "btn-icon",
                                title: "Edit",
                                onclick: move |_| on_edit.call(project.id),
                                Icon { icon: icons::FaPenToSquare, width: 14, height: 14 }
                            }
                            button {
                                class: "btn-icon danger",
                                title: "Delete",
                                onclick: move |_| on_delete.call(project.id),
                                Icon { icon: icons::FaTrash, width: 14, height: 14 }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Inputs of the project form. Every edit hands the whole updated form back.
#[component]
fn ProjectFields(form: ProjectForm, on_change: EventHandler<ProjectForm>) -> Element {
    let base = form.clone();
    let field = move |update: fn(&mut ProjectForm, String)| {
        let base = base.clone();
        move |evt: FormEvent| {
            let mut next = base.clone();
            update(&mut next, evt.value());
            on_change.call(next);
        }
    };

    rsx! {
        div {
            class: "form-group",
            label { r#for: "projectTitle", "Title" }
            input {
                id: "projectTitle",
                r#type: "text",
                value: "{form.title}",
                oninput: field(|f, v| f.title = v),
            }
        }
        div {
            class: "form-group",
            label { r#for: "projectDescription", "Description" }
            textarea {
                id: "projectDescription",
                rows: "4",
                value: "{form.description}",
                oninput: field(|f, v| f.description = v),
            }
        }
        div {
            class: "form-group",
            label { r#for: "projectCategory", "Category" }
            input {
                id: "projectCategory",
                r#type: "text",
                value: "{form.category}",
                oninput: field(|f, v| f.category = v),
            }
        }
        div {
            class: "form-group",
            label { r#for: "projectImage", "Image URL" }
            input {
                id: "projectImage",
                r#type: "url",
                value: "{form.image}",
                oninput: field(|f, v| f.image = v),
            }
        }
        div {
            class: "form-group",
            label { r#for: "projectLink", "Project link" }
            input {
                id: "projectLink",
                r#type: "url",
                value: "{form.link}",
                oninput: field(|f, v| f.link = v),
            }
        }
    }
}
