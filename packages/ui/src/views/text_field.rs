use dioxus::prelude::*;

/// Labelled single-line input that reports every edit.
#[component]
pub fn TextField(
    id: String,
    label: String,
    #[props(default = "text".to_string())] kind: String,
    value: String,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "form-group",
            label { r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                r#type: "{kind}",
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}
