use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct FieldMessageProps {
    pub message: Option<String>,
}

/// Inline error shown under a form field
#[component]
pub fn FieldMessage(props: FieldMessageProps) -> Element {
    match props.message {
        Some(message) => rsx! {
            p {
                class: "validation-feedback invalid",
                role: "alert",
                style: "color: #ef4444; font-size: 0.875rem; margin-top: 4px;",
                "{message}"
            }
        },
        None => rsx! {},
    }
}
