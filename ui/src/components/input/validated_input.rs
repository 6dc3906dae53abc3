use dioxus::prelude::*;

/// CSS class of an input, flagged when its field has an error
pub fn input_class(invalid: bool) -> &'static str {
    if invalid {
        "input-field input-invalid"
    } else {
        "input-field"
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub name: String,
    pub value: String,
    pub placeholder: String,
    pub invalid: bool,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        input {
            id: "{props.name}",
            name: "{props.name}",
            class: input_class(props.invalid),
            r#type: "text",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            "aria-invalid": "{props.invalid}",
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}
