//! Transient notifications rendered in a fixed corner of the page.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::features::listing::{Toast, ToastBody, ToastKind};

fn toast_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => "toast toast-success",
        ToastKind::Failure => "toast toast-failure",
    }
}

fn render_body(body: &ToastBody) -> Element {
    match body {
        ToastBody::Text(text) => rsx! {
            div { class: "toast-description", "{text}" }
        },
        ToastBody::Code(code) => rsx! {
            pre {
                class: "toast-code",
                code { "{code}" }
            }
        },
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ToastViewportProps {
    pub toasts: Vec<Toast>,
    pub duration_ms: u32,
    pub on_dismiss: EventHandler<u64>,
}

#[component]
pub fn ToastViewport(props: ToastViewportProps) -> Element {
    rsx! {
        ol {
            class: "toast-viewport",
            "aria-live": "polite",
            for toast in props.toasts {
                ToastItem {
                    key: "{toast.id}",
                    toast: toast.clone(),
                    duration_ms: props.duration_ms,
                    on_dismiss: props.on_dismiss
                }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ToastItemProps {
    pub toast: Toast,
    pub duration_ms: u32,
    pub on_dismiss: EventHandler<u64>,
}

#[component]
pub fn ToastItem(props: ToastItemProps) -> Element {
    let id = props.toast.id;
    let duration_ms = props.duration_ms;
    let on_dismiss = props.on_dismiss;

    // Auto-dismiss; dropped with the component if closed by hand first
    use_future(move || async move {
        TimeoutFuture::new(duration_ms).await;
        on_dismiss.call(id);
    });

    rsx! {
        li {
            class: toast_class(props.toast.kind),
            role: "status",
            div {
                class: "toast-title",
                "{props.toast.title}"
            }
            {render_body(&props.toast.body)}
            button {
                class: "toast-close",
                r#type: "button",
                "aria-label": "Dismiss notification",
                onclick: move |_| on_dismiss.call(id),
                "×"
            }
        }
    }
}
