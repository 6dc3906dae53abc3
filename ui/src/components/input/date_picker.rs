use chrono::NaiveDate;
use dioxus::prelude::*;

use super::validated_input::input_class;
use crate::features::listing::{is_selectable_date, ListingField};
use crate::utils::{format_display_date, format_iso_date, parse_iso_date};

/// Text shown on the picker trigger
pub fn date_trigger_label(value: Option<NaiveDate>) -> String {
    value
        .map(format_display_date)
        .unwrap_or_else(|| ListingField::DonationDate.placeholder().to_string())
}

/// Interprets a raw input value, dropping dates before `min`.
///
/// `None` means the value must not reach the form state; `Some(None)` is a
/// cleared field.
pub fn accept_date_input(raw: &str, min: NaiveDate) -> Option<Option<NaiveDate>> {
    if raw.trim().is_empty() {
        return Some(None);
    }
    match parse_iso_date(raw) {
        Some(date) if is_selectable_date(date, min) => Some(Some(date)),
        _ => None,
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct DatePickerProps {
    pub name: String,
    pub value: Option<NaiveDate>,
    /// Earliest selectable date
    pub min: NaiveDate,
    pub invalid: bool,
    pub disabled: bool,
    pub on_change: EventHandler<Option<NaiveDate>>,
}

/// Native date input; the browser greys out every day before `min`
#[component]
pub fn DatePicker(props: DatePickerProps) -> Element {
    let min = props.min;
    let min_value = format_iso_date(min);
    let value = props.value.map(format_iso_date).unwrap_or_default();
    let label = date_trigger_label(props.value);

    rsx! {
        div {
            class: "date-picker",
            span {
                class: if props.value.is_some() { "date-picker-trigger" } else { "date-picker-trigger muted" },
                "{label}"
            }
            input {
                id: "{props.name}",
                name: "{props.name}",
                class: input_class(props.invalid),
                r#type: "date",
                min: "{min_value}",
                value: "{value}",
                "aria-invalid": "{props.invalid}",
                disabled: props.disabled,
                oninput: move |event| {
                    if let Some(date) = accept_date_input(&event.value(), min) {
                        props.on_change.call(date);
                    }
                }
            }
        }
    }
}
