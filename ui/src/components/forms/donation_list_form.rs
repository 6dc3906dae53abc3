use dioxus::prelude::*;

use crate::components::{
    display::LoadingIndicator,
    input::{DatePicker, FieldMessage, ValidatedInput},
};
use crate::features::listing::*;
use crate::services::client::ListingClient;
use crate::services::config::ListingConfig;
use crate::utils::local_today;
use crate::{console_debug, console_error, console_info, console_warn};

#[derive(Props, PartialEq, Clone)]
pub struct DonationListFormProps {
    pub state: Signal<ListingState>,
    pub dispatch: EventHandler<ListingAction>,
}

fn render_text_field(
    field: ListingField,
    state: &ListingState,
    on_change: EventHandler<String>,
) -> Element {
    let error = state.error(field).map(str::to_string);
    let invalid = error.is_some();
    let value = state.form.text(field).unwrap_or_default().to_string();

    rsx! {
        div {
            class: "input-section",
            label {
                class: "input-label",
                r#for: field.name(),
                "{field.label()}"
            }
            ValidatedInput {
                name: field.name().to_string(),
                value: value,
                placeholder: field.placeholder().to_string(),
                invalid: invalid,
                disabled: false,
                on_change: on_change
            }
            FieldMessage { message: error }
        }
    }
}

#[component]
pub fn DonationListForm(props: DonationListFormProps) -> Element {
    let mut state = props.state;
    let dispatch = props.dispatch;

    let config = use_context::<ListingConfig>();
    let client = use_hook(move || match ListingClient::new(config) {
        Ok(client) => {
            console_info!("[Listing] Submitting to {}", client.config().submit_path);
            Some(client)
        }
        Err(e) => {
            console_error!("[Listing] {}", e);
            None
        }
    });

    let Some(client) = client else {
        return rsx! {
            div {
                class: "listing-unavailable",
                "Donation listings cannot be submitted right now."
            }
        };
    };

    let current = state();
    let date_field = ListingField::DonationDate;
    let date_error = current.error(date_field).map(str::to_string);
    // Picker bound follows the clock at render time
    let earliest = local_today();

    rsx! {
        form {
            class: "listing-form",
            novalidate: true,
            onsubmit: move |event: FormEvent| {
                event.prevent_default();

                let outcome = state.with_mut(begin_submission);
                match outcome {
                    Ok(request) => {
                        let client = client.clone();
                        spawn(async move {
                            let result = send_listing(&client, &request).await;
                            state.with_mut(|s| {
                                finish_submission(s, result);
                            });
                        });
                    }
                    Err(SubmitBlocked::Invalid(errors)) => {
                        console_debug!("[Listing] Submit blocked by {} invalid field(s)", errors.len());
                    }
                    Err(SubmitBlocked::Pending) => {
                        console_warn!("[Listing] Submit pressed while a submission is pending");
                    }
                }
            },

            {render_text_field(
                ListingField::Address,
                &current,
                EventHandler::new(move |value: String| dispatch.call(ListingAction::SetAddress(value))),
            )}

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: date_field.name(),
                    "{date_field.label()}"
                }
                DatePicker {
                    name: date_field.name().to_string(),
                    value: current.form.donation_date,
                    min: earliest,
                    invalid: date_error.is_some(),
                    disabled: false,
                    on_change: move |date| dispatch.call(ListingAction::SetDonationDate(date))
                }
                FieldMessage { message: date_error.clone() }
            }

            {render_text_field(
                ListingField::TotalParticipants,
                &current,
                EventHandler::new(move |value: String| dispatch.call(ListingAction::SetTotalParticipants(value))),
            )}

            {render_text_field(
                ListingField::BountyAmount,
                &current,
                EventHandler::new(move |value: String| dispatch.call(ListingAction::SetBountyAmount(value))),
            )}

            div {
                class: "button-section",
                button {
                    class: "submit-button",
                    r#type: "submit",
                    disabled: current.is_submitting,
                    if current.is_submitting {
                        LoadingIndicator { message: "Submitting...".to_string() }
                    } else {
                        "Create Donation Listing"
                    }
                }
            }
        }
    }
}
