use dioxus::prelude::*;

use crate::components::display::ToastViewport;
use crate::components::forms::DonationListForm;
use crate::features::listing::{ListingAction, ListingState};
use crate::console_error;
use crate::services::config::ListingConfig;
use crate::utils::local_today;

const LISTING_CSS: Asset = asset!("/assets/styling/donation_listing.css");

#[derive(Props, PartialEq, Clone)]
pub struct DonationListingPageProps {
    /// Overrides the default endpoint settings
    #[props(default)]
    pub config: ListingConfig,
}

#[component]
pub fn DonationListingPage(props: DonationListingPageProps) -> Element {
    let mut state = use_signal(|| ListingState::new(local_today()));

    // Shared with the form through context
    let config = use_context_provider(|| {
        if let Err(errors) = props.config.validate() {
            for e in &errors {
                console_error!("[Listing] {}", e);
            }
        }
        props.config.clone()
    });

    // In-place reduction keeps Signal reactivity intact
    let dispatch = EventHandler::new(move |action: ListingAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    rsx! {
        document::Link { rel: "stylesheet", href: LISTING_CSS }

        div {
            class: "listing-container",

            h1 {
                class: "listing-title",
                "Create Donation Listing"
            }

            DonationListForm {
                state: state,
                dispatch: dispatch
            }

            ToastViewport {
                toasts: state().toasts,
                duration_ms: config.toast_duration_ms,
                on_dismiss: move |id| dispatch.call(ListingAction::DismissToast(id))
            }
        }
    }
}
