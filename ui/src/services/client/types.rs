use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A donation listing ready to be sent to the backend.
///
/// Only ever built from a form that passed validation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DonationListingRequest {
    pub address: String,
    pub donation_date: NaiveDate,
    pub total_participants: String,
    pub bounty_amount: String,
}
