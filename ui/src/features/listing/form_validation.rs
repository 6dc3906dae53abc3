use chrono::NaiveDate;

use super::types::{FieldErrors, ListingField, ListingForm};
use crate::services::client::DonationListingRequest;

/// Minimum number of characters in an address
pub const MIN_ADDRESS_CHARS: usize = 2;

/// Whether the date picker lets the user choose `date`.
///
/// Only applied when a date is selected; a chosen date is not checked
/// against the clock again.
pub fn is_selectable_date(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}

fn has_min_chars(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

/// Validates one field, returning its error message if it fails
pub fn validate_field(field: ListingField, form: &ListingForm) -> Option<String> {
    let ok = match field {
        ListingField::Address => has_min_chars(&form.address, MIN_ADDRESS_CHARS),
        ListingField::DonationDate => form.donation_date.is_some(),
        ListingField::TotalParticipants => has_min_chars(&form.total_participants, 1),
        ListingField::BountyAmount => has_min_chars(&form.bounty_amount, 1),
    };

    if ok {
        None
    } else {
        Some(field.required_message().to_string())
    }
}

/// Validates every field and builds the request only if all of them pass
pub fn validate_form(form: &ListingForm) -> Result<DonationListingRequest, FieldErrors> {
    let mut errors = FieldErrors::new();
    for field in ListingField::ALL {
        errors.set(field, validate_field(field, form));
    }

    match (errors.is_empty(), form.donation_date) {
        (true, Some(donation_date)) => Ok(DonationListingRequest {
            address: form.address.clone(),
            donation_date,
            total_participants: form.total_participants.clone(),
            bounty_amount: form.bounty_amount.clone(),
        }),
        _ => Err(errors),
    }
}
