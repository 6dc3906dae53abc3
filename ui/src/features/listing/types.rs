// Core types for the donation listing form - no dioxus imports needed here
use chrono::NaiveDate;
use std::collections::BTreeMap;

use super::form_validation::validate_field;

/// The four inputs of the listing form
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum ListingField {
    Address,
    DonationDate,
    TotalParticipants,
    BountyAmount,
}

impl ListingField {
    /// Every field, in the order the form renders them
    pub const ALL: [ListingField; 4] = [
        ListingField::Address,
        ListingField::DonationDate,
        ListingField::TotalParticipants,
        ListingField::BountyAmount,
    ];

    /// Key used in the JSON body and as the HTML `name`
    pub fn name(&self) -> &'static str {
        match self {
            ListingField::Address => "address",
            ListingField::DonationDate => "donationDate",
            ListingField::TotalParticipants => "totalParticipants",
            ListingField::BountyAmount => "bountyAmount",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListingField::Address => "Address",
            ListingField::DonationDate => "Donation Date",
            ListingField::TotalParticipants => "Total Participants Required",
            ListingField::BountyAmount => "Bounty Amount",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ListingField::Address => "Enter address",
            ListingField::DonationDate => "Pick a date",
            ListingField::TotalParticipants => "e.g., 50",
            ListingField::BountyAmount => "$12 USDT",
        }
    }

    pub fn required_message(&self) -> &'static str {
        match self {
            ListingField::Address => "Address is required.",
            ListingField::DonationDate => "Donation date is required.",
            ListingField::TotalParticipants => "Total participants is required.",
            ListingField::BountyAmount => "Bounty amount is required.",
        }
    }
}

/// Raw, possibly invalid values as typed by the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingForm {
    pub address: String,
    pub donation_date: Option<NaiveDate>,
    pub total_participants: String,
    pub bounty_amount: String,
}

impl ListingForm {
    /// Blank form with the date preset to `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            address: String::new(),
            donation_date: Some(today),
            total_participants: String::new(),
            bounty_amount: String::new(),
        }
    }

    /// Text value of a field; `None` for the date field
    pub fn text(&self, field: ListingField) -> Option<&str> {
        match field {
            ListingField::Address => Some(&self.address),
            ListingField::TotalParticipants => Some(&self.total_participants),
            ListingField::BountyAmount => Some(&self.bounty_amount),
            ListingField::DonationDate => None,
        }
    }
}

/// Inline error messages keyed by field
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ListingField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ListingField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Record or clear the message for one field
    pub fn set(&mut self, field: ListingField, message: Option<String>) {
        match message {
            Some(message) => {
                self.0.insert(field, message);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Failure,
}

/// Toast description: either a sentence or preformatted content
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToastBody {
    Text(String),
    Code(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub body: ToastBody,
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum ListingAction {
    SetAddress(String),
    SetDonationDate(Option<NaiveDate>),
    SetTotalParticipants(String),
    SetBountyAmount(String),
    DismissToast(u64),
}

/// Everything the form component renders from
#[derive(Clone, Debug, PartialEq)]
pub struct ListingState {
    pub form: ListingForm,
    pub errors: FieldErrors,
    pub is_submitting: bool,
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl ListingState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            form: ListingForm::new(today),
            errors: FieldErrors::new(),
            is_submitting: false,
            toasts: Vec::new(),
            next_toast_id: 1,
        }
    }

    pub fn error(&self, field: ListingField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Re-run the validator of a single field after it changed
    fn revalidate(&mut self, field: ListingField) {
        let message = validate_field(field, &self.form);
        self.errors.set(field, message);
    }

    /// Queue a notification and return its id
    pub fn push_toast(&mut self, kind: ToastKind, title: String, body: ToastBody) -> u64 {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            title,
            body,
        });
        id
    }

    pub fn reduce_in_place(&mut self, action: ListingAction) {
        match action {
            ListingAction::SetAddress(address) => {
                self.form.address = address;
                self.revalidate(ListingField::Address);
            }
            ListingAction::SetDonationDate(date) => {
                self.form.donation_date = date;
                self.revalidate(ListingField::DonationDate);
            }
            ListingAction::SetTotalParticipants(participants) => {
                self.form.total_participants = participants;
                self.revalidate(ListingField::TotalParticipants);
            }
            ListingAction::SetBountyAmount(amount) => {
                self.form.bounty_amount = amount;
                self.revalidate(ListingField::BountyAmount);
            }
            ListingAction::DismissToast(id) => {
                self.toasts.retain(|toast| toast.id != id);
            }
        }
    }
}
