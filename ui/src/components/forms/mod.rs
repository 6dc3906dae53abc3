pub mod donation_list_form;

pub use donation_list_form::*;
