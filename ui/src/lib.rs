//! This crate contains the donation listing form and its supporting services.

pub mod app;
pub use app::DonationListingPage;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
