pub mod listing_page;

pub use listing_page::DonationListingPage;
