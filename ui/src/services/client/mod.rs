// Client-side submission of donation listings.
//
// `ListingSubmitter` is the seam between the form and the network; the
// browser build uses `ListingClient`, tests substitute their own.

pub mod errors;
pub mod listing_client;
pub mod types;

pub use errors::{SubmitError, SubmitResult};
pub use listing_client::{ListingClient, ListingSubmitter};
pub use types::DonationListingRequest;
