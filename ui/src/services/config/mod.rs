pub mod listing_config;

pub use listing_config::*;
