//! Infrastructure Services
//!
//! - **client**: HTTP client that submits donation listings to the backend
//! - **config**: endpoint and notification settings
//!
//! The services are WASM-first, using async traits without Send/Sync bounds.

pub mod client;
pub mod config;
