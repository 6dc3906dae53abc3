//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: timestamped logging macros for the browser console
//! - **platform**: page origin and local calendar helpers
//! - **serialization**: date formatting and JSON pretty-printing for display

pub mod console_macros;
pub mod platform;
pub mod serialization;

pub use platform::*;
pub use serialization::*;
